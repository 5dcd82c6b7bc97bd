//! Persistence tests against an in-memory SQLite database.

use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{candidato, db, usuario};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let conn = db::connect_with_config(&cfg).await?;
    db::migrate(&conn).await?;
    Ok(conn)
}

fn new_candidato(nome: &str, nota: i32) -> candidato::NewCandidato {
    candidato::validate(&candidato::CandidatoInput {
        nome: Some(nome.into()),
        nascimento: chrono::NaiveDate::from_ymd_opt(1990, 1, 1),
        nota: Some(nota),
        ..Default::default()
    })
    .expect("valid candidato")
}

#[tokio::test]
async fn candidato_create_assigns_id_and_timestamp() -> Result<()> {
    let db = setup_test_db().await?;

    let a = candidato::create(&db, new_candidato("Ana", 8)).await?;
    let b = candidato::create(&db, new_candidato("Bruno", 5)).await?;
    assert!(a.id > 0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.sexo, "M");

    let found = candidato::Entity::find_by_id(a.id).one(&db).await?.expect("stored");
    assert_eq!(found.nome, "Ana");
    assert_eq!(found.nota, 8);
    assert_eq!(found.data_criacao, a.data_criacao);
    Ok(())
}

#[tokio::test]
async fn candidato_overwrite_keeps_creation_timestamp() -> Result<()> {
    let db = setup_test_db().await?;
    let a = candidato::create(&db, new_candidato("Ana", 8)).await?;

    let mut changed = new_candidato("Ana Paula", 9);
    changed.uf = Some("SP".into());
    let updated = candidato::overwrite(&db, a.id, changed).await?.expect("exists");
    assert_eq!(updated.id, a.id);
    assert_eq!(updated.nome, "Ana Paula");
    assert_eq!(updated.nota, 9);
    assert_eq!(updated.uf.as_deref(), Some("SP"));
    assert_eq!(updated.data_criacao, a.data_criacao);
    assert_eq!(updated.nome_busca, "ana paula");
    Ok(())
}

#[tokio::test]
async fn candidato_search_key_is_stored_folded() -> Result<()> {
    let db = setup_test_db().await?;
    let a = candidato::create(&db, new_candidato("Érica Ângela", 7)).await?;

    let found = candidato::Entity::find_by_id(a.id).one(&db).await?.expect("stored");
    assert_eq!(found.nome, "Érica Ângela");
    assert_eq!(found.nome_busca, "érica ângela");
    Ok(())
}

#[tokio::test]
async fn candidato_overwrite_unknown_id_writes_nothing() -> Result<()> {
    let db = setup_test_db().await?;
    let missing = candidato::overwrite(&db, 4242, new_candidato("Ghost", 1)).await?;
    assert!(missing.is_none());
    assert_eq!(candidato::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn candidato_delete_reports_whether_a_row_was_removed() -> Result<()> {
    let db = setup_test_db().await?;
    let a = candidato::create(&db, new_candidato("Ana", 8)).await?;

    assert!(candidato::delete(&db, a.id).await?);
    assert!(!candidato::delete(&db, a.id).await?);
    assert!(candidato::Entity::find_by_id(a.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn usuario_lookup_by_username() -> Result<()> {
    let db = setup_test_db().await?;
    let u = usuario::create(&db, "maria").await?;

    let found = usuario::find_by_usuario(&db, "maria").await?.expect("found");
    assert_eq!(found.id, u.id);
    assert!(usuario::find_by_usuario(&db, "MARIA").await?.is_none());
    assert!(usuario::find_by_usuario(&db, "joao").await?.is_none());

    // usernames are unique
    assert!(usuario::create(&db, "maria").await.is_err());
    assert!(usuario::create(&db, "  ").await.is_err());
    Ok(())
}
