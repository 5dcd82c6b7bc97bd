use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::Serialize;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tb_usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub usuario: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_usuario(usuario: &str) -> Result<(), ModelError> {
    if usuario.trim().is_empty() { return Err(ModelError::Validation("usuario required".into())); }
    if usuario.chars().count() > 100 { return Err(ModelError::Validation("usuario must be at most 100 characters".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, usuario: &str) -> Result<Model, ModelError> {
    validate_usuario(usuario)?;
    let am = ActiveModel { id: NotSet, usuario: Set(usuario.to_string()) };
    Ok(am.insert(db).await?)
}

/// Exact-match lookup by username.
pub async fn find_by_usuario(db: &DatabaseConnection, usuario: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find().filter(Column::Usuario.eq(usuario)).one(db).await?;
    Ok(found)
}
