use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Candidatos: name sort and score filter/sort
        manager
            .create_index(
                Index::create()
                    .name("idx_candidatos_nome")
                    .table(Candidato::Table)
                    .col(Candidato::Nome)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_candidatos_nota")
                    .table(Candidato::Table)
                    .col(Candidato::Nota)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_candidatos_nota").table(Candidato::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_candidatos_nome").table(Candidato::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Candidato {
    #[sea_orm(iden = "tb_candidatos")]
    Table,
    Nome,
    Nota,
}
