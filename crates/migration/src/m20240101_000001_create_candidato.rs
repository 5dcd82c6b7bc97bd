//! Create `tb_candidatos` table.
//!
//! Candidate records with demographic fields, a score and an optional address.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidato::Table)
                    .if_not_exists()
                    .col(big_integer(Candidato::Id).primary_key().auto_increment())
                    .col(string_len(Candidato::Nome, 100).not_null())
                    // Lowercased `nome`; folding can lengthen a string, hence text
                    .col(text(Candidato::NomeBusca).not_null())
                    .col(date(Candidato::Nascimento).not_null())
                    .col(timestamp_with_time_zone(Candidato::DataCriacao).not_null())
                    .col(
                        ColumnDef::new(Candidato::Sexo)
                            .string_len(1)
                            .not_null()
                            .default("M"),
                    )
                    .col(integer(Candidato::Nota).not_null())
                    // Address columns are optional
                    .col(ColumnDef::new(Candidato::Logradouro).string_len(200).null())
                    .col(ColumnDef::new(Candidato::Bairro).string_len(50).null())
                    .col(ColumnDef::new(Candidato::Cidade).string_len(50).null())
                    .col(ColumnDef::new(Candidato::Uf).string_len(2).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Candidato::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Candidato {
    #[sea_orm(iden = "tb_candidatos")]
    Table,
    Id,
    Nome,
    NomeBusca,
    Nascimento,
    DataCriacao,
    Sexo,
    Nota,
    Logradouro,
    Bairro,
    Cidade,
    Uf,
}
