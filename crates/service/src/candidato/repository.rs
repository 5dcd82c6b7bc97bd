use async_trait::async_trait;
use models::candidato::{self, Column, Entity, Model, NewCandidato};
use sea_orm::{
    entity::prelude::Date,
    sea_query::{Expr, LikeExpr, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};

use crate::candidato::sorting::SortSpec;
use crate::errors::ServiceError;

const LIKE_ESCAPE: char = '!';

/// One variant per supported lookup; each maps to a single filtered SELECT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidatoFilter {
    All,
    /// Case-insensitive substring match on `nome`, via the folded `nome_busca`.
    NomeContains(String),
    Nascimento(Date),
    /// Case-insensitive substring match on `sexo`.
    SexoContains(String),
    Nota(i32),
}

#[async_trait]
pub trait CandidatoRepository: Send + Sync {
    async fn find(&self, filter: CandidatoFilter, sort: SortSpec) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn create(&self, new: NewCandidato) -> Result<Model, ServiceError>;
    /// `Ok(None)` when `id` does not exist.
    async fn update(&self, id: i64, new: NewCandidato) -> Result<Option<Model>, ServiceError>;
    /// `Ok(false)` when `id` does not exist.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCandidatoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCandidatoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CandidatoRepository for SeaOrmCandidatoRepository {
    async fn find(&self, filter: CandidatoFilter, sort: SortSpec) -> Result<Vec<Model>, ServiceError> {
        let mut query = Entity::find();
        query = match filter {
            CandidatoFilter::All => query,
            CandidatoFilter::NomeContains(s) => query.filter(folded_contains(Column::NomeBusca, &s)),
            CandidatoFilter::Nascimento(d) => query.filter(Column::Nascimento.eq(d)),
            CandidatoFilter::SexoContains(s) => query.filter(sexo_matches(&s)),
            CandidatoFilter::Nota(n) => query.filter(Column::Nota.eq(n)),
        };
        query = query.order_by(sort.column, Order::from(sort.direction));
        // tie-break on id so equal keys come back in a stable order
        if !matches!(sort.column, Column::Id) {
            query = query.order_by_asc(Column::Id);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        Ok(Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, new: NewCandidato) -> Result<Model, ServiceError> {
        Ok(candidato::create(&self.db, new).await?)
    }

    async fn update(&self, id: i64, new: NewCandidato) -> Result<Option<Model>, ServiceError> {
        Ok(candidato::overwrite(&self.db, id, new).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(candidato::delete(&self.db, id).await?)
    }
}

/// `column LIKE '%needle%'` against a column that already holds
/// `candidato::search_key` output. Wildcards in `needle` match literally.
fn folded_contains(column: Column, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&candidato::search_key(needle)));
    Expr::col(column).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// `sexo` is a single character, so containment is equality with one of the
/// needle's case variants.
fn sexo_matches(needle: &str) -> SimpleExpr {
    Column::Sexo.is_in([needle.to_string(), needle.to_lowercase(), needle.to_uppercase()])
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
