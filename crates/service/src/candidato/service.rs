use std::sync::Arc;

use models::candidato::{self, CandidatoInput, Model};
use models::errors::ModelError;
use sea_orm::entity::prelude::Date;
use tracing::{info, instrument};

use crate::candidato::repository::{CandidatoFilter, CandidatoRepository};
use crate::candidato::sorting::SortSpec;
use crate::errors::ServiceError;

/// Application service for candidate queries and commands.
///
/// Every listing reports `NotFound` when nothing matches; absent (or empty)
/// search input falls back to the unfiltered list.
pub struct CandidatoService<R: CandidatoRepository> {
    repo: Arc<R>,
}

impl<R: CandidatoRepository> CandidatoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_all(&self, sort_by: &str, direction: &str) -> Result<Vec<Model>, ServiceError> {
        let sort = SortSpec::parse(sort_by, direction)?;
        self.search(CandidatoFilter::All, sort).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("candidato"))
    }

    #[instrument(skip(self))]
    pub async fn search_by_name(&self, nome: Option<&str>) -> Result<Vec<Model>, ServiceError> {
        let filter = match nome {
            Some(n) if !n.is_empty() => CandidatoFilter::NomeContains(n.to_string()),
            _ => CandidatoFilter::All,
        };
        self.search(filter, SortSpec::default()).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_birthdate(&self, nascimento: Option<Date>) -> Result<Vec<Model>, ServiceError> {
        let filter = nascimento.map_or(CandidatoFilter::All, CandidatoFilter::Nascimento);
        self.search(filter, SortSpec::default()).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_sex(&self, sexo: Option<&str>) -> Result<Vec<Model>, ServiceError> {
        let filter = match sexo {
            Some(s) if !s.is_empty() => CandidatoFilter::SexoContains(s.to_string()),
            _ => CandidatoFilter::All,
        };
        self.search(filter, SortSpec::default()).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_score(&self, nota: Option<i32>) -> Result<Vec<Model>, ServiceError> {
        let filter = nota.map_or(CandidatoFilter::All, CandidatoFilter::Nota);
        self.search(filter, SortSpec::default()).await
    }

    /// Validate and insert. Any `id` in the input is ignored.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &CandidatoInput) -> Result<Model, ServiceError> {
        let new = candidato::validate(input).map_err(validation)?;
        let created = self.repo.create(new).await?;
        info!(id = created.id, "candidato created");
        Ok(created)
    }

    /// Full-record update keyed by `input.id`; unknown ids are never inserted.
    #[instrument(skip(self, input), fields(id = ?input.id))]
    pub async fn update(&self, input: &CandidatoInput) -> Result<Model, ServiceError> {
        let id = input.id.ok_or_else(|| ServiceError::Validation("id is required".into()))?;
        let new = candidato::validate(input).map_err(validation)?;
        let updated = self
            .repo
            .update(id, new)
            .await?
            .ok_or_else(|| ServiceError::not_found("candidato"))?;
        info!(id, "candidato updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("candidato"));
        }
        info!(id, "candidato deleted");
        Ok(())
    }

    async fn search(&self, filter: CandidatoFilter, sort: SortSpec) -> Result<Vec<Model>, ServiceError> {
        let found = self.repo.find(filter, sort).await?;
        if found.is_empty() {
            return Err(ServiceError::NotFound("no candidatos matched".into()));
        }
        Ok(found)
    }
}

fn validation(e: ModelError) -> ServiceError {
    match e {
        ModelError::Validation(msg) => ServiceError::Validation(msg),
        other => ServiceError::Model(other),
    }
}
