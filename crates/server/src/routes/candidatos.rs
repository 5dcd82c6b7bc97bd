//! `/candidatos` handlers: translate HTTP input into service calls and
//! service outcomes into 200/201/204 or JSON errors.

use std::{fmt, str::FromStr};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::candidato::{CandidatoInput, Model};
use sea_orm::entity::prelude::Date;
use serde::{de, Deserialize, Deserializer};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

type ListResult = Result<Json<Vec<Model>>, JsonApiError>;

/// Empty query values (`?nota=`) count as absent. Whitespace is kept, so
/// `?nome=%20` filters on names containing a space.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(rename = "sortBy", default, deserialize_with = "empty_as_none")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NomeQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nome: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NascimentoQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nascimento: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct SexoQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sexo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotaQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nota: Option<i32>,
}

pub async fn list_sorted(
    State(state): State<ServerState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> ListResult {
    let Query(q) = query?;
    let sort_by = q.sort_by.as_deref().unwrap_or("id");
    let direction = q.direction.as_deref().unwrap_or("ASC");
    let list = state.candidatos.list_all(sort_by, direction).await?;
    info!(count = list.len(), sort_by, direction, "list candidatos");
    Ok(Json(list))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.candidatos.get_by_id(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CandidatoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = body?;
    let created = state.candidatos.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    body: Result<Json<CandidatoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = body?;
    let updated = state.candidatos.update(&input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.candidatos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_by_name(
    State(state): State<ServerState>,
    query: Result<Query<NomeQuery>, QueryRejection>,
) -> ListResult {
    let Query(q) = query?;
    let list = state.candidatos.search_by_name(q.nome.as_deref()).await?;
    info!(count = list.len(), "search candidatos by nome");
    Ok(Json(list))
}

pub async fn search_by_birthdate(
    State(state): State<ServerState>,
    query: Result<Query<NascimentoQuery>, QueryRejection>,
) -> ListResult {
    let Query(q) = query?;
    let list = state.candidatos.search_by_birthdate(q.nascimento).await?;
    info!(count = list.len(), "search candidatos by nascimento");
    Ok(Json(list))
}

pub async fn search_by_sex(
    State(state): State<ServerState>,
    query: Result<Query<SexoQuery>, QueryRejection>,
) -> ListResult {
    let Query(q) = query?;
    let list = state.candidatos.search_by_sex(q.sexo.as_deref()).await?;
    info!(count = list.len(), "search candidatos by sexo");
    Ok(Json(list))
}

pub async fn search_by_score(
    State(state): State<ServerState>,
    query: Result<Query<NotaQuery>, QueryRejection>,
) -> ListResult {
    let Query(q) = query?;
    let list = state.candidatos.search_by_score(q.nota).await?;
    info!(count = list.len(), "search candidatos by nota");
    Ok(Json(list))
}
