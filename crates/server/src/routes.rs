use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use common::types::Health;
use service::candidato::{CandidatoService, SeaOrmCandidatoRepository};

pub mod candidatos;

/// Shared handler state; the store handle is injected once at construction.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub candidatos: Arc<CandidatoService<SeaOrmCandidatoRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCandidatoRepository::new(db.clone()));
        Self { db, candidatos: Arc::new(CandidatoService::new(repo)) }
    }
}

pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(err = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Static segments win over `/:id` in axum's matcher.
    let candidatos_routes = Router::new()
        .route("/candidatos", axum::routing::post(candidatos::create).put(candidatos::update))
        .route("/candidatos/busca/ordenada", get(candidatos::list_sorted))
        .route("/candidatos/buscarPorNome", get(candidatos::search_by_name))
        .route("/candidatos/buscarPorNascimento", get(candidatos::search_by_birthdate))
        .route("/candidatos/buscarPorSexo", get(candidatos::search_by_sex))
        .route("/candidatos/buscarPorNota", get(candidatos::search_by_score))
        .route("/candidatos/:id", get(candidatos::get).delete(candidatos::delete));

    Router::new()
        .route("/health", get(health))
        .merge(candidatos_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
