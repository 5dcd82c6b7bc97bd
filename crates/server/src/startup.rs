use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`). Without a config file, fall back to
/// `SERVER_HOST`/`SERVER_PORT`/`DATABASE_URL` environment variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    if Path::new(&configs::config_path()).exists() {
        return AppConfig::load_and_validate();
    }
    warn!(path = %configs::config_path(), "config file not found; using environment");
    let mut cfg = AppConfig::default();
    cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    cfg.server.port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8081);
    cfg.database.url = models::db::DATABASE_URL.clone();
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Connect the pool and apply migrations when configured to.
pub async fn connect_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.run_migrations {
        models::db::migrate(&db).await?;
        info!("migrations applied");
    }
    Ok(db)
}

/// Router wired to the given store handle.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(err = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
/// The caller installs the tracing subscriber.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = load_config()?;
    let db = connect_database(&cfg.database).await?;
    let app = build_app(db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting candidatos server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
