//! Quill server binary
//!
//! Loads configuration, opens the database, and serves the auth routes.
//! A missing token secret aborts startup here rather than failing per
//! request later.

use anyhow::Context;
use quill_core::{AuthConfig, AuthService, Database, SqliteUserStore, TokenIssuer};
use quill_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AuthConfig::from_env().context("invalid auth configuration")?;
    let issuer = TokenIssuer::new(&config)?;

    let db_path = std::env::var("QUILL_DB_PATH").unwrap_or_else(|_| "quill.db".to_string());
    let db = Database::open(&db_path).await?;

    let store = SqliteUserStore::new(db.pool.clone());
    let state = AppState::new(AuthService::new(store, issuer), config.cookie_settings());

    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|p| p.parse())
        .transpose()
        .context("PORT must be a number")?
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("listening on {addr}");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
