mod config;
mod db;
mod errors;
mod logging;
mod models;
mod render;
mod routes;
mod schema;
mod state;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    logging::init(&config.rust_log);

    info!("Starting HKRN v{}", env!("CARGO_PKG_VERSION"));

    // Storage must be ready and seeded before the first request is accepted.
    let db = create_pool(&config.database_url).await?;
    db::initialize(&db).await?;

    let app = build_router(AppState { db: db.clone() }).layer(logging::trace_layer());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Store closed, shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl+c interrupt, draining connections");
}
