use sqlx::SqlitePool;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage context. Read-only once startup seeding has committed.
    pub db: SqlitePool,
}
