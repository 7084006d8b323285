use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::models::{Application, AssessmentTest, Candidate, Entity, JobListing, TrainingProgram};
use crate::schema::{SeedValue, Table};

/// Every persisted table, parents before the tables that reference them.
pub const TABLES: [Table; 5] = [
    Candidate::TABLE,
    JobListing::TABLE,
    TrainingProgram::TABLE,
    AssessmentTest::TABLE,
    Application::TABLE,
];

/// Tables that received their sample row during [`seed`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

/// Creates and returns a SQLite connection pool, creating the store file if missing.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite at {database_url}...");

    // Foreign keys stay declared but unenforced.
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open store at '{database_url}'"))?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates any missing tables. Existing tables are left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    for table in TABLES {
        sqlx::query(&table.create_sql())
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create table '{}'", table.name))?;
    }
    info!("Schema ensured ({} tables)", TABLES.len());
    Ok(())
}

/// Inserts one sample row into every empty table.
///
/// Emptiness is checked per table, but all inserts share one transaction:
/// if the commit fails, nothing from this run is persisted.
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport> {
    let mut tx = pool.begin().await.context("Failed to begin seed transaction")?;
    let mut report = SeedReport::default();

    for seeded in [
        seed_if_empty::<Candidate>(&mut tx).await?,
        seed_if_empty::<JobListing>(&mut tx).await?,
        seed_if_empty::<TrainingProgram>(&mut tx).await?,
        seed_if_empty::<AssessmentTest>(&mut tx).await?,
        seed_if_empty::<Application>(&mut tx).await?,
    ]
    .into_iter()
    .flatten()
    {
        report.seeded.push(seeded);
    }

    tx.commit().await.context("Failed to commit seed rows")?;

    if report.seeded.is_empty() {
        info!("All tables already populated; nothing seeded");
    } else {
        info!("Seeded sample rows into: {}", report.seeded.join(", "));
    }
    Ok(report)
}

async fn seed_if_empty<E: Entity>(conn: &mut SqliteConnection) -> Result<Option<&'static str>> {
    let table = E::TABLE;
    let count: i64 = sqlx::query_scalar(&table.count_sql())
        .fetch_one(&mut *conn)
        .await
        .with_context(|| format!("Failed to count rows in '{}'", table.name))?;
    if count > 0 {
        return Ok(None);
    }

    let sql = table.insert_sql();
    let mut query = sqlx::query(&sql);
    for value in E::SEED {
        query = match *value {
            SeedValue::Int(v) => query.bind(v),
            SeedValue::Text(v) => query.bind(v),
        };
    }
    query
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to insert sample row into '{}'", table.name))?;

    Ok(Some(table.name))
}

/// Startup sequence: schema first, then sample data.
pub async fn initialize(pool: &SqlitePool) -> Result<SeedReport> {
    ensure_schema(pool).await?;
    seed(pool).await
}

/// Reads every row of an entity's table, in store order.
pub async fn fetch_all<E: Entity>(pool: &SqlitePool) -> Result<Vec<E>, sqlx::Error> {
    sqlx::query_as::<_, E>(&E::TABLE.select_all_sql())
        .fetch_all(pool)
        .await
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // One connection: every in-memory connection is its own database.
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap()
}
