//! Persistence for the Apexverse site backend.
//!
//! Holds the table models, the embedded migrations, the Postgres
//! repositories and the [`Store`] adapter the API layer is written against.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{MemoryStore, PgStore, Store, StoreError};

pub type DbPool = sqlx::PgPool;

/// Pool ceiling. Instances are short-lived and numerous, so each holds a
/// single connection.
const MAX_CONNECTIONS: u32 = 1;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Choose the storage backend for this process.
///
/// With a database URL the durable store is connected, health-checked and
/// migrated, and any failure is returned to the caller. Without one the
/// in-memory store is used.
pub async fn select_store(database_url: Option<&str>) -> Result<Arc<dyn Store>, StoreError> {
    match database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            tracing::info!("Database connection pool created");

            health_check(&pool).await?;
            tracing::info!("Database health check passed");

            run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, using in-memory storage (data will not persist)"
            );
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
