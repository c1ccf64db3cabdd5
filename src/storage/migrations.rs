// storage/migrations.rs
// Schema management

use sqlx::AnyPool;

use crate::error_handling::DatabaseError;

/// Applies the SQLx migrations embedded from the `migrations/` directory.
///
/// The SQL is kept portable between Postgres and SQLite.
pub async fn run_migrations(pool: &AnyPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
