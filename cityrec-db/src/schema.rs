//! Schema bootstrap for the cities table.

use sqlx::PgPool;

use crate::error::DbResult;

const CHECK_TABLE_EXISTS: &str =
    "SELECT EXISTS (SELECT FROM pg_tables WHERE schemaname = 'public' AND tablename = 'cities')";

const CREATE_CITIES_TABLE: &str =
    "CREATE TABLE cities (id SERIAL PRIMARY KEY, name VARCHAR(255), population INT)";

/// Ensure the `cities` table exists, creating it on first use.
///
/// Idempotent against an already-initialized schema. There is no lock
/// around the check+create pair: two instances bootstrapping an empty
/// schema at the same time can race the CREATE, and the loser surfaces
/// the store's duplicate-table error.
pub async fn ensure_cities_table(pool: &PgPool) -> DbResult<()> {
    let exists: bool = sqlx::query_scalar(CHECK_TABLE_EXISTS).fetch_one(pool).await?;
    if exists {
        tracing::debug!("cities table already present");
        return Ok(());
    }

    sqlx::query(CREATE_CITIES_TABLE).execute(pool).await?;
    tracing::info!("cities table created");
    Ok(())
}
