//! Store-handle construction.
//!
//! The repository never opens its own connections: callers build a
//! handle here (or bring their own `PgPool`) and lend it to
//! [`crate::CityRepo`]. Nothing in this crate holds a process-wide
//! connection.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap for the default handle. Every repository call issues
/// exactly one statement, so a handful of connections covers concurrent
/// callers without hoarding server slots.
const MAX_CONNECTIONS: u32 = 5;

/// Build a pool for the given PostgreSQL URL with the default cap.
///
/// # Errors
///
/// Fails if the URL does not parse or the store is unreachable.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, MAX_CONNECTIONS).await
}

/// Build a pool with an explicit connection cap, for callers that embed
/// the repository next to other database users and want to budget
/// connections themselves.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ensure_cities_table;

    // Needs PostgreSQL: DATABASE_URL=postgres://... cargo test -p cityrec-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn fresh_pool_supports_bootstrap() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 2)
            .await
            .expect("pool creation failed");

        ensure_cities_table(&pool).await.expect("bootstrap failed");

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT FROM pg_tables WHERE schemaname = 'public' AND tablename = 'cities')",
        )
        .fetch_one(&pool)
        .await
        .expect("catalog query failed");
        assert!(exists);
    }
}
