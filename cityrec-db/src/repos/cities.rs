//! City repository - CRUD over the `cities` table.

use cityrec_core::City;
use sqlx::{PgPool, Row};

use crate::error::{DbError, DbResult};

/// City repository.
///
/// Borrows a caller-owned pool; cheap to construct per call site.
pub struct CityRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CityRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a city and return its generated id.
    ///
    /// # Errors
    ///
    /// `RecordCreationFailure` if the insert yields no generated id,
    /// which should not happen outside a store malfunction.
    pub async fn create(&self, city: &City) -> DbResult<i32> {
        let row = sqlx::query(
            r#"
            INSERT INTO cities (name, population)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&city.name)
        .bind(city.population)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::RecordCreationFailure)?;

        let id: i32 = row.get("id");
        tracing::debug!(id, name = %city.name, "city created");
        Ok(id)
    }

    /// List all cities in store-returned order.
    ///
    /// No ORDER BY: the order is whatever the engine yields and is not
    /// guaranteed stable across calls. An empty table yields an empty vec.
    pub async fn list(&self) -> DbResult<Vec<City>> {
        let rows = sqlx::query(
            r#"
            SELECT name, population
            FROM cities
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| City {
                name: r.get("name"),
                population: r.get("population"),
            })
            .collect())
    }

    /// Get a single city by id.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no row matches.
    pub async fn get(&self, id: i32) -> DbResult<City> {
        let row = sqlx::query(
            r#"
            SELECT name, population
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::RecordNotFound { id })?;

        Ok(City {
            name: row.get("name"),
            population: row.get("population"),
        })
    }

    /// Update both mutable fields of a city by id.
    ///
    /// A no-match update completes as success; the affected-row count is
    /// only logged. Callers that need to distinguish the cases should
    /// `get` first.
    pub async fn update(&self, id: i32, city: &City) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE cities
            SET name = $1, population = $2
            WHERE id = $3
            "#,
        )
        .bind(&city.name)
        .bind(city.population)
        .bind(id)
        .execute(self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "city updated");
        Ok(())
    }

    /// Delete a city by id.
    ///
    /// Same no-match-is-silent-success behavior as [`CityRepo::update`].
    pub async fn delete(&self, id: i32) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "city deleted");
        Ok(())
    }
}
