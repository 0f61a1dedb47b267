//! cityrec-db: PostgreSQL data-access layer for city records.
//!
//! One repository, one table, five operations. The caller owns the
//! connection handle and injects it into the repository; this crate
//! keeps no global state and wraps no statement in an explicit
//! transaction — each round trip auto-commits on its own.

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::create_pool;
pub use repos::CityRepo;
pub use schema::ensure_cities_table;
