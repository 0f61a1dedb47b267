//! cityrec-core: domain model for the city record store.
//!
//! Holds the plain value types shared by the database layer and its
//! callers. Persistence details (ids, SQL) live in `cityrec-db`.

pub mod city;

pub use city::City;
