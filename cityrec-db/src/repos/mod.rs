//! Repository implementations for database access
//!
//! Each operation is a single parameterized statement and a single round
//! trip; there is no multi-step protocol and no transaction spanning
//! operations.

pub mod cities;

pub use cities::CityRepo;
