//! City value type.

use serde::{Deserialize, Serialize};

/// A city record as exchanged with the store.
///
/// Carries no identity: the store assigns an `id` on insert and only ever
/// hands it back as the return value of `create`. Two `City` values are
/// equal when their name and population match, regardless of which rows
/// they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub population: i32,
}

impl City {
    pub fn new(name: impl Into<String>, population: i32) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_origin() {
        let a = City::new("Springfield", 30_000);
        let b = City {
            name: "Springfield".to_string(),
            population: 30_000,
        };
        assert_eq!(a, b);
        assert_ne!(a, City::new("Springfield", 31_000));
        assert_ne!(a, City::new("Shelbyville", 30_000));
    }

    #[test]
    fn serializes_to_flat_json() {
        let city = City::new("Springfield", 30_000);
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Springfield", "population": 30000 })
        );
    }
}
