use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::body::{self, OrbitalBody};
use crate::core::params::ParamError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no bodies")]
    Empty,

    #[error("body {index} ({name}): {source}")]
    InvalidBody {
        index: usize,
        name: String,
        #[source]
        source: ParamError,
    },
}

/// Baseline body list, loadable from JSON.
///
/// ```json
/// { "bodies": [ { "name": "Earth", "a": 100, "e": 0.0167,
///                 "color": "blue", "period": 365.25, "info": "Home to humans." } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<OrbitalBody>,
}

impl BodyCatalog {
    /// Parse and validate a catalog. Fails on the first body that breaks an
    /// orbital invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: BodyCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::info!("catalog: loaded {} bodies", catalog.bodies.len());
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.bodies.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate().map_err(|source| CatalogError::InvalidBody {
                index,
                name: body.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            bodies: body::default_bodies(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_catalog() {
        let json = r##"{
            "bodies": [
                { "name": "Ceres", "a": 170, "e": 0.0785, "color": "#aaaaaa", "period": 1680 }
            ]
        }"##;
        let catalog = BodyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.bodies.len(), 1);
        assert_eq!(catalog.bodies[0].name, "Ceres");
        assert_eq!(catalog.bodies[0].info, "");
    }

    #[test]
    fn rejects_invalid_eccentricity() {
        let json = r##"{
            "bodies": [
                { "name": "Ok", "a": 10, "e": 0.1, "color": "red", "period": 5 },
                { "name": "Comet", "a": 10, "e": 1.5, "color": "red", "period": 5 }
            ]
        }"##;
        match BodyCatalog::from_json(json) {
            Err(CatalogError::InvalidBody { index, name, source }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "Comet");
                assert_eq!(source, ParamError::EccentricityOutOfRange(1.5));
            }
            other => panic!("Expected InvalidBody, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(matches!(BodyCatalog::from_json(r#"{ "bodies": [] }"#), Err(CatalogError::Empty)));
        assert!(matches!(BodyCatalog::from_json("{ not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn default_catalog_survives_json() {
        let catalog = BodyCatalog::default();
        let json = catalog.to_json().unwrap();
        assert_eq!(BodyCatalog::from_json(&json).unwrap(), catalog);
    }
}
