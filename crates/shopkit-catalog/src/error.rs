//! Catalog error types.

use thiserror::Error;

/// Errors that can occur at the catalog's serialization boundary.
///
/// Variation generation itself is infallible; only parsing and encoding
/// product documents can fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product document could not be parsed or encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
