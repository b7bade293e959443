//! Error types for loading the static catalog.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Unable to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid catalog JSON
    #[error("Unable to deserialize catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A table the generator draws from is empty
    #[error("Catalog table `{table}` must not be empty")]
    EmptyTable { table: &'static str },

    /// No demo account is configured for a role
    #[error("Catalog has no demo account for role `{role}`")]
    MissingDemoAccount { role: String },
}
