//! Runtime settings read from the environment
use crate::catalog::{Catalog, CatalogError};
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_SESSION_DB: &str = "mywork-session.db";

/// Errors that can occur while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Error parsing MYWORK_SEED {value:?}: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// SQLite file holding the persisted session
    pub session_db: PathBuf,
    /// Base seed for the mock generator
    pub seed: u64,
    /// Catalog override; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_db: PathBuf::from(DEFAULT_SESSION_DB),
            seed: 0,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Reads `MYWORK_SESSION_DB`, `MYWORK_SEED` and `MYWORK_CATALOG`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("MYWORK_SESSION_DB") {
            settings.session_db = PathBuf::from(path);
        }
        if let Some(seed) = lookup("MYWORK_SEED") {
            settings.seed = seed
                .trim()
                .parse()
                .map_err(|source| SettingsError::InvalidSeed {
                    value: seed.clone(),
                    source,
                })?;
        }
        if let Some(path) = lookup("MYWORK_CATALOG") {
            settings.catalog_path = Some(PathBuf::from(path));
        }

        Ok(settings)
    }

    /// Loads the catalog these settings point at.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load_from_file(path),
            None => Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(settings.load_catalog().is_ok());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("MYWORK_SESSION_DB", "/tmp/s.db"),
            ("MYWORK_SEED", " 42 "),
        ]))
        .unwrap();

        assert_eq!(settings.session_db, PathBuf::from("/tmp/s.db"));
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.catalog_path, None);
    }

    #[test]
    fn test_bad_seed() {
        let err = Settings::from_lookup(lookup_from(&[("MYWORK_SEED", "lots")])).unwrap_err();
        assert!(matches!(&err, SettingsError::InvalidSeed { value, .. } if value == "lots"));
        assert!(err.to_string().starts_with("Error parsing MYWORK_SEED \"lots\""));

        // Negative seeds are not accepted either
        assert!(Settings::from_lookup(lookup_from(&[("MYWORK_SEED", "-1")])).is_err());
    }

    #[test]
    fn test_missing_catalog_file() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Settings::default()
        };

        assert!(matches!(settings.load_catalog(), Err(CatalogError::Io(_))));
    }
}
