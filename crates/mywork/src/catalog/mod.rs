//! The fixed tables behind the portal: demo accounts, departments, companies,
//! the name pool, the achievement pool and the recruiter roster.
//!
//! A catalog is loaded once, validated, and then shared read-only (usually
//! behind an `Arc`). Dashboards that need to mutate one of these tables work on
//! a copy.

mod error;

pub use error::CatalogError;

use crate::generator::{Achievement, Recruiter};
use crate::types::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// The catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Demo credentials and display data for one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub profile_image: String,
}

/// A student on the faculty attendance roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStudent {
    pub id: String,
    pub name: String,
    pub roll_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub departments: Vec<String>,
    pub companies: Vec<String>,
    pub names: Vec<String>,
    pub positions: Vec<String>,
    pub demo_accounts: HashMap<Role, DemoAccount>,
    pub achievements: Vec<Achievement>,
    pub recruiters: Vec<Recruiter>,
    pub subjects: Vec<String>,
    pub attendance_roster: Vec<RosterStudent>,
}

impl Catalog {
    /// Parses the catalog that ships with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads a catalog override from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON file with the same layout as `data/catalog.json`
    ///
    /// # Returns
    /// * `Ok(Catalog)` - The validated catalog
    /// * `Err` - If the file can't be read, parsed, or is missing a table
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded catalog from {} ({} departments, {} companies)",
            path.display(),
            catalog.departments.len(),
            catalog.companies.len()
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the invariants the generator and resolver rely on.
    fn validate(&self) -> Result<(), CatalogError> {
        let tables: [(&'static str, bool); 5] = [
            ("departments", self.departments.is_empty()),
            ("companies", self.companies.is_empty()),
            ("names", self.names.is_empty()),
            ("positions", self.positions.is_empty()),
            ("achievements", self.achievements.is_empty()),
        ];
        if let Some((table, _)) = tables.iter().find(|(_, empty)| *empty) {
            return Err(CatalogError::EmptyTable { table: *table });
        }

        for role in Role::ALL {
            if !self.demo_accounts.contains_key(&role) {
                return Err(CatalogError::MissingDemoAccount {
                    role: role.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Gets the demo account for a role.
    pub fn demo_account(&self, role: Role) -> Option<&DemoAccount> {
        self.demo_accounts.get(&role)
    }

    /// Achievements that have been approved, in pool order.
    ///
    /// This is what the portfolio export receives.
    pub fn approved_achievements(&self) -> Vec<Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.status.is_approved())
            .cloned()
            .collect()
    }
}
