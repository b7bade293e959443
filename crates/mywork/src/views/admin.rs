//! Recruiter approvals and department overview for the admin dashboard
use crate::catalog::Catalog;
use crate::generator::{MockGenerator, Recruiter};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// The admin dashboard's own copy of the recruiter roster.
///
/// Approval changes replace entries in this copy; the catalog's roster is
/// never modified.
#[derive(Debug, Clone)]
pub struct RecruiterRoster {
    recruiters: Vec<Recruiter>,
}

impl RecruiterRoster {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            recruiters: catalog.recruiters.clone(),
        }
    }

    pub fn recruiters(&self) -> &[Recruiter] {
        &self.recruiters
    }

    /// Sets a recruiter's approval flag.
    ///
    /// # Returns
    /// `true` if a recruiter with `id` exists; unknown ids are ignored.
    pub fn set_approval(&mut self, id: &str, approved: bool) -> bool {
        let mut found = false;
        self.recruiters = self
            .recruiters
            .iter()
            .map(|r| {
                if r.id == id {
                    found = true;
                    Recruiter {
                        approved,
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();

        if found {
            info!("Recruiter {} approval set to {}", id, approved);
        }
        found
    }

    /// Recruiters still waiting for approval.
    pub fn pending(&self) -> Vec<&Recruiter> {
        self.recruiters.iter().filter(|r| !r.approved).collect()
    }
}

/// Per-department figures on the admin overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub department: String,
    pub students: u32,
    pub faculty: u32,
    pub avg_cgpa: f64,
    pub placement_rate: u32,
}

/// How many departments the overview card lists.
pub const OVERVIEW_DEPARTMENTS: usize = 6;

/// Builds the overview figures for every department.
///
/// Average CGPA and placement rate step down with catalog order; head counts
/// come from the generator's seeded RNG.
pub fn department_stats(gen: &MockGenerator) -> Vec<DepartmentStats> {
    let mut rng = gen.rng_for("admin-stats", &[]);

    gen.catalog()
        .departments
        .iter()
        .enumerate()
        .map(|(i, department)| DepartmentStats {
            department: department.clone(),
            students: rng.gen_range(200..600),
            faculty: rng.gen_range(10..30),
            avg_cgpa: round2(8.5 - i as f64 * 0.1),
            placement_rate: 90u32.saturating_sub(2 * i as u32),
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_approval_updates_copy_only() {
        let catalog = Catalog::builtin().unwrap();
        let mut roster = RecruiterRoster::from_catalog(&catalog);

        assert_eq!(roster.pending().len(), 2);
        assert!(roster.set_approval("2", true));
        assert_eq!(roster.pending().len(), 1);
        assert!(roster.recruiters()[1].approved);

        // The shared table is untouched
        assert!(!catalog.recruiters[1].approved);
    }

    #[test]
    fn test_revoking_and_unknown_ids() {
        let catalog = Catalog::builtin().unwrap();
        let mut roster = RecruiterRoster::from_catalog(&catalog);

        assert!(roster.set_approval("1", false));
        assert_eq!(roster.pending().len(), 3);

        let before = roster.recruiters().to_vec();
        assert!(!roster.set_approval("99", true));
        assert_eq!(roster.recruiters(), before.as_slice());
    }

    #[test]
    fn test_department_stats() {
        let gen = MockGenerator::new(Arc::new(Catalog::builtin().unwrap()), 0);
        let stats = department_stats(&gen);

        assert_eq!(stats.len(), 10);
        assert_eq!(stats[0].avg_cgpa, 8.5);
        assert_eq!(stats[3].avg_cgpa, 8.2);
        assert_eq!(stats[0].placement_rate, 90);
        assert_eq!(stats[9].placement_rate, 72);
        for s in &stats {
            assert!((200..600).contains(&s.students));
            assert!((10..30).contains(&s.faculty));
        }
        assert_eq!(stats, department_stats(&gen));
    }
}
