//! Candidate search for the recruiter dashboard.
//!
//! Recruiters either pick a cohort (department and year, every section) or
//! browse a sample of final-year students across all departments. Only
//! students with at least one approved achievement are ever shown.

use super::matches_search;
use crate::generator::{MockGenerator, Student};
use tracing::debug;

/// How many candidates the dashboard shows.
pub const CANDIDATES_CAP: usize = 18;

/// Minimum-CGPA choices offered by the dashboard.
///
/// Generated students never fall below 7.0, so the 6.0 choice behaves the
/// same as 7.0.
pub const MIN_CGPA_OPTIONS: [f64; 4] = [6.0, 7.0, 8.0, 9.0];

pub const DEFAULT_MIN_CGPA: f64 = 7.0;

/// Years sampled when no cohort is selected.
const RECRUITMENT_YEARS: [i32; 2] = [3, 4];

/// Sections sampled when no cohort is selected.
const BROWSE_SECTIONS: [&str; 2] = ["A", "B"];

/// Students taken from each sampled section when browsing.
const BROWSE_PER_SECTION: usize = 20;

/// Sections included when a cohort is selected.
const COHORT_SECTIONS: [&str; 3] = ["A", "B", "C"];

#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub department: Option<String>,
    pub year: Option<i32>,
    pub search: String,
    pub min_cgpa: f64,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            department: None,
            year: None,
            search: String::new(),
            min_cgpa: DEFAULT_MIN_CGPA,
        }
    }
}

impl CandidateQuery {
    /// Returns true if a full cohort (department and year) is selected.
    pub fn has_cohort(&self) -> bool {
        matches!(
            (&self.department, self.year),
            (Some(d), Some(_)) if !d.is_empty()
        )
    }

    pub fn matches(&self, student: &Student) -> bool {
        student.cgpa >= self.min_cgpa
            && matches_search(student.name(), &self.search)
            && student.has_approved_achievement()
    }
}

/// Builds the unfiltered pool the query searches.
pub fn candidate_pool(gen: &MockGenerator, query: &CandidateQuery) -> Vec<Student> {
    match (&query.department, query.year) {
        (Some(department), Some(year)) if query.has_cohort() => COHORT_SECTIONS
            .iter()
            .flat_map(|section| gen.generate_students(department, year, section))
            .collect(),
        _ => {
            let mut pool = Vec::new();
            for department in &gen.catalog().departments {
                for year in RECRUITMENT_YEARS {
                    for section in BROWSE_SECTIONS {
                        let mut students = gen.generate_students(department, year, section);
                        students.truncate(BROWSE_PER_SECTION);
                        pool.extend(students);
                    }
                }
            }
            pool
        }
    }
}

/// Runs a recruiter search: build the pool, filter it, keep the first
/// [`CANDIDATES_CAP`] matches.
///
/// An empty result is valid when nobody qualifies.
pub fn search_candidates(gen: &MockGenerator, query: &CandidateQuery) -> Vec<Student> {
    let pool = candidate_pool(gen, query);
    let pool_size = pool.len();

    let candidates: Vec<Student> = pool
        .into_iter()
        .filter(|s| query.matches(s))
        .take(CANDIDATES_CAP)
        .collect();

    debug!(
        "Recruiter search kept {} of {} students (min cgpa {}, search {:?})",
        candidates.len(),
        pool_size,
        query.min_cgpa,
        query.search
    );

    candidates
}
