//! Alumni directory and classmate lists for the student and alumni dashboards
use super::matches_search;
use crate::generator::{Alumni, MockGenerator, Student};

/// How many alumni cards a directory shows.
pub const ALUMNI_DIRECTORY_CAP: usize = 12;

/// How many classmates the student dashboard shows.
pub const CLASSMATES_CAP: usize = 18;

/// How many current students the alumni dashboard shows.
pub const CURRENT_STUDENTS_CAP: usize = 12;

/// Profile id the alumni dashboard belongs to; it is left out of its own
/// directory.
pub const ALUMNI_DASHBOARD_PROFILE_ID: &str = "google-1";

#[derive(Debug, Clone, Default)]
pub struct AlumniFilter {
    /// Exact company name, or `None` for every company
    pub company: Option<String>,
    pub search: String,
    /// An alumni id to leave out (the viewer's own profile)
    pub exclude_id: Option<String>,
}

impl AlumniFilter {
    /// The filter the alumni dashboard starts from.
    pub fn for_alumni_dashboard() -> Self {
        Self {
            exclude_id: Some(ALUMNI_DASHBOARD_PROFILE_ID.to_string()),
            ..Self::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, alumni: &Alumni) -> bool {
        if self.exclude_id.as_deref() == Some(alumni.id.as_str()) {
            return false;
        }
        if let Some(ref company) = self.company {
            if &alumni.company != company {
                return false;
            }
        }
        matches_search(&alumni.name, &self.search)
    }

    /// Filters the pool and keeps the first [`ALUMNI_DIRECTORY_CAP`] matches.
    pub fn apply<'a>(&self, pool: &'a [Alumni]) -> Vec<&'a Alumni> {
        pool.iter()
            .filter(|a| self.matches(a))
            .take(ALUMNI_DIRECTORY_CAP)
            .collect()
    }
}

/// Students in the viewer's chosen cohort.
///
/// Nothing is generated until department, year and section are all chosen.
/// A year of zero or less counts as not chosen.
pub fn classmates(
    gen: &MockGenerator,
    department: Option<&str>,
    year: Option<i32>,
    section: Option<&str>,
) -> Vec<Student> {
    match (department, year, section) {
        (Some(department), Some(year), Some(section))
            if !department.is_empty() && year > 0 && !section.is_empty() =>
        {
            let mut students = gen.generate_students(department, year, section);
            students.truncate(CLASSMATES_CAP);
            students
        }
        _ => Vec::new(),
    }
}

/// The final-year students the alumni dashboard offers to mentor.
pub fn current_students(gen: &MockGenerator) -> Vec<Student> {
    let mut students = gen.generate_students("Computer Science Engineering", 4, "A");
    students.truncate(CURRENT_STUDENTS_CAP);
    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn generator() -> MockGenerator {
        MockGenerator::new(Arc::new(Catalog::builtin().unwrap()), 0)
    }

    #[test]
    fn test_unfiltered_directory_is_capped() {
        let gen = generator();
        let shown = AlumniFilter::default().apply(gen.alumni());

        assert_eq!(shown.len(), ALUMNI_DIRECTORY_CAP);
        assert_eq!(shown[0].id, "amazon-1");
    }

    #[test]
    fn test_company_filter_is_exact() {
        let gen = generator();
        let shown = AlumniFilter::default().with_company("Google").apply(gen.alumni());

        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|a| a.company == "Google"));
        assert!(AlumniFilter::default()
            .with_company("google")
            .apply(gen.alumni())
            .is_empty());
    }

    #[test]
    fn test_alumni_dashboard_hides_own_profile() {
        let gen = generator();
        let shown = AlumniFilter::for_alumni_dashboard()
            .with_company("Google")
            .apply(gen.alumni());

        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|a| a.id != ALUMNI_DASHBOARD_PROFILE_ID));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let gen = generator();
        let target = &gen.alumni()[5];
        let search = target.name.to_uppercase();
        let shown = AlumniFilter::default()
            .with_company(target.company.clone())
            .with_search(search)
            .apply(gen.alumni());

        assert!(shown.iter().any(|a| a.id == target.id));
        assert!(shown.iter().all(|a| a.name == target.name));
    }

    #[test]
    fn test_classmates_need_full_selection() {
        let gen = generator();

        assert!(classmates(&gen, Some("MBA"), Some(1), None).is_empty());
        assert!(classmates(&gen, None, Some(1), Some("A")).is_empty());
        assert!(classmates(&gen, Some(""), Some(1), Some("A")).is_empty());
        assert!(classmates(&gen, Some("MBA"), Some(0), Some("A")).is_empty());

        let shown = classmates(&gen, Some("MBA"), Some(1), Some("A"));
        assert_eq!(shown.len(), CLASSMATES_CAP);
        assert_eq!(shown[0].roll_number, "MBA1A001");
    }

    #[test]
    fn test_current_students() {
        let gen = generator();
        let shown = current_students(&gen);

        assert_eq!(shown.len(), CURRENT_STUDENTS_CAP);
        assert_eq!(shown[0].roll_number, "COM4A001");
    }
}
