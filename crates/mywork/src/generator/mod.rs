//! Mock entity generation for the dashboards.
//!
//! Students are synthesized on demand for a (department, year, section) cohort
//! and alumni are built once when the generator is created. Both are drawn
//! from seeded RNGs (see [`seed`]), so a generator with a given base seed
//! always produces the same entities for the same keys.

mod seed;
mod types;

pub use seed::SeedKey;
pub use types::*;

use crate::catalog::Catalog;
use crate::types::{Role, User};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Number of students in every generated section.
pub const STUDENTS_PER_SECTION: usize = 60;

/// Number of alumni generated per company.
pub const ALUMNI_PER_COMPANY: usize = 3;

/// Longest achievement prefix a generated student can carry.
const MAX_ACHIEVEMENTS: usize = 5;

/// Probability that a generated student hides their CGPA.
const HIDE_CGPA_PROBABILITY: f64 = 0.3;

/// Probability that a generated student hides their phone number.
const HIDE_PHONE_PROBABILITY: f64 = 0.4;

/// Earliest alumni graduation year; four consecutive years are used.
const FIRST_GRADUATION_YEAR: i32 = 2020;

const PORTRAIT_BASE_URL: &str = "https://randomuser.me/api/portraits/men";
const EMAIL_DOMAIN: &str = "mywork.edu";

/// Produces student and alumni pools from a catalog.
pub struct MockGenerator {
    catalog: Arc<Catalog>,
    base_seed: u64,
    alumni: Vec<Alumni>,
}

impl MockGenerator {
    /// Creates a generator and builds its alumni pool.
    ///
    /// # Arguments
    /// * `catalog` - The tables to draw names, companies and achievements from
    /// * `base_seed` - Mixed into every pool seed; change it to get a different
    ///   but equally reproducible data set
    pub fn new(catalog: Arc<Catalog>, base_seed: u64) -> Self {
        let alumni = build_alumni(&catalog, base_seed);
        info!(
            "Built {} alumni across {} companies (seed {})",
            alumni.len(),
            catalog.companies.len(),
            base_seed
        );

        Self {
            catalog,
            base_seed,
            alumni,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The alumni pool, three per company in catalog order.
    pub fn alumni(&self) -> &[Alumni] {
        &self.alumni
    }

    /// Returns an RNG for an arbitrary named pool.
    ///
    /// Dashboards use this for their own display numbers so those are seeded
    /// the same way as the entity pools.
    pub fn rng_for(&self, kind: &str, parts: &[&str]) -> StdRng {
        SeedKey::derive(self.base_seed, kind, parts).rng()
    }

    /// Generates the 60 students of one section.
    ///
    /// Inputs are not validated: an unknown department or a non-positive year
    /// is embedded as-is into the ids and roll numbers.
    ///
    /// # Arguments
    /// * `department` - Department name, e.g. "Computer Science Engineering"
    /// * `year` - Year of study
    /// * `section` - Section letter, e.g. "A"
    ///
    /// # Returns
    /// Students numbered 1 through 60, in order.
    pub fn generate_students(&self, department: &str, year: i32, section: &str) -> Vec<Student> {
        let year_str = year.to_string();
        let key = SeedKey::derive(self.base_seed, "students", &[department, year_str.as_str(), section]);
        let mut rng = key.rng();

        let id_prefix: String = department
            .to_lowercase()
            .split_whitespace()
            .collect();
        let roll_prefix = department.chars().take(3).collect::<String>().to_uppercase();
        let section_lower = section.to_lowercase();

        let students: Vec<Student> = (1..=STUDENTS_PER_SECTION)
            .map(|i| {
                let name = pick(&mut rng, &self.catalog.names);
                let cgpa = random_cgpa(&mut rng);
                let phone = format!("+91{}", rng.gen_range(1_000_000_000u64..10_000_000_000));

                let max = MAX_ACHIEVEMENTS.min(self.catalog.achievements.len());
                let taken = rng.gen_range(1..=max);
                let achievements = self.catalog.achievements[..taken].to_vec();

                let hide_details = HideDetails {
                    cgpa: rng.gen_bool(HIDE_CGPA_PROBABILITY),
                    phone: rng.gen_bool(HIDE_PHONE_PROBABILITY),
                };
                let portrait = rng.gen_range(0..50);

                Student {
                    user: User {
                        id: format!("{}-{}-{}-{}", id_prefix, year, section, i),
                        name,
                        email: format!("student{}.{}{}@{}", i, section_lower, year, EMAIL_DOMAIN),
                        role: Role::Student,
                        department: Some(department.to_string()),
                        year: Some(year),
                        section: Some(section.to_string()),
                        profile_image: Some(format!("{}/{}.jpg", PORTRAIT_BASE_URL, portrait)),
                        parent_id: None,
                        mentor_id: None,
                    },
                    roll_number: format!("{}{}{}{:03}", roll_prefix, year, section, i),
                    cgpa,
                    phone,
                    achievements,
                    hide_details,
                }
            })
            .collect();

        debug!(
            "Generated {} students for {}-{}-{} (seed {})",
            students.len(),
            department,
            year,
            section,
            key
        );

        students
    }
}

/// Uniform CGPA in [7.00, 10.00) with two decimals.
///
/// Sampled in hundredths so rounding can never produce 10.00.
fn random_cgpa(rng: &mut StdRng) -> f64 {
    rng.gen_range(700u32..1000) as f64 / 100.0
}

fn pick(rng: &mut StdRng, pool: &[String]) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}

/// Profile slug for a display name: lowercased with the first space removed.
fn profile_slug(name: &str) -> String {
    name.to_lowercase().replacen(' ', "", 1)
}

fn build_alumni(catalog: &Catalog, base_seed: u64) -> Vec<Alumni> {
    catalog
        .companies
        .iter()
        .flat_map(|company| {
            (1..=ALUMNI_PER_COMPANY).map(move |n| {
                let n_str = n.to_string();
                let mut rng = SeedKey::derive(base_seed, "alumni", &[company.as_str(), n_str.as_str()]).rng();

                let name = pick(&mut rng, &catalog.names);
                let slug = profile_slug(&name);

                Alumni {
                    id: format!("{}-{}", company.to_lowercase(), n),
                    company: company.clone(),
                    position: pick(&mut rng, &catalog.positions),
                    graduation_year: FIRST_GRADUATION_YEAR + rng.gen_range(0..4),
                    department: pick(&mut rng, &catalog.departments),
                    linkedin: Some(format!("https://linkedin.com/in/{}", slug)),
                    leetcode: Some(format!("https://leetcode.com/{}", slug)),
                    github: Some(format!("https://github.com/{}", slug)),
                    profile_image: Some(format!(
                        "{}/{}.jpg",
                        PORTRAIT_BASE_URL,
                        rng.gen_range(0..50)
                    )),
                    name,
                }
            })
        })
        .collect()
}
