//! Faculty dashboard state: achievement review, attendance, and rankings.

use super::admin::round2;
use crate::catalog::{Catalog, RosterStudent};
use crate::generator::{Achievement, AchievementStatus, MockGenerator};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Student every review item is attributed to on the demo dashboard.
const REVIEW_STUDENT_NAME: &str = "Rohit Sharma";
const REVIEW_STUDENT_ID: &str = "CSE3A001";

/// An achievement awaiting (or after) faculty review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub student_name: String,
    pub student_id: String,
}

/// The faculty approval queue.
#[derive(Debug, Clone)]
pub struct AchievementReview {
    items: Vec<ReviewItem>,
}

impl AchievementReview {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let items = catalog
            .achievements
            .iter()
            .map(|a| ReviewItem {
                achievement: a.clone(),
                student_name: REVIEW_STUDENT_NAME.to_string(),
                student_id: REVIEW_STUDENT_ID.to_string(),
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Records a decision on one achievement.
    ///
    /// # Returns
    /// `true` if an item with `id` exists.
    pub fn review(&mut self, id: &str, status: AchievementStatus) -> bool {
        match self.items.iter().position(|i| i.achievement.id == id) {
            Some(idx) => {
                let mut item = self.items[idx].clone();
                item.achievement.status = status;
                self.items[idx] = item;
                info!("Achievement {} marked {:?}", id, status);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> Vec<&ReviewItem> {
        self.items
            .iter()
            .filter(|i| i.achievement.status == AchievementStatus::Pending)
            .collect()
    }
}

/// Per-subject attendance for the fixed faculty roster.
///
/// Unmarked students count as absent.
#[derive(Debug, Clone)]
pub struct AttendanceBook {
    subjects: Vec<String>,
    roster: Vec<RosterStudent>,
    marks: HashMap<String, HashMap<String, bool>>,
}

impl AttendanceBook {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            subjects: catalog.subjects.clone(),
            roster: catalog.attendance_roster.clone(),
            marks: HashMap::new(),
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn roster(&self) -> &[RosterStudent] {
        &self.roster
    }

    /// Marks a student present or absent for a subject. The latest mark wins.
    pub fn mark(&mut self, subject: &str, student_id: &str, present: bool) {
        debug!("{} {} for {}", student_id, if present { "present" } else { "absent" }, subject);
        self.marks
            .entry(subject.to_string())
            .or_default()
            .insert(student_id.to_string(), present);
    }

    /// Replaces a subject's marks with the whole roster present.
    pub fn mark_all_present(&mut self, subject: &str) {
        let all_present = self
            .roster
            .iter()
            .map(|s| (s.id.clone(), true))
            .collect();
        self.marks.insert(subject.to_string(), all_present);
        info!("Marked all {} students present for {}", self.roster.len(), subject);
    }

    /// Clears every mark for a subject.
    pub fn reset(&mut self, subject: &str) {
        self.marks.insert(subject.to_string(), HashMap::new());
    }

    pub fn is_present(&self, subject: &str, student_id: &str) -> Option<bool> {
        self.marks.get(subject)?.get(student_id).copied()
    }

    /// Percentage of the roster marked present, rounded to a whole number.
    pub fn percentage(&self, subject: &str) -> u32 {
        if self.roster.is_empty() {
            return 0;
        }
        let present = self
            .roster
            .iter()
            .filter(|s| self.is_present(subject, &s.id) == Some(true))
            .count();
        (present as f64 / self.roster.len() as f64 * 100.0).round() as u32
    }
}

/// A row of the department rankings tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRanking {
    pub rank: usize,
    pub department: String,
    pub avg_cgpa: f64,
    pub total_students: u32,
    pub placement_rate: u32,
}

pub fn department_rankings(gen: &MockGenerator) -> Vec<DepartmentRanking> {
    let mut rng = gen.rng_for("faculty-rankings", &[]);

    gen.catalog()
        .departments
        .iter()
        .enumerate()
        .map(|(i, department)| DepartmentRanking {
            rank: i + 1,
            department: department.clone(),
            avg_cgpa: round2(8.5 - i as f64 * 0.15),
            total_students: rng.gen_range(200..500),
            placement_rate: 85u32.saturating_sub(2 * i as u32),
        })
        .collect()
}
