//! Entity types produced by the mock generator
use crate::types::User;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Certificate,
    Internship,
    Workshop,
    Volunteering,
    Leadership,
}

/// Review state of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    Approved,
    Pending,
    Rejected,
}

impl AchievementStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, AchievementStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    pub title: String,
    pub description: String,
    pub organization: String,
    pub date: NaiveDate,
    pub status: AchievementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Which profile fields a student has chosen to hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideDetails {
    pub cgpa: bool,
    pub phone: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(flatten)]
    pub user: User,
    pub roll_number: String,
    pub cgpa: f64,
    pub phone: String,
    pub achievements: Vec<Achievement>,
    pub hide_details: HideDetails,
}

impl Student {
    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Returns true if at least one achievement has been approved.
    pub fn has_approved_achievement(&self) -> bool {
        self.achievements.iter().any(|a| a.status.is_approved())
    }

    pub fn approved_achievement_count(&self) -> usize {
        self.achievements
            .iter()
            .filter(|a| a.status.is_approved())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    pub id: String,
    pub name: String,
    pub company: String,
    pub position: String,
    pub graduation_year: i32,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// A company recruiter asking for access to student data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recruiter {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub approved: bool,
}
