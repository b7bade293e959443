//! Shared identity types used by the session resolver and the dashboards
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six portal roles. Each one selects a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
    Parent,
    Alumni,
    Recruiter,
}

impl Role {
    /// Every role, in the order the login form lists them.
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Faculty,
        Role::Admin,
        Role::Parent,
        Role::Alumni,
        Role::Recruiter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
            Role::Parent => "parent",
            Role::Alumni => "alumni",
            Role::Recruiter => "recruiter",
        }
    }

    /// Tab ids of this role's dashboard, in display order.
    pub fn tabs(&self) -> &'static [&'static str] {
        match self {
            Role::Student => &["profile", "achievements", "alumni", "students"],
            Role::Faculty => &["approvals", "students", "rankings", "assignments", "attendance"],
            Role::Admin => &["overview", "notifications", "reports", "recruiters"],
            Role::Parent => &["overview", "achievements", "attendance", "mentor"],
            Role::Alumni => &["network", "students", "chat", "profile"],
            Role::Recruiter => &["students", "offers", "analytics", "profile"],
        }
    }

    /// The tab a dashboard opens on.
    pub fn default_tab(&self) -> &'static str {
        match self {
            // Faculty land on attendance even though approvals is listed first
            Role::Faculty => "attendance",
            _ => self.tabs()[0],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name that is not one of the six lowercase role ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a valid role")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// A signed-in portal user.
///
/// This is also the persisted session layout, so optional fields are left out
/// of the JSON entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(
            "Student".parse::<Role>(),
            Err(ParseRoleError("Student".to_string()))
        );
        let err = "rohit".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "\"rohit\" is not a valid role");
    }

    #[test]
    fn test_faculty_default_tab() {
        assert_eq!(Role::Faculty.default_tab(), "attendance");
        assert_eq!(Role::Recruiter.default_tab(), "students");
        assert_eq!(Role::Admin.tabs().len(), 4);
    }

    #[test]
    fn test_user_json_omits_unset_fields() {
        let user = User {
            id: "admin-1".to_string(),
            name: "Prof. Vikram Singh".to_string(),
            email: "admin@mywork.edu".to_string(),
            role: Role::Admin,
            department: None,
            year: None,
            section: None,
            profile_image: None,
            parent_id: None,
            mentor_id: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
        assert!(json.get("department").is_none());
        assert!(json.get("profileImage").is_none());
    }
}
