//! The login form's presence checks.

use super::error::SessionError;
use super::SessionResolver;
use crate::types::{Role, User};
use serde::Deserialize;

/// What the login form submits.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Checks that every field was filled in. Nothing else is validated.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.email.is_empty() {
            return Err(SessionError::MissingField { field: "email" });
        }
        if self.password.is_empty() {
            return Err(SessionError::MissingField { field: "password" });
        }
        Ok(())
    }

    /// Validates the form and, if it is complete, attempts the login.
    ///
    /// A missing field short-circuits before the resolver is consulted.
    pub fn submit(&self, resolver: &mut SessionResolver) -> Result<User, SessionError> {
        self.validate()?;
        resolver.login(&self.email, &self.password, self.role)
    }
}
