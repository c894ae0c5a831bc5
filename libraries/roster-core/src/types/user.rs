/// User domain types
use serde::{Deserialize, Serialize};

/// User identifier, assigned by the store and never reused while a larger id exists
pub type UserId = i64;

/// Maximum length of a user's name
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a user's email
pub const EMAIL_MAX_LEN: usize = 200;

/// Maximum length of a user's role
pub const ROLE_MAX_LEN: usize = 100;

/// Roster member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, positive identifier
    pub id: UserId,

    /// Display name, trimmed
    pub name: String,

    /// Email address, trimmed, original case preserved
    pub email: String,

    /// Free-form role label, trimmed
    pub role: String,
}

impl User {
    /// Case-insensitive email comparison
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }
}

/// Payload for creating a user
///
/// Missing JSON fields deserialize to empty strings so they surface as
/// "required" validation errors rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role label
    pub role: String,
}

impl CreateUser {
    /// Create a payload from the three required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Build the stored record with all fields trimmed
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
        }
    }
}

/// Payload for a partial update
///
/// A field that is absent or blank leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New role label
    pub role: Option<String>,
}

impl UpdateUser {
    /// Trimmed name, if provided non-blank
    pub fn name(&self) -> Option<&str> {
        provided(self.name.as_deref())
    }

    /// Trimmed email, if provided non-blank
    pub fn email(&self) -> Option<&str> {
        provided(self.email.as_deref())
    }

    /// Trimmed role, if provided non-blank
    pub fn role(&self) -> Option<&str> {
        provided(self.role.as_deref())
    }

    /// Whether applying this payload would change nothing
    pub fn is_noop(&self) -> bool {
        self.name().is_none() && self.email().is_none() && self.role().is_none()
    }

    /// Apply the provided fields to `user`
    ///
    /// Callers must have validated the payload and checked email uniqueness.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = self.name() {
            user.name = name.to_string();
        }
        if let Some(email) = self.email() {
            user.email = email.to_string();
        }
        if let Some(role) = self.role() {
            user.role = role.to_string();
        }
    }
}

fn provided(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
