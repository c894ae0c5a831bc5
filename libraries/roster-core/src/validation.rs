//! Field-level validation for user payloads
//!
//! Validation is pure: it inspects a payload and reports every failing
//! field at once, keyed by the JSON field name. It never consults the store,
//! so uniqueness is checked separately under the store's lock.

use crate::types::{CreateUser, UpdateUser, EMAIL_MAX_LEN, NAME_MAX_LEN, ROLE_MAX_LEN};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `local@domain.tld`: no `@` or whitespace in either part, at least one dot in the domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Whether missing fields are errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Creation: every field is required
    Create,
    /// Partial update: absent or blank fields are skipped
    Partial,
}

/// Field name to ordered list of human-readable messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Record a message against a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Whether no field failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` has at least one message
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for `field`, in the order they were recorded
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Borrowed view of the three user fields as they arrived
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a> {
    /// Raw name, `None` when absent
    pub name: Option<&'a str>,
    /// Raw email, `None` when absent
    pub email: Option<&'a str>,
    /// Raw role, `None` when absent
    pub role: Option<&'a str>,
}

impl<'a> From<&'a CreateUser> for Fields<'a> {
    fn from(payload: &'a CreateUser) -> Self {
        Self {
            name: Some(payload.name.as_str()),
            email: Some(payload.email.as_str()),
            role: Some(payload.role.as_str()),
        }
    }
}

impl<'a> From<&'a UpdateUser> for Fields<'a> {
    fn from(payload: &'a UpdateUser) -> Self {
        Self {
            name: payload.name.as_deref(),
            email: payload.email.as_deref(),
            role: payload.role.as_deref(),
        }
    }
}

/// Validate a payload, collecting every failing field
pub fn validate(fields: Fields<'_>, mode: Mode) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    check_text(&mut errors, "name", "Name", fields.name, NAME_MAX_LEN, mode);
    let email = check_text(&mut errors, "email", "Email", fields.email, EMAIL_MAX_LEN, mode);
    if email.is_some_and(|email| !is_valid_email(email)) {
        errors.add("email", "Email is not a valid email address.");
    }
    check_text(&mut errors, "role", "Role", fields.role, ROLE_MAX_LEN, mode);

    errors.into_result()
}

/// Check presence and length; returns the trimmed value when it is present
fn check_text<'a>(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&'a str>,
    max_len: usize,
    mode: Mode,
) -> Option<&'a str> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        if mode == Mode::Create {
            errors.add(field, format!("{} is required.", label));
        }
        return None;
    }
    if trimmed.chars().count() > max_len {
        errors.add(
            field,
            format!("{} must be at most {} characters.", label, max_len),
        );
    }
    Some(trimmed)
}

/// Whether `email` has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

impl CreateUser {
    /// Validate as a creation payload
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate(self.into(), Mode::Create)
    }
}

impl UpdateUser {
    /// Validate as a partial update payload
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate(self.into(), Mode::Partial)
    }
}
