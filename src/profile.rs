//! Profile data model and JSON loading
//!
//! The input record is deserialized straight into these types. Keys use the
//! snake_case names, with aliases for the spaced keys found in older `cv.json`
//! files (`about me`, `date from`, `linkedin href`, ...).

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::GenerateError;

/// The full portfolio content of one person
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileRecord {
    /// Display name, used in the page title and navigation
    pub name: String,
    /// Biography paragraph
    #[serde(alias = "about me")]
    pub about: String,
    /// Contact details, each rendered as an optional row
    pub contact: Contact,
    /// Work history, rendered in the given order
    pub experiences: Vec<Entry>,
    /// Achievements and activities
    #[serde(rename = "other", alias = "achievements")]
    pub achievements: Vec<Entry>,
}

/// Optional contact details
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "linkedin href")]
    pub linkedin_url: Option<String>,
    #[serde(alias = "github")]
    pub github_username: Option<String>,
}

/// A single experience or achievement
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    pub title: String,
    pub location: Option<String>,
    pub description: String,
    pub date: Option<String>,
    #[serde(alias = "date from")]
    pub date_from: Option<String>,
    #[serde(alias = "date until")]
    pub date_until: Option<String>,
}

/// A field that is present but unusable for rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldIssue {
    /// Dotted path of the field, e.g. `experiences[1].title`
    pub field: String,
    pub reason: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl ProfileRecord {
    /// Parse a record from JSON text without running field checks
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Check the fields the renderer relies on
    ///
    /// Returns the first problem found, in document order.
    pub fn validate(&self) -> Result<(), FieldIssue> {
        if self.name.trim().is_empty() {
            return Err(FieldIssue::new("name", "must not be blank"));
        }
        if self.about.trim().is_empty() {
            return Err(FieldIssue::new("about", "must not be blank"));
        }
        self.contact.validate()?;
        validate_entries("experiences", &self.experiences)?;
        validate_entries("other", &self.achievements)?;
        Ok(())
    }
}

impl Contact {
    fn validate(&self) -> Result<(), FieldIssue> {
        if let Some(email) = &self.email {
            check_email(email).map_err(|reason| FieldIssue::new("contact.email", reason))?;
        }
        if let Some(url) = &self.linkedin_url {
            check_web_url(url).map_err(|reason| FieldIssue::new("contact.linkedin_url", reason))?;
        }
        if let Some(user) = &self.github_username {
            if user.trim().is_empty() {
                return Err(FieldIssue::new("contact.github_username", "must not be blank"));
            }
        }
        Ok(())
    }
}

fn validate_entries(list: &str, entries: &[Entry]) -> Result<(), FieldIssue> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(FieldIssue::new(
                format!("{}[{}].title", list, i),
                "must not be blank",
            ));
        }
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), &'static str> {
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("must not contain whitespace or control characters");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err("must have the form user@domain"),
    }
}

fn check_web_url(url: &str) -> Result<(), &'static str> {
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("must not contain whitespace or control characters");
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or("must be an absolute http(s) URL")?;
    if rest.is_empty() {
        return Err("must include a host");
    }
    Ok(())
}

/// Load and check the profile record at `path`
///
/// A missing file is reported as [`GenerateError::MissingInput`] so callers can
/// stop before anything is written.
pub fn load_profile(path: &Path) -> Result<ProfileRecord, GenerateError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => GenerateError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => GenerateError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let profile = ProfileRecord::from_json(&text).map_err(|source| {
        GenerateError::MalformedData {
            path: path.to_path_buf(),
            text: text.clone(),
            source,
        }
    })?;

    profile
        .validate()
        .map_err(|issue| GenerateError::InvalidField {
            path: path.to_path_buf(),
            field: issue.field,
            reason: issue.reason,
        })?;

    log::debug!(
        "loaded profile '{}' from {} ({} experiences, {} achievements)",
        profile.name,
        path.display(),
        profile.experiences.len(),
        profile.achievements.len()
    );

    Ok(profile)
}
