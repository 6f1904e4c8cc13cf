//! Form submission checks and form file loading.
//!
//! The assembler never validates. Callers that want to block a submission run
//! [`check_submission`] first; interactive callers re-check one field per edit
//! with [`field_error`] and keep only the latest result per field.

use crate::link::validate_url;
use crate::platform::Platform;
use crate::profile::FormData;
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

/// A field of [`FormData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Bio,
    Link(Platform),
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Bio,
        FormField::Link(Platform::Linkedin),
        FormField::Link(Platform::Facebook),
        FormField::Link(Platform::Instagram),
        FormField::Link(Platform::Github),
    ];

    pub fn platform(self) -> Option<Platform> {
        match self {
            FormField::Link(p) => Some(p),
            FormField::Name | FormField::Bio => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Bio => "bio",
            FormField::Link(p) => p.tag(),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid {0} URL")]
    InvalidUrl(Platform),
}

/// Per-edit check of a single field. Only link fields can fail here.
pub fn field_error(field: FormField, value: &str) -> Option<FieldError> {
    match field.platform() {
        Some(platform) if !value.is_empty() && !validate_url(value, platform) => {
            Some(FieldError::InvalidUrl(platform))
        }
        _ => None,
    }
}

/// Every problem found by [`check_submission`], in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionErrors {
    pub errors: Vec<(FormField, FieldError)>,
}

impl fmt::Display for SubmissionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, err)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SubmissionErrors {}

/// Final check before assembly: a non-blank name and valid populated links.
pub fn check_submission(form: &FormData) -> std::result::Result<(), SubmissionErrors> {
    let mut errors = Vec::new();
    for field in FormField::ALL {
        let value = form.field(field);
        let err = match field {
            FormField::Name if value.trim().is_empty() => Some(FieldError::NameRequired),
            _ => field_error(field, value),
        };
        if let Some(err) = err {
            errors.push((field, err));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "form submission rejected");
        Err(SubmissionErrors { errors })
    }
}

impl FormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Bio => &self.bio,
            FormField::Link(p) => self.social(p),
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Bio => &mut self.bio,
            FormField::Link(p) => self.social_mut(p),
        }
    }

    /// Reads a form from a JSON object; absent keys are empty.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read form {}", path.display()))?;
        let form: FormData = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse form {}", path.display()))?;
        Ok(form)
    }
}
