//! Core domain errors and save-time validation results.
//!
//! These are bounded and stable: they represent domain refusal states, not
//! implementation details. Missing page/file references are never errors
//! anywhere in the crate - dependent computations degrade to `None`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid locale tag.
#[derive(Debug, Error, Clone)]
#[error("locale `{raw}` is invalid: expected `xx` or `xx_YY`")]
pub struct InvalidLocale {
    pub raw: String,
}

/// Invalid link-type tag.
#[derive(Debug, Error, Clone)]
#[error("link type `{raw}` is not one of internal, external, file")]
pub struct InvalidLinkType {
    pub raw: String,
}

/// A single structural validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("a menu set with the name `{name}` already exists")]
    DuplicateName { name: String },
}

/// Collected validation failures for one save attempt.
///
/// A save that produced any error refuses to persist; no partial write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

/// Canonical error enum for the core capability.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    InvalidLocale(#[from] InvalidLocale),
    #[error(transparent)]
    InvalidLinkType(#[from] InvalidLinkType),
    #[error("validation failed: {0:?}")]
    Validation(ValidationResult),
}

impl From<ValidationResult> for CoreError {
    fn from(result: ValidationResult) -> Self {
        CoreError::Validation(result)
    }
}
