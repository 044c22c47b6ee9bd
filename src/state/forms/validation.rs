//! Pure validation rules shared by the change and blur handlers

use super::field::FieldName;
use thiserror::Error;

/// A validation failure, rendered inline under the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    EmptyField(FieldName),
    #[error("Username must contain only letters.")]
    InvalidUsername,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Result of checking a username value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsernameCheck {
    pub empty: bool,
    pub invalid_format: bool,
}

impl UsernameCheck {
    /// The error to display; emptiness takes precedence over format
    pub fn error(self) -> Option<ValidationError> {
        if self.empty {
            Some(ValidationError::EmptyField(FieldName::Username))
        } else if self.invalid_format {
            Some(ValidationError::InvalidUsername)
        } else {
            None
        }
    }
}

/// Check a username: non-empty and ASCII letters (A-Z, a-z) only
pub fn check_username(value: &str) -> UsernameCheck {
    UsernameCheck {
        empty: value.trim().is_empty(),
        invalid_format: value.chars().any(|c| !c.is_ascii_alphabetic()),
    }
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}
