//! # Validation Errors
//!
//! Errors raised when operator input fails format validation before it is
//! sent to the PMS service. Each variant carries the offending input (never
//! the password itself) and the expected format, so a rejected form can be
//! corrected without guesswork.

use thiserror::Error;

/// Operator-input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name shorter than the minimum.
    #[error("name too short: must be at least 2 characters")]
    NameTooShort,

    /// E-mail address fails basic shape validation.
    #[error("invalid e-mail address: \"{0}\"")]
    InvalidEmail(String),

    /// Phone number fails format validation.
    #[error("invalid phone number: \"{0}\" (expected 8-15 digits, optionally prefixed with +)")]
    InvalidPhone(String),

    /// Birth date is unparseable or outside the accepted range.
    #[error("invalid birth date: \"{value}\" ({reason})")]
    InvalidBirthDate {
        /// The string that was rejected.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Password shorter than the minimum.
    #[error("password too short: must be at least 6 characters")]
    PasswordTooShort,

    /// Password confirmation does not match the password.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    /// Favorite-team field left empty.
    #[error("favorite team must not be empty")]
    MissingFavoriteTeam,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_input() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert!(err.to_string().contains("12ab"));

        let err = ValidationError::InvalidBirthDate {
            value: "3000-01-01".to_string(),
            reason: "in the future".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3000-01-01"));
        assert!(msg.contains("in the future"));
    }

    #[test]
    fn password_errors_never_echo_the_password() {
        let msg = ValidationError::PasswordTooShort.to_string();
        assert!(msg.contains("6 characters"));
        let msg = ValidationError::PasswordMismatch.to_string();
        assert!(msg.contains("does not match"));
    }
}
