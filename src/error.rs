//! Error types for the vacation accrual engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejected accrual operation and configuration failure.

use thiserror::Error;

use crate::models::EmployeeClass;

/// The main error type for the vacation accrual engine.
///
/// A failed operation never modifies the employee's balance; the error is
/// the only observable outcome of the call.
///
/// # Example
///
/// ```
/// use vacation_accrual::error::AccrualError;
///
/// let error = AccrualError::OutOfRange {
///     message: "days must be between 0 and 260".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Value out of range: days must be between 0 and 260"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccrualError {
    /// An argument fell outside the legal domain of the operation.
    #[error("Value out of range: {message}")]
    OutOfRange {
        /// A description of the violated range.
        message: String,
    },

    /// The employee was used before its accrual factor was configured.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// A description of the invalid state.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested employee class has no policy in the loaded configuration.
    #[error("No accrual policy configured for class: {class}")]
    ClassNotConfigured {
        /// The class that was requested.
        class: EmployeeClass,
    },

    /// A configured policy carries an unusable value.
    #[error("Invalid accrual policy for class '{class}': {message}")]
    InvalidPolicy {
        /// The class whose policy is invalid.
        class: EmployeeClass,
        /// A description of what made the policy invalid.
        message: String,
    },
}

impl AccrualError {
    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Returns true if this is an [`AccrualError::OutOfRange`] error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns true if this is an [`AccrualError::InvalidState`] error.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

/// A type alias for Results that return AccrualError.
pub type AccrualResult<T> = Result<T, AccrualError>;
