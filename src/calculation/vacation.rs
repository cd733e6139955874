//! Vacation request validation.
//!
//! The two checks run in a fixed order and rely on IEEE-754 comparison
//! semantics: `+inf` exceeds any finite balance and is caught by the first
//! check, while NaN compares false against everything and falls through to
//! the second.

use crate::error::{AccrualError, AccrualResult};

/// Validates a request to use `days_used` vacation days against `balance`.
///
/// # Examples
///
/// ```
/// use vacation_accrual::calculation::validate_vacation_request;
///
/// assert!(validate_vacation_request(2.5, 5.0).is_ok());
/// assert!(validate_vacation_request(f64::INFINITY, 5.0).is_err());
/// assert!(validate_vacation_request(f64::NAN, 5.0).is_err());
/// ```
pub fn validate_vacation_request(days_used: f64, balance: f64) -> AccrualResult<()> {
    if days_used > balance {
        return Err(AccrualError::out_of_range(
            "cannot use more vacation days than accrued",
        ));
    }
    if days_used < 0.0 || days_used.is_nan() {
        return Err(AccrualError::out_of_range(
            "days used must be a positive number",
        ));
    }
    Ok(())
}
