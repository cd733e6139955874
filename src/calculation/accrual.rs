//! Accrual rate and days-worked calculation functionality.
//!
//! Converts an annual vacation entitlement into a per-day accrual factor and
//! turns a number of days worked into vacation credit.

use crate::error::{AccrualError, AccrualResult};

/// The number of working days modelled in a year.
///
/// A class's full annual entitlement is earned over exactly this many days,
/// and a single `work` call may not report more.
pub const WORKING_DAYS_PER_YEAR: i32 = 260;

/// Returns the fraction of a vacation day earned per day worked.
///
/// # Examples
///
/// ```
/// use vacation_accrual::calculation::accrual_factor;
///
/// assert_eq!(accrual_factor(26.0), 0.1);
/// ```
pub fn accrual_factor(max_annual_vacation_days: f64) -> f64 {
    max_annual_vacation_days / f64::from(WORKING_DAYS_PER_YEAR)
}

/// Checks that `days` lies within `0..=WORKING_DAYS_PER_YEAR`.
pub fn validate_days_worked(days: i32) -> AccrualResult<()> {
    if !(0..=WORKING_DAYS_PER_YEAR).contains(&days) {
        return Err(AccrualError::out_of_range(format!(
            "days must be between 0 and {}",
            WORKING_DAYS_PER_YEAR
        )));
    }
    Ok(())
}

/// Calculates the vacation credit earned for `days` worked at `factor`.
///
/// An unconfigured (zero) factor is reported before the range of `days` is
/// looked at, so an unconfigured employee always fails with
/// [`AccrualError::InvalidState`].
///
/// # Examples
///
/// ```
/// use vacation_accrual::calculation::{accrual_factor, accrued_days};
///
/// let factor = accrual_factor(10.0);
/// assert_eq!(accrued_days(130, factor).unwrap(), 5.0);
/// assert!(accrued_days(261, factor).unwrap_err().is_out_of_range());
/// assert!(accrued_days(5, 0.0).unwrap_err().is_invalid_state());
/// ```
pub fn accrued_days(days: i32, factor: f64) -> AccrualResult<f64> {
    if factor == 0.0 {
        return Err(AccrualError::invalid_state(
            "accrual factor must be set before working",
        ));
    }
    validate_days_worked(days)?;

    Ok(f64::from(days) * factor)
}
