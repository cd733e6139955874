//! Calculation logic for the vacation accrual engine.
//!
//! This module contains the pure functions behind the employee operations:
//! converting an annual entitlement into an accrual factor, crediting days
//! worked, and validating vacation requests against an accrued balance.

mod accrual;
mod vacation;

pub use accrual::{WORKING_DAYS_PER_YEAR, accrual_factor, accrued_days, validate_days_worked};
pub use vacation::validate_vacation_request;
