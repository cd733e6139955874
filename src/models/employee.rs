//! Employee model and related types.
//!
//! This module defines the [`Employee`] accrual record and the
//! [`EmployeeClass`] enum that selects its accrual policy.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::{
    WORKING_DAYS_PER_YEAR, accrual_factor, accrued_days, validate_vacation_request,
};
use crate::error::AccrualResult;

/// The compensation class of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeClass {
    /// Paid by the hour; earns 10 vacation days per full year.
    Hourly,
    /// Paid a salary; earns 15 vacation days per full year.
    Salaried,
    /// Salaried manager; earns 30 vacation days per full year.
    Manager,
}

impl EmployeeClass {
    /// Every class, in ascending order of entitlement.
    pub const ALL: [EmployeeClass; 3] = [
        EmployeeClass::Hourly,
        EmployeeClass::Salaried,
        EmployeeClass::Manager,
    ];

    /// Returns the built-in number of vacation days earned over a full
    /// working year.
    pub fn max_annual_vacation_days(self) -> f64 {
        match self {
            EmployeeClass::Hourly => 10.0,
            EmployeeClass::Salaried => 15.0,
            EmployeeClass::Manager => 30.0,
        }
    }

    /// Returns the snake_case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeClass::Hourly => "hourly",
            EmployeeClass::Salaried => "salaried",
            EmployeeClass::Manager => "manager",
        }
    }
}

impl fmt::Display for EmployeeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the vacation balance of a single employee.
///
/// The accrual factor is fixed by the constructor and cannot be changed
/// afterwards. The default value is an unconfigured employee whose factor is
/// zero; calling [`Employee::work`] on it fails with
/// [`AccrualError::InvalidState`](crate::error::AccrualError::InvalidState).
///
/// An `Employee` is a plain value. Callers sharing one across threads must
/// serialize access to it.
///
/// # Examples
///
/// ```
/// use vacation_accrual::models::Employee;
///
/// let mut employee = Employee::hourly();
/// employee.work(130)?;
/// employee.work(130)?;
/// assert_eq!(employee.vacation_days(), 10.0);
/// # Ok::<(), vacation_accrual::error::AccrualError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Employee {
    class: Option<EmployeeClass>,
    vacation_days: f64,
    accrual_factor: f64,
}

impl Employee {
    /// Creates an hourly employee with no accrued vacation.
    pub fn hourly() -> Self {
        Self::for_class(EmployeeClass::Hourly)
    }

    /// Creates a salaried employee with no accrued vacation.
    pub fn salaried() -> Self {
        Self::for_class(EmployeeClass::Salaried)
    }

    /// Creates a manager with no accrued vacation.
    pub fn manager() -> Self {
        Self::for_class(EmployeeClass::Manager)
    }

    /// Creates an employee using the built-in entitlement for `class`.
    pub fn for_class(class: EmployeeClass) -> Self {
        Self::with_policy(class, class.max_annual_vacation_days())
    }

    /// Creates an employee whose factor is derived from an explicit annual
    /// entitlement. Used for the built-in classes and for loaded policies.
    pub(crate) fn with_policy(class: EmployeeClass, max_annual_vacation_days: f64) -> Self {
        Self {
            class: Some(class),
            vacation_days: 0.0,
            accrual_factor: accrual_factor(max_annual_vacation_days),
        }
    }

    /// Returns the accrued vacation balance.
    pub fn vacation_days(&self) -> f64 {
        self.vacation_days
    }

    /// Returns the fraction of a vacation day earned per day worked.
    pub fn accrual_factor(&self) -> f64 {
        self.accrual_factor
    }

    /// Returns the employee's class, or `None` if unconfigured.
    pub fn class(&self) -> Option<EmployeeClass> {
        self.class
    }

    /// Returns true if the accrual factor has been set.
    pub fn is_configured(&self) -> bool {
        self.accrual_factor != 0.0
    }

    /// Returns the vacation days earned over a full working year.
    pub fn max_annual_vacation_days(&self) -> f64 {
        self.accrual_factor * f64::from(WORKING_DAYS_PER_YEAR)
    }

    /// Credits `days` worked to the vacation balance.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the employee is unconfigured, whatever `days` is.
    /// - `OutOfRange` if `days` is not within `0..=260`.
    ///
    /// The balance is unchanged on error. It is not capped, so repeated calls
    /// may accrue more than one year's entitlement.
    pub fn work(&mut self, days: i32) -> AccrualResult<()> {
        let earned = accrued_days(days, self.accrual_factor).inspect_err(|err| {
            warn!(class = self.class_label(), days, error = %err, "Work rejected");
        })?;

        self.vacation_days += earned;
        debug!(
            class = self.class_label(),
            days,
            earned,
            balance = self.vacation_days,
            "Vacation accrued"
        );
        Ok(())
    }

    /// Debits `days_used` from the vacation balance.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `days_used` exceeds the balance (this includes
    /// positive infinity), or if it is negative or NaN. The balance is
    /// unchanged on error.
    pub fn take_vacation(&mut self, days_used: f64) -> AccrualResult<()> {
        validate_vacation_request(days_used, self.vacation_days).inspect_err(|err| {
            warn!(
                class = self.class_label(),
                days_used,
                balance = self.vacation_days,
                error = %err,
                "Vacation request rejected"
            );
        })?;

        self.vacation_days -= days_used;
        debug!(
            class = self.class_label(),
            days_used,
            balance = self.vacation_days,
            "Vacation taken"
        );
        Ok(())
    }

    fn class_label(&self) -> &'static str {
        self.class.map_or("unconfigured", EmployeeClass::as_str)
    }
}
