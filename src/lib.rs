//! Vacation Accrual Engine
//!
//! This crate models vacation-day accrual for hourly, salaried and manager
//! employees: days worked earn fractional vacation credit at a per-class rate,
//! and vacation taken is debited from the accrued balance.
//!
//! ```
//! use vacation_accrual::models::Employee;
//!
//! let mut employee = Employee::manager();
//! employee.work(130)?;
//! employee.take_vacation(10.0)?;
//! assert_eq!(employee.vacation_days(), 5.0);
//! # Ok::<(), vacation_accrual::error::AccrualError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
