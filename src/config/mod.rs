//! Configuration loading for the vacation accrual engine.
//!
//! Accrual policies map each employee class to its annual vacation
//! entitlement. They can be loaded from a YAML file or taken from the
//! built-in table.
//!
//! # Example
//!
//! ```no_run
//! use vacation_accrual::config::ConfigLoader;
//! use vacation_accrual::models::EmployeeClass;
//!
//! let loader = ConfigLoader::load("./config/accrual_policy.yaml").unwrap();
//! let mut manager = loader.employee(EmployeeClass::Manager).unwrap();
//! manager.work(260).unwrap();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualConfig, ClassPolicy, PolicyFile};
