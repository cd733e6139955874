//! Configuration types for accrual policies.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::EmployeeClass;

/// The accrual policy for one employee class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassPolicy {
    /// The human-readable name of the class.
    pub name: String,
    /// Vacation days earned over a full working year.
    pub max_annual_vacation_days: f64,
}

/// Policy file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Map of employee class to its accrual policy.
    pub classes: HashMap<EmployeeClass, ClassPolicy>,
}

/// The complete accrual configuration.
#[derive(Debug, Clone)]
pub struct AccrualConfig {
    /// Where the configuration came from (a file path or `"builtin"`).
    origin: String,
    /// Policies by employee class.
    classes: HashMap<EmployeeClass, ClassPolicy>,
}

impl AccrualConfig {
    /// Creates a new AccrualConfig from its component parts.
    pub fn new(origin: impl Into<String>, classes: HashMap<EmployeeClass, ClassPolicy>) -> Self {
        Self {
            origin: origin.into(),
            classes,
        }
    }

    /// Creates the configuration holding the built-in entitlements.
    pub fn builtin() -> Self {
        let classes = EmployeeClass::ALL
            .into_iter()
            .map(|class| {
                let name = match class {
                    EmployeeClass::Hourly => "Hourly Employee",
                    EmployeeClass::Salaried => "Salaried Employee",
                    EmployeeClass::Manager => "Manager",
                };
                let policy = ClassPolicy {
                    name: name.to_string(),
                    max_annual_vacation_days: class.max_annual_vacation_days(),
                };
                (class, policy)
            })
            .collect();

        Self::new("builtin", classes)
    }

    /// Returns where the configuration came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns all configured class policies.
    pub fn classes(&self) -> &HashMap<EmployeeClass, ClassPolicy> {
        &self.classes
    }
}
