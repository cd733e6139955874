//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading accrual
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::{WORKING_DAYS_PER_YEAR, accrual_factor};
use crate::error::{AccrualError, AccrualResult};
use crate::models::{Employee, EmployeeClass};

use super::types::{AccrualConfig, ClassPolicy, PolicyFile};

/// Loads and provides access to accrual policies.
///
/// # File Format
///
/// ```text
/// classes:
///   hourly:
///     name: Hourly Employee
///     max_annual_vacation_days: 10
///   salaried:
///     name: Salaried Employee
///     max_annual_vacation_days: 15
///   manager:
///     name: Manager
///     max_annual_vacation_days: 30
/// ```
///
/// Classes may be omitted; asking for an omitted class returns
/// [`AccrualError::ClassNotConfigured`].
///
/// # Example
///
/// ```
/// use vacation_accrual::config::ConfigLoader;
/// use vacation_accrual::models::EmployeeClass;
///
/// let yaml = r#"
/// classes:
///   hourly:
///     name: Hourly Employee
///     max_annual_vacation_days: 13
/// "#;
/// let loader = ConfigLoader::from_yaml_str(yaml, "inline")?;
/// let mut employee = loader.employee(EmployeeClass::Hourly)?;
/// employee.work(260)?;
/// assert_eq!(employee.vacation_days(), 13.0);
/// # Ok::<(), vacation_accrual::error::AccrualError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AccrualConfig,
}

impl ConfigLoader {
    /// Loads policies from the YAML file at `path`.
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or an unknown class
    /// - Any entitlement is not positive, exceeds the 260 working days in a
    ///   year, or is too small to produce a nonzero accrual factor
    pub fn load<P: AsRef<Path>>(path: P) -> AccrualResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AccrualError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(
            path = %path_str,
            classes = loader.config.classes().len(),
            "Loaded accrual policy"
        );
        Ok(loader)
    }

    /// Parses policies from YAML held in memory.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(source: &str, origin: &str) -> AccrualResult<Self> {
        let file: PolicyFile =
            serde_yaml::from_str(source).map_err(|e| AccrualError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&file)?;

        Ok(Self {
            config: AccrualConfig::new(origin, file.classes),
        })
    }

    /// Returns a loader holding the built-in entitlements (10, 15 and 30).
    pub fn builtin() -> Self {
        Self {
            config: AccrualConfig::builtin(),
        }
    }

    fn validate(file: &PolicyFile) -> AccrualResult<()> {
        for class in EmployeeClass::ALL {
            let Some(policy) = file.classes.get(&class) else {
                continue;
            };
            let max = policy.max_annual_vacation_days;
            // A factor that underflows to zero would leave the employee
            // unconfigured; above one day per working day the balance can
            // overflow to infinity.
            let in_range = max > 0.0 && max <= f64::from(WORKING_DAYS_PER_YEAR);
            if !in_range || accrual_factor(max) == 0.0 {
                return Err(AccrualError::InvalidPolicy {
                    class,
                    message: format!(
                        "max_annual_vacation_days must be positive and at most {}, got {}",
                        WORKING_DAYS_PER_YEAR, max
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying accrual configuration.
    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// Gets the policy for `class`.
    pub fn get_policy(&self, class: EmployeeClass) -> AccrualResult<&ClassPolicy> {
        self.config
            .classes()
            .get(&class)
            .ok_or(AccrualError::ClassNotConfigured { class })
    }

    /// Creates an employee of `class` using the configured entitlement.
    pub fn employee(&self, class: EmployeeClass) -> AccrualResult<Employee> {
        let policy = self.get_policy(class)?;
        Ok(Employee::with_policy(class, policy.max_annual_vacation_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config_path() -> &'static str {
        "./config/accrual_policy.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().classes().len(), 3);
        assert_eq!(loader.config().origin(), config_path());
    }

    #[test]
    fn test_loaded_file_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin();

        for class in EmployeeClass::ALL {
            assert_eq!(
                loader.get_policy(class).unwrap(),
                builtin.get_policy(class).unwrap()
            );
        }
    }

    #[test]
    fn test_get_policy_names() {
        let loader = ConfigLoader::builtin();
        assert_eq!(
            loader.get_policy(EmployeeClass::Hourly).unwrap().name,
            "Hourly Employee"
        );
        assert_eq!(
            loader.get_policy(EmployeeClass::Manager).unwrap().name,
            "Manager"
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/accrual_policy.yaml") {
            Err(AccrualError::ConfigNotFound { path }) => {
                assert!(path.contains("accrual_policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        match ConfigLoader::from_yaml_str("classes: [not, a, map", "broken.yaml") {
            Err(AccrualError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "broken.yaml");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_class_returns_parse_error() {
        let yaml = r#"
classes:
  contractor:
    name: Contractor
    max_annual_vacation_days: 5
"#;
        let result = ConfigLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(
            result,
            Err(AccrualError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_non_positive_entitlement_rejected() {
        for value in ["0", "-3", ".nan", ".inf", "5e-324"] {
            let yaml = format!(
                "classes:\n  salaried:\n    name: Salaried\n    max_annual_vacation_days: {}\n",
                value
            );
            match ConfigLoader::from_yaml_str(&yaml, "inline") {
                Err(AccrualError::InvalidPolicy { class, .. }) => {
                    assert_eq!(class, EmployeeClass::Salaried);
                }
                other => panic!("Expected InvalidPolicy for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_oversized_entitlement_rejected() {
        for value in ["260.5", "1000", "1.7e308"] {
            let yaml = format!(
                "classes:\n  manager:\n    name: Manager\n    max_annual_vacation_days: {}\n",
                value
            );
            match ConfigLoader::from_yaml_str(&yaml, "inline") {
                Err(AccrualError::InvalidPolicy { class, message }) => {
                    assert_eq!(class, EmployeeClass::Manager);
                    assert!(message.contains("at most 260"), "{}", message);
                }
                other => panic!("Expected InvalidPolicy for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_entitlement_bounds_accepted() {
        for value in ["260", "0.5"] {
            let yaml = format!(
                "classes:\n  hourly:\n    name: Hourly\n    max_annual_vacation_days: {}\n",
                value
            );
            let loader = ConfigLoader::from_yaml_str(&yaml, "inline").unwrap();
            let mut employee = loader.employee(EmployeeClass::Hourly).unwrap();
            assert!(employee.is_configured());

            employee.work(260).unwrap();
            employee.work(260).unwrap();
            assert!(employee.vacation_days().is_finite());
            assert!(
                employee
                    .take_vacation(f64::INFINITY)
                    .unwrap_err()
                    .is_out_of_range()
            );
        }
    }

    #[test]
    fn test_missing_class_returns_not_configured() {
        let yaml = r#"
classes:
  hourly:
    name: Hourly Employee
    max_annual_vacation_days: 10
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();

        match loader.employee(EmployeeClass::Manager) {
            Err(AccrualError::ClassNotConfigured { class }) => {
                assert_eq!(class, EmployeeClass::Manager);
            }
            other => panic!("Expected ClassNotConfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_uses_configured_entitlement() {
        let yaml = r#"
classes:
  manager:
    name: Senior Manager
    max_annual_vacation_days: 26
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
        let mut employee = loader.employee(EmployeeClass::Manager).unwrap();

        assert_eq!(employee.class(), Some(EmployeeClass::Manager));
        assert_relative_eq!(employee.accrual_factor(), 0.1);

        employee.work(130).unwrap();
        assert_relative_eq!(employee.vacation_days(), 13.0);
    }

    #[test]
    fn test_builtin_employees_match_named_constructors() {
        let loader = ConfigLoader::builtin();
        assert_eq!(
            loader.employee(EmployeeClass::Hourly).unwrap(),
            Employee::hourly()
        );
        assert_eq!(
            loader.employee(EmployeeClass::Salaried).unwrap(),
            Employee::salaried()
        );
        assert_eq!(
            loader.employee(EmployeeClass::Manager).unwrap(),
            Employee::manager()
        );
    }
}
