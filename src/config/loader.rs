//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{EmployeesConfig, PayrollConfig, RateConfig};

/// Loads and provides access to the payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the rate constants and the employee directory.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── rates.yaml      # Fixed rate constants
/// └── employees.yaml  # Employee directory
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// // Look up an employee's default base salary
/// let employee = loader.get_employee("manh").unwrap();
/// println!("{}: {} đ", employee.name, employee.base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rate constants violate their invariants (negative rates or
    ///   non-positive working days)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load rates.yaml
        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RateConfig>(&rates_path)?;

        // Load employees.yaml
        let employees_path = path.join("employees.yaml");
        let employees_config = Self::load_yaml::<EmployeesConfig>(&employees_path)?;

        let config = PayrollConfig::new(rates, employees_config.employees)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the rate constants.
    pub fn rates(&self) -> &RateConfig {
        self.config.rates()
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee directory entry by id.
    ///
    /// # Arguments
    ///
    /// * `id` - The employee id (e.g., "manh")
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// let employee = loader.get_employee("manh")?;
    /// println!("Default base salary: {}", employee.base_salary);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Gets an employee's default base salary by id.
    pub fn default_base_salary(&self, id: &str) -> EngineResult<Decimal> {
        self.get_employee(id).map(|e| e.base_salary)
    }
}
