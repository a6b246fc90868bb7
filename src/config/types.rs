//! Configuration types for the payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// The fixed rate constants a monthly calculation is parameterized by.
///
/// Loaded once at startup and treated as immutable for the process lifetime.
/// All fields must be non-negative and `working_days` must be strictly
/// positive; [`RateConfig::validate`] enforces this at load time so the
/// engine never divides by zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Flat amount deducted from the nominal base salary before rate derivation.
    pub salary_subtractor: Decimal,
    /// Standard working days per month, the divisor for the daily rate.
    pub working_days: Decimal,
    /// Flat per-day meal subsidy.
    pub meal_allowance_per_day: Decimal,
    /// Fraction of the adjusted base salary withheld for mandatory insurance.
    pub insurance_rate: Decimal,
    /// Fraction of the adjusted base salary withheld for union dues.
    pub union_rate: Decimal,
    /// Multiplier applied to the daily rate for the night-shift rate.
    pub night_shift_bonus_rate: Decimal,
    /// Multiplier applied to the base hourly rate for weekday overtime.
    pub ot_weekday_multiplier: Decimal,
    /// Multiplier applied to the base hourly rate for Sunday overtime.
    pub ot_sunday_multiplier: Decimal,
}

impl RateConfig {
    /// Validates the rate invariants.
    ///
    /// Every field must be non-negative, and `working_days` must be strictly
    /// positive. Returns `EngineError::InvalidRate` naming the offending
    /// field otherwise.
    pub fn validate(&self) -> EngineResult<()> {
        if self.working_days <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "working_days".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let non_negative = [
            ("salary_subtractor", self.salary_subtractor),
            ("meal_allowance_per_day", self.meal_allowance_per_day),
            ("insurance_rate", self.insurance_rate),
            ("union_rate", self.union_rate),
            ("night_shift_bonus_rate", self.night_shift_bonus_rate),
            ("ot_weekday_multiplier", self.ot_weekday_multiplier),
            ("ot_sunday_multiplier", self.ot_sunday_multiplier),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Employee directory file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employee directory entries.
    pub employees: Vec<Employee>,
}

/// The complete payroll configuration loaded from YAML files.
///
/// Aggregates the rate constants and the employee directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// The fixed rate constants.
    rates: RateConfig,
    /// The employee directory.
    employees: Vec<Employee>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// Fails with `EngineError::InvalidRate` if the rates violate their
    /// invariants.
    pub fn new(rates: RateConfig, employees: Vec<Employee>) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates, employees })
    }

    /// Returns the rate constants.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
