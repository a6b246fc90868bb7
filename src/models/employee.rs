//! Employee directory entry model.
//!
//! The employee directory is a static list of workers with their default
//! monthly base salaries. Selecting an employee seeds the engine's base
//! salary input, which the caller may override per request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An entry in the employee directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The default monthly base salary in whole đồng.
    pub base_salary: Decimal,
}
