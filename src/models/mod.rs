//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod employee;

pub use attendance::AttendanceRecord;
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, Deductions, PayCategory, PayLine,
    PayRates,
};
pub use employee::Employee;
