//! Monthly Payroll Calculation Engine
//!
//! This crate computes a monthly net salary for an employee from a base salary,
//! a set of attendance figures and a fixed rate configuration, producing an
//! itemized breakdown of rates, line items, deductions and net pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
