//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load the payroll configuration from
//! YAML files: the fixed rate constants and the employee directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Working days per month: {}", config.rates().working_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, RateConfig};
