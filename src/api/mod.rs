//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoints for running monthly pay
//! calculations and browsing the employee directory and rate constants.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, CalculationRequest};
pub use response::{ApiError, CalculationResponse, DisplayTotals};
pub use state::AppState;
