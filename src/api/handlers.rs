//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::models::AttendanceRecord;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, DisplayTotals};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/employees", get(employees_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Resolves the base salary (explicit override wins over the selected
/// employee's directory default), runs the engine, and wraps the raw result
/// with the formatted display totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the base salary: explicit override wins over the employee default
    let config = state.config();
    let base_salary = match (&request.base_salary, &request.employee_id) {
        (Some(base_salary), _) => *base_salary,
        (None, Some(employee_id)) => match config.default_base_salary(employee_id) {
            Ok(base_salary) => base_salary,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %employee_id,
                    "Employee not found"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        },
        (None, None) => {
            warn!(correlation_id = %correlation_id, "Request carried neither employee_id nor base_salary");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(
                    "Provide an employee_id or an explicit base_salary",
                )),
            )
                .into_response();
        }
    };

    // Run the engine
    let attendance: AttendanceRecord = request.attendance.into();
    let start_time = Instant::now();
    let result = compute(base_salary, &attendance, config.rates());
    let duration = start_time.elapsed();

    for warning in &result.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}", warning.message
        );
    }

    info!(
        correlation_id = %correlation_id,
        duration_us = duration.as_micros() as u64,
        total_income = %result.total_income.normalize(),
        "Calculation completed"
    );

    let display = DisplayTotals::from_result(&result);
    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        base_salary,
        result,
        display,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /employees endpoint.
///
/// Returns the employee directory so a caller can render the selection list
/// and seed the base salary input.
async fn employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().employees().to_vec())
}

/// Handler for GET /rates endpoint.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().rates().clone())
}
