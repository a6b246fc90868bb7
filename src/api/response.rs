//! Response types for the Payroll Calculation Engine API.
//!
//! This module defines the calculation response envelope, the display totals
//! that apply the presentation-side zero-substitution rule, and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::format_currency;
use crate::models::CalculationResult;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation was run for, if one was selected.
    pub employee_id: Option<String>,
    /// The base salary the calculation was run with.
    pub base_salary: Decimal,
    /// The raw calculation result (true arithmetic, never substituted).
    pub result: CalculationResult,
    /// Formatted totals with the display policy applied.
    pub display: DisplayTotals,
}

/// Presentation totals, formatted in the Vietnamese currency convention.
///
/// This is where the display policy lives: when no income was recorded for
/// the month, the presented net salary is exactly `0 đ` even though the raw
/// `net_salary` is negative by the deductions. The raw result is left
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayTotals {
    /// Gross total income, formatted.
    pub total_income: String,
    /// Combined deductions, formatted.
    pub total_deductions: String,
    /// Net salary with the zero-substitution rule applied, formatted.
    pub net_salary: String,
    /// Whether any income was recorded for the month.
    pub has_income: bool,
}

impl DisplayTotals {
    /// Builds display totals from a raw calculation result.
    pub fn from_result(result: &CalculationResult) -> Self {
        let has_income = result.total_income > Decimal::ZERO;
        let presented_net = if has_income {
            result.net_salary
        } else {
            Decimal::ZERO
        };

        Self {
            total_income: format_currency(result.total_income),
            total_deductions: format_currency(result.deductions.total()),
            net_salary: format_currency(presented_net),
            has_income,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("The employee id '{}' is not in the directory", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRate { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid rate configuration field '{}'", field),
                    message,
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::employee_not_found(&id),
            },
        }
    }
}
