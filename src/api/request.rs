//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint, including the lenient numeric coercion applied to raw form
//! input: attendance figures may arrive as numbers, numeric strings or empty
//! strings, and anything unparseable is normalized to 0 before the engine is
//! invoked. That normalization is deliberately a caller-side concern; the
//! engine itself only ever sees clean numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::models::AttendanceRecord;

/// Request body for the `/calculate` endpoint.
///
/// At least one of `employee_id` and `base_salary` must be present: the
/// employee's directory default seeds the base salary, and an explicit
/// `base_salary` overrides it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to look up a default base salary for.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Explicit base salary override, in whole đồng. Accepts a number or a
    /// string; grouping separators in strings are ignored.
    #[serde(default, deserialize_with = "lenient_base_salary")]
    pub base_salary: Option<Decimal>,
    /// The attendance figures for the month. Missing fields default to 0.
    #[serde(default)]
    pub attendance: AttendanceRequest,
}

/// Attendance figures in a calculation request.
///
/// Every field is coerced leniently: numbers and numeric strings are parsed,
/// while empty, null or non-numeric values become 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Ordinary days worked this month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub days_worked: Decimal,
    /// Paid leave days taken this month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub leave_days: Decimal,
    /// Weekday overtime hours.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub ot_weekday_hours: Decimal,
    /// Sunday/holiday overtime hours.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub ot_sunday_hours: Decimal,
    /// Night-shift hours.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub night_shift_hours: Decimal,
}

impl From<AttendanceRequest> for AttendanceRecord {
    fn from(request: AttendanceRequest) -> Self {
        AttendanceRecord {
            days_worked: request.days_worked,
            leave_days: request.leave_days,
            ot_weekday_hours: request.ot_weekday_hours,
            ot_sunday_hours: request.ot_sunday_hours,
            night_shift_hours: request.night_shift_hours,
        }
    }
}

/// Coerces a raw JSON value to a Decimal, defaulting to 0.
fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => {
            Decimal::from_str(&number.to_string()).unwrap_or(Decimal::ZERO)
        }
        Value::String(text) => Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

fn lenient_base_salary<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            // Form input may carry grouping separators ("8.752.485"); keep
            // digits only, unparseable input becomes 0
            let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
            Ok(Some(
                Decimal::from_str(&digits).unwrap_or(Decimal::ZERO),
            ))
        }
        other => Ok(Some(coerce_decimal(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_numeric_attendance() {
        let json = r#"{
            "employee_id": "manh",
            "attendance": {
                "days_worked": 22,
                "leave_days": 0.5,
                "ot_weekday_hours": 3.25
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_deref(), Some("manh"));
        assert_eq!(request.attendance.days_worked, dec("22"));
        assert_eq!(request.attendance.leave_days, dec("0.5"));
        assert_eq!(request.attendance.ot_weekday_hours, dec("3.25"));
        assert_eq!(request.attendance.ot_sunday_hours, Decimal::ZERO);
    }

    #[test]
    fn test_string_attendance_is_parsed() {
        let json = r#"{ "attendance": { "days_worked": "21.5" } }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.attendance.days_worked, dec("21.5"));
    }

    #[test]
    fn test_empty_and_garbage_strings_coerce_to_zero() {
        let json = r#"{
            "attendance": {
                "days_worked": "",
                "leave_days": "abc",
                "ot_sunday_hours": null
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.attendance.days_worked, Decimal::ZERO);
        assert_eq!(request.attendance.leave_days, Decimal::ZERO);
        assert_eq!(request.attendance.ot_sunday_hours, Decimal::ZERO);
    }

    #[test]
    fn test_missing_attendance_defaults_to_all_zero() {
        let json = r#"{ "employee_id": "loan" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        let record: AttendanceRecord = request.attendance.into();
        assert_eq!(record, AttendanceRecord::default());
    }

    #[test]
    fn test_base_salary_as_number() {
        let json = r#"{ "base_salary": 8752485 }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, Some(dec("8752485")));
    }

    #[test]
    fn test_base_salary_string_ignores_grouping() {
        let json = r#"{ "base_salary": "8.752.485" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, Some(dec("8752485")));
    }

    #[test]
    fn test_base_salary_garbage_string_coerces_to_zero() {
        let json = r#"{ "base_salary": "n/a" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, Some(Decimal::ZERO));
    }

    #[test]
    fn test_base_salary_absent_stays_none() {
        let json = r#"{ "employee_id": "manh" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, None);
    }

    #[test]
    fn test_base_salary_null_stays_none() {
        let json = r#"{ "employee_id": "manh", "base_salary": null }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, None);
    }
}
