//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct holding the five
//! attendance figures a monthly calculation is driven by. The record is
//! owned by the caller and reread on every calculation; the engine keeps
//! no state between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance figures for one month.
///
/// Every field may be fractional (e.g., half a day of leave, 1.5 hours of
/// overtime). Fields are expected to be non-negative; the engine does not
/// enforce an upper bound, sane ranges are a caller concern.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceRecord {
///     days_worked: Decimal::from(22),
///     ..AttendanceRecord::default()
/// };
/// assert_eq!(attendance.leave_days, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Ordinary days worked this month.
    #[serde(default)]
    pub days_worked: Decimal,
    /// Paid leave days taken this month.
    #[serde(default)]
    pub leave_days: Decimal,
    /// Weekday overtime hours.
    #[serde(default)]
    pub ot_weekday_hours: Decimal,
    /// Sunday/holiday overtime hours.
    #[serde(default)]
    pub ot_sunday_hours: Decimal,
    /// Night-shift hours.
    #[serde(default)]
    pub night_shift_hours: Decimal,
}
