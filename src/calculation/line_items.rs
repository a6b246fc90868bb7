//! Attendance line item calculation.
//!
//! This module turns the five caller-supplied attendance figures into the
//! six pay lines of a monthly calculation and their gross total. The meal
//! allowance is the sixth, system-derived line: it keys off days worked and
//! is never independently editable by the caller.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AuditStep, PayCategory, PayLine, PayRates};

/// The result of the line item calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct LineItemsResult {
    /// The six pay lines in fixed category order.
    pub pay_lines: Vec<PayLine>,
    /// Gross total income, summed in the fixed line order.
    pub total_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the six attendance line items and the gross total.
///
/// Line items, in the fixed order they are emitted and summed:
///
/// 1. days worked × daily rate
/// 2. days worked × meal allowance per day (system-derived)
/// 3. leave days × (daily rate + meal allowance per day)
/// 4. weekday overtime hours × weekday overtime rate
/// 5. Sunday overtime hours × Sunday overtime rate
/// 6. night-shift hours × night-shift rate
///
/// Summation order is fixed for reproducibility; with exact decimal
/// arithmetic it also matters for nothing else.
///
/// # Arguments
///
/// * `attendance` - The attendance figures for the month
/// * `pay_rates` - The rates derived from the adjusted base salary
/// * `meal_allowance_per_day` - The configured per-day meal subsidy
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_line_items(
    attendance: &AttendanceRecord,
    pay_rates: &PayRates,
    meal_allowance_per_day: Decimal,
    step_number: u32,
) -> LineItemsResult {
    let leave_day_unit_rate = pay_rates.daily_rate + meal_allowance_per_day;

    let pay_lines = vec![
        PayLine {
            category: PayCategory::DaysWorked,
            units: attendance.days_worked,
            rate: pay_rates.daily_rate,
            amount: attendance.days_worked * pay_rates.daily_rate,
        },
        PayLine {
            category: PayCategory::MealAllowance,
            units: attendance.days_worked,
            rate: meal_allowance_per_day,
            amount: attendance.days_worked * meal_allowance_per_day,
        },
        PayLine {
            category: PayCategory::LeaveDays,
            units: attendance.leave_days,
            rate: leave_day_unit_rate,
            amount: attendance.leave_days * leave_day_unit_rate,
        },
        PayLine {
            category: PayCategory::OvertimeWeekday,
            units: attendance.ot_weekday_hours,
            rate: pay_rates.ot_weekday_rate,
            amount: attendance.ot_weekday_hours * pay_rates.ot_weekday_rate,
        },
        PayLine {
            category: PayCategory::OvertimeSunday,
            units: attendance.ot_sunday_hours,
            rate: pay_rates.ot_sunday_rate,
            amount: attendance.ot_sunday_hours * pay_rates.ot_sunday_rate,
        },
        PayLine {
            category: PayCategory::NightShift,
            units: attendance.night_shift_hours,
            rate: pay_rates.night_shift_rate,
            amount: attendance.night_shift_hours * pay_rates.night_shift_rate,
        },
    ];

    let mut total_income = Decimal::ZERO;
    for line in &pay_lines {
        total_income += line.amount;
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "line_items".to_string(),
        rule_name: "Attendance Line Items".to_string(),
        input: serde_json::json!({
            "days_worked": attendance.days_worked.normalize().to_string(),
            "leave_days": attendance.leave_days.normalize().to_string(),
            "ot_weekday_hours": attendance.ot_weekday_hours.normalize().to_string(),
            "ot_sunday_hours": attendance.ot_sunday_hours.normalize().to_string(),
            "night_shift_hours": attendance.night_shift_hours.normalize().to_string(),
            "leave_day_unit_rate": leave_day_unit_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amounts": pay_lines
                .iter()
                .map(|line| line.amount.normalize().to_string())
                .collect::<Vec<_>>(),
            "total_income": total_income.normalize().to_string()
        }),
        reasoning: format!(
            "Summed {} line items in fixed order: total income {}",
            pay_lines.len(),
            total_income.normalize()
        ),
    };

    LineItemsResult {
        pay_lines,
        total_income,
        audit_step,
    }
}
