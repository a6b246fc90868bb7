//! The monthly calculation entry point.
//!
//! This module provides [`compute`], the pure function mapping a base
//! salary, an attendance record and the rate constants to a complete
//! [`CalculationResult`].

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{
    AttendanceRecord, AuditTrace, AuditWarning, CalculationResult, PayRates,
};

use super::{
    calculate_daily_rate, calculate_deductions, calculate_line_items, calculate_night_shift_rate,
    calculate_overtime_rates,
};

/// Computes a monthly pay calculation.
///
/// Pure, total and deterministic: no I/O, no side effects, no state between
/// calls, and identical inputs always yield identical results. It may be
/// invoked concurrently from any number of callers with no coordination.
///
/// The steps run in a fixed order:
///
/// 1. daily rate (and adjusted base) from the base salary
/// 2. weekday and Sunday overtime hourly rates
/// 3. night-shift rate
/// 4. insurance and union fee deductions
/// 5. the six attendance line items and their gross total
///
/// The returned `net_salary` is raw arithmetic (`total_income` minus the
/// deductions) and is never clamped; a base salary below the salary
/// subtractor produces negative rates and amounts plus a
/// `NEGATIVE_ADJUSTED_BASE` audit warning. Substituting zero for the net
/// when no income was recorded is the presentation layer's job.
///
/// # Arguments
///
/// * `base_salary` - The nominal monthly base salary
/// * `attendance` - The attendance figures for the month
/// * `rates` - The rate constants (validated at load time, `working_days > 0`)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute;
/// use payroll_engine::models::AttendanceRecord;
/// use payroll_engine::config::RateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateConfig {
///     salary_subtractor: Decimal::from_str("2200000").unwrap(),
///     working_days: Decimal::from_str("22").unwrap(),
///     meal_allowance_per_day: Decimal::from_str("100000").unwrap(),
///     insurance_rate: Decimal::from_str("0.105").unwrap(),
///     union_rate: Decimal::from_str("0.005").unwrap(),
///     night_shift_bonus_rate: Decimal::from_str("0.3").unwrap(),
///     ot_weekday_multiplier: Decimal::from_str("1.5").unwrap(),
///     ot_sunday_multiplier: Decimal::from_str("2").unwrap(),
/// };
///
/// let attendance = AttendanceRecord {
///     days_worked: Decimal::from(22),
///     ..AttendanceRecord::default()
/// };
///
/// let result = compute(Decimal::from_str("8752485").unwrap(), &attendance, &rates);
/// assert_eq!(result.total_income.round_dp(2), Decimal::from_str("8752485.00").unwrap());
/// assert_eq!(result.net_salary.round_dp(2), Decimal::from_str("8031711.65").unwrap());
/// ```
pub fn compute(
    base_salary: Decimal,
    attendance: &AttendanceRecord,
    rates: &RateConfig,
) -> CalculationResult {
    let daily = calculate_daily_rate(base_salary, rates, 1);
    let overtime = calculate_overtime_rates(daily.daily_rate, rates, 2);
    let night_shift = calculate_night_shift_rate(daily.daily_rate, rates, 3);
    let deductions = calculate_deductions(daily.adjusted_base, rates, 4);

    let pay_rates = PayRates {
        daily_rate: daily.daily_rate,
        ot_weekday_rate: overtime.ot_weekday_rate,
        ot_sunday_rate: overtime.ot_sunday_rate,
        night_shift_rate: night_shift.night_shift_rate,
    };

    let line_items = calculate_line_items(attendance, &pay_rates, rates.meal_allowance_per_day, 5);

    let net_salary = line_items.total_income - deductions.deductions.total();

    let mut warnings = Vec::new();
    if daily.adjusted_base < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_ADJUSTED_BASE".to_string(),
            message: format!(
                "Base salary {} is below the salary subtractor {}; rates and amounts are negative",
                base_salary.normalize(),
                rates.salary_subtractor.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    let audit_trace = AuditTrace {
        steps: vec![
            daily.audit_step,
            overtime.audit_step,
            night_shift.audit_step,
            deductions.audit_step,
            line_items.audit_step,
        ],
        warnings,
    };

    CalculationResult {
        rates: pay_rates,
        deductions: deductions.deductions,
        pay_lines: line_items.pay_lines,
        total_income: line_items.total_income,
        net_salary,
        audit_trace,
    }
}
