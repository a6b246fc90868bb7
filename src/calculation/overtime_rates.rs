//! Overtime hourly rate derivation.
//!
//! This module derives the weekday and Sunday overtime hourly rates from the
//! daily rate. Both start from the same base hourly rate (daily rate divided
//! by the hours in a standard working day) and differ only in multiplier.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::AuditStep;

/// Hours in a standard working day, the divisor for the base hourly rate.
pub const HOURS_PER_DAY: u32 = 8;

/// The result of the overtime rate derivation, including the audit step.
#[derive(Debug, Clone)]
pub struct OvertimeRatesResult {
    /// The weekday overtime hourly rate.
    pub ot_weekday_rate: Decimal,
    /// The Sunday/holiday overtime hourly rate.
    pub ot_sunday_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the weekday and Sunday overtime hourly rates.
///
/// The base hourly rate is `daily_rate / 8`; the weekday rate applies the
/// weekday multiplier and the Sunday rate applies the Sunday multiplier, so
/// for the default multipliers (1.5 weekday, 2 Sunday) the two rates always
/// stand in the ratio 2 : 1.5 regardless of the daily rate.
///
/// # Arguments
///
/// * `daily_rate` - The daily rate derived from the adjusted base salary
/// * `rates` - The rate constants
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_rates;
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
/// let result = calculate_overtime_rates(Decimal::from_str("297840").unwrap(), &rates, 2);
/// // 297840 / 8 × 1.5 = 55845
/// assert_eq!(result.ot_weekday_rate, Decimal::from_str("55845").unwrap());
/// // 297840 / 8 × 2 = 74460
/// assert_eq!(result.ot_sunday_rate, Decimal::from_str("74460").unwrap());
/// ```
pub fn calculate_overtime_rates(
    daily_rate: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> OvertimeRatesResult {
    let base_hourly_rate = daily_rate / Decimal::from(HOURS_PER_DAY);
    let ot_weekday_rate = base_hourly_rate * rates.ot_weekday_multiplier;
    let ot_sunday_rate = base_hourly_rate * rates.ot_sunday_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_rates".to_string(),
        rule_name: "Overtime Hourly Rates".to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "hours_per_day": HOURS_PER_DAY,
            "ot_weekday_multiplier": rates.ot_weekday_multiplier.normalize().to_string(),
            "ot_sunday_multiplier": rates.ot_sunday_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_hourly_rate": base_hourly_rate.normalize().to_string(),
            "ot_weekday_rate": ot_weekday_rate.normalize().to_string(),
            "ot_sunday_rate": ot_sunday_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Overtime rates: {} / {} = {} base hourly, × {} weekday, × {} Sunday",
            daily_rate.normalize(),
            HOURS_PER_DAY,
            base_hourly_rate.normalize(),
            rates.ot_weekday_multiplier.normalize(),
            rates.ot_sunday_multiplier.normalize()
        ),
    };

    OvertimeRatesResult {
        ot_weekday_rate,
        ot_sunday_rate,
        audit_step,
    }
}
