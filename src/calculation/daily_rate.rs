//! Daily rate derivation.
//!
//! This module derives the adjusted base salary and the daily rate, the
//! value every other rate in the calculation is built from.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::AuditStep;

/// The result of the daily rate derivation, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyRateResult {
    /// The base salary after subtracting the salary subtractor.
    pub adjusted_base: Decimal,
    /// The daily rate (adjusted base / working days).
    pub daily_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the adjusted base salary and the daily rate.
///
/// The adjusted base is `base_salary - salary_subtractor`, with no floor at
/// zero: a base salary smaller than the subtractor yields a negative
/// adjusted base and consequently negative rates. That is accepted
/// pass-through behavior, not an error; the caller surfaces it as an audit
/// warning.
///
/// The daily rate is the adjusted base divided by the configured working
/// days. `working_days > 0` is guaranteed by config validation at load time,
/// so the division is always defined.
///
/// # Arguments
///
/// * `base_salary` - The nominal monthly base salary
/// * `rates` - The rate constants
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_daily_rate;
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
/// let result = calculate_daily_rate(Decimal::from_str("8752485").unwrap(), &rates, 1);
/// assert_eq!(result.adjusted_base, Decimal::from_str("6552485").unwrap());
/// // 6552485 / 22 ≈ 297840.23
/// assert_eq!(result.daily_rate.round_dp(2), Decimal::from_str("297840.23").unwrap());
/// ```
pub fn calculate_daily_rate(
    base_salary: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> DailyRateResult {
    let adjusted_base = base_salary - rates.salary_subtractor;
    let daily_rate = adjusted_base / rates.working_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate Derivation".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "salary_subtractor": rates.salary_subtractor.normalize().to_string(),
            "working_days": rates.working_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_base": adjusted_base.normalize().to_string(),
            "daily_rate": daily_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Daily rate: ({} − {}) / {} = {}",
            base_salary.normalize(),
            rates.salary_subtractor.normalize(),
            rates.working_days.normalize(),
            daily_rate.normalize()
        ),
    };

    DailyRateResult {
        adjusted_base,
        daily_rate,
        audit_step,
    }
}
