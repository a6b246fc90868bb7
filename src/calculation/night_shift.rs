//! Night-shift rate derivation.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::AuditStep;

/// The result of the night-shift rate derivation, including the audit step.
#[derive(Debug, Clone)]
pub struct NightShiftRateResult {
    /// The night-shift hourly-equivalent rate.
    pub night_shift_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the night-shift hourly-equivalent rate.
///
/// Unlike the overtime rates, the night-shift rate is a multiplier on the
/// whole daily rate, not on the base hourly rate: `daily_rate × bonus_rate`.
///
/// # Arguments
///
/// * `daily_rate` - The daily rate derived from the adjusted base salary
/// * `rates` - The rate constants
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_night_shift_rate(
    daily_rate: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> NightShiftRateResult {
    let night_shift_rate = daily_rate * rates.night_shift_bonus_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_shift_rate".to_string(),
        rule_name: "Night-Shift Rate".to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "night_shift_bonus_rate": rates.night_shift_bonus_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "night_shift_rate": night_shift_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Night-shift rate: {} × {} = {}",
            daily_rate.normalize(),
            rates.night_shift_bonus_rate.normalize(),
            night_shift_rate.normalize()
        ),
    };

    NightShiftRateResult {
        night_shift_rate,
        audit_step,
    }
}
