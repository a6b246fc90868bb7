//! Mandatory deduction calculation.
//!
//! This module calculates the two deductions withheld from a monthly salary:
//! mandatory insurance and union dues. Both are fractions of the adjusted
//! base salary, independent of the attendance recorded for the month.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{AuditStep, Deductions};

/// The result of the deduction calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// The insurance and union fee amounts.
    pub deductions: Deductions,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the insurance and union fee deductions.
///
/// Both deductions key off the adjusted base salary, not the income actually
/// earned: an all-zero attendance month still carries nonzero deductions for
/// a nonzero adjusted base. The presentation layer's zero-substitution rule
/// exists precisely because of this.
///
/// # Arguments
///
/// * `adjusted_base` - The base salary after subtracting the salary subtractor
/// * `rates` - The rate constants
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
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
/// let result = calculate_deductions(Decimal::from_str("6552485").unwrap(), &rates, 4);
/// // 6552485 × 0.105 = 688010.925
/// assert_eq!(result.deductions.insurance, Decimal::from_str("688010.925").unwrap());
/// // 6552485 × 0.005 = 32762.425
/// assert_eq!(result.deductions.union_fee, Decimal::from_str("32762.425").unwrap());
/// ```
pub fn calculate_deductions(
    adjusted_base: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> DeductionsResult {
    let insurance = adjusted_base * rates.insurance_rate;
    let union_fee = adjusted_base * rates.union_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "deductions".to_string(),
        rule_name: "Insurance and Union Fee Deductions".to_string(),
        input: serde_json::json!({
            "adjusted_base": adjusted_base.normalize().to_string(),
            "insurance_rate": rates.insurance_rate.normalize().to_string(),
            "union_rate": rates.union_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "insurance": insurance.normalize().to_string(),
            "union_fee": union_fee.normalize().to_string()
        }),
        reasoning: format!(
            "Deductions: {} × {} = {} insurance, {} × {} = {} union fee",
            adjusted_base.normalize(),
            rates.insurance_rate.normalize(),
            insurance.normalize(),
            adjusted_base.normalize(),
            rates.union_rate.normalize(),
            union_fee.normalize()
        ),
    };

    DeductionsResult {
        deductions: Deductions {
            insurance,
            union_fee,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_rates() -> RateConfig {
        RateConfig {
            salary_subtractor: dec("2200000"),
            working_days: dec("22"),
            meal_allowance_per_day: dec("100000"),
            insurance_rate: dec("0.105"),
            union_rate: dec("0.005"),
            night_shift_bonus_rate: dec("0.3"),
            ot_weekday_multiplier: dec("1.5"),
            ot_sunday_multiplier: dec("2"),
        }
    }

    /// DE-001: reference scenario amounts
    #[test]
    fn test_reference_scenario() {
        let result = calculate_deductions(dec("6552485"), &create_test_rates(), 4);

        assert_eq!(result.deductions.insurance, dec("688010.925"));
        assert_eq!(result.deductions.union_fee, dec("32762.425"));
        assert_eq!(result.deductions.total(), dec("720773.350"));
    }

    /// DE-002: zero adjusted base carries zero deductions
    #[test]
    fn test_zero_adjusted_base() {
        let result = calculate_deductions(Decimal::ZERO, &create_test_rates(), 4);

        assert_eq!(result.deductions.insurance, Decimal::ZERO);
        assert_eq!(result.deductions.union_fee, Decimal::ZERO);
    }

    /// DE-003: negative adjusted base yields negative deductions, unclamped
    #[test]
    fn test_negative_adjusted_base_passes_through() {
        let result = calculate_deductions(dec("-200000"), &create_test_rates(), 4);

        assert_eq!(result.deductions.insurance, dec("-21000.000"));
        assert_eq!(result.deductions.union_fee, dec("-1000.000"));
    }

    #[test]
    fn test_audit_step_records_rates() {
        let result = calculate_deductions(dec("6552485"), &create_test_rates(), 6);

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "deductions");
        assert_eq!(
            result.audit_step.input["insurance_rate"].as_str().unwrap(),
            "0.105"
        );
        assert!(result.audit_step.reasoning.contains("union fee"));
    }
}
