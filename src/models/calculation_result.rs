//! Calculation result models for the Payroll Calculation Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a monthly pay calculation:
//! derived rates, line items, deductions, totals and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance category a pay line belongs to.
///
/// Each monthly calculation produces exactly one pay line per category, in
/// the declaration order below.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::DaysWorked;
/// assert_eq!(format!("{:?}", category), "DaysWorked");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Ordinary days worked, paid at the daily rate.
    DaysWorked,
    /// Meal allowance, derived from days worked (not caller-editable).
    MealAllowance,
    /// Paid leave days, paid at daily rate plus meal allowance.
    LeaveDays,
    /// Weekday overtime hours.
    OvertimeWeekday,
    /// Sunday/holiday overtime hours.
    OvertimeSunday,
    /// Night-shift hours.
    NightShift,
}

/// A single line item in a monthly pay calculation.
///
/// Each pay line captures the units recorded for one attendance category,
/// the applicable unit rate, and the resulting amount.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayCategory, PayLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay_line = PayLine {
///     category: PayCategory::DaysWorked,
///     units: Decimal::from_str("22").unwrap(),
///     rate: Decimal::from_str("297840.23").unwrap(),
///     amount: Decimal::from_str("6552485.06").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The attendance category of this pay line.
    pub category: PayCategory,
    /// The units recorded (days or hours, possibly fractional).
    pub units: Decimal,
    /// The rate per unit.
    pub rate: Decimal,
    /// The total amount for this pay line (units * rate).
    pub amount: Decimal,
}

/// The four rates derived from the adjusted base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// The daily rate (adjusted base / working days).
    pub daily_rate: Decimal,
    /// The weekday overtime hourly rate.
    pub ot_weekday_rate: Decimal,
    /// The Sunday/holiday overtime hourly rate.
    pub ot_sunday_rate: Decimal,
    /// The night-shift hourly-equivalent rate.
    pub night_shift_rate: Decimal,
}

/// The mandatory deductions withheld from the adjusted base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Mandatory insurance withholding.
    pub insurance: Decimal,
    /// Union dues withholding.
    pub union_fee: Decimal,
}

impl Deductions {
    /// Returns the combined deduction amount.
    pub fn total(&self) -> Decimal {
        self.insurance + self.union_fee
    }
}

/// A single step in the audit trace recording a calculation rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate unusual inputs that don't prevent calculation but may
/// require attention, such as a base salary below the salary subtractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every rule applied during the calculation for transparency. The
/// trace is fully determined by the inputs, so identical inputs produce
/// identical traces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a monthly pay calculation.
///
/// This struct captures all outputs from the engine: the four derived rates,
/// the six pay lines (one per attendance category, fixed order), the two
/// deductions, the gross total and the raw net salary.
///
/// The raw `net_salary` always reflects true arithmetic; the zero-substitution
/// applied when no income was recorded is a presentation concern handled by
/// the API layer, never here.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, CalculationResult, Deductions, PayRates};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     rates: PayRates {
///         daily_rate: Decimal::ZERO,
///         ot_weekday_rate: Decimal::ZERO,
///         ot_sunday_rate: Decimal::ZERO,
///         night_shift_rate: Decimal::ZERO,
///     },
///     deductions: Deductions {
///         insurance: Decimal::ZERO,
///         union_fee: Decimal::ZERO,
///     },
///     pay_lines: vec![],
///     total_income: Decimal::ZERO,
///     net_salary: Decimal::ZERO,
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The rates derived from the adjusted base salary.
    pub rates: PayRates,
    /// The deductions withheld from the adjusted base salary.
    pub deductions: Deductions,
    /// The six pay lines, one per attendance category, in fixed order.
    pub pay_lines: Vec<PayLine>,
    /// Gross total income (sum of all pay line amounts).
    pub total_income: Decimal,
    /// Net salary (total income minus deductions), unclamped.
    pub net_salary: Decimal,
    /// Complete audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the amount of the pay line for the given category, if present.
    pub fn line_amount(&self, category: PayCategory) -> Option<Decimal> {
        self.pay_lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
    }
}
