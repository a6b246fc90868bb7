//! Property tests for the calculation engine.
//!
//! These exercise the engine's algebraic guarantees over a wide input range:
//! determinism, the total/net identities, linearity in days worked, and the
//! all-zero-attendance invariant.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::calculation::compute;
use payroll_engine::config::RateConfig;
use payroll_engine::models::AttendanceRecord;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn default_rates() -> RateConfig {
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

/// Attendance figures in tenths, up to 31.0 days / 744.0 hours.
fn attendance_strategy() -> impl Strategy<Value = AttendanceRecord> {
    (
        0u32..=310,
        0u32..=310,
        0u32..=7440,
        0u32..=7440,
        0u32..=7440,
    )
        .prop_map(|(days, leave, ot_weekday, ot_sunday, night)| AttendanceRecord {
            days_worked: Decimal::new(days as i64, 1),
            leave_days: Decimal::new(leave as i64, 1),
            ot_weekday_hours: Decimal::new(ot_weekday as i64, 1),
            ot_sunday_hours: Decimal::new(ot_sunday as i64, 1),
            night_shift_hours: Decimal::new(night as i64, 1),
        })
}

/// Base salaries from zero (below the subtractor) up to 100M đồng.
fn base_salary_strategy() -> impl Strategy<Value = Decimal> {
    (0u64..=100_000_000).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn identical_inputs_yield_identical_results(
        base_salary in base_salary_strategy(),
        attendance in attendance_strategy(),
    ) {
        let rates = default_rates();
        let first = compute(base_salary, &attendance, &rates);
        let second = compute(base_salary, &attendance, &rates);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_income_is_sum_of_pay_lines(
        base_salary in base_salary_strategy(),
        attendance in attendance_strategy(),
    ) {
        let result = compute(base_salary, &attendance, &default_rates());
        let summed: Decimal = result.pay_lines.iter().map(|line| line.amount).sum();
        prop_assert_eq!(result.total_income, summed);
        prop_assert_eq!(result.pay_lines.len(), 6);
    }

    #[test]
    fn net_salary_is_total_minus_deductions(
        base_salary in base_salary_strategy(),
        attendance in attendance_strategy(),
    ) {
        let result = compute(base_salary, &attendance, &default_rates());
        prop_assert_eq!(
            result.net_salary,
            result.total_income - result.deductions.insurance - result.deductions.union_fee
        );
    }

    #[test]
    fn zero_attendance_zeroes_every_line(base_salary in base_salary_strategy()) {
        let result = compute(base_salary, &AttendanceRecord::default(), &default_rates());
        for line in &result.pay_lines {
            prop_assert_eq!(line.amount, Decimal::ZERO);
        }
        prop_assert_eq!(result.total_income, Decimal::ZERO);
        prop_assert_eq!(result.net_salary, -result.deductions.total());
    }

    #[test]
    fn worked_and_meal_amounts_scale_with_days_worked(
        base_salary in base_salary_strategy(),
        days in 0u32..=100,
    ) {
        let rates = default_rates();
        let single = AttendanceRecord {
            days_worked: Decimal::new(days as i64, 1),
            ..AttendanceRecord::default()
        };
        let doubled = AttendanceRecord {
            days_worked: Decimal::new(days as i64 * 2, 1),
            ..AttendanceRecord::default()
        };

        let single_result = compute(base_salary, &single, &rates);
        let doubled_result = compute(base_salary, &doubled, &rates);

        // The daily rate repeats in decimal, so compare at 6 dp
        prop_assert_eq!(
            doubled_result.pay_lines[0].amount.round_dp(6),
            (single_result.pay_lines[0].amount * Decimal::TWO).round_dp(6)
        );
        prop_assert_eq!(
            doubled_result.pay_lines[1].amount,
            single_result.pay_lines[1].amount * Decimal::TWO
        );
    }

    #[test]
    fn sunday_rate_relates_to_weekday_rate_by_multiplier_ratio(
        base_salary in 2_200_001u64..=100_000_000,
    ) {
        let result = compute(
            Decimal::from(base_salary),
            &AttendanceRecord::default(),
            &default_rates(),
        );
        prop_assert_eq!(
            (result.rates.ot_sunday_rate / result.rates.ot_weekday_rate).round_dp(10),
            (dec("2") / dec("1.5")).round_dp(10)
        );
    }
}
