//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for determining a
//! monthly net salary: daily rate derivation from the adjusted base salary,
//! weekday and Sunday overtime hourly rates, the night-shift rate, the
//! mandatory deductions, the six attendance line items, and the [`compute`]
//! entry point that assembles the full [`crate::models::CalculationResult`].

mod compute;
mod daily_rate;
mod deductions;
mod line_items;
mod night_shift;
mod overtime_rates;

pub use compute::compute;
pub use daily_rate::{DailyRateResult, calculate_daily_rate};
pub use deductions::{DeductionsResult, calculate_deductions};
pub use line_items::{LineItemsResult, calculate_line_items};
pub use night_shift::{NightShiftRateResult, calculate_night_shift_rate};
pub use overtime_rates::{HOURS_PER_DAY, OvertimeRatesResult, calculate_overtime_rates};
