//! Locale-specific number formatting for presentation.
//!
//! The engine emits raw numeric values only; formatting them for display is
//! a presentation concern. This module implements the single supported
//! convention: Vietnamese grouping (`.` thousands separators) with amounts
//! rounded to whole đồng and suffixed with ` đ`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a number with Vietnamese thousands grouping.
///
/// The value is rounded half-away-from-zero to a whole number and grouped
/// in threes with `.` separators.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_number;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_number(Decimal::from_str("8752485").unwrap()), "8.752.485");
/// assert_eq!(format_number(Decimal::from_str("-32762.43").unwrap()), "-32.762");
/// ```
pub fn format_number(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a monetary amount as whole đồng with the currency suffix.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("8031711.65").unwrap()), "8.031.712 đ");
/// assert_eq!(format_currency(Decimal::ZERO), "0 đ");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{} đ", format_number(value))
}
