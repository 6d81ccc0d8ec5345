//! Presentation helpers
//!
//! Amounts are shown in Uruguayan pesos (es-UY) and dates in the es-ES
//! numeric layout. Dates are handled as plain calendar dates, so no time
//! zone can shift the rendered day.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown when an amount is missing.
pub const CURRENCY_ZERO: &str = "$ 0,00";
/// Shown when a date is missing or empty.
pub const DATE_PLACEHOLDER: &str = "-";
/// Shown when a date string cannot be read.
pub const DATE_INVALID: &str = "Invalid Date";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Number layout of a currency locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    /// `es-UY`, `UYU`.
    pub const UYU: CurrencyFormat = CurrencyFormat {
        symbol: "$",
        group_separator: '.',
        decimal_separator: ',',
        fraction_digits: 2,
    };

    pub fn format(&self, value: Decimal) -> String {
        let rounded = value
            .abs()
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = value.is_sign_negative() && !rounded.is_zero();

        let trunc = rounded.trunc();
        let integer = group_digits(&trunc.to_string(), self.group_separator);

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push(' ');
        out.push_str(&integer);

        if self.fraction_digits > 0 {
            let mut fraction = (rounded - trunc).round_dp(self.fraction_digits);
            fraction.rescale(self.fraction_digits);
            // "0.50" -> "50"
            let digits = fraction.to_string();
            let digits = digits.split('.').nth(1).unwrap_or("");
            out.push(self.decimal_separator);
            out.push_str(digits);
        }
        out
    }
}

/// Inserts `separator` every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Formats an amount as Uruguayan pesos; `None` renders as `$ 0,00`.
pub fn format_currency(value: Option<Decimal>) -> String {
    match value {
        None => CURRENCY_ZERO.to_string(),
        Some(v) => CurrencyFormat::UYU.format(v),
    }
}

/// Formats an integer with `.` thousands grouping (odometer readings).
pub fn format_integer(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string(), '.');
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Renders a `YYYY-MM-DD` string as `DD/MM/YYYY`.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None | Some("") => DATE_PLACEHOLDER.to_string(),
        Some(s) => match NaiveDate::parse_from_str(s, DATE_INPUT_FORMAT) {
            Ok(date) => format_naive_date(date),
            Err(_) => DATE_INVALID.to_string(),
        },
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(DATE_OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_missing_is_zero() {
        assert_eq!(format_currency(None), "$ 0,00");
        assert_eq!(format_currency(Some(Decimal::ZERO)), CURRENCY_ZERO);
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(Some(Decimal::new(12345, 1))), "$ 1.234,50");
        assert_eq!(format_currency(Some(dec("999.99"))), "$ 999,99");
        assert_eq!(format_currency(Some(dec("1000"))), "$ 1.000,00");
        assert_eq!(format_currency(Some(dec("1234567.891"))), "$ 1.234.567,89");
    }

    #[test]
    fn test_currency_rounding_and_sign() {
        assert_eq!(format_currency(Some(dec("0.005"))), "$ 0,01");
        assert_eq!(format_currency(Some(dec("2.994"))), "$ 2,99");
        assert_eq!(format_currency(Some(dec("9.999"))), "$ 10,00");
        assert_eq!(format_currency(Some(dec("-2500.5"))), "-$ 2.500,50");
        assert_eq!(format_currency(Some(dec("-0.001"))), "$ 0,00");
    }

    #[test]
    fn test_integer_grouping() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(150), "150");
        assert_eq!(format_integer(250000), "250.000");
        assert_eq!(format_integer(-1234567), "-1.234.567");
    }

    #[test]
    fn test_date_placeholder() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
    }

    #[test]
    fn test_date_day_month_year() {
        assert_eq!(format_date(Some("2024-01-05")), "05/01/2024");
        assert_eq!(format_date(Some("1999-12-31")), "31/12/1999");
    }

    #[test]
    fn test_date_invalid() {
        assert_eq!(format_date(Some("2024-13-01")), DATE_INVALID);
        assert_eq!(format_date(Some("ayer")), DATE_INVALID);
    }
}
