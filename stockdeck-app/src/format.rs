//! Display formatting helpers
//!
//! en-US currency and timestamp rendering for the dashboard views.

use chrono::{DateTime, Datelike, Timelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as US dollars: `"$1,234.56"`
///
/// Always two decimal places; negative amounts render as `"-$1,234.56"`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    // split into whole dollars and cents without multiplying the whole
    // amount, which would overflow near Decimal::MAX
    let whole = rounded.trunc();
    let fraction: u32 = (rounded.fract() * Decimal::ONE_HUNDRED)
        .trunc()
        .try_into()
        .unwrap_or(0);

    let mut integer = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            integer.push(',');
        }
        integer.push(ch);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}.{:02}", sign, integer, fraction)
}

/// Format a timestamp in the dashboard's short style: `"May 12, 10:30 AM"`
pub fn format_date(date: DateTime<Utc>) -> String {
    let (hour, meridiem) = match date.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{} {}, {}:{:02} {}",
        date.format("%b"),
        date.day(),
        hour,
        date.minute(),
        meridiem
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_thousands_separator() {
        assert_eq!(format_currency(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
    }

    #[test]
    fn test_currency_small_amounts() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(Decimal::new(999, 2)), "$9.99");
        assert_eq!(format_currency(Decimal::new(5, 1)), "$0.50");
    }

    #[test]
    fn test_currency_rounds_to_two_decimals() {
        assert_eq!(format_currency(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_currency(Decimal::from(7u32)), "$7.00");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(Decimal::new(-123456, 2)), "-$1,234.56");
    }

    #[test]
    fn test_currency_extremes_do_not_panic() {
        assert_eq!(
            format_currency(Decimal::MAX),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
        assert_eq!(
            format_currency(Decimal::MIN),
            "-$79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_date_morning_and_afternoon() {
        let morning: DateTime<Utc> = "2025-05-12T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(morning), "May 12, 10:30 AM");

        let afternoon: DateTime<Utc> = "2025-05-11T16:45:00Z".parse().unwrap();
        assert_eq!(format_date(afternoon), "May 11, 4:45 PM");
    }

    #[test]
    fn test_date_midnight_and_noon() {
        let midnight: DateTime<Utc> = "2025-01-03T00:05:00Z".parse().unwrap();
        assert_eq!(format_date(midnight), "Jan 3, 12:05 AM");

        let noon: DateTime<Utc> = "2025-01-03T12:00:00Z".parse().unwrap();
        assert_eq!(format_date(noon), "Jan 3, 12:00 PM");
    }
}
