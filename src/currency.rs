use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// currency symbol prefixed to every amount
pub const SYMBOL: &str = "$";

/// minor units shown on screen
pub const DISPLAY_DP: u32 = 2;

/// shown in place of amounts that cannot be represented
pub const PLACEHOLDER: &str = "-";

/// round a float amount to cents
///
/// goes through the shortest decimal representation of the float, so
/// 1.005 rounds to 1.01 rather than to the 1.00 its binary value implies.
/// returns None for NaN, infinities and amounts outside decimal range.
pub fn round_to_cents(amount: f64) -> Option<Decimal> {
    if !amount.is_finite() {
        return None;
    }

    let exact = Decimal::from_str(&amount.to_string()).ok()?;
    Some(exact.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero))
}

/// format as en-US dollars, e.g. `$431,676.38` or `-$12.50`
pub fn format_currency(amount: f64) -> String {
    let Some(rounded) = round_to_cents(amount) else {
        return PLACEHOLDER.to_string();
    };

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}{SYMBOL}{}.{cents}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1199.1010503), "$1,199.10");
        assert_eq!(format_currency(431_676.378), "$431,676.38");
        assert_eq!(format_currency(12_345_678.9), "$12,345,678.90");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-1234.0), "-$1,234.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(round_to_cents(1.005), Some(dec!(1.01)));
        assert_eq!(round_to_cents(2.675), Some(dec!(2.68)));
        assert_eq!(round_to_cents(-2.675), Some(dec!(-2.68)));
    }

    #[test]
    fn test_unrepresentable_amounts() {
        assert_eq!(format_currency(f64::NAN), PLACEHOLDER);
        assert_eq!(format_currency(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_currency(1e40), PLACEHOLDER);
    }
}
