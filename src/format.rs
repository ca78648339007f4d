//! Display formatting helpers.
//!
//! Pure string functions shared by the CLI output. Amounts are exact:
//! shannon values never pass through floating point.

use chrono::DateTime;

use crate::constants::SHANNONS_PER_CKB;

// ============================================================================
// Amounts
// ============================================================================

/// Converts shannons to a decimal CKB string with trailing zeros trimmed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(shannon_to_ckb(150_000_000), "1.5");
/// assert_eq!(shannon_to_ckb(100_000_000), "1");
/// ```
#[must_use]
pub fn shannon_to_ckb(shannons: u64) -> String {
    let whole = shannons / SHANNONS_PER_CKB;
    let fraction = shannons % SHANNONS_PER_CKB;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:08}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

/// Inserts thousands separators into the integer part of a decimal string.
///
/// The fractional part, if any, is kept as is.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(locale_number_string("1234567.891"), "1,234,567.891");
/// ```
#[must_use]
pub fn locale_number_string(value: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Shannons rendered as a grouped CKB amount, e.g. `"1,000.5 CKB"`.
#[must_use]
pub fn format_ckb(shannons: u64) -> String {
    format!("{} CKB", locale_number_string(&shannon_to_ckb(shannons)))
}

// ============================================================================
// Time
// ============================================================================

/// Formats a millisecond timestamp as `YYYY/MM/DD HH:MM:SS` in UTC.
///
/// Out-of-range timestamps render as an empty string.
#[must_use]
pub fn parse_simple_date(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|datetime| datetime.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

// ============================================================================
// Confirmations
// ============================================================================

#[must_use]
pub fn format_confirmation(confirmations: u64) -> String {
    if confirmations == 1 {
        "1 Confirmation".to_string()
    } else {
        format!("{confirmations} Confirmations")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(1, "0.00000001")]
    #[case(100_000_000, "1")]
    #[case(150_000_000, "1.5")]
    #[case(123_456_789_012, "1234.56789012")]
    #[case(u64::MAX, "184467440737.09551615")]
    fn test_shannon_to_ckb(#[case] shannons: u64, #[case] expected: &str) {
        assert_eq!(shannon_to_ckb(shannons), expected);
    }

    #[rstest]
    #[case("0", "0")]
    #[case("999", "999")]
    #[case("1000", "1,000")]
    #[case("1234567", "1,234,567")]
    #[case("1234.56789012", "1,234.56789012")]
    #[case("100.5", "100.5")]
    fn test_locale_number_string(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(locale_number_string(value), expected);
    }

    #[test]
    fn test_format_ckb() {
        assert_eq!(format_ckb(100_050_000_000), "1,000.5 CKB");
    }

    #[rstest]
    #[case(0, "1970/01/01 00:00:00")]
    #[case(1_557_482_351_075, "2019/05/10 09:59:11")]
    fn test_parse_simple_date(#[case] timestamp_ms: u64, #[case] expected: &str) {
        assert_eq!(parse_simple_date(timestamp_ms), expected);
    }

    #[test]
    fn test_parse_simple_date_out_of_range() {
        assert_eq!(parse_simple_date(u64::MAX), "");
    }

    #[rstest]
    #[case(0, "0 Confirmations")]
    #[case(1, "1 Confirmation")]
    #[case(10, "10 Confirmations")]
    fn test_format_confirmation(#[case] confirmations: u64, #[case] expected: &str) {
        assert_eq!(format_confirmation(confirmations), expected);
    }
}
