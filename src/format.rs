//! Decimal rendering and the safe-divide rounding rule.
//!
//! Every numeric cell in a report goes through [`format_decimal`]: two
//! fractional digits, `.` decimal point, and either `,`-grouped or plain
//! integer digits. Grouping is an explicit per-call parameter, so renders
//! stay reentrant and can run concurrently.

/// Thousands-grouping convention for one formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `#,##0.00`: integer digits grouped in threes with `,`
    Grouped,
    /// `###0.00`: no grouping (used by the package ratio matrix)
    Ungrouped,
}

/// Format a value with exactly two fractional digits.
///
/// Uses the US convention: `.` decimal point and, in [`Grouping::Grouped`]
/// mode, a `,` every three integer digits (e.g. `1234567.5` ->
/// `"1,234,567.50"`).
pub fn format_decimal(value: f64, grouping: Grouping) -> String {
    let plain = format!("{:.2}", value);
    match grouping {
        Grouping::Ungrouped => plain,
        Grouping::Grouped => {
            let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
            format!("{}.{}", group_thousands(int_part), frac_part)
        }
    }
}

/// Insert a `,` every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Divide two counters, rounding the quotient to two decimal places.
///
/// Returns `0.0` when the divisor is zero or negative; empty collections
/// must yield `0.00` ratios, never a fault. Rounding is half-away-from-zero
/// on the quotient scaled by 100, which is the byte-output contract of the
/// reports (`divide(1, 3) == 0.33`, `divide(2, 3) == 0.67`).
pub fn divide(dividend: i64, divisor: i64) -> f64 {
    if divisor <= 0 {
        return 0.0;
    }
    (dividend as f64 / divisor as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_is_zero() {
        assert_eq!(divide(0, 0), 0.0);
        assert_eq!(divide(42, 0), 0.0);
        assert_eq!(divide(42, -1), 0.0);
    }

    #[test]
    fn test_divide_rounds_half_away_from_zero() {
        assert_eq!(divide(5, 2), 2.5);
        assert_eq!(divide(1, 3), 0.33);
        assert_eq!(divide(2, 3), 0.67);
        assert_eq!(divide(1, 8), 0.13); // 0.125 rounds up, not to even
        assert_eq!(divide(10, 4), 2.5);
        assert_eq!(divide(7, 1), 7.0);
    }

    #[test]
    fn test_format_decimal_ungrouped() {
        assert_eq!(format_decimal(0.0, Grouping::Ungrouped), "0.00");
        assert_eq!(format_decimal(2.5, Grouping::Ungrouped), "2.50");
        assert_eq!(format_decimal(1234567.0, Grouping::Ungrouped), "1234567.00");
    }

    #[test]
    fn test_format_decimal_grouped() {
        assert_eq!(format_decimal(0.0, Grouping::Grouped), "0.00");
        assert_eq!(format_decimal(999.0, Grouping::Grouped), "999.00");
        assert_eq!(format_decimal(1000.0, Grouping::Grouped), "1,000.00");
        assert_eq!(format_decimal(1234567.5, Grouping::Grouped), "1,234,567.50");
    }
}
