//! Display formatting for quantities, percentages and money
//!
//! Numbers are first rendered in plain notation (`1,234.50`) and then the
//! grouping and decimal characters are swapped (`1.234,50`).

/// Fractional digits shown for every formatted value.
const DISPLAY_DECIMALS: usize = 2;

/// Format a quantity without trailing zero padding.
///
/// `3.0 -> "3"`, `2.50 -> "2,5"`, `0.0 -> "0"`.
pub fn format_quantity(value: f64) -> String {
    let rendered = format!("{:.*}", DISPLAY_DECIMALS, value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    swap_separators(trimmed)
}

/// Format a VAT percentage, e.g. `21 -> "21%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_quantity(value))
}

/// Format a monetary amount, e.g. `1234.5 -> "€ 1.234,50"`.
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let rendered = format!("{:.*}", DISPLAY_DECIMALS, value.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let mut plain = group_thousands(int_part);
    if !frac_part.is_empty() {
        plain.push('.');
        plain.push_str(frac_part);
    }

    let negative = value < 0.0 && rendered.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{} {}{}", currency_symbol, sign, swap_separators(&plain))
}

/// Insert `,` between groups of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Exchange `,` and `.` in a plain-notation number.
fn swap_separators(plain: &str) -> String {
    plain
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_trims_zeros() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.50), "2,5");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(0.25), "0,25");
    }

    #[test]
    fn test_quantity_negative_zero() {
        assert_eq!(format_quantity(-0.0), "0");
        assert_eq!(format_quantity(-0.001), "0");
    }

    #[test]
    fn test_quantity_does_not_group() {
        assert_eq!(format_quantity(1500.0), "1500");
    }

    #[test]
    fn test_money_swaps_separators() {
        assert_eq!(format_money(1234.5, "€"), "€ 1.234,50");
        assert_eq!(format_money(0.0, "€"), "€ 0,00");
        assert_eq!(format_money(999.999, "€"), "€ 1.000,00");
        assert_eq!(format_money(1234567.891, "€"), "€ 1.234.567,89");
    }

    #[test]
    fn test_money_negative() {
        assert_eq!(format_money(-1234.5, "€"), "€ -1.234,50");
        assert_eq!(format_money(-0.001, "€"), "€ 0,00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(21.0), "21%");
        assert_eq!(format_percent(5.5), "5,5%");
    }
}
