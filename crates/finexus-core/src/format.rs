//! Currency and number formatting for display.

/// Format an amount the way an en-US locale would: `$` prefix, comma
/// grouping, at most three fraction digits with trailing zeros dropped.
///
/// ```
/// use finexus_core::format::format_currency;
/// assert_eq!(format_currency(1800.0), "$1,800");
/// assert_eq!(format_currency(1234567.891), "$1,234,567.891");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let text = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();

    let mut out = String::with_capacity(text.len() + 4);
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Insert commas every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a number without a trailing `.0` when it is integral.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(5.0), "$5");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(62450.0), "$62,450");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
    }

    #[test]
    fn fractional_amounts() {
        assert_eq!(format_currency(1234.5), "$1,234.5");
        assert_eq!(format_currency(0.125), "$0.125");
        assert_eq!(format_currency(0.1 + 0.2), "$0.3");
        assert_eq!(format_currency(2.0004), "$2");
    }

    #[test]
    fn negative_and_degenerate() {
        assert_eq!(format_currency(-1500.25), "-$1,500.25");
        assert_eq!(format_currency(-0.0001), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(format_number(2024.0), "2024");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.0), "-3");
    }
}
