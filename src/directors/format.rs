//! Human readable rendering of aggregated numbers.
//!
//! Values are rounded to two decimals from their exact binary value, so
//! `12.345` (stored slightly above the tie) gives `12.35` while `2.675`
//! (stored slightly below) gives `2.67`.

/// `12.345 -> "12.35%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `1234567.8 -> "$1,234,567.80"`. Negative values keep the sign after the
/// currency symbol: `"$-1,234.50"`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if !value.is_finite() {
        return format!("${}", fixed);
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("${}{}.{}", sign, group_thousands(integer), fraction)
}

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
