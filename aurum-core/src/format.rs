//! Number formatting shared by bin labels and presentation adapters.
//!
//! Formats follow the `en-US` convention the deck was written against:
//! comma thousands separators, at most three fraction digits.

/// Group an integer with comma thousands separators: `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a number with grouping and up to three fraction digits, trailing
/// zeros trimmed: `1234.5` → `"1,234.5"`, `104000.0` → `"104,000"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = frac.is_empty() && int_part.bytes().all(|b| b == b'0');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert a comma every three digits from the right of an unsigned digit run.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rupee amount as shown on the deck: `"Rs 104,000"`.
pub fn format_currency(amount: f64) -> String {
    format!("Rs {}", format_number(amount))
}
