//! Number formatting for on-page figures (`en-US` grouping).

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar currency, sign-aware: `-4500.0` → `"-$4,500"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let magnitude = format_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${magnitude}")
    } else {
        format!("${magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(50000), "50,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn currency() {
        assert_eq!(format_currency(22500.0), "$22,500");
        assert_eq!(format_currency(-4500.0), "-$4,500");
        assert_eq!(format_currency(0.4), "$0");
    }
}
