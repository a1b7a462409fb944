//! Display formatting shared by the KPI cards, tooltips and the table.

/// Group digits in threes: `1234567` -> `1,234,567`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed variant of [`thousands`].
pub fn thousands_signed(value: i64) -> String {
    let grouped = thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Whole-dollar amount with digit grouping.
pub fn usd(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{}", thousands((-rounded) as u64))
    } else {
        thousands(rounded as u64)
    }
}

/// Fraction as a percentage with one decimal: `0.456` -> `45.6%`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Ground-truth label for `target_failure`.
pub fn outcome(failed: bool) -> &'static str {
    if failed {
        "Failure (closed)"
    } else {
        "Success (acquired)"
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands_signed(-12_000), "-12,000");
    }

    #[test]
    fn formats_money_and_rates() {
        assert_eq!(usd(1_500_000.4), "1,500,000");
        assert_eq!(usd(999.5), "1,000");
        assert_eq!(percent(0.8), "80.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(yes_no(true), "Yes");
    }
}
