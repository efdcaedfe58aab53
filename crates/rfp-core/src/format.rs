//! Display formatting for currency amounts and percentages.

/// `$250,000`
pub fn currency(value: u64) -> String {
    format!("${}", group_thousands(value))
}

/// `$250k`, as shown on kanban cards and chart axes
pub fn thousands(value: u64) -> String {
    format!("${:.0}k", value as f64 / 1000.0)
}

/// `$950k` below a million, `$1.2M` from there on
pub fn compact_currency(value: u64) -> String {
    // anything that would print as $1000k
    if value >= 999_500 {
        format!("${:.1}M", value as f64 / 1_000_000.0)
    } else {
        thousands(value)
    }
}

/// Ratio in [0, 1] as a whole percentage
pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Magnitude of a trend with one optional decimal: `5.2%`, `12%`
pub fn trend(change: f64) -> String {
    let magnitude = change.abs();
    if magnitude.fract() == 0.0 {
        format!("{:.0}%", magnitude)
    } else {
        format!("{:.1}%", magnitude)
    }
}

fn group_thousands(value: u64) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_digits() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(999), "$999");
        assert_eq!(currency(80_000), "$80,000");
        assert_eq!(currency(1_250_000), "$1,250,000");
    }

    #[test]
    fn test_compact_forms() {
        assert_eq!(thousands(250_000), "$250k");
        assert_eq!(thousands(1_500), "$2k");
        assert_eq!(compact_currency(720_000), "$720k");
        assert_eq!(compact_currency(1_200_000), "$1.2M");
    }

    #[test]
    fn test_compact_switches_to_millions_at_rounding_edge() {
        assert_eq!(compact_currency(999_499), "$999k");
        assert_eq!(compact_currency(999_500), "$1.0M");
        assert_eq!(compact_currency(1_000_000), "$1.0M");
    }

    #[test]
    fn test_percent_and_trend() {
        assert_eq!(percent(0.5), "50%");
        assert_eq!(trend(-1.5), "1.5%");
        assert_eq!(trend(12.0), "12%");
    }
}
