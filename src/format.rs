//! Display formatting for currency amounts and elapsed time

/// Compact currency rendering: 1.5b / 16.7m / 250k, plain dollars below 1k
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1}b", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1}m", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

/// Elapsed-time rendering as years/months/days, e.g. "1y 5m 0d"
///
/// Months shown whenever years are, so "5y 0m 3d" rather than "5y 3d".
pub fn format_days(days: u64) -> String {
    if days == 0 {
        return "0d".to_string();
    }

    let years = days / 365;
    let months = (days % 365) / 30;
    let days_remain = days % 30;

    let mut result = String::new();
    if years > 0 {
        result.push_str(&format!("{}y ", years));
    }
    if months > 0 || years > 0 {
        result.push_str(&format!("{}m ", months));
    }
    result.push_str(&format!("{}d", days_remain));
    result
}
