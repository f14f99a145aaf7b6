//! Number formatting for chart geometry and labels.

/// Shortest decimal form with at most three fraction digits, so `3.0`
/// prints as `3` and `13.333…` as `13.333`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}
