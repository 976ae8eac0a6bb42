use crate::config::MAX_PR_SECONDS;
use once_cell::sync::Lazy;
use regex::Regex;

// PR seconds accept at most two integer and two fractional digits
static PR_SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}(\.\d{1,2})?$").unwrap());

/// Sample the wall clock in seconds for feeding the stopwatch engine.
///
/// Prefers the monotonic `performance.now()`; falls back to `Date.now()`
/// when no Performance object is available (e.g. non-browser hosts).
pub fn now_seconds() -> f64 {
    match web_sys::window().and_then(|w| w.performance()) {
        Some(perf) => perf.now() / 1000.0,
        None => js_sys::Date::now() / 1000.0,
    }
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the PR minutes field (non-negative integer)
pub fn validate_pr_minutes(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(0), None, "Minutes")
}

/// Validate the PR seconds field: 0 to 59.99 with centisecond granularity.
pub fn validate_pr_seconds(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Seconds cannot be empty".to_string());
    }
    if !PR_SECONDS_REGEX.is_match(trimmed) {
        return Err("Seconds must look like 50 or 50.25".to_string());
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| "Seconds must be a valid number".to_string())?;
    if value > MAX_PR_SECONDS {
        return Err(format!("Seconds must be between 0 and {}", MAX_PR_SECONDS));
    }
    Ok(value)
}

/// Validate the lap length field (positive integer, meters)
pub fn validate_lap_length(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(1), None, "Distance per lap")
}
