//! Numeric formatting for reports.
//!
//! Values are rounded half away from zero to a fixed number of decimal
//! places and printed without trailing zeros, so `1.0` renders as `1` and
//! `1.3333` at two places as `1.33`.

/// Round `value` to `precision` decimal places
///
/// Precisions beyond what an `f64` can scale return `value` unchanged.
///
/// # Examples
/// ```
/// use nettopo::utils::format::round_to;
///
/// assert_eq!(round_to(1.3333, 2), 1.33);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, precision: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render `value` rounded to `precision` places without trailing zeros
///
/// # Arguments
/// * `value` - The value to render
/// * `precision` - Maximum number of decimal places
///
/// # Examples
/// ```
/// use nettopo::utils::format::format_value;
///
/// assert_eq!(format_value(1.0, 2), "1");
/// assert_eq!(format_value(4.0 / 3.0, 2), "1.33");
/// assert_eq!(format_value(0.125, 2), "0.13");
/// ```
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "infinite" } else { "-infinite" }.to_string();
    }

    let rounded = round_to(value, precision);
    let mut text = format!("{:.*}", precision, rounded);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}
