/// Default number of significant digits used when printing results.
pub const DEFAULT_PRECISION: usize = 15;

/// Formats `value` with at most `digits` significant digits.
///
/// Fixed notation is used while the decimal exponent lies in
/// `-4..digits`; outside that range the value is written in scientific
/// notation. Trailing zeros and a trailing decimal point are removed.
/// Non-finite values print as `inf`, `-inf` and `NaN`. A `digits` of `0` is
/// treated as `1`.
///
/// # Parameters
/// - `value`: The number to format.
/// - `digits`: Maximum number of significant digits.
///
/// # Returns
/// The formatted number.
///
/// # Example
/// ```
/// use mathparser::util::num::format_significant;
///
/// assert_eq!(format_significant(24.811099999999993, 15), "24.8111");
/// assert_eq!(format_significant(1024.0, 15), "1024");
/// assert_eq!(format_significant(0.1 + 0.2, 15), "0.3");
/// assert_eq!(format_significant(1.5e20, 15), "1.5e20");
/// assert_eq!(format_significant(-0.000_012_5, 3), "-1.25e-5");
/// assert_eq!(format_significant(f64::NEG_INFINITY, 15), "-inf");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);

    let max_exponent = i64::try_from(digits).unwrap_or(i64::MAX);
    if exponent < -4 || exponent >= max_exponent {
        return format!("{}e{exponent}", trim_fraction(mantissa));
    }

    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros, and then a trailing `.`, from a decimal string.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
