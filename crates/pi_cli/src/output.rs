//! Result formatting.

/// Default number of mantissa decimals (`%e` default).
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` in C `%e` style: `d.ddddddde±XX`.
///
/// The exponent always carries a sign and at least two digits. Non-finite
/// values are rendered as `nan`, `inf` or `-inf`.
///
/// # Examples
///
/// ```text
/// format_scientific(3.14159265, 6) == "3.141593e+00"
/// format_scientific(0.0, 6)        == "0.000000e+00"
/// format_scientific(1.5e-123, 2)   == "1.50e-123"
/// ```
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pi() {
        assert_eq!(format_scientific(std::f64::consts::PI, 6), "3.141593e+00");
        assert_eq!(format_scientific(std::f64::consts::PI, 10), "3.1415926536e+00");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_scientific(0.0, 6), "0.000000e+00");
    }

    #[test]
    fn test_format_small_and_large_exponents() {
        assert_eq!(format_scientific(0.000_012_34, 6), "1.234000e-05");
        assert_eq!(format_scientific(12_345.0, 3), "1.234e+04");
        assert_eq!(format_scientific(1.5e-123, 2), "1.50e-123");
        assert_eq!(format_scientific(4.0, 6), "4.000000e+00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_scientific(-2.5, 1), "-2.5e+00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_scientific(f64::NAN, 6), "nan");
        assert_eq!(format_scientific(f64::INFINITY, 6), "inf");
        assert_eq!(format_scientific(f64::NEG_INFINITY, 6), "-inf");
    }
}
