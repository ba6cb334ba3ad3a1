//! Number rendering that matches how a browser stringifies numbers in
//! template literals.

/// Magnitudes from here up switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this (other than zero) switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest round-tripping decimal, no trailing `.0`, and `-0` shown as `0`.
///
/// Outside `[1e-6, 1e21)` the exponent form is used (`1e-7`, `1.5e+21`), and
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&value.abs()) {
        return format!("{value}");
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(1000.0), "1000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.4), "-0.4");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_small_magnitudes() {
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e-9), "-2e-9");
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.23e22), "1.23e+22");
        assert_eq!(format_number(-1e21), "-1e+21");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
