//! Compact decimal formatting for vertex coordinates.
//!
//! Values are rounded to two decimal places and written with as few
//! characters as possible: trailing zeros and a trailing point are dropped,
//! a zero integer part is omitted (`0.5` becomes `.5`) and zero is `0`.
//! Negative values that round to zero keep their sign and print `-0`.

use std::fmt;

/// Display adapter that writes an `f64` in compact form.
///
/// ```
/// use meshidx::format::Compact;
///
/// assert_eq!(format!("{}", Compact(-0.05)), "-.05");
/// assert_eq!(Compact(12.0).to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compact(pub f64);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = format!("{:.2}", self.0);
        let (sign, digits) = match rounded.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rounded.as_str()),
        };
        let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let frac = frac.trim_end_matches('0');
        let int = if int == "0" { "" } else { int };

        if int.is_empty() && frac.is_empty() {
            f.write_str(sign)?;
            return f.write_str("0");
        }

        f.write_str(sign)?;
        f.write_str(int)?;
        if !frac.is_empty() {
            write!(f, ".{}", frac)?;
        }
        Ok(())
    }
}

/// Format a value in compact two-decimal form.
///
/// ```
/// use meshidx::format::short;
///
/// assert_eq!(short(0.5), ".5");
/// assert_eq!(short(0.0), "0");
/// ```
pub fn short(value: f64) -> String {
    Compact(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_cases() {
        assert_eq!(short(0.5), ".5");
        assert_eq!(short(0.0), "0");
        assert_eq!(short(1.20), "1.2");
        assert_eq!(short(-0.05), "-.05");
    }

    #[test]
    fn test_integers_keep_their_zeros() {
        assert_eq!(short(10.0), "10");
        assert_eq!(short(100.0), "100");
        assert_eq!(short(-20.0), "-20");
        assert_eq!(short(10.5), "10.5");
    }

    #[test]
    fn test_rounds_to_two_places() {
        assert_eq!(short(0.123), ".12");
        assert_eq!(short(2.999), "3");
        assert_eq!(short(-1.004), "-1");
        assert_eq!(short(0.707_106_78), ".71");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(short(0.001), "0");
        assert_eq!(short(0.004), "0");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(short(-0.0), "-0");
        assert_eq!(short(-0.001), "-0");
        assert_eq!(short(-0.004), "-0");
    }

    #[test]
    fn test_rounding_follows_the_stored_value() {
        // 2.675 is stored slightly below the decimal midpoint.
        assert_eq!(short(2.675), "2.67");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(short(f64::INFINITY), "inf");
        assert_eq!(short(f64::NEG_INFINITY), "-inf");
        assert_eq!(short(f64::NAN), "NaN");
    }
}
