//! # Currency Rounding
//!
//! Monetary amounts in the engine are plain `f64` values rounded to cents
//! at every output boundary. One rounding function, used everywhere.
//!
//! ## Rounding Invariant
//!
//! `round2` rounds half away from zero at the cent boundary. Over the
//! non-negative amounts the engine produces this is identical to the
//! portal backend's `HALF_UP` scale-2 rounding, keeping quotes
//! bit-compatible across the two implementations.

/// Round a currency value to exactly two decimal places, half away from
/// zero. Non-finite input degrades to `0.0` rather than propagating NaN
/// into a rendered amount.
pub fn round2(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(round2(4.5), 4.5);
        assert_eq!(round2(104.504), 104.5);
        assert_eq!(round2(104.5051), 104.51);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.675000001), 2.68);
    }

    #[test]
    fn test_non_finite_degrades_to_zero() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
        assert_eq!(round2(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_integral_amounts_unchanged() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(97.0), 97.0);
        assert_eq!(round2(150.0), 150.0);
    }
}
