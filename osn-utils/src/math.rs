//! Scalar helpers used on the noise evaluation hot path.

/// Floor toward negative infinity.
///
/// Truncates toward zero, then steps down by one when the truncation rounded a
/// negative value up. Out-of-range inputs saturate instead of overflowing, and
/// `NaN` floors to `0`.
#[inline]
#[must_use]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi.wrapping_sub(1)
    } else {
        xi
    }
}

/// Truncate `x` and clamp the result into `0..=1`.
///
/// Used to turn fractional comparisons into single index bits.
#[inline]
#[must_use]
pub fn unit_bit(x: f64) -> i32 {
    (x as i32).clamp(0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_floor_matches_floor_for_ordinary_values() {
        for i in -400..400 {
            let x = f64::from(i) * 0.37 + 0.013;
            assert_eq!(fast_floor(x), x.floor() as i32, "x = {x}");
        }
    }

    #[test]
    fn fast_floor_integers_and_signs() {
        assert_eq!(fast_floor(0.0), 0);
        assert_eq!(fast_floor(-0.0), 0);
        assert_eq!(fast_floor(3.0), 3);
        assert_eq!(fast_floor(-3.0), -3);
        assert_eq!(fast_floor(-0.25), -1);
        assert_eq!(fast_floor(0.999_999), 0);
        assert_eq!(fast_floor(-1e-300), -1);
    }

    #[test]
    fn fast_floor_never_panics_on_non_finite() {
        assert_eq!(fast_floor(f64::NAN), 0);
        assert_eq!(fast_floor(f64::INFINITY), i32::MAX);
        // Saturates to i32::MIN, then wraps instead of overflowing.
        let _ = fast_floor(f64::NEG_INFINITY);
        let _ = fast_floor(-1e300);
    }

    #[test]
    fn unit_bit_clamps() {
        assert_eq!(unit_bit(0.0), 0);
        assert_eq!(unit_bit(0.99), 0);
        assert_eq!(unit_bit(1.0), 1);
        assert_eq!(unit_bit(1.75), 1);
        assert_eq!(unit_bit(2.5), 1);
        assert_eq!(unit_bit(-3.0), 0);
        assert_eq!(unit_bit(f64::NAN), 0);
    }
}
