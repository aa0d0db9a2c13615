//! Compounding growth helpers
//!
//! A marginal cost of `p` percent compounds as `(1 + p/100)^n` at 0-indexed
//! position `n`. [`multiplier`] evaluates the power directly; [`Compounding`]
//! walks the same sequence with a running product.

/// Compounding ratio for a percentage, `1 + pct/100`
#[inline]
#[must_use]
pub fn ratio(pct: f64) -> f64 {
    1.0 + pct / 100.0
}

/// Multiplier at 0-indexed `position`, `ratio^position`
#[inline]
#[must_use]
pub fn multiplier(ratio: f64, position: usize) -> f64 {
    match i32::try_from(position) {
        Ok(exp) => ratio.powi(exp),
        #[allow(clippy::cast_precision_loss)]
        Err(_) => ratio.powf(position as f64),
    }
}

/// Iterator over `ratio^0, ratio^1, ratio^2, ...`
#[derive(Debug, Clone, Copy)]
pub struct Compounding {
    ratio: f64,
    current: f64,
}

impl Compounding {
    /// Start at `ratio^0 = 1`
    #[inline]
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            current: 1.0,
        }
    }
}

impl Iterator for Compounding {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.current;
        self.current *= self.ratio;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_from_percent() {
        assert_eq!(ratio(0.0), 1.0);
        assert_eq!(ratio(20.0), 1.2);
        assert_eq!(ratio(-50.0), 0.5);
    }

    #[test]
    fn multiplier_at_origin_is_one() {
        assert_eq!(multiplier(1.2, 0), 1.0);
        assert_eq!(multiplier(0.0, 0), 1.0);
    }

    #[test]
    fn running_product_matches_powers() {
        let r = ratio(13.0);
        for (n, step) in Compounding::new(r).take(40).enumerate() {
            let direct = multiplier(r, n);
            assert!(
                (direct - step).abs() <= direct.abs() * 1e-12,
                "position {n}: {direct} vs {step}"
            );
        }
    }
}
