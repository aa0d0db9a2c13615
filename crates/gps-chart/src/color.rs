//! Deterministic series colors
//!
//! The baseline keeps a fixed slate color. Refactor strategies sweep the hue
//! wheel evenly, so `m` refactor strategies get hues `360 * i / m`.

use gps_model::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Baseline series color
pub const NO_REFACTOR_COLOR: Rgb = Rgb::new(100, 99, 132);

/// Saturation of the refactor hue ramp
pub const RAMP_SATURATION: f64 = 0.70;

/// Lightness of the refactor hue ramp
pub const RAMP_LIGHTNESS: f64 = 0.55;

/// Fill alpha used for `backgroundColor`
pub const FILL_ALPHA: f64 = 0.5;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Create color
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL (hue in degrees, saturation and lightness in `0..=1`)
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::new(channel(r + m), channel(g + m), channel(b + m))
    }

    /// CSS `rgb(r, g, b)`
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// CSS `rgba(r, g, b, alpha)`
    #[must_use]
    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Color for `strategy` when the chart holds `strategy_count` strategies
///
/// `strategy_count` counts the baseline too, so a five-feature chart passes 5
/// and the ramp spreads over its four refactor strategies. A strategy
/// without a refactor slot shares the baseline color.
#[must_use]
pub fn strategy_color(strategy: Strategy, strategy_count: usize) -> Rgb {
    match strategy.refactor_position() {
        None => NO_REFACTOR_COLOR,
        Some(position) => {
            let refactor_count = strategy_count.saturating_sub(1).max(1);
            let index = position - 1;
            #[allow(clippy::cast_precision_loss)]
            let hue = 360.0 * index as f64 / refactor_count as f64;
            Rgb::from_hsl(hue, RAMP_SATURATION, RAMP_LIGHTNESS)
        }
    }
}

/// Border and fill color pair for one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesColors {
    /// Line color
    pub border: String,
    /// Point/area fill color
    pub background: String,
}

impl SeriesColors {
    /// Colors for `strategy` among `strategy_count` strategies
    #[must_use]
    pub fn for_strategy(strategy: Strategy, strategy_count: usize) -> Self {
        let rgb = strategy_color(strategy, strategy_count);
        Self {
            border: rgb.css(),
            background: rgb.css_alpha(FILL_ALPHA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn baseline_is_fixed() {
        for count in [1, 2, 10] {
            assert_eq!(strategy_color(Strategy::NoRefactor, count), NO_REFACTOR_COLOR);
        }
        let colors = SeriesColors::for_strategy(Strategy::NoRefactor, 5);
        assert_eq!(colors.border, "rgb(100, 99, 132)");
        assert_eq!(colors.background, "rgba(100, 99, 132, 0.5)");
    }

    #[test]
    fn slotless_refactor_uses_baseline_color() {
        assert_eq!(strategy_color(Strategy::RefactorBeforeFeature(1), 5), NO_REFACTOR_COLOR);
        assert_eq!(strategy_color(Strategy::RefactorBeforeFeature(0), 5), NO_REFACTOR_COLOR);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl(360.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn first_refactor_starts_at_red_hue() {
        let rgb = strategy_color(Strategy::RefactorBeforeFeature(2), 5);
        assert_eq!(rgb, Rgb::from_hsl(0.0, RAMP_SATURATION, RAMP_LIGHTNESS));
        assert!(rgb.r > rgb.g && rgb.r > rgb.b);
    }

    #[test]
    fn ramp_is_distinct() {
        let count = 37;
        let colors: HashSet<Rgb> = (2..=count)
            .map(|k| strategy_color(Strategy::RefactorBeforeFeature(k), count))
            .collect();
        assert_eq!(colors.len(), count - 1);
        assert!(!colors.contains(&NO_REFACTOR_COLOR));
    }

    #[test]
    fn ramp_is_deterministic() {
        let a = strategy_color(Strategy::RefactorBeforeFeature(4), 9);
        let b = strategy_color(Strategy::RefactorBeforeFeature(4), 9);
        assert_eq!(a, b);
    }
}
