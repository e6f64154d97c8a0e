//! Mapping of centrality scores to colours.

use itertools::{Itertools, MinMaxResult};
use plotters::style::RGBColor;

/// Evenly spaced samples of the viridis colour map, from 0.0 to 1.0.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 73, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (253, 231, 37),
];

/// The observed range of a score, used to scale values into `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Normalization {
    pub min: f64,
    pub max: f64,
}

impl Normalization {
    /// Determines the range of the scores, an empty list yields `0.0..0.0`. NaNs are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::colormap::Normalization;
    ///
    /// let norm = Normalization::determine(&[0.5, 0.1, 0.9]);
    ///
    /// assert_eq!(norm, Normalization { min: 0.1, max: 0.9 });
    /// ```
    pub fn determine(scores: &[f64]) -> Self {
        let finite = scores.iter().copied().filter(|s| !s.is_nan());

        match finite.minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => Self::default(),
            MinMaxResult::OneElement(v) => Self { min: v, max: v },
            MinMaxResult::MinMax(min, max) => Self { min, max },
        }
    }

    /// Scales the value to the `[0.0, 1.0]` range. A degenerate range maps everything to `0.0`.
    pub fn scale(&self, value: f64) -> f64 {
        if self.min == self.max {
            return 0.0;
        }

        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Returns the viridis colour at `t`, clamped to `[0.0, 1.0]`.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let last = VIRIDIS.len() - 1;
    let position = t * last as f64;
    let lower = (position.floor() as usize).min(last - 1);
    let fraction = position - lower as f64;

    let (r0, g0, b0) = VIRIDIS[lower];
    let (r1, g1, b1) = VIRIDIS[lower + 1];

    RGBColor(
        lerp(r0, r1, fraction),
        lerp(g0, g1, fraction),
        lerp(b0, b1, fraction),
    )
}

fn lerp(a: u8, b: u8, fraction: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));

    (a + (b - a) * fraction).round() as u8
}
