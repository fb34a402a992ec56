//! Piecewise-linear interpolation over knot points.

use serde::{Deserialize, Serialize};

/// What [`PiecewiseLinear::at`] returns outside the knot range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Hold the value of the nearest end knot.
    #[default]
    Clamp,
    /// Extend the first or last segment. Needs two knots, else clamps.
    Linear,
}

/// Linear interpolation through a set of `(x, y)` knots.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    knots: Vec<(f64, f64)>,
    extrapolation: Extrapolation,
}

impl PiecewiseLinear {
    /// Build from knots in any order. Knots are sorted by `x`; when two share
    /// an `x` the first one given is kept. Knots with a NaN `x` are dropped.
    pub fn new<I>(knots: I, extrapolation: Extrapolation) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut knots: Vec<(f64, f64)> = knots.into_iter().filter(|(x, _)| !x.is_nan()).collect();
        // Stable sort keeps input order among equal x, so dedup keeps the first.
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        knots.dedup_by(|later, earlier| later.0 == earlier.0);
        Self {
            knots,
            extrapolation,
        }
    }

    pub fn knots(&self) -> &[(f64, f64)] {
        &self.knots
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Evaluate at `x`. `None` only when there are no knots.
    pub fn at(&self, x: f64) -> Option<f64> {
        let first = *self.knots.first()?;
        let last = *self.knots.last()?;

        if x < first.0 {
            return Some(match (self.extrapolation, self.knots.get(1)) {
                (Extrapolation::Linear, Some(&next)) => lerp(first, next, x),
                _ => first.1,
            });
        }
        if x >= last.0 {
            let len = self.knots.len();
            return Some(match self.extrapolation {
                Extrapolation::Linear if len >= 2 => lerp(self.knots[len - 2], last, x),
                _ => last.1,
            });
        }

        // first.0 <= x < last.0, so 1 <= idx < len.
        let idx = self.knots.partition_point(|(kx, _)| *kx <= x);
        Some(lerp(self.knots[idx - 1], self.knots[idx], x))
    }
}

fn lerp(a: (f64, f64), b: (f64, f64), x: f64) -> f64 {
    let span = b.0 - a.0;
    if span == 0.0 {
        return a.1;
    }
    a.1 + (b.1 - a.1) * (x - a.0) / span
}
