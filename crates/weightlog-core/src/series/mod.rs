//! Date-ordered weigh-in series.
//!
//! Gap filling for charts, the interpolation curve behind it, and a few
//! ordering helpers over slices of measurements.

mod history;
mod interpolate;
mod piecewise;

pub use history::{current, most_recent, sort_by_date};
pub use interpolate::{bucket_by_day, candidate_days, fill_gaps, interpolate, SeriesInterpolator};
pub use piecewise::{Extrapolation, PiecewiseLinear};
