//! Daily gap filling for weigh-in series.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use super::piecewise::{Extrapolation, PiecewiseLinear};
use crate::measurement::{day_start_of, Measurement};

/// Synthesizes a value for every calendar day a series skips.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesInterpolator {
    extrapolation: Extrapolation,
}

impl SeriesInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extrapolation policy of the underlying curve.
    ///
    /// Sorted input never needs it, since both the first and last day are
    /// knots, but unsorted input can land outside the knot range.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Produce one synthetic measurement per missing day.
    ///
    /// `records` must be sorted ascending by date. Days are taken from the
    /// first record's day up to, but not including, the last record's day.
    /// Only the synthesized records are returned, ascending by date; they
    /// carry a date and a value and nothing else.
    pub fn interpolate(&self, records: &[Measurement]) -> Vec<Measurement> {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Vec::new();
        };

        let known = bucket_by_day(records);
        let missing: Vec<DateTime<Utc>> = candidate_days(first.day_start(), last.day_start())
            .into_iter()
            .filter(|day| !known.contains_key(day))
            .collect();

        if missing.is_empty() {
            return Vec::new();
        }

        let curve = PiecewiseLinear::new(
            known.iter().map(|(day, value)| (timestamp_key(*day), *value)),
            self.extrapolation,
        );

        tracing::debug!(
            records = records.len(),
            knots = curve.knots().len(),
            missing = missing.len(),
            "interpolating gap days"
        );

        missing
            .into_iter()
            .filter_map(|day| curve.at(timestamp_key(day)).map(|value| Measurement::new(value, day)))
            .collect()
    }

    /// The input merged with its synthesized gap days, ascending by date.
    pub fn fill_gaps(&self, records: &[Measurement]) -> Vec<Measurement> {
        let mut series = records.to_vec();
        series.extend(self.interpolate(records));
        super::history::sort_by_date(&mut series);
        series
    }
}

/// Gap-fill `records` with the default (clamping) curve.
pub fn interpolate(records: &[Measurement]) -> Vec<Measurement> {
    SeriesInterpolator::default().interpolate(records)
}

/// `records` plus its gap-fill, ascending by date.
pub fn fill_gaps(records: &[Measurement]) -> Vec<Measurement> {
    SeriesInterpolator::default().fill_gaps(records)
}

/// Every day start from `start` up to but excluding `end`.
pub fn candidate_days(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut days = Vec::new();
    let mut day = day_start_of(start);
    while day < end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// Known value per calendar day. The first record seen for a day wins.
pub fn bucket_by_day(records: &[Measurement]) -> BTreeMap<DateTime<Utc>, f64> {
    let mut buckets = BTreeMap::new();
    for record in records {
        buckets.entry(record.day_start()).or_insert(record.value);
    }
    buckets
}

fn timestamp_key(day: DateTime<Utc>) -> f64 {
    day.timestamp() as f64
}
