//! Ordering helpers over an in-memory list of weigh-ins.

use crate::measurement::Measurement;

/// Sort ascending by date. Stable, so same-instant records keep their order.
pub fn sort_by_date(records: &mut [Measurement]) {
    records.sort_by_key(|m| m.date);
}

/// The latest weigh-in. Among records sharing the latest instant the first
/// one in the slice is returned.
pub fn current(records: &[Measurement]) -> Option<&Measurement> {
    records
        .iter()
        .reduce(|best, m| if m.date > best.date { m } else { best })
}

/// Up to `count` weigh-ins, newest first.
pub fn most_recent(records: &[Measurement], count: usize) -> Vec<&Measurement> {
    let mut sorted: Vec<&Measurement> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn records() -> Vec<Measurement> {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        vec![
            Measurement::new(80.0, base + Duration::days(2)),
            Measurement::new(82.0, base),
            Measurement::new(81.0, base + Duration::days(1)),
        ]
    }

    #[test]
    fn sorts_ascending() {
        let mut rs = records();
        sort_by_date(&mut rs);
        let values: Vec<_> = rs.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![82.0, 81.0, 80.0]);
    }

    #[test]
    fn current_is_latest() {
        assert_eq!(current(&records()).map(|m| m.value), Some(80.0));
        assert!(current(&[]).is_none());
    }

    #[test]
    fn current_prefers_first_of_tied_latest() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let rs = vec![Measurement::new(70.0, date), Measurement::new(71.0, date)];
        assert_eq!(current(&rs).map(|m| m.value), Some(70.0));
    }

    #[test]
    fn most_recent_is_newest_first_and_bounded() {
        let rs = records();
        let recent: Vec<_> = most_recent(&rs, 2).iter().map(|m| m.value).collect();
        assert_eq!(recent, vec![80.0, 81.0]);
        assert_eq!(most_recent(&rs, 10).len(), 3);
        assert!(most_recent(&rs, 0).is_empty());
    }
}
