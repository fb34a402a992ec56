//! The weigh-in record.
//!
//! A [`Measurement`] always carries a body weight and a timestamp. The
//! body-composition fields are optional: some scales report them, others
//! only report weight, and the rest is filled in by
//! [`derive_all`](crate::derivation::derive_all).

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata key carrying a provider's group id for a reading.
pub const GRPID_KEY: &str = "grpid";

/// One weigh-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Body weight
    pub value: f64,
    /// When the weigh-in happened
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_mass: Option<f64>,
    /// Fat as a percentage of body weight (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Owner of the record, handed to the height provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Provider identifier (e.g. "withings", "manual")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Measurement {
    /// Create a measurement with only weight and date set.
    pub fn new(value: f64, date: DateTime<Utc>) -> Self {
        Self {
            value,
            date,
            lean_mass: None,
            fat_mass: None,
            fat_percent: None,
            bmi: None,
            user_id: None,
            source: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_lean_mass(mut self, lean_mass: f64) -> Self {
        self.lean_mass = Some(lean_mass);
        self
    }

    pub fn with_fat_mass(mut self, fat_mass: f64) -> Self {
        self.fat_mass = Some(fat_mass);
        self
    }

    pub fn with_fat_percent(mut self, fat_percent: f64) -> Self {
        self.fat_percent = Some(fat_percent);
        self
    }

    pub fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Midnight (UTC) of the day this measurement was taken.
    pub fn day_start(&self) -> DateTime<Utc> {
        day_start_of(self.date)
    }

    /// Provider group id, used to keep a single copy of each synced reading.
    pub fn grpid(&self) -> Option<&str> {
        self.metadata.get(GRPID_KEY).map(String::as_str)
    }

    pub fn set_grpid(&mut self, grpid: impl Into<String>) {
        self.metadata.insert(GRPID_KEY.to_string(), grpid.into());
    }

    /// True once every derived field holds a value.
    pub fn is_fully_derived(&self) -> bool {
        self.lean_mass.is_some()
            && self.fat_mass.is_some()
            && self.fat_percent.is_some()
            && self.bmi.is_some()
    }
}

/// Floor a timestamp to the start of its calendar day (UTC).
pub fn day_start_of(ts: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&ts.date_naive().and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_start_truncates_time_of_day() {
        let m = Measurement::new(80.0, Utc.with_ymd_and_hms(2024, 3, 9, 17, 45, 12).unwrap());
        assert_eq!(m.day_start(), Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap());
    }

    #[test]
    fn grpid_reads_and_writes_metadata() {
        let mut m = Measurement::new(80.0, Utc::now());
        assert_eq!(m.grpid(), None);
        m.set_grpid("123456");
        assert_eq!(m.grpid(), Some("123456"));
        assert_eq!(m.metadata.get("grpid").map(String::as_str), Some("123456"));
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let m = Measurement::new(72.5, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
            .with_fat_percent(18.0);
        let json = serde_json::to_value(&m).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("fat_percent"));
        assert!(!obj.contains_key("lean_mass"));
        assert!(!obj.contains_key("metadata"));
    }

    #[test]
    fn deserializes_minimal_record() {
        let m: Measurement =
            serde_json::from_str(r#"{"value": 81.2, "date": "2024-05-01T07:30:00Z"}"#).unwrap();
        assert_eq!(m.value, 81.2);
        assert!(m.lean_mass.is_none());
        assert!(m.metadata.is_empty());
        assert!(!m.is_fully_derived());
    }
}
