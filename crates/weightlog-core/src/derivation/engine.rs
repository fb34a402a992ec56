//! Ordered derivation pipeline.

use super::height::HeightProvider;
use crate::measurement::Measurement;

/// One derivation step. Each step owns exactly one field of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationStep {
    LeanMass,
    FatMass,
    FatPercent,
    Bmi,
}

impl DerivationStep {
    /// Evaluation order. Later steps see the values earlier steps filled in.
    pub const ORDER: [DerivationStep; 4] = [
        DerivationStep::LeanMass,
        DerivationStep::FatMass,
        DerivationStep::FatPercent,
        DerivationStep::Bmi,
    ];

    /// Name of the field this step fills.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::LeanMass => "lean_mass",
            Self::FatMass => "fat_mass",
            Self::FatPercent => "fat_percent",
            Self::Bmi => "bmi",
        }
    }

    /// Fill this step's field if it is unset and can be computed.
    ///
    /// Returns the value written, or `None` when the field was already set
    /// or the inputs it needs are missing.
    pub fn apply<H>(self, record: &mut Measurement, heights: &H) -> Option<f64>
    where
        H: HeightProvider + ?Sized,
    {
        if self.current(record).is_some() {
            return None;
        }
        let derived = self.compute(record, heights)?;
        *self.slot(record) = Some(derived);
        tracing::trace!(field = self.field_name(), value = derived, "derived field");
        Some(derived)
    }

    fn current(self, record: &Measurement) -> Option<f64> {
        match self {
            Self::LeanMass => record.lean_mass,
            Self::FatMass => record.fat_mass,
            Self::FatPercent => record.fat_percent,
            Self::Bmi => record.bmi,
        }
    }

    fn slot(self, record: &mut Measurement) -> &mut Option<f64> {
        match self {
            Self::LeanMass => &mut record.lean_mass,
            Self::FatMass => &mut record.fat_mass,
            Self::FatPercent => &mut record.fat_percent,
            Self::Bmi => &mut record.bmi,
        }
    }

    fn compute<H>(self, record: &Measurement, heights: &H) -> Option<f64>
    where
        H: HeightProvider + ?Sized,
    {
        let value = record.value;
        match self {
            Self::LeanMass => mass_from(value, record.fat_mass, record.fat_percent),
            Self::FatMass => mass_from(value, record.lean_mass, record.fat_percent),
            Self::FatPercent => match (record.lean_mass, record.fat_mass) {
                (Some(lean), _) => Some((value - lean) / value * 100.0),
                (None, Some(fat)) => Some(fat / value * 100.0),
                (None, None) => None,
            },
            Self::Bmi => {
                let meters = heights
                    .height_for(record.user_id.as_deref())?
                    .to_meters();
                // Zero, negative, NaN or infinite heights carry no information.
                if !meters.is_finite() || meters <= 0.0 {
                    return None;
                }
                Some(value / (meters * meters))
            }
        }
    }
}

/// One mass component from its complement, or failing that from fat percent.
fn mass_from(value: f64, complement: Option<f64>, fat_percent: Option<f64>) -> Option<f64> {
    match (complement, fat_percent) {
        (Some(other), _) => Some(value - other),
        (None, Some(percent)) => Some(value - value * (percent / 100.0)),
        (None, None) => None,
    }
}

/// Fill every derivable field of `record` in place.
///
/// Fields that already hold a value are never overwritten, so running this
/// again on the same record changes nothing. `record.value` must be a
/// validated, non-zero weight; a zero weight yields non-finite percentages.
pub fn derive_all<H>(record: &mut Measurement, heights: &H)
where
    H: HeightProvider + ?Sized,
{
    let mut filled = 0usize;
    for step in DerivationStep::ORDER {
        if step.apply(record, heights).is_some() {
            filled += 1;
        }
    }

    tracing::debug!(
        date = %record.date,
        filled,
        fully_derived = record.is_fully_derived(),
        "derivation pass complete"
    );
}

/// Recompute BMI for every record, e.g. after a user's height changed.
///
/// This is the only path that replaces an existing BMI. Records whose user
/// has no known height end up without one.
pub fn refresh_bmi<H>(records: &mut [Measurement], heights: &H)
where
    H: HeightProvider + ?Sized,
{
    let mut updated = 0usize;
    for record in records.iter_mut() {
        record.bmi = None;
        if DerivationStep::Bmi.apply(record, heights).is_some() {
            updated += 1;
        }
    }
    tracing::debug!(records = records.len(), updated, "refreshed bmi");
}
