//! Sources of user height for BMI.

use std::collections::HashMap;

use crate::units::Length;

/// Supplies a user's height.
///
/// Returning `None` is a normal outcome: the record simply gets no BMI.
pub trait HeightProvider {
    fn height_for(&self, user_id: Option<&str>) -> Option<Length>;
}

/// Provider for callers that never know a height.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeight;

impl HeightProvider for NoHeight {
    fn height_for(&self, _user_id: Option<&str>) -> Option<Length> {
        None
    }
}

/// A single height used for every record.
impl HeightProvider for Length {
    fn height_for(&self, _user_id: Option<&str>) -> Option<Length> {
        Some(*self)
    }
}

impl HeightProvider for Option<Length> {
    fn height_for(&self, _user_id: Option<&str>) -> Option<Length> {
        *self
    }
}

/// Per-user heights keyed by user id. Records without a user get no height.
impl HeightProvider for HashMap<String, Length> {
    fn height_for(&self, user_id: Option<&str>) -> Option<Length> {
        user_id.and_then(|id| self.get(id).copied())
    }
}

impl<T: HeightProvider + ?Sized> HeightProvider for &T {
    fn height_for(&self, user_id: Option<&str>) -> Option<Length> {
        (**self).height_for(user_id)
    }
}
