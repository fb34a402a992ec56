//! Body-composition derivation.
//!
//! Fills the derived fields of a [`Measurement`](crate::Measurement) from
//! whichever of them are already known, in a fixed order, never touching a
//! field that already holds a value.

mod engine;
mod height;

pub use engine::{derive_all, refresh_bmi, DerivationStep};
pub use height::{HeightProvider, NoHeight};
