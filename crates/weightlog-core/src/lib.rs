//! # weightlog Core Library
//!
//! Body-composition bookkeeping for a series of weigh-ins. The library is
//! pure computation over in-memory records; fetching and persisting them is
//! left to the caller, and the `weightlog-cli` binary is a thin shell over
//! the same functions.
//!
//! ## Architecture
//!
//! - **Derivation**: fills lean mass, fat mass, fat percent and BMI from
//!   whichever of them a scale reported, never overwriting a known value
//! - **Series**: synthesizes a value for every calendar day a weigh-in
//!   series skips, so charts see one point per day
//! - **Storage**: TOML-based configuration (profile height, interpolation
//!   policy, log level)
//!
//! ## Key Components
//!
//! - [`Measurement`]: a single weigh-in
//! - [`derive_all`]: the derivation pipeline
//! - [`HeightProvider`]: where BMI gets a user's height from
//! - [`SeriesInterpolator`]: daily gap filling
//! - [`Config`]: application configuration management

pub mod derivation;
pub mod error;
pub mod measurement;
pub mod series;
pub mod storage;
pub mod units;

pub use derivation::{derive_all, refresh_bmi, DerivationStep, HeightProvider, NoHeight};
pub use error::{ConfigError, CoreError, ValidationError};
pub use measurement::{day_start_of, Measurement};
pub use series::{
    current, fill_gaps, interpolate, most_recent, sort_by_date, Extrapolation, PiecewiseLinear,
    SeriesInterpolator,
};
pub use storage::Config;
pub use units::{Length, LengthUnit};
