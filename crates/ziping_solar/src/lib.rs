//! Solar-term astronomy: the 24 term moments of a civil year.
//!
//! This crate provides:
//! - Apparent solar longitude from the low-precision solar theory
//! - A self-contained ΔT (TT - UT) model for 1900-2100
//! - Newton inversion of the longitude to the 24 term moments, expressed
//!   as civil UTC+8 date-times
//!
//! All output moments live in the single fixed civil offset; callers never
//! see or choose another one.

pub mod delta_t;
pub mod error;
pub mod sun;
pub mod terms;

pub use delta_t::delta_t_seconds;
pub use error::SolarError;
pub use sun::{MEAN_MOTION_DEG_PER_DAY, apparent_solar_longitude, normalize_360, normalize_pm180};
pub use terms::{
    ALL_SOLAR_TERMS, MAX_YEAR, MIN_YEAR, SolarTerm, SolarTermCalculator, TermMoment,
};
