//! Civil time for the chart engine.
//!
//! Every instant in this workspace is a civil date-time at the fixed UTC+8
//! offset (China Standard Time, no DST). This crate provides:
//! - `CivilTime`, the canonical civil representation
//! - Gregorian calendar <-> Julian Date conversion
//! - A continuous integer day count for day-pillar arithmetic

pub mod civil;
pub mod julian;

pub use civil::CivilTime;
pub use julian::{calendar_to_jd, day_number, jd_to_calendar};
