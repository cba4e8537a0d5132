//! Chart engine: four-pillar resolution and the derived cycles.
//!
//! This crate provides:
//! - `resolve_four_pillars`: year/month/day/hour pillars from a birth
//!   instant under solar-term conventions
//! - `compute_da_yun`: decade-cycle direction, starting age, and steps
//! - Re-exports of the pure annual-overlay and strength assessments, so the
//!   whole query surface is reachable from one crate
//!
//! All functions take the `SolarTermCalculator` explicitly; there is no
//! global state, and identical inputs always produce identical outputs.

pub mod dayun;
pub mod error;
pub mod resolver;

pub use dayun::{DaYunPlan, compute_da_yun};
pub use error::ChartError;
pub use resolver::resolve_four_pillars;

pub use ziping_base::{assess_strength, liu_nian_overlay, ten_god};
