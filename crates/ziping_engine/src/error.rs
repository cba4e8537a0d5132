//! Error types for chart resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziping_solar::SolarError;

/// Errors from four-pillar resolution and the decade-cycle calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the solar-term calculator.
    Solar(SolarError),
    /// Hour index outside 0-11. Never clamped; surfaced immediately.
    InvalidHourIndex(u8),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar(e) => write!(f, "solar error: {e}"),
            Self::InvalidHourIndex(idx) => write!(f, "hour index {idx} outside 0-11"),
        }
    }
}

impl Error for ChartError {}

impl From<SolarError> for ChartError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}
