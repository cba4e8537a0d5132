//! Error types for solar-term computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the solar-term calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolarError {
    /// Requested year is outside the supported 1900-2100 range. The model
    /// never extrapolates silently.
    UnsupportedYear(i32),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedYear(year) => {
                write!(f, "year {year} outside supported range 1900-2100")
            }
        }
    }
}

impl Error for SolarError {}
