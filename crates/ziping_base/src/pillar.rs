//! Role-tagged pillars and the four-pillar chart.

use ziping_time::CivilTime;

use crate::branch::Branch;
use crate::sexagenary::StemBranch;
use crate::stem::Stem;

/// Which position of the chart a pillar occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// One stem-branch pair in a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub role: PillarRole,
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(role: PillarRole, sb: StemBranch) -> Self {
        Self {
            role,
            stem: sb.stem,
            branch: sb.branch,
        }
    }

    /// The pillar's pair as a cycle value.
    pub fn stem_branch(&self) -> StemBranch {
        StemBranch {
            stem: self.stem,
            branch: self.branch,
        }
    }
}

/// A complete birth chart: one pillar per role plus the instant it was
/// resolved from.
///
/// Produced atomically by the resolver and never mutated; the birth instant
/// and hour index ride along because the decade-cycle starting age needs
/// them downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Birth instant (civil, UTC+8) the chart was resolved from.
    pub birth: CivilTime,
    /// Hour-branch index (0 = Zi) the chart was resolved with.
    pub hour_index: u8,
}

impl FourPillars {
    /// The day master: the Day pillar's stem, reference point for all
    /// relational scoring.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// The four pillars in Year, Month, Day, Hour order.
    pub fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::year_stem_branch;

    fn sample_chart() -> FourPillars {
        FourPillars {
            year: Pillar::new(PillarRole::Year, year_stem_branch(1989)),
            month: Pillar::new(PillarRole::Month, StemBranch::from_index(13)),
            day: Pillar::new(PillarRole::Day, StemBranch::from_index(54)),
            hour: Pillar::new(PillarRole::Hour, StemBranch::from_index(30)),
            birth: CivilTime::new(1990, 2, 3, 12, 0, 0.0),
            hour_index: 6,
        }
    }

    #[test]
    fn day_master_is_day_stem() {
        let chart = sample_chart();
        assert_eq!(chart.day_master(), chart.day.stem);
    }

    #[test]
    fn pillars_in_role_order() {
        let chart = sample_chart();
        let roles: Vec<_> = chart.pillars().iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            [
                PillarRole::Year,
                PillarRole::Month,
                PillarRole::Day,
                PillarRole::Hour
            ]
        );
    }

    #[test]
    fn pillar_round_trips_stem_branch() {
        let sb = StemBranch::from_index(37);
        let p = Pillar::new(PillarRole::Month, sb);
        assert_eq!(p.stem_branch(), sb);
    }
}
