//! Decade-cycle (Da Yun) pure sequence math.
//!
//! The engine crate supplies the astronomical inputs (direction is fixed by
//! year-stem polarity and gender; the starting age comes from the distance
//! to the nearest month-pivot term). Given those, the step sequence is plain
//! 60-cycle arithmetic: one pillar per decade, walking forward or backward
//! from the month pillar.

use crate::element::Polarity;
use crate::sexagenary::StemBranch;
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};

/// Days of life per year of starting age (the classical 3-days-per-year rule).
pub const DAYS_PER_CYCLE_YEAR: f64 = 3.0;

/// Calendar years covered by one decade step.
pub const YEARS_PER_STEP: u16 = 10;

/// Gender of the chart owner; fixes the travel direction together with the
/// year-stem polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Travel direction through the 60-cycle; fixed at creation, constant over
/// the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Reverse,
}

impl CycleDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }

    /// Step delta per decade: +1 forward, -1 reverse.
    pub const fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// Direction rule: Yang year stem + male, or Yin year stem + female, travel
/// forward; the other two combinations travel in reverse.
pub const fn cycle_direction(year_stem: Stem, gender: Gender) -> CycleDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            CycleDirection::Forward
        }
        _ => CycleDirection::Reverse,
    }
}

/// Convert days-to-pivot into a starting age.
///
/// Policy: 3 days = 1 year, rounded to the nearest whole year with halves
/// away from zero (`f64::round`). 0-1 days round to age 0, 2-4 days to
/// age 1, exactly 4.5 days to age 2.
pub fn starting_age_from_days(days: f64) -> u16 {
    debug_assert!(days >= 0.0, "pivot distance must be non-negative");
    (days / DAYS_PER_CYCLE_YEAR).round() as u16
}

/// One decade of the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaYunStep {
    /// 1-based position in the sequence.
    pub order: u16,
    /// The decade's pillar.
    pub pillar: StemBranch,
    /// First age covered, inclusive.
    pub start_age: u16,
    /// Last age covered, inclusive.
    pub end_age: u16,
    /// The decade stem's relation to the day master.
    pub ten_god: TenGod,
}

/// Generate `count` decade steps from the month pillar.
///
/// Step k is the month pillar moved k positions in the travel direction and
/// covers ages [start_age + 10(k-1), start_age + 10k - 1].
pub fn decade_steps(
    month_pillar: StemBranch,
    day_master: Stem,
    direction: CycleDirection,
    start_age: u16,
    count: u16,
) -> Vec<DaYunStep> {
    let mut steps = Vec::with_capacity(count as usize);
    for k in 1..=count {
        let pillar = month_pillar.step(direction.delta() * k as i32);
        let start = start_age + YEARS_PER_STEP * (k - 1);
        steps.push(DaYunStep {
            order: k,
            pillar,
            start_age: start,
            end_age: start + YEARS_PER_STEP - 1,
            ten_god: ten_god(day_master, pillar.stem),
        });
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn direction_all_four_cases() {
        assert_eq!(
            cycle_direction(Stem::Jia, Gender::Male),
            CycleDirection::Forward
        );
        assert_eq!(
            cycle_direction(Stem::Jia, Gender::Female),
            CycleDirection::Reverse
        );
        assert_eq!(
            cycle_direction(Stem::Yi, Gender::Male),
            CycleDirection::Reverse
        );
        assert_eq!(
            cycle_direction(Stem::Yi, Gender::Female),
            CycleDirection::Forward
        );
    }

    #[test]
    fn direction_depends_only_on_polarity() {
        for s in ALL_STEMS {
            let same_parity = ALL_STEMS[(s.index() % 2) as usize];
            assert_eq!(
                cycle_direction(s, Gender::Male),
                cycle_direction(same_parity, Gender::Male)
            );
        }
    }

    #[test]
    fn starting_age_boundaries() {
        assert_eq!(starting_age_from_days(0.0), 0);
        assert_eq!(starting_age_from_days(1.0), 0);
        assert_eq!(starting_age_from_days(2.0), 1);
        assert_eq!(starting_age_from_days(3.0), 1);
        assert_eq!(starting_age_from_days(4.0), 1);
        // Exactly half a year of days rounds up
        assert_eq!(starting_age_from_days(4.5), 2);
        assert_eq!(starting_age_from_days(29.0), 10);
    }

    #[test]
    fn steps_walk_the_cycle() {
        let month = StemBranch::from_index(13);
        let steps = decade_steps(month, Stem::Jia, CycleDirection::Forward, 3, 8);
        assert_eq!(steps.len(), 8);
        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.order as usize, i + 1);
            assert_eq!(s.pillar.index() as i32, (14 + i as i32) % 60);
        }
    }

    #[test]
    fn reverse_steps_walk_backward() {
        let month = StemBranch::from_index(1);
        let steps = decade_steps(month, Stem::Jia, CycleDirection::Reverse, 5, 4);
        let indices: Vec<_> = steps.iter().map(|s| s.pillar.index()).collect();
        assert_eq!(indices, vec![0, 59, 58, 57]);
    }

    #[test]
    fn consecutive_steps_differ_by_one() {
        for dir in [CycleDirection::Forward, CycleDirection::Reverse] {
            let steps = decade_steps(StemBranch::from_index(30), Stem::Geng, dir, 7, 10);
            for pair in steps.windows(2) {
                let diff =
                    (pair[1].pillar.index() as i32 - pair[0].pillar.index() as i32).rem_euclid(60);
                let expect = dir.delta().rem_euclid(60);
                assert_eq!(diff, expect);
            }
        }
    }

    #[test]
    fn age_ranges_tile_decades() {
        let steps = decade_steps(StemBranch::from_index(0), Stem::Bing, CycleDirection::Forward, 6, 5);
        assert_eq!(steps[0].start_age, 6);
        assert_eq!(steps[0].end_age, 15);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].start_age, pair[0].end_age + 1);
        }
        assert_eq!(steps[4].end_age, 6 + 50 - 1);
    }

    #[test]
    fn step_ten_god_uses_day_master() {
        // Month pillar Jia-Zi, day master Jia: first forward step is Yi-Chou,
        // and Yi against Jia is Rob Wealth.
        let steps = decade_steps(StemBranch::from_index(0), Stem::Jia, CycleDirection::Forward, 1, 1);
        assert_eq!(steps[0].pillar.stem, Stem::Yi);
        assert_eq!(steps[0].ten_god, TenGod::RobWealth);
    }
}
