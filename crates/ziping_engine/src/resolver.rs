//! Four-pillar resolution over solar-term data.
//!
//! The resolver owns the three calendrical pivots: the year pillar turns at
//! Lichun, the month pillar at each Jie term, and the day pillar at civil
//! midnight. The solar-term calculator is passed in explicitly; nothing here
//! reaches into shared state.

use ziping_base::{
    ALL_BRANCHES, Branch, FourPillars, Pillar, PillarRole, StemBranch, hour_stem, month_stem,
    year_stem_branch,
};
use ziping_solar::{SolarTerm, SolarTermCalculator, TermMoment};
use ziping_time::CivilTime;

use crate::error::ChartError;

/// Day-cycle anchor: 1949-10-01 was a Jia-Zi day (cycle index 0).
///
/// Cross-checks: 1900-01-01 = Jia-Xu (10), 2000-01-01 = Wu-Wu (54).
const DAY_ANCHOR: i64 = 2_433_191;

/// Resolve the four pillars of a birth instant.
///
/// `hour_index` is the hour branch (0 = Zi, spanning 23:00-00:59). A birth
/// in the late half of the Zi hour (23:00-23:59) keeps the civil day's Day
/// pillar but derives its Hour stem from the following day's stem (the
/// early/late-Zi split school).
pub fn resolve_four_pillars(
    calc: &SolarTermCalculator,
    birth: &CivilTime,
    hour_index: u8,
) -> Result<FourPillars, ChartError> {
    if hour_index > 11 {
        return Err(ChartError::InvalidHourIndex(hour_index));
    }

    let birth_jd = birth.to_jd();
    let terms = calc.terms_for_year(birth.year)?;

    // Year pillar: the fate year turns at the Lichun moment.
    let lichun = &terms[SolarTerm::LiChun.index() as usize];
    let fate_year = if birth_jd >= lichun.jd {
        birth.year
    } else {
        birth.year - 1
    };
    let year_sb = year_stem_branch(fate_year);

    // Month pillar: the containing Jie interval fixes the branch, the
    // Five-Tigers rule the stem.
    let month_branch = month_branch_at(&terms, birth_jd);
    let month_sb = StemBranch {
        stem: month_stem(year_sb.stem, month_branch),
        branch: month_branch,
    };

    // Day pillar: anchored day count, pinned to the civil date.
    let day_index = (birth.day_number() - DAY_ANCHOR).rem_euclid(60) as u8;
    let day_sb = StemBranch::from_index(day_index);

    // Hour pillar: the branch is the hour index; the Five-Rats rule needs
    // the day stem, taken from the next day for late-Zi births.
    let hour_branch = ALL_BRANCHES[hour_index as usize];
    let rat_day = if hour_index == 0 && birth.hour >= 23 {
        day_sb.step(1)
    } else {
        day_sb
    };
    let hour_sb = StemBranch {
        stem: hour_stem(rat_day.stem, hour_branch),
        branch: hour_branch,
    };

    Ok(FourPillars {
        year: Pillar::new(PillarRole::Year, year_sb),
        month: Pillar::new(PillarRole::Month, month_sb),
        day: Pillar::new(PillarRole::Day, day_sb),
        hour: Pillar::new(PillarRole::Hour, hour_sb),
        birth: *birth,
        hour_index,
    })
}

/// Month branch of the Jie interval containing `birth_jd`.
///
/// A birth before Xiaohan of its civil year sits in the Zi month opened by
/// the previous year's Daxue, so the scan starts from Zi.
fn month_branch_at(terms: &[TermMoment; 24], birth_jd: f64) -> Branch {
    let mut branch_index = 0u8; // Zi
    for t in terms {
        if t.jd > birth_jd {
            break;
        }
        if let Some(idx) = t.term.month_branch_index() {
            branch_index = idx;
        }
    }
    ALL_BRANCHES[branch_index as usize]
}

/// Civil JD of the last Jie term at or before `jd`.
///
/// Falls back to the previous year's Daxue for instants before Xiaohan;
/// at the very edge of the supported range that lookup reports
/// `UnsupportedYear`.
pub(crate) fn prev_jie_jd(
    calc: &SolarTermCalculator,
    jd: f64,
    civil_year: i32,
) -> Result<f64, ChartError> {
    let terms = calc.terms_for_year(civil_year)?;
    let mut prev = None;
    for t in terms.iter().filter(|t| t.term.is_jie()) {
        if t.jd <= jd {
            prev = Some(t.jd);
        } else {
            break;
        }
    }
    match prev {
        Some(found) => Ok(found),
        None => {
            let prev_terms = calc.terms_for_year(civil_year - 1)?;
            Ok(prev_terms[SolarTerm::DaXue.index() as usize].jd)
        }
    }
}

/// Civil JD of the first Jie term strictly after `jd`.
///
/// Falls back to the next year's Xiaohan for instants after Daxue.
pub(crate) fn next_jie_jd(
    calc: &SolarTermCalculator,
    jd: f64,
    civil_year: i32,
) -> Result<f64, ChartError> {
    let terms = calc.terms_for_year(civil_year)?;
    for t in terms.iter().filter(|t| t.term.is_jie()) {
        if t.jd > jd {
            return Ok(t.jd);
        }
    }
    let next_terms = calc.terms_for_year(civil_year + 1)?;
    Ok(next_terms[SolarTerm::XiaoHan.index() as usize].jd)
}
