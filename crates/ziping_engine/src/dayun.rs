//! Decade-cycle (Da Yun) orchestration: direction, starting age, steps.
//!
//! The pure sequence math lives in `ziping_base::dayun`; this module
//! supplies its astronomical input, the distance from birth to the nearest
//! Jie term in the direction of travel.

use ziping_base::{
    CycleDirection, DaYunStep, FourPillars, Gender, cycle_direction, decade_steps,
    starting_age_from_days,
};
use ziping_solar::SolarTermCalculator;

use crate::error::ChartError;
use crate::resolver::{next_jie_jd, prev_jie_jd};

/// A computed decade progression.
#[derive(Debug, Clone, PartialEq)]
pub struct DaYunPlan {
    /// Travel direction, constant over the whole sequence.
    pub direction: CycleDirection,
    /// Age at which the first step begins.
    pub start_age: u16,
    /// The decade steps, in order.
    pub steps: Vec<DaYunStep>,
}

/// Compute the decade progression of a chart.
///
/// Forward charts measure to the next Jie term, reverse charts back to the
/// previous one; days convert to years at 3 days per year (rounded to the
/// nearest year, halves up).
pub fn compute_da_yun(
    calc: &SolarTermCalculator,
    chart: &FourPillars,
    gender: Gender,
    steps: u16,
) -> Result<DaYunPlan, ChartError> {
    let direction = cycle_direction(chart.year.stem, gender);
    let birth_jd = chart.birth.to_jd();

    let pivot_jd = match direction {
        CycleDirection::Forward => next_jie_jd(calc, birth_jd, chart.birth.year)?,
        CycleDirection::Reverse => prev_jie_jd(calc, birth_jd, chart.birth.year)?,
    };
    let start_age = starting_age_from_days((pivot_jd - birth_jd).abs());

    Ok(DaYunPlan {
        direction,
        start_age,
        steps: decade_steps(
            chart.month.stem_branch(),
            chart.day_master(),
            direction,
            start_age,
            steps,
        ),
    })
}
