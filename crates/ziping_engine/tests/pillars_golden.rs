//! Golden chart tests against known pillar values.
//!
//! Anchors: 1984 = Jia-Zi year, 1949-10-01 = Jia-Zi day, and a fully
//! worked chart for 2000-01-01 noon.

use ziping_base::{
    Branch, Gender, Stem, StrengthVerdict, assess_strength, liu_nian_overlay,
};
use ziping_engine::{compute_da_yun, resolve_four_pillars};
use ziping_solar::SolarTermCalculator;
use ziping_time::CivilTime;

fn calc() -> SolarTermCalculator {
    SolarTermCalculator::new()
}

/// Births before Lichun belong to the previous fate year: 1990-02-03 is
/// Ji-Si (1989), not Geng-Wu (1990).
#[test]
fn year_pivot_before_lichun() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(1990, 2, 3, 12, 0, 0.0), 6).unwrap();
    assert_eq!(chart.year.stem, Stem::Ji);
    assert_eq!(chart.year.branch, Branch::Si);
}

/// Births after Lichun take the civil year's pillar: 1990-02-04 noon is
/// past the 10:14 Lichun moment.
#[test]
fn year_pivot_after_lichun() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(1990, 2, 4, 12, 0, 0.0), 6).unwrap();
    assert_eq!(chart.year.stem, Stem::Geng);
    assert_eq!(chart.year.branch, Branch::Wu);
}

/// Fully worked golden chart: 2000-01-01 12:00 is
/// Ji-Mao / Bing-Zi / Wu-Wu / Wu-Wu.
#[test]
fn chart_2000_01_01_noon() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(2000, 1, 1, 12, 0, 0.0), 6).unwrap();
    assert_eq!((chart.year.stem, chart.year.branch), (Stem::Ji, Branch::Mao));
    assert_eq!(
        (chart.month.stem, chart.month.branch),
        (Stem::Bing, Branch::Zi)
    );
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Wu, Branch::Wu));
    assert_eq!((chart.hour.stem, chart.hour.branch), (Stem::Wu, Branch::Wu));
}

/// The day-pillar law: any date N days past the anchor maps to
/// (anchor + N) mod 60.
#[test]
fn day_pillar_advances_modulo_sixty() {
    let anchor =
        resolve_four_pillars(&calc(), &CivilTime::new(1949, 10, 1, 12, 0, 0.0), 6).unwrap();
    assert_eq!(anchor.day.stem_branch().index(), 0);

    let later =
        resolve_four_pillars(&calc(), &CivilTime::new(1990, 2, 3, 12, 0, 0.0), 6).unwrap();
    let days = CivilTime::new(1990, 2, 3, 0, 0, 0.0).day_number()
        - CivilTime::new(1949, 10, 1, 0, 0, 0.0).day_number();
    assert_eq!(
        later.day.stem_branch().index() as i64,
        days.rem_euclid(60)
    );
}

/// Zi-hour policy: a 23:xx birth keeps the civil day's Day pillar but takes
/// its Hour stem from the following day; the 00:xx side uses the same day
/// for both. The two halves share the hour pillar.
#[test]
fn zi_hour_day_boundary_policy() {
    let late =
        resolve_four_pillars(&calc(), &CivilTime::new(2000, 1, 1, 23, 30, 0.0), 0).unwrap();
    let early =
        resolve_four_pillars(&calc(), &CivilTime::new(2000, 1, 2, 0, 30, 0.0), 0).unwrap();

    // Day pillar pinned to the civil date
    assert_eq!(late.day.stem_branch().index(), 54); // Wu-Wu, Jan 1
    assert_eq!(early.day.stem_branch().index(), 55); // Ji-Wei, Jan 2

    // Hour stem of the late half comes from Jan 2's Ji day: Five Rats
    // gives Jia-Zi, identical to the early half.
    assert_eq!((late.hour.stem, late.hour.branch), (Stem::Jia, Branch::Zi));
    assert_eq!(late.hour, early.hour);
}

/// A noon Zi-hour index is taken at face value; the next-day rule only
/// applies to the 23:00 half.
#[test]
fn zi_hour_rule_ignores_daytime() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(2000, 1, 1, 0, 30, 0.0), 0).unwrap();
    // Day stem Wu: Five Rats opens the Zi hour with Ren.
    assert_eq!(chart.hour.stem, Stem::Ren);
}

/// Decade progression for a reverse chart: fate year 1989 is Ji (Yin), so a
/// male chart travels in reverse and each step steps the cycle back by one.
#[test]
fn dayun_reverse_walk() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(1990, 2, 3, 12, 0, 0.0), 6).unwrap();
    let plan = compute_da_yun(&calc(), &chart, Gender::Male, 8).unwrap();
    let month_idx = chart.month.stem_branch().index() as i32;
    for (k, step) in plan.steps.iter().enumerate() {
        let expect = (month_idx - (k as i32 + 1)).rem_euclid(60);
        assert_eq!(step.pillar.index() as i32, expect);
    }
    // The same chart for a female travels forward.
    let plan_f = compute_da_yun(&calc(), &chart, Gender::Female, 2).unwrap();
    assert_eq!(
        plan_f.steps[0].pillar.index() as i32,
        (month_idx + 1).rem_euclid(60)
    );
}

/// The annual overlay built on engine output: 2024 is Jia-Chen.
#[test]
fn liunian_2024_over_chart() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(1990, 2, 3, 12, 0, 0.0), 6).unwrap();
    let plan = compute_da_yun(&calc(), &chart, Gender::Male, 8).unwrap();
    let overlay = liu_nian_overlay(&chart, &plan.steps[2], 2024);
    assert_eq!(overlay.pillar.stem, Stem::Jia);
    assert_eq!(overlay.pillar.branch, Branch::Chen);
    let sum: i32 = overlay.findings.iter().map(|f| f.weight).sum();
    assert_eq!(overlay.score, sum);
}

/// Strength assessment runs over engine output and classifies coherently.
#[test]
fn strength_over_resolved_chart() {
    let chart =
        resolve_four_pillars(&calc(), &CivilTime::new(2000, 1, 1, 12, 0, 0.0), 6).unwrap();
    let a = assess_strength(&chart);
    assert_eq!(a.score, a.season_points + a.stem_points + a.hidden_points);
    match a.verdict {
        StrengthVerdict::Strong => assert!(a.score >= 20),
        StrengthVerdict::Weak => assert!(a.score <= -20),
        StrengthVerdict::Balanced => assert!(a.score > -20 && a.score < 20),
    }
}

/// Determinism: the same input always resolves to the same chart.
#[test]
fn resolution_is_deterministic() {
    let birth = CivilTime::new(1984, 11, 5, 3, 20, 0.0);
    let a = resolve_four_pillars(&calc(), &birth, 2).unwrap();
    let b = resolve_four_pillars(&calc(), &birth, 2).unwrap();
    assert_eq!(a, b);
}
