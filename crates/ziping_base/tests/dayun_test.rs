//! Integration tests for decade-cycle pure sequence math.
//!
//! These cover the direction rule, step arithmetic, and the starting-age
//! rounding policy without needing solar-term data.

use ziping_base::{
    CycleDirection, Gender, Stem, StemBranch, TenGod, cycle_direction, decade_steps,
    starting_age_from_days, ten_god,
};

/// Direction is fully determined by year-stem polarity and gender.
#[test]
fn direction_table() {
    use ziping_base::ALL_STEMS;
    for s in ALL_STEMS {
        let yang = s.index() % 2 == 0;
        assert_eq!(
            cycle_direction(s, Gender::Male) == CycleDirection::Forward,
            yang,
            "{} male",
            s.name()
        );
        assert_eq!(
            cycle_direction(s, Gender::Female) == CycleDirection::Forward,
            !yang,
            "{} female",
            s.name()
        );
    }
}

/// Consecutive steps differ by exactly +1 (forward) or -1 (reverse) mod 60,
/// and the direction never changes mid-sequence.
#[test]
fn steps_are_consecutive_in_cycle() {
    for start in [0u8, 17, 59] {
        let month = StemBranch::from_index(start);
        for (dir, delta) in [(CycleDirection::Forward, 1i32), (CycleDirection::Reverse, -1)] {
            let steps = decade_steps(month, Stem::Ding, dir, 4, 12);
            assert_eq!(steps.len(), 12);
            let mut prev = month.index() as i32;
            for s in &steps {
                let expect = (prev + delta).rem_euclid(60);
                assert_eq!(s.pillar.index() as i32, expect);
                prev = expect;
            }
        }
    }
}

/// Each step's Ten-God label matches a direct classification of its stem
/// against the day master.
#[test]
fn step_labels_match_ten_god() {
    let month = StemBranch::from_index(22);
    let steps = decade_steps(month, Stem::Geng, CycleDirection::Forward, 6, 10);
    for s in &steps {
        assert_eq!(s.ten_god, ten_god(Stem::Geng, s.pillar.stem));
    }
}

/// A ten-step sequence visits ten distinct pillars.
#[test]
fn steps_distinct_within_sequence() {
    let steps = decade_steps(
        StemBranch::from_index(31),
        Stem::Ren,
        CycleDirection::Reverse,
        2,
        10,
    );
    for i in 0..steps.len() {
        for j in (i + 1)..steps.len() {
            assert_ne!(steps[i].pillar, steps[j].pillar);
        }
    }
}

/// The 3-days-per-year rule with round-to-nearest, halves up.
#[test]
fn starting_age_rounding_policy() {
    // Exact multiples
    assert_eq!(starting_age_from_days(0.0), 0);
    assert_eq!(starting_age_from_days(3.0), 1);
    assert_eq!(starting_age_from_days(30.0), 10);
    // Below and above the half-year midpoint
    assert_eq!(starting_age_from_days(1.4), 0);
    assert_eq!(starting_age_from_days(1.5), 1);
    assert_eq!(starting_age_from_days(4.4), 1);
    assert_eq!(starting_age_from_days(4.5), 2);
}

/// First step of a male chart born in a Yang year continues forward from the
/// month pillar; the peer label appears when the stems line up.
#[test]
fn forward_first_step_example() {
    // Month Bing-Yin (index 2), day master Ding: first forward step is
    // Ding-Mao, a peer of the day master.
    let steps = decade_steps(
        StemBranch::from_index(2),
        Stem::Ding,
        CycleDirection::Forward,
        8,
        3,
    );
    assert_eq!(steps[0].pillar.stem, Stem::Ding);
    assert_eq!(steps[0].ten_god, TenGod::Friend);
    assert_eq!(steps[0].start_age, 8);
    assert_eq!(steps[0].end_age, 17);
    assert_eq!(steps[2].end_age, 37);
}
