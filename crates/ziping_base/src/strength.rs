//! Day-master strength assessment.
//!
//! Three weighted contributions are summed: the month authority (the day
//! master's seasonal state, highest weight), the visible Year/Month/Hour
//! stems, and the hidden stems of all four branches. The verdict thresholds
//! and the favorable-element asymmetry are fixed policy: a strong chart is
//! offered the elements that drain it, never more support.

use crate::branch::Branch;
use crate::element::{Element, ElementRelation, element_relation};
use crate::pillar::FourPillars;

/// Seasonal state of an element in a month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseState {
    /// In command of the season.
    Prospering,
    /// Generated by the element in command.
    Supported,
    /// Generates the element in command.
    Resting,
    /// Controls the element in command.
    Trapped,
    /// Controlled by the element in command.
    Dead,
}

impl PhaseState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prospering => "Prospering",
            Self::Supported => "Supported",
            Self::Resting => "Resting",
            Self::Trapped => "Trapped",
            Self::Dead => "Dead",
        }
    }

    /// Month-authority points of the state.
    pub const fn points(self) -> i32 {
        match self {
            Self::Prospering => 40,
            Self::Supported => 25,
            Self::Resting => 0,
            Self::Trapped => -20,
            Self::Dead => -35,
        }
    }
}

/// Seasonal state of `element` in the month of `month_branch`.
pub const fn month_authority(element: Element, month_branch: Branch) -> PhaseState {
    match element_relation(element, month_branch.season_element()) {
        ElementRelation::Same => PhaseState::Prospering,
        ElementRelation::GeneratedBy => PhaseState::Supported,
        ElementRelation::Generates => PhaseState::Resting,
        ElementRelation::Controls => PhaseState::Trapped,
        ElementRelation::ControlledBy => PhaseState::Dead,
    }
}

/// Stem-contribution points by relation to the day master.
///
/// Supporters are positive, drains negative; magnitudes descend
/// peer > generates-me > I-generate > controls-me > I-control.
pub const fn relation_points(rel: ElementRelation) -> i32 {
    match rel {
        ElementRelation::Same => 12,
        ElementRelation::GeneratedBy => 10,
        ElementRelation::Generates => -8,
        ElementRelation::ControlledBy => -6,
        ElementRelation::Controls => -4,
    }
}

/// Score at or above this is Strong.
pub const STRONG_THRESHOLD: i32 = 20;

/// Score at or below this is Weak.
pub const WEAK_THRESHOLD: i32 = -20;

/// Three-way strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthVerdict {
    Strong,
    Weak,
    Balanced,
}

impl StrengthVerdict {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
        }
    }
}

/// Result of a strength assessment. Immutable once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthAssessment {
    /// Total score (sum of the three sub-scores).
    pub score: i32,
    /// Month-authority contribution.
    pub season_points: i32,
    /// Visible Year/Month/Hour stem contribution.
    pub stem_points: i32,
    /// Hidden-stem contribution over all four branches.
    pub hidden_points: i32,
    pub verdict: StrengthVerdict,
    /// Elements that help this chart.
    pub favorable: Vec<Element>,
    /// Elements that work against it.
    pub unfavorable: Vec<Element>,
}

/// Assess the day master's strength over a chart.
pub fn assess_strength(chart: &FourPillars) -> StrengthAssessment {
    let day_element = chart.day_master().element();

    let season_points = month_authority(day_element, chart.month.branch).points();

    let mut stem_points = 0;
    for stem in [chart.year.stem, chart.month.stem, chart.hour.stem] {
        stem_points += relation_points(element_relation(day_element, stem.element()));
    }

    // Hidden stems are scaled by their weight and rounded per term.
    let mut hidden_points = 0;
    for pillar in chart.pillars() {
        for hidden in pillar.branch.hidden_stems() {
            let base = relation_points(element_relation(day_element, hidden.stem.element()));
            hidden_points += (base as f64 * hidden.weight).round() as i32;
        }
    }

    let score = season_points + stem_points + hidden_points;
    let verdict = if score >= STRONG_THRESHOLD {
        StrengthVerdict::Strong
    } else if score <= WEAK_THRESHOLD {
        StrengthVerdict::Weak
    } else {
        StrengthVerdict::Balanced
    };

    // Strong charts favor the drains (output, wealth, officer); weak charts
    // favor the day master's element and its generator. Balanced charts
    // follow the sign of the score.
    let treat_as_strong = match verdict {
        StrengthVerdict::Strong => true,
        StrengthVerdict::Weak => false,
        StrengthVerdict::Balanced => score >= 0,
    };
    let support = vec![day_element, day_element.generator()];
    let drain = vec![
        day_element.generated(),
        day_element.controlled(),
        day_element.controller(),
    ];
    let (favorable, unfavorable) = if treat_as_strong {
        (drain, support)
    } else {
        (support, drain)
    };

    StrengthAssessment {
        score,
        season_points,
        stem_points,
        hidden_points,
        verdict,
        favorable,
        unfavorable,
    }
}
