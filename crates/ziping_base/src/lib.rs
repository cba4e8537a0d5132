//! Pure chart math for Four-Pillars (BaZi) computation.
//!
//! This crate provides:
//! - The sexagenary model: 10 stems, 12 branches, five elements, polarity,
//!   hidden stems, and the 60-cycle pairing
//! - Ten-God classification against the day master
//! - The Five-Tigers (month stem) and Five-Rats (hour stem) derivation rules
//! - Decade-cycle (Da Yun) sequence math
//! - Annual-overlay (Liu Nian) interaction tables and scoring
//! - Day-master strength assessment
//!
//! Everything here is a pure function over constant tables; the engine crate
//! supplies the solar-term inputs.

pub mod branch;
pub mod dayun;
pub mod element;
pub mod interaction;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod strength;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch, HiddenStem};
pub use dayun::{
    CycleDirection, DAYS_PER_CYCLE_YEAR, DaYunStep, Gender, YEARS_PER_STEP, cycle_direction,
    decade_steps, starting_age_from_days,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity, element_relation};
pub use interaction::{
    InteractionFinding, InteractionKind, LiuNianOverlay, OverlayTarget, branch_clash,
    branch_harmony, branch_harm, liu_nian_overlay, stem_combination, triad_element, triad_members,
};
pub use pillar::{FourPillars, Pillar, PillarRole};
pub use sexagenary::{StemBranch, YEAR_CYCLE_ANCHOR, hour_stem, month_stem, year_stem_branch};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{
    PhaseState, STRONG_THRESHOLD, StrengthAssessment, StrengthVerdict, WEAK_THRESHOLD,
    assess_strength, month_authority, relation_points,
};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
