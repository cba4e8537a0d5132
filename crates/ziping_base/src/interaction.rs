//! Annual-overlay (Liu Nian) interaction tables and scoring.
//!
//! The annual pillar is checked pairwise against the four chart pillars and
//! the active decade pillar: stem combinations, branch harmonies, clashes,
//! triads, and harms, in that priority order. Every match is recorded and
//! contributes its signed weight; there is no early exit, so competing
//! influences integrate into one score instead of one winner being picked.

use crate::branch::Branch;
use crate::dayun::DaYunStep;
use crate::element::Element;
use crate::pillar::FourPillars;
use crate::sexagenary::{StemBranch, year_stem_branch};
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};

/// The five combining stem pairs (a stem and the stem five positions on).
///
/// Returns the transformed element when the pair combines, None otherwise.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    if (a.index() + 5) % 10 != b.index() && (b.index() + 5) % 10 != a.index() {
        return None;
    }
    Some(match a.index() % 5 {
        0 => Element::Earth, // Jia + Ji
        1 => Element::Metal, // Yi + Geng
        2 => Element::Water, // Bing + Xin
        3 => Element::Wood,  // Ding + Ren
        _ => Element::Fire,  // Wu + Gui
    })
}

/// The six branch harmonies.
///
/// Harmony pairs sum to 1 mod 12 (Zi+Chou, Yin+Hai, Mao+Xu, Chen+You,
/// Si+Shen, Wu+Wei). Returns the transformed element when the pair
/// harmonizes, None otherwise. Wu+Wei transforms to Earth (mainstream
/// variant).
pub fn branch_harmony(a: Branch, b: Branch) -> Option<Element> {
    if a == b || (a.index() + b.index()) % 12 != 1 {
        return None;
    }
    Some(match a.index().min(b.index()) {
        0 => Element::Earth, // Zi + Chou
        2 => Element::Wood,  // Yin + Hai
        3 => Element::Fire,  // Mao + Xu
        4 => Element::Metal, // Chen + You
        5 => Element::Water, // Si + Shen
        _ => Element::Earth, // Wu + Wei
    })
}

/// The six clashes: branches opposite each other in the 12-cycle.
pub const fn branch_clash(a: Branch, b: Branch) -> bool {
    (a.index() + 6) % 12 == b.index()
}

/// The six harms (the secondary clash table).
///
/// Harm pairs sum to 7 mod 12 (Zi+Wei, Chou+Wu, Yin+Si, Mao+Chen,
/// Shen+Hai, You+Xu).
pub const fn branch_harm(a: Branch, b: Branch) -> bool {
    a.index() != b.index() && (a.index() + b.index()) % 12 == 7
}

/// The two branches completing this branch's elemental bureau (triad).
///
/// Triad members sit four positions apart; the three groups of each
/// residue class mod 4 form one bureau.
pub fn triad_members(b: Branch) -> (Branch, Branch) {
    let ahead = |n: u8| crate::branch::ALL_BRANCHES[((b.index() + n) % 12) as usize];
    (ahead(4), ahead(8))
}

/// The element of the bureau this branch belongs to.
pub const fn triad_element(b: Branch) -> Element {
    match b.index() % 4 {
        0 => Element::Water, // Shen-Zi-Chen
        1 => Element::Metal, // Si-You-Chou
        2 => Element::Fire,  // Yin-Wu-Xu
        _ => Element::Wood,  // Hai-Mao-Wei
    }
}

/// Kind of interaction between the annual pillar and a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    StemCombination,
    Harmony,
    Clash,
    Triad,
    Harm,
}

impl InteractionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemCombination => "Stem Combination",
            Self::Harmony => "Harmony",
            Self::Clash => "Clash",
            Self::Triad => "Triad",
            Self::Harm => "Harm",
        }
    }

    /// Signed score contribution of one finding of this kind.
    pub const fn weight(self) -> i32 {
        match self {
            Self::StemCombination => 8,
            Self::Harmony => 6,
            Self::Clash => -8,
            Self::Triad => 10,
            Self::Harm => -4,
        }
    }
}

/// Chart position an annual finding is against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Year,
    Month,
    Day,
    Hour,
    Decade,
}

impl OverlayTarget {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
            Self::Decade => "Decade",
        }
    }
}

/// One interaction match, with its signed weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionFinding {
    pub kind: InteractionKind,
    /// The chart position matched.
    pub target: OverlayTarget,
    /// Second position of a triad (the bureau needs two chart branches).
    pub companion: Option<OverlayTarget>,
    /// Transformed/bureau element for combinations, harmonies, and triads.
    pub element: Option<Element>,
    pub weight: i32,
}

/// The annual overlay for one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct LiuNianOverlay {
    /// The queried calendar year.
    pub target_year: i32,
    /// The year's pillar in the 60-cycle.
    pub pillar: StemBranch,
    /// The annual stem's relation to the day master.
    pub ten_god: TenGod,
    /// All interaction matches, in priority order.
    pub findings: Vec<InteractionFinding>,
    /// Sum of all finding weights.
    pub score: i32,
}

/// Compute the annual overlay of `target_year` against a chart and its
/// active decade step.
pub fn liu_nian_overlay(
    chart: &FourPillars,
    decade: &DaYunStep,
    target_year: i32,
) -> LiuNianOverlay {
    let pillar = year_stem_branch(target_year);

    let targets: [(OverlayTarget, Stem, Branch); 5] = [
        (OverlayTarget::Year, chart.year.stem, chart.year.branch),
        (OverlayTarget::Month, chart.month.stem, chart.month.branch),
        (OverlayTarget::Day, chart.day.stem, chart.day.branch),
        (OverlayTarget::Hour, chart.hour.stem, chart.hour.branch),
        (OverlayTarget::Decade, decade.pillar.stem, decade.pillar.branch),
    ];

    fn finding(
        kind: InteractionKind,
        target: OverlayTarget,
        companion: Option<OverlayTarget>,
        element: Option<Element>,
    ) -> InteractionFinding {
        InteractionFinding {
            kind,
            target,
            companion,
            element,
            weight: kind.weight(),
        }
    }

    let mut findings = Vec::new();
    for &(t, stem, _) in &targets {
        if let Some(el) = stem_combination(pillar.stem, stem) {
            findings.push(finding(InteractionKind::StemCombination, t, None, Some(el)));
        }
    }
    for &(t, _, branch) in &targets {
        if let Some(el) = branch_harmony(pillar.branch, branch) {
            findings.push(finding(InteractionKind::Harmony, t, None, Some(el)));
        }
    }
    for &(t, _, branch) in &targets {
        if branch_clash(pillar.branch, branch) {
            findings.push(finding(InteractionKind::Clash, t, None, None));
        }
    }
    // Triads need two chart branches; every completing pair contributes.
    let (m1, m2) = triad_members(pillar.branch);
    for i in 0..targets.len() {
        for j in (i + 1)..targets.len() {
            let (bi, bj) = (targets[i].2, targets[j].2);
            if (bi == m1 && bj == m2) || (bi == m2 && bj == m1) {
                findings.push(finding(
                    InteractionKind::Triad,
                    targets[i].0,
                    Some(targets[j].0),
                    Some(triad_element(pillar.branch)),
                ));
            }
        }
    }
    for &(t, _, branch) in &targets {
        if branch_harm(pillar.branch, branch) {
            findings.push(finding(InteractionKind::Harm, t, None, None));
        }
    }

    let score = findings.iter().map(|f| f.weight).sum();
    LiuNianOverlay {
        target_year,
        pillar,
        ten_god: ten_god(chart.day.stem, pillar.stem),
        findings,
        score,
    }
}
