//! The 60-cycle of stem-branch pairs and the classical derivation rules.
//!
//! Only same-polarity pairs exist: the 120 free combinations collapse to 60.
//! The cycle anchors the year pillar (1984 = Jia-Zi) and carries the
//! Five-Tigers (month stem) and Five-Rats (hour stem) derivation rules.

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// Reference year: CE 1984 is a Jia-Zi year (cycle index 0).
pub const YEAR_CYCLE_ANCHOR: i32 = 1984;

/// One of the 60 stem-branch pairs.
///
/// Invariant: `stem` and `branch` share polarity. Construct via
/// [`StemBranch::from_index`] or [`StemBranch::from_pair`]; a hand-built
/// mixed-polarity pair has no cycle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Pair at a cycle position (0 = Jia-Zi .. 59 = Gui-Hai).
    ///
    /// Panics if `index >= 60`; indices are produced by modular arithmetic
    /// upstream, so an out-of-range value is a defect, not an input error.
    pub fn from_index(index: u8) -> Self {
        assert!(index < 60, "sexagenary index out of range: {index}");
        Self {
            stem: ALL_STEMS[(index % 10) as usize],
            branch: ALL_BRANCHES[(index % 12) as usize],
        }
    }

    /// Pair a stem and branch; None when their polarities differ.
    pub fn from_pair(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Cycle position of the pair (0..=59).
    ///
    /// Solves index = stem (mod 10), index = branch (mod 12) over the
    /// 60-cycle; the closed form is (6*stem - 5*branch) mod 60.
    pub fn index(&self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Step `n` positions through the cycle (negative steps go backward).
    pub fn step(&self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(60) as u8)
    }

    /// Pinyin name, e.g. "Jia-Zi".
    pub fn name(&self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Hanzi name, e.g. "甲子".
    pub fn chinese(&self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

/// Pillar of a fate year: its position in the 60-year cycle.
pub fn year_stem_branch(fate_year: i32) -> StemBranch {
    StemBranch::from_index((fate_year - YEAR_CYCLE_ANCHOR).rem_euclid(60) as u8)
}

/// Month stem by the Five-Tigers rule.
///
/// The year stem fixes which stem opens the Yin (Tiger) month; later months
/// advance the stem one position per branch.
pub fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let first = match year_stem {
        Stem::Jia | Stem::Ji => Stem::Bing,
        Stem::Yi | Stem::Geng => Stem::Wu,
        Stem::Bing | Stem::Xin => Stem::Geng,
        Stem::Ding | Stem::Ren => Stem::Ren,
        Stem::Wu | Stem::Gui => Stem::Jia,
    };
    let months_from_yin = (month_branch.index() + 12 - Branch::Yin.index()) % 12;
    ALL_STEMS[((first.index() + months_from_yin) % 10) as usize]
}

/// Hour stem by the Five-Rats rule.
///
/// The day stem fixes which stem opens the Zi hour; later hour branches
/// advance the stem one position per branch.
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let first = match day_stem {
        Stem::Jia | Stem::Ji => Stem::Jia,
        Stem::Yi | Stem::Geng => Stem::Bing,
        Stem::Bing | Stem::Xin => Stem::Wu,
        Stem::Ding | Stem::Ren => Stem::Geng,
        Stem::Wu | Stem::Gui => Stem::Ren,
    };
    ALL_STEMS[((first.index() + hour_branch.index()) % 10) as usize]
}
