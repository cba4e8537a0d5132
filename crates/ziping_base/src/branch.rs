//! The 12 earthly branches (di zhi).
//!
//! Each branch carries a fixed element, polarity, and 1-3 hidden stems
//! (the primary stem at weight 1.0 first, secondaries at 0.5). The four
//! cardinal pairs fix the seasonal element-in-command used by the
//! month-authority table.

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// A stem hidden inside a branch, with its scoring weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenStem {
    pub stem: Stem,
    /// 1.0 for the primary stem, 0.5 for secondaries.
    pub weight: f64,
}

impl Branch {
    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Hanzi for the branch.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Animal of the branch (Zi = Rat .. Hai = Pig).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from raw u8 index.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_BRANCHES.len() {
            Some(ALL_BRANCHES[v as usize])
        } else {
            None
        }
    }

    /// Fixed element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Polarity: even indices are Yang, odd are Yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems of the branch, primary first.
    ///
    /// Mainstream table; in particular Chen hides Wu-Yi-Gui.
    #[rustfmt::skip]
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        match self {
            Self::Zi => &[
                HiddenStem { stem: Stem::Gui, weight: 1.0 },
            ],
            Self::Chou => &[
                HiddenStem { stem: Stem::Ji, weight: 1.0 },
                HiddenStem { stem: Stem::Gui, weight: 0.5 },
                HiddenStem { stem: Stem::Xin, weight: 0.5 },
            ],
            Self::Yin => &[
                HiddenStem { stem: Stem::Jia, weight: 1.0 },
                HiddenStem { stem: Stem::Bing, weight: 0.5 },
                HiddenStem { stem: Stem::Wu, weight: 0.5 },
            ],
            Self::Mao => &[
                HiddenStem { stem: Stem::Yi, weight: 1.0 },
            ],
            Self::Chen => &[
                HiddenStem { stem: Stem::Wu, weight: 1.0 },
                HiddenStem { stem: Stem::Yi, weight: 0.5 },
                HiddenStem { stem: Stem::Gui, weight: 0.5 },
            ],
            Self::Si => &[
                HiddenStem { stem: Stem::Bing, weight: 1.0 },
                HiddenStem { stem: Stem::Geng, weight: 0.5 },
                HiddenStem { stem: Stem::Wu, weight: 0.5 },
            ],
            Self::Wu => &[
                HiddenStem { stem: Stem::Ding, weight: 1.0 },
                HiddenStem { stem: Stem::Ji, weight: 0.5 },
            ],
            Self::Wei => &[
                HiddenStem { stem: Stem::Ji, weight: 1.0 },
                HiddenStem { stem: Stem::Ding, weight: 0.5 },
                HiddenStem { stem: Stem::Yi, weight: 0.5 },
            ],
            Self::Shen => &[
                HiddenStem { stem: Stem::Geng, weight: 1.0 },
                HiddenStem { stem: Stem::Ren, weight: 0.5 },
                HiddenStem { stem: Stem::Wu, weight: 0.5 },
            ],
            Self::You => &[
                HiddenStem { stem: Stem::Xin, weight: 1.0 },
            ],
            Self::Xu => &[
                HiddenStem { stem: Stem::Wu, weight: 1.0 },
                HiddenStem { stem: Stem::Xin, weight: 0.5 },
                HiddenStem { stem: Stem::Ding, weight: 0.5 },
            ],
            Self::Hai => &[
                HiddenStem { stem: Stem::Ren, weight: 1.0 },
                HiddenStem { stem: Stem::Jia, weight: 0.5 },
            ],
        }
    }

    /// The element in command during this branch's month.
    ///
    /// The four Earth branches close each season, so all four command Earth.
    pub const fn season_element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Wei | Self::Xu | Self::Chou => Element::Earth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn from_u8_bounds() {
        assert_eq!(Branch::from_u8(0), Some(Branch::Zi));
        assert_eq!(Branch::from_u8(11), Some(Branch::Hai));
        assert_eq!(Branch::from_u8(12), None);
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{} has {n} hidden stems", b.name());
        }
    }

    #[test]
    fn hidden_primary_first() {
        for b in ALL_BRANCHES {
            let hs = b.hidden_stems();
            assert!((hs[0].weight - 1.0).abs() < 1e-12);
            for h in &hs[1..] {
                assert!((h.weight - 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn primary_hidden_stem_matches_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems()[0].stem.element(), b.element());
        }
    }

    #[test]
    fn chen_hidden_set() {
        let hs = Branch::Chen.hidden_stems();
        assert_eq!(hs[0].stem, Stem::Wu);
        assert_eq!(hs[1].stem, Stem::Yi);
        assert_eq!(hs[2].stem, Stem::Gui);
    }

    #[test]
    fn season_elements() {
        assert_eq!(Branch::Yin.season_element(), Element::Wood);
        assert_eq!(Branch::Wu.season_element(), Element::Fire);
        assert_eq!(Branch::You.season_element(), Element::Metal);
        assert_eq!(Branch::Zi.season_element(), Element::Water);
        assert_eq!(Branch::Chou.season_element(), Element::Earth);
        assert_eq!(Branch::Xu.season_element(), Element::Earth);
    }

    #[test]
    fn polarity_alternates() {
        for b in ALL_BRANCHES {
            let expect = if b.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(b.polarity(), expect);
        }
    }
}
