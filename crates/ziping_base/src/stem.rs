//! The 10 heavenly stems (tian gan).
//!
//! Each stem carries a fixed element and polarity; polarity alternates with
//! the index (even = Yang). Two adjacent stems share an element.

use crate::element::{Element, Polarity};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Hanzi for the stem.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Create from raw u8 index.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_STEMS.len() {
            Some(ALL_STEMS[v as usize])
        } else {
            None
        }
    }

    /// Fixed element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn from_u8_bounds() {
        assert_eq!(Stem::from_u8(0), Some(Stem::Jia));
        assert_eq!(Stem::from_u8(9), Some(Stem::Gui));
        assert_eq!(Stem::from_u8(10), None);
    }

    #[test]
    fn elements_pair_up() {
        // Adjacent stems share an element: Jia/Yi Wood, ..., Ren/Gui Water.
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expect = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expect);
        }
    }

    #[test]
    fn known_stems() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Stem::Wu.element(), Element::Earth);
        assert_eq!(Stem::Geng.chinese(), "庚");
    }
}
