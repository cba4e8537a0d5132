//! Ten-God classification of stems against the day master.
//!
//! Element relation x polarity equality gives 10 categories: the five
//! relations each split into a same-polarity and a mixed-polarity god.
//! Total over all 100 ordered stem pairs; no pair is undefined.

use crate::element::{ElementRelation, element_relation};
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// Same element, same polarity (the peer).
    Friend,
    /// Same element, mixed polarity.
    RobWealth,
    /// Day master generates it, same polarity.
    EatingGod,
    /// Day master generates it, mixed polarity.
    HurtingOfficer,
    /// Day master controls it, same polarity.
    IndirectWealth,
    /// Day master controls it, mixed polarity.
    DirectWealth,
    /// It controls the day master, same polarity.
    SevenKillings,
    /// It controls the day master, mixed polarity.
    DirectOfficer,
    /// It generates the day master, same polarity.
    IndirectResource,
    /// It generates the day master, mixed polarity.
    DirectResource,
}

/// All ten gods in table order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Pinyin name of the god.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Bi Jian",
            Self::RobWealth => "Jie Cai",
            Self::EatingGod => "Shi Shen",
            Self::HurtingOfficer => "Shang Guan",
            Self::IndirectWealth => "Pian Cai",
            Self::DirectWealth => "Zheng Cai",
            Self::SevenKillings => "Qi Sha",
            Self::DirectOfficer => "Zheng Guan",
            Self::IndirectResource => "Pian Yin",
            Self::DirectResource => "Zheng Yin",
        }
    }

    /// English name of the god.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Hanzi for the god.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// 0-based table index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Friend => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }
}

/// Classify `other` against the reference stem (the day master).
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same_polarity = day_master.index() % 2 == other.index() % 2;
    match (
        element_relation(day_master.element(), other.element()),
        same_polarity,
    ) {
        (ElementRelation::Same, true) => TenGod::Friend,
        (ElementRelation::Same, false) => TenGod::RobWealth,
        (ElementRelation::Generates, true) => TenGod::EatingGod,
        (ElementRelation::Generates, false) => TenGod::HurtingOfficer,
        (ElementRelation::Controls, true) => TenGod::IndirectWealth,
        (ElementRelation::Controls, false) => TenGod::DirectWealth,
        (ElementRelation::ControlledBy, true) => TenGod::SevenKillings,
        (ElementRelation::ControlledBy, false) => TenGod::DirectOfficer,
        (ElementRelation::GeneratedBy, true) => TenGod::IndirectResource,
        (ElementRelation::GeneratedBy, false) => TenGod::DirectResource,
    }
}
