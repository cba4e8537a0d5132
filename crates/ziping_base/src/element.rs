//! The five elements (wu xing) and yin-yang polarity.
//!
//! The generating cycle is Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! The controlling cycle skips one step: each element controls the element
//! two positions ahead in the generating order (Wood controls Earth, etc.).

/// The five elements in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Pinyin name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mu",
            Self::Fire => "Huo",
            Self::Earth => "Tu",
            Self::Metal => "Jin",
            Self::Water => "Shui",
        }
    }

    /// English name of the element.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanzi for the element.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generating-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (one step ahead in the cycle).
    pub const fn generated(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls (two steps ahead in the cycle).
    pub const fn controlled(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// The element that generates this one.
    pub const fn generator(self) -> Element {
        ALL_ELEMENTS[((self.index() + 4) % 5) as usize]
    }

    /// The element that controls this one.
    pub const fn controller(self) -> Element {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }
}

/// How element `b` stands relative to a reference element `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// `a` generates `b`.
    Generates,
    /// `b` generates `a`.
    GeneratedBy,
    /// `a` controls `b`.
    Controls,
    /// `b` controls `a`.
    ControlledBy,
}

/// Classify the relation of `b` to the reference element `a`.
///
/// Total over all 25 ordered pairs; the five cases partition the cycle.
pub const fn element_relation(a: Element, b: Element) -> ElementRelation {
    // Distance from a to b around the generating cycle fixes the relation.
    match (b.index() + 5 - a.index()) % 5 {
        0 => ElementRelation::Same,
        1 => ElementRelation::Generates,
        2 => ElementRelation::Controls,
        3 => ElementRelation::ControlledBy,
        _ => ElementRelation::GeneratedBy,
    }
}

/// Yin-yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}
