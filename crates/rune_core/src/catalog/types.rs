use serde::{Deserialize, Serialize};
use std::fmt;

use super::data::PATTERN_COUNT;
use crate::stroke::StrokeClassSet;

/// 룬 심볼
///
/// Declaration order is catalog order; tier boundaries are defined on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rune {
    // Low tier
    El,
    Eld,
    Tir,
    Nef,
    Eth,
    Ith,
    Tal,
    Ral,
    Ort,
    Thul,
    // Mid tier
    Amn,
    Sol,
    Shael,
    Dol,
    Hel,
    Io,
    Lum,
    Ko,
    Fal,
    Lem,
    // High tier
    Pul,
    Um,
    Mal,
    Ist,
    Gul,
    Vex,
    Ohm,
    Lo,
    Sur,
    Ber,
    Jah,
    Cham,
    Zod,
}

impl Rune {
    pub const ALL: [Rune; 33] = [
        Rune::El,
        Rune::Eld,
        Rune::Tir,
        Rune::Nef,
        Rune::Eth,
        Rune::Ith,
        Rune::Tal,
        Rune::Ral,
        Rune::Ort,
        Rune::Thul,
        Rune::Amn,
        Rune::Sol,
        Rune::Shael,
        Rune::Dol,
        Rune::Hel,
        Rune::Io,
        Rune::Lum,
        Rune::Ko,
        Rune::Fal,
        Rune::Lem,
        Rune::Pul,
        Rune::Um,
        Rune::Mal,
        Rune::Ist,
        Rune::Gul,
        Rune::Vex,
        Rune::Ohm,
        Rune::Lo,
        Rune::Sur,
        Rune::Ber,
        Rune::Jah,
        Rune::Cham,
        Rune::Zod,
    ];

    /// 희귀도 티어
    pub fn tier(self) -> RuneTier {
        if self <= Rune::Thul {
            RuneTier::Low
        } else if self <= Rune::Lem {
            RuneTier::Mid
        } else {
            RuneTier::High
        }
    }
}

/// Rarity band used to weight ambiguous matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuneTier {
    Low,
    Mid,
    High,
}

/// 룬워드 (룬 조합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Runeword {
    Steel,
    Nadir,
    Malice,
    Stealth,
    Leaf,
    Zephyr,
    AncientsPledge,
    Strength,
    Edge,
    KingsGrace,
    Radiance,
    Lore,
    Rhyme,
    Peace,
    Myth,
    Black,
    White,
    Smoke,
    Splendor,
    Melody,
    Lionheart,
    Treachery,
    Wealth,
    Lawbringer,
    Enlightenment,
    CrescentMoon,
    Duress,
    Gloom,
    Prudence,
    Rain,
    Venom,
    Delirium,
    Principle,
    Chaos,
    Wind,
    Dragon,
    Dream,
    Fury,
    Enigma,
}

/// Dense index of an atomic pattern within the catalog.
///
/// Only constructible inside the catalog range, so an id handed out by the
/// recognizer always resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PatternId(u8);

impl PatternId {
    pub fn new(index: usize) -> Option<Self> {
        if index < PATTERN_COUNT {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 단일 룬 획 패턴
///
/// One way of drawing a rune. Several patterns may produce the same rune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtomicPattern {
    pub id: PatternId,
    pub rune: Rune,
    pub slots: Vec<StrokeClassSet>,
    /// Slots that may not be elided
    pub min_len: usize,
}

impl AtomicPattern {
    /// Does not validate; the catalog checks slot rules when it is built.
    pub fn new(id: PatternId, rune: Rune, slots: &[StrokeClassSet]) -> Self {
        let min_len = slots.iter().filter(|s| !s.is_elidable()).count();
        Self { id, rune, slots: slots.to_vec(), min_len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn tier(&self) -> RuneTier {
        self.rune.tier()
    }
}

/// 룬워드 조건: 서로 다른 룬 2~3개
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositePattern {
    pub id: Runeword,
    pub required: Vec<Rune>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Rune::El.tier(), RuneTier::Low);
        assert_eq!(Rune::Thul.tier(), RuneTier::Low);
        assert_eq!(Rune::Amn.tier(), RuneTier::Mid);
        assert_eq!(Rune::Lem.tier(), RuneTier::Mid);
        assert_eq!(Rune::Pul.tier(), RuneTier::High);
        assert_eq!(Rune::Zod.tier(), RuneTier::High);
    }

    #[test]
    fn test_all_runes_in_declaration_order() {
        assert!(Rune::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Rune::ALL.iter().filter(|r| r.tier() == RuneTier::Low).count(), 10);
        assert_eq!(Rune::ALL.iter().filter(|r| r.tier() == RuneTier::Mid).count(), 10);
        assert_eq!(Rune::ALL.iter().filter(|r| r.tier() == RuneTier::High).count(), 13);
    }

    #[test]
    fn test_pattern_id_range() {
        assert_eq!(PatternId::new(0).map(PatternId::index), Some(0));
        assert_eq!(PatternId::new(PATTERN_COUNT - 1).map(PatternId::index), Some(PATTERN_COUNT - 1));
        assert!(PatternId::new(PATTERN_COUNT).is_none());
        assert!(PatternId::new(usize::MAX).is_none());
    }

    #[test]
    fn test_min_len_counts_required_slots() {
        let id = PatternId::new(0).unwrap();
        let pattern = AtomicPattern::new(
            id,
            Rune::Tir,
            &[
                StrokeClassSet::SHARP,
                StrokeClassSet::LINE_OR_NOTHING,
                StrokeClassSet::SHARP_R,
                StrokeClassSet::LINE_OR_NOTHING,
                StrokeClassSet::SHARP_R,
            ],
        );
        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.min_len, 3);
    }
}
