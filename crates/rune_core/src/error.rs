use thiserror::Error;

use crate::catalog::{Rune, Runeword};
use crate::stroke::StrokeClass;

/// 카탈로그 구성 오류
///
/// Raised while building a [`crate::Catalog`]. These are programmer errors in the
/// pattern tables; the process must not start with a catalog that fails here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Pattern {index} ({rune:?}) has {len} slots, expected {min}..={max}")]
    PatternLength { index: usize, rune: Rune, len: usize, min: usize, max: usize },

    #[error("Pattern {index} ({rune:?}) requires reversal on its first slot")]
    FirstSlotReversed { index: usize, rune: Rune },

    #[error("Pattern {index} ({rune:?}) marks its first slot as elidable")]
    FirstSlotElidable { index: usize, rune: Rune },

    #[error("Pattern {index} ({rune:?}) slot {slot} uses an unsanctioned class set {bits:#06x}")]
    UnsanctionedSlot { index: usize, rune: Rune, slot: usize, bits: u16 },

    #[error("Runeword {runeword:?} requires {len} runes, expected {min}..={max}")]
    CompositeLength { runeword: Runeword, len: usize, min: usize, max: usize },

    #[error("Runeword {runeword:?} lists {rune:?} more than once")]
    DuplicateRequirement { runeword: Runeword, rune: Rune },

    #[error("Runeword {runeword:?} requires {rune:?}, which no pattern produces")]
    UnknownRune { runeword: Runeword, rune: Rune },

    #[error("Catalog holds {count} patterns, at most {max} are addressable")]
    PatternCount { count: usize, max: usize },
}

/// 획 생성 오류
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeError {
    #[error("{class:?} already encodes direction and cannot be reversed")]
    ReversedLine { class: StrokeClass },

    #[error("The empty-slot sentinel is not a drawable stroke")]
    SentinelClass,
}

/// 설정 로드 오류
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
