// 패턴 카탈로그
// 룬 획 패턴 + 룬워드 조합 테이블, 프로세스 시작 시 한 번 검증

pub mod data;
pub mod types;

pub use types::{AtomicPattern, CompositePattern, PatternId, Rune, RuneTier, Runeword};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::stroke::StrokeClassSet;

pub const MIN_PATTERN_LEN: usize = 5;
pub const MAX_PATTERN_LEN: usize = 9;
pub const MIN_RUNEWORD_LEN: usize = 2;
pub const MAX_RUNEWORD_LEN: usize = 3;

static STANDARD: Lazy<Catalog> = Lazy::new(|| match Catalog::try_standard() {
    Ok(catalog) => catalog,
    Err(e) => panic!("built-in rune catalog is invalid: {e}"),
});

/// Validated, read-only set of rune patterns and runewords
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<AtomicPattern>,
    composites: Vec<CompositePattern>,
}

impl Catalog {
    /// Process-wide catalog built from the built-in tables.
    ///
    /// Panics on first use if the tables fail validation.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Build the built-in tables without caching, surfacing validation errors.
    pub fn try_standard() -> Result<Self> {
        Self::build(&data::RUNE_PATTERNS, &data::RUNEWORDS)
    }

    /// Build and validate a catalog. Entry order becomes catalog order.
    pub fn build(
        patterns: &[(Rune, &[StrokeClassSet])],
        runewords: &[(Runeword, &[Rune])],
    ) -> Result<Self> {
        if patterns.len() > data::PATTERN_COUNT {
            return Err(CatalogError::PatternCount {
                count: patterns.len(),
                max: data::PATTERN_COUNT,
            });
        }

        let mut atomic = Vec::with_capacity(patterns.len());
        for (index, (rune, slots)) in patterns.iter().enumerate() {
            validate_slots(index, *rune, slots)?;
            let id = PatternId::new(index).ok_or(CatalogError::PatternCount {
                count: patterns.len(),
                max: data::PATTERN_COUNT,
            })?;
            atomic.push(AtomicPattern::new(id, *rune, slots));
        }

        let mut composites = Vec::with_capacity(runewords.len());
        for (runeword, required) in runewords {
            validate_requirement(*runeword, required, &atomic)?;
            composites.push(CompositePattern { id: *runeword, required: required.to_vec() });
        }

        debug!(
            patterns = atomic.len(),
            runewords = composites.len(),
            "rune catalog built"
        );
        Ok(Self { patterns: atomic, composites })
    }

    #[inline]
    pub fn patterns(&self) -> &[AtomicPattern] {
        &self.patterns
    }

    #[inline]
    pub fn composites(&self) -> &[CompositePattern] {
        &self.composites
    }

    pub fn pattern(&self, id: PatternId) -> Option<&AtomicPattern> {
        self.patterns.get(id.index())
    }

    /// All drawing variants of `rune`, in catalog order
    pub fn patterns_for(&self, rune: Rune) -> impl Iterator<Item = &AtomicPattern> + '_ {
        self.patterns.iter().filter(move |p| p.rune == rune)
    }

    pub fn composite(&self, runeword: Runeword) -> Option<&CompositePattern> {
        self.composites.iter().find(|c| c.id == runeword)
    }
}

fn validate_slots(index: usize, rune: Rune, slots: &[StrokeClassSet]) -> Result<()> {
    if !(MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&slots.len()) {
        return Err(CatalogError::PatternLength {
            index,
            rune,
            len: slots.len(),
            min: MIN_PATTERN_LEN,
            max: MAX_PATTERN_LEN,
        });
    }

    let first = slots[0];
    if first.requires_reversed() {
        return Err(CatalogError::FirstSlotReversed { index, rune });
    }
    if first.is_elidable() {
        return Err(CatalogError::FirstSlotElidable { index, rune });
    }

    if let Some((slot, set)) = slots.iter().enumerate().find(|(_, s)| !s.is_sanctioned()) {
        return Err(CatalogError::UnsanctionedSlot { index, rune, slot, bits: set.bits() });
    }
    Ok(())
}

fn validate_requirement(
    runeword: Runeword,
    required: &[Rune],
    patterns: &[AtomicPattern],
) -> Result<()> {
    if !(MIN_RUNEWORD_LEN..=MAX_RUNEWORD_LEN).contains(&required.len()) {
        return Err(CatalogError::CompositeLength {
            runeword,
            len: required.len(),
            min: MIN_RUNEWORD_LEN,
            max: MAX_RUNEWORD_LEN,
        });
    }

    for (i, rune) in required.iter().enumerate() {
        if required[..i].contains(rune) {
            return Err(CatalogError::DuplicateRequirement { runeword, rune: *rune });
        }
        if !patterns.iter().any(|p| p.rune == *rune) {
            return Err(CatalogError::UnknownRune { runeword, rune: *rune });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeClassSet as S;

    const FIVE: &[S] = &[S::SHARP, S::LINE, S::SHARP_R, S::SHARP, S::LINE];

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::try_standard().expect("built-in tables validate");
        assert_eq!(catalog.patterns().len(), data::PATTERN_COUNT);
        assert_eq!(catalog.composites().len(), data::RUNEWORD_COUNT);
        for (i, p) in catalog.patterns().iter().enumerate() {
            assert_eq!(p.id.index(), i);
            assert!(p.min_len >= 3 && p.min_len <= p.len());
        }
    }

    #[test]
    fn test_every_rune_has_a_pattern() {
        let catalog = Catalog::standard();
        for rune in Rune::ALL {
            assert!(catalog.patterns_for(rune).next().is_some(), "{rune:?}");
        }
        assert_eq!(catalog.patterns_for(Rune::Cham).count(), 9);
        assert_eq!(catalog.patterns_for(Rune::Ral).count(), 1);
    }

    #[test]
    fn test_radiance_requirements() {
        let radiance = Catalog::standard().composite(Runeword::Radiance).unwrap();
        assert_eq!(radiance.required, vec![Rune::Nef, Rune::Sol, Rune::Ith]);
    }

    #[test]
    fn test_rejects_short_pattern() {
        let err = Catalog::build(&[(Rune::El, &FIVE[..4])], &[]).unwrap_err();
        assert!(matches!(err, CatalogError::PatternLength { index: 0, len: 4, .. }));
    }

    #[test]
    fn test_rejects_long_pattern() {
        let ten = [S::SHARP; 10];
        let err = Catalog::build(&[(Rune::El, &ten[..])], &[]).unwrap_err();
        assert!(matches!(err, CatalogError::PatternLength { len: 10, .. }));
    }

    #[test]
    fn test_rejects_bad_first_slot() {
        let reversed = [S::SHARP_R, S::LINE, S::SHARP, S::SHARP, S::LINE];
        assert_eq!(
            Catalog::build(&[(Rune::Tal, &reversed[..])], &[]).unwrap_err(),
            CatalogError::FirstSlotReversed { index: 0, rune: Rune::Tal }
        );

        let elidable = [S::LINE_OR_NOTHING, S::LINE, S::SHARP, S::SHARP, S::LINE];
        assert_eq!(
            Catalog::build(&[(Rune::Tal, &elidable[..])], &[]).unwrap_err(),
            CatalogError::FirstSlotElidable { index: 0, rune: Rune::Tal }
        );
    }

    #[test]
    fn test_rejects_unsanctioned_combination() {
        let slots = [S::SHARP, S::LINE_TYPES, S::SHARP, S::SHARP, S::LINE];
        let err = Catalog::build(&[(Rune::Tal, &slots[..])], &[]).unwrap_err();
        assert!(matches!(err, CatalogError::UnsanctionedSlot { slot: 1, .. }));
    }

    #[test]
    fn test_rejects_bad_runewords() {
        let patterns: &[(Rune, &[S])] = &[(Rune::Tir, FIVE), (Rune::El, FIVE)];

        let err = Catalog::build(patterns, &[(Runeword::Steel, &[Rune::Tir])]).unwrap_err();
        assert!(matches!(err, CatalogError::CompositeLength { len: 1, .. }));

        let err =
            Catalog::build(patterns, &[(Runeword::Steel, &[Rune::Tir, Rune::Tir])]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateRequirement { runeword: Runeword::Steel, rune: Rune::Tir }
        );

        let err =
            Catalog::build(patterns, &[(Runeword::Steel, &[Rune::Tir, Rune::Zod])]).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRune { runeword: Runeword::Steel, rune: Rune::Zod });

        assert!(Catalog::build(patterns, &[(Runeword::Steel, &[Rune::Tir, Rune::El])]).is_ok());
    }

    #[test]
    fn test_rejects_oversized_catalog() {
        let patterns: Vec<(Rune, &[S])> = vec![(Rune::El, FIVE); data::PATTERN_COUNT + 1];
        let err = Catalog::build(&patterns, &[]).unwrap_err();
        assert!(matches!(err, CatalogError::PatternCount { .. }));
    }
}
