//! Runeword containment: does a subject's rune collection cover a runeword?

use tracing::trace;

use crate::catalog::{CompositePattern, Rune, Runeword};

/// True when every required rune is matched by a distinct rune in `have`.
///
/// Order does not matter. A rune in `have` is consumed by the first
/// requirement it satisfies, so `{A, A}` does not cover `{A, B}` and `{A}`
/// does not cover `{A, A}`.
pub fn contains(have: &[Rune], required: &[Rune]) -> bool {
    if have.len() < required.len() {
        return false;
    }

    let mut used = vec![false; have.len()];
    required.iter().all(|rune| {
        let slot = have.iter().zip(used.iter()).position(|(h, taken)| !taken && h == rune);
        match slot {
            Some(idx) => {
                used[idx] = true;
                true
            }
            None => false,
        }
    })
}

impl CompositePattern {
    #[inline]
    pub fn is_satisfied_by(&self, have: &[Rune]) -> bool {
        contains(have, &self.required)
    }
}

/// 새로 완성된 룬워드 후보 (이미 적용된 것은 제외, 카탈로그 순서)
pub fn novel_candidates(
    composites: &[CompositePattern],
    have: &[Rune],
    applied: &[Runeword],
) -> Vec<Runeword> {
    composites
        .iter()
        .filter(|c| c.is_satisfied_by(have))
        .filter(|c| {
            let already = applied.contains(&c.id);
            if already {
                trace!(runeword = ?c.id, "runeword already applied");
            }
            !already
        })
        .map(|c| c.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use Rune::*;

    #[test]
    fn test_radiance_from_its_own_runes() {
        let radiance = Catalog::standard().composite(Runeword::Radiance).unwrap();
        assert!(radiance.is_satisfied_by(&[Nef, Sol, Ith]));
        assert!(radiance.is_satisfied_by(&[Ith, El, Sol, Nef]));
        assert!(!radiance.is_satisfied_by(&[Nef, Sol]));
    }

    #[test]
    fn test_each_have_entry_used_once() {
        assert!(contains(&[Tir, El], &[Tir, El]));
        assert!(!contains(&[Tir, Tir], &[Tir, El]));
    }

    #[test]
    fn test_repeated_requirement_needs_repeated_rune() {
        assert!(!contains(&[Ko, Mal, Tir], &[Ko, Ko, Mal]));
        assert!(contains(&[Ko, Mal, Ko], &[Ko, Ko, Mal]));
    }

    #[test]
    fn test_short_have_rejected() {
        assert!(!contains(&[Tir], &[Tir, El]));
        assert!(!contains(&[], &[Tir, El]));
    }

    #[test]
    fn test_novel_candidates_skip_applied() {
        let catalog = Catalog::standard();
        let have = [Tir, El, Nef];
        let found = novel_candidates(catalog.composites(), &have, &[]);
        assert_eq!(found, vec![Runeword::Steel, Runeword::Nadir]);

        let found = novel_candidates(catalog.composites(), &have, &[Runeword::Steel]);
        assert_eq!(found, vec![Runeword::Nadir]);
    }
}
