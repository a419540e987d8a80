//! Picking one winner when several patterns or runewords qualify
//!
//! Atomic matches roll against their tier weight, runeword candidates roll
//! with equal odds. Both walk the candidates in catalog order, subtracting
//! each weight from the roll until it is used up.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalog::{AtomicPattern, PatternId, Runeword};
use crate::config::TierWeights;

/// Deterministic RNG for one recognition session
pub fn session_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// 티어 가중치 랜덤 선택
///
/// One match wins outright and zero yields `None`; neither draws from `rng`.
pub fn pick_pattern(
    matched: &[&AtomicPattern],
    weights: &TierWeights,
    rng: &mut impl Rng,
) -> Option<PatternId> {
    let weighted: Vec<(PatternId, u32)> =
        matched.iter().map(|p| (p.id, weights.weight(p.tier()))).collect();
    let chosen = roll_weighted(&weighted, rng);
    if matched.len() > 1 {
        debug!(candidates = matched.len(), chosen = ?chosen, "weighted pattern roll");
    }
    chosen
}

/// 룬워드 균등 랜덤 선택 (후보당 `roll_unit`)
pub fn pick_runeword(
    candidates: &[Runeword],
    roll_unit: u32,
    rng: &mut impl Rng,
) -> Option<Runeword> {
    let weighted: Vec<(Runeword, u32)> = candidates.iter().map(|rw| (*rw, roll_unit)).collect();
    let chosen = roll_weighted(&weighted, rng);
    if candidates.len() > 1 {
        debug!(candidates = candidates.len(), chosen = ?chosen, "runeword roll");
    }
    chosen
}

fn roll_weighted<T: Copy>(items: &[(T, u32)], rng: &mut impl Rng) -> Option<T> {
    match items {
        [] => None,
        [(only, _)] => Some(*only),
        _ => {
            let total: u64 = items.iter().map(|(_, w)| u64::from(*w)).sum();
            if total == 0 {
                return items.first().map(|(item, _)| *item);
            }
            resolve_roll(items, rng.gen_range(1..=total))
        }
    }
}

/// Walk `items` in order, spending `roll` until it reaches zero.
fn resolve_roll<T: Copy>(items: &[(T, u32)], mut roll: u64) -> Option<T> {
    for (item, weight) in items {
        let weight = u64::from(*weight);
        if roll <= weight {
            return Some(*item);
        }
        roll -= weight;
    }
    items.last().map(|(item, _)| *item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Rune, RuneTier};

    fn first_of_tier(tier: RuneTier) -> &'static AtomicPattern {
        Catalog::standard().patterns().iter().find(|p| p.tier() == tier).unwrap()
    }

    #[test]
    fn test_resolve_roll_walks_in_order() {
        let items = [('a', 2), ('b', 3), ('c', 4)];
        assert_eq!(resolve_roll(&items, 1), Some('a'));
        assert_eq!(resolve_roll(&items, 2), Some('a'));
        assert_eq!(resolve_roll(&items, 3), Some('b'));
        assert_eq!(resolve_roll(&items, 5), Some('b'));
        assert_eq!(resolve_roll(&items, 6), Some('c'));
        assert_eq!(resolve_roll(&items, 9), Some('c'));
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let mut rng = session_rng(13);
        let weights = TierWeights { low: u32::MAX, mid: u32::MAX, high: u32::MAX };
        let patterns: Vec<&AtomicPattern> = Catalog::standard().patterns().iter().take(3).collect();
        for _ in 0..100 {
            let pick = pick_pattern(&patterns, &weights, &mut rng).unwrap();
            assert!(patterns.iter().any(|p| p.id == pick));
        }
        let huge = [('a', u32::MAX), ('b', u32::MAX)];
        assert_eq!(resolve_roll(&huge, u64::from(u32::MAX) + 1), Some('b'));
        assert!(pick_runeword(&[Runeword::Steel, Runeword::Lore], u32::MAX, &mut rng).is_some());
    }

    #[test]
    fn test_single_and_empty() {
        let mut rng = session_rng(7);
        let low = first_of_tier(RuneTier::Low);
        assert_eq!(pick_pattern(&[low], &TierWeights::default(), &mut rng), Some(low.id));
        assert_eq!(pick_pattern(&[], &TierWeights::default(), &mut rng), None);
        assert_eq!(pick_runeword(&[], 100, &mut rng), None);
        assert_eq!(pick_runeword(&[Runeword::Lore], 100, &mut rng), Some(Runeword::Lore));
    }

    #[test]
    fn test_high_tier_wins_twice_as_often() {
        let low = first_of_tier(RuneTier::Low);
        let high = first_of_tier(RuneTier::High);
        assert_eq!(low.rune, Rune::El);
        assert_eq!(high.rune, Rune::Pul);

        let mut rng = session_rng(42);
        let weights = TierWeights::default();
        let (mut low_wins, mut high_wins) = (0u32, 0u32);
        for _ in 0..30_000 {
            match pick_pattern(&[low, high], &weights, &mut rng) {
                Some(id) if id == low.id => low_wins += 1,
                Some(id) if id == high.id => high_wins += 1,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        let ratio = high_wins as f64 / low_wins as f64;
        assert!((1.8..2.2).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_runeword_roll_is_uniform() {
        let candidates = [Runeword::Steel, Runeword::Nadir, Runeword::Leaf];
        let mut rng = session_rng(3);
        let mut counts = [0u32; 3];
        for _ in 0..30_000 {
            let pick = pick_runeword(&candidates, 100, &mut rng).unwrap();
            let idx = candidates.iter().position(|c| *c == pick).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let patterns: Vec<&AtomicPattern> = Catalog::standard().patterns().iter().take(6).collect();
        let weights = TierWeights::default();
        let a: Vec<_> = {
            let mut rng = session_rng(99);
            (0..20).map(|_| pick_pattern(&patterns, &weights, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = session_rng(99);
            (0..20).map(|_| pick_pattern(&patterns, &weights, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
