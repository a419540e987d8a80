//! Recognition pipeline
//!
//! ```text
//! positions ─▶ tokenize ─▶ strokes ─▶ match every pattern ─▶ weighted roll ─▶ rune
//!                                                                              │
//!                     subject runes ─▶ runeword containment ─▶ uniform roll ─▶ runeword
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{
    AtomicPattern, Catalog, PatternId, Rune, Runeword, MIN_PATTERN_LEN, MIN_RUNEWORD_LEN,
};
use crate::config::RecognizerConfig;
use crate::disambiguation::{pick_pattern, pick_runeword};
use crate::geometry::Position;
use crate::matcher::{novel_candidates, SequenceMatcher};
use crate::stroke::{Stroke, Tokenizer};

/// 인식 시도 1회의 결과
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSession {
    pub positions: Vec<Position>,
    pub distances: Vec<f32>,
    pub angles: Vec<i32>,
    pub strokes: Vec<Stroke>,
    /// Points folded into a neighbour during tokenizing
    pub collapsed: Vec<usize>,
    /// Patterns that accepted the strokes, in catalog order
    pub matched: Vec<PatternId>,
    pub chosen: Option<PatternId>,
    pub rune: Option<Rune>,
    /// `chosen` came from the override rather than the roll
    pub forced: bool,
}

impl MatchSession {
    #[inline]
    pub fn is_recognized(&self) -> bool {
        self.chosen.is_some()
    }
}

/// Runes recognized for one subject and the runewords already granted.
///
/// Owned by the caller; the recognizer only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectState {
    runes: Vec<Rune>,
    applied: Vec<Runeword>,
}

impl SubjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rune(&mut self, rune: Rune) {
        self.runes.push(rune);
    }

    /// Returns false if the runeword was already applied
    pub fn mark_applied(&mut self, runeword: Runeword) -> bool {
        if self.applied.contains(&runeword) {
            return false;
        }
        self.applied.push(runeword);
        true
    }

    pub fn clear(&mut self) {
        self.runes.clear();
        self.applied.clear();
    }

    #[inline]
    pub fn runes(&self) -> &[Rune] {
        &self.runes
    }

    #[inline]
    pub fn applied(&self) -> &[Runeword] {
        &self.applied
    }
}

/// 룬 인식기
#[derive(Debug, Clone)]
pub struct Recognizer<'a> {
    catalog: &'a Catalog,
    tokenizer: Tokenizer,
    matcher: SequenceMatcher,
    config: RecognizerConfig,
}

impl Default for Recognizer<'static> {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl Recognizer<'static> {
    /// Recognizer over the built-in catalog
    pub fn new(config: RecognizerConfig) -> Self {
        Self::with_catalog(Catalog::standard(), config)
    }
}

impl<'a> Recognizer<'a> {
    pub fn with_catalog(catalog: &'a Catalog, config: RecognizerConfig) -> Self {
        Self {
            catalog,
            tokenizer: Tokenizer::new(config.collapse_ratio),
            matcher: SequenceMatcher::new(config.unmatch_tolerance),
            config,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Patterns accepting `strokes`, in catalog order
    pub fn matching_patterns(&self, strokes: &[Stroke]) -> Vec<&'a AtomicPattern> {
        if strokes.len() < MIN_PATTERN_LEN {
            return Vec::new();
        }
        self.catalog.patterns().iter().filter(|p| self.matcher.matches(strokes, p)).collect()
    }

    /// Tokenize `positions`, match every pattern and pick one.
    ///
    /// `forced` replaces the pick when it names a catalog pattern; matching
    /// still runs so the session shows what would have matched.
    pub fn recognize(
        &self,
        positions: &[Position],
        step: f32,
        forced: Option<PatternId>,
        rng: &mut impl Rng,
    ) -> MatchSession {
        let tokens = self.tokenizer.tokenize(positions, step);

        let candidates = self.matching_patterns(&tokens.strokes);
        let matched: Vec<PatternId> = candidates.iter().map(|p| p.id).collect();
        debug!(strokes = tokens.strokes.len(), matched = matched.len(), "patterns matched");

        let forced_pattern = forced.and_then(|id| {
            let pattern = self.catalog.pattern(id);
            if pattern.is_none() {
                warn!(%id, "forced pattern is not in the catalog, ignoring");
            }
            pattern
        });

        let (chosen, is_forced) = match forced_pattern {
            Some(pattern) => (Some(pattern.id), true),
            None => (pick_pattern(&candidates, &self.config.tier_weights, rng), false),
        };
        let rune = chosen.and_then(|id| self.catalog.pattern(id)).map(|p| p.rune);
        debug!(chosen = ?chosen, rune = ?rune, forced = is_forced, "recognition finished");

        MatchSession {
            positions: positions.to_vec(),
            distances: tokens.distances,
            angles: tokens.angles,
            strokes: tokens.strokes,
            collapsed: tokens.collapsed,
            matched,
            chosen,
            rune,
            forced: is_forced,
        }
    }

    /// Pick a runeword newly covered by the subject's runes, if any.
    pub fn recognize_composite(
        &self,
        subject: &SubjectState,
        rng: &mut impl Rng,
    ) -> Option<Runeword> {
        if subject.runes().len() < MIN_RUNEWORD_LEN {
            return None;
        }
        let candidates =
            novel_candidates(self.catalog.composites(), subject.runes(), subject.applied());
        let chosen = pick_runeword(&candidates, self.config.composite_roll_unit, rng);
        debug!(candidates = candidates.len(), chosen = ?chosen, "runeword check");
        chosen
    }
}
