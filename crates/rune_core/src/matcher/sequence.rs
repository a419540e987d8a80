//! Fuzzy alignment of a stroke sequence against one rune pattern
//!
//! The walk starts at every candidate stroke that fits the pattern's first
//! slot and advances candidate and pattern together. Elidable slots may be
//! stepped over, and up to `tolerance` non-line strokes may disagree with
//! their slot. A disagreeing line stroke ends the attempt outright.
//!
//! If no forward alignment is accepted, the same walk runs over
//! the candidate read back to front, so a rune traced in the opposite
//! direction still matches. Reversal flags are read as emitted on that
//! pass, and it only runs when the forward pass had a start offset with
//! at least `min_len` strokes after it.

use serde::Serialize;
use tracing::trace;

use crate::catalog::AtomicPattern;
use crate::debug_flags;
use crate::stroke::Stroke;

pub const DEFAULT_UNMATCH_TOLERANCE: u32 = 1;

/// Outcome of walking one start offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    /// Every compared stroke agreed with its slot
    Exact,
    /// Accepted with this many disagreements
    Tolerated(u32),
    Rejected,
}

impl Alignment {
    #[inline]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Alignment::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Where and how a candidate matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchDetail {
    pub direction: Direction,
    /// Start index in the candidate as given
    pub offset: usize,
    pub alignment: Alignment,
}

/// 시퀀스 매처 (불일치 허용치 설정 가능)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMatcher {
    tolerance: u32,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self { tolerance: DEFAULT_UNMATCH_TOLERANCE }
    }
}

impl SequenceMatcher {
    pub fn new(tolerance: u32) -> Self {
        Self { tolerance }
    }

    #[inline]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    pub fn matches(&self, candidate: &[Stroke], pattern: &AtomicPattern) -> bool {
        self.find_match(candidate, pattern).is_some()
    }

    pub fn find_match(&self, candidate: &[Stroke], pattern: &AtomicPattern) -> Option<MatchDetail> {
        if candidate.len() < pattern.min_len {
            return None;
        }
        // no forward start means no reverse pass either
        let first = pattern.slots[0];
        let last_start = candidate.len() - pattern.min_len;
        if !candidate[..=last_start].iter().any(|s| first.admits(&s.normalized())) {
            return None;
        }

        if let Some((offset, alignment)) = self.search(candidate, pattern) {
            return Some(MatchDetail { direction: Direction::Forward, offset, alignment });
        }

        let backward: Vec<Stroke> = candidate.iter().rev().copied().collect();
        self.search(&backward, pattern).map(|(offset, alignment)| MatchDetail {
            direction: Direction::Reverse,
            offset: candidate.len() - 1 - offset,
            alignment,
        })
    }

    fn search(&self, strokes: &[Stroke], pattern: &AtomicPattern) -> Option<(usize, Alignment)> {
        let n = strokes.len();
        let first = pattern.slots[0];

        for i in 0..n {
            if pattern.min_len > n - i {
                break;
            }
            // the first stroke never carries a direction penalty
            if !first.admits(&strokes[i].normalized()) {
                continue;
            }

            let alignment = self.walk(strokes, i, pattern);
            trace!(pattern = %pattern.id, offset = i, ?alignment, "alignment attempt");
            if alignment.is_accepted() {
                return Some((i, alignment));
            }
        }
        None
    }

    /// Walk from a start offset whose stroke already fits slot 0.
    fn walk(&self, strokes: &[Stroke], start: usize, pattern: &AtomicPattern) -> Alignment {
        let n = strokes.len();
        let slots = &pattern.slots;
        let size = slots.len();
        let verbose = debug_flags::match_debug_enabled();

        let mut unmatched = 0u32;
        let mut j = start + 1;
        let mut k = 1;
        while j < n && k < size {
            let stroke = strokes[j];
            let slot = slots[k];

            // candidate shorter than the pattern: let an elidable slot drop out
            if slot.is_elidable()
                && k < size - 1
                && n < size
                && slots[k + 1].contains_class(stroke.class())
            {
                k += 1;
                continue;
            }

            let reversal_agrees = slot.requires_reversed() == stroke.is_reversed();
            if !reversal_agrees || !slot.contains_class(stroke.class()) {
                if (reversal_agrees || slot.accepts_line_types()) && slot.is_elidable() {
                    k += 1;
                    continue;
                }

                if verbose {
                    trace!(stroke = %stroke, slot = ?slot, at = j, "stroke disagrees with slot");
                }
                if stroke.class().is_line() {
                    return Alignment::Rejected;
                }
                unmatched += 1;
                if unmatched > self.tolerance {
                    return Alignment::Rejected;
                }
            }

            j += 1;
            k += 1;
        }

        if unmatched == 0 {
            Alignment::Exact
        } else {
            Alignment::Tolerated(unmatched)
        }
    }
}

/// Match with the default tolerance of one disagreement
pub fn matches(candidate: &[Stroke], pattern: &AtomicPattern) -> bool {
    SequenceMatcher::default().matches(candidate, pattern)
}
