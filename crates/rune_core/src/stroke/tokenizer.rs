//! Waypoints → stroke sequence
//!
//! ```text
//! *---*---*---*---*---*---*---*---*   9 points
//!  --- --- --- --- --- --- --- ---    8 distances
//!     ^   ^   ^   ^   ^   ^   ^       7 angles (one per interior point)
//! ```
//!
//! A point that sits too close to its predecessor is folded into its
//! neighbour: the following distance and angle are recomputed as if the point
//! had never been placed, and no stroke is emitted for it.

use serde::Serialize;
use tracing::{debug, trace};

use super::classifier::ReversalTracker;
use super::types::Stroke;
use crate::debug_flags;
use crate::geometry::{turn_degrees, Position};

/// Fewest points that still form one interior angle
pub const MIN_PATH_POINTS: usize = 3;
/// Most points a single tracing may carry
pub const MAX_PATH_POINTS: usize = 12;
/// Fraction of the reference step under which a segment counts as a duplicate
pub const DEFAULT_COLLAPSE_RATIO: f32 = 0.25;

/// 토큰화 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tokenization {
    /// Segment lengths after merging, `N - 1` entries
    pub distances: Vec<f32>,
    /// Turn at each interior point after merging, `N - 2` entries
    pub angles: Vec<i32>,
    /// Emitted strokes, left to right
    pub strokes: Vec<Stroke>,
    /// Indices of points folded into a neighbour
    pub collapsed: Vec<usize>,
}

impl Tokenization {
    pub fn stroke_summary(&self) -> String {
        self.strokes.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }
}

/// 경로 토크나이저
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    collapse_ratio: f32,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { collapse_ratio: DEFAULT_COLLAPSE_RATIO }
    }
}

impl Tokenizer {
    pub fn new(collapse_ratio: f32) -> Self {
        Self { collapse_ratio }
    }

    /// Tokenize `positions` given the expected spacing `step` between points.
    ///
    /// Paths with fewer than [`MIN_PATH_POINTS`] or more than
    /// [`MAX_PATH_POINTS`] points produce no strokes.
    pub fn tokenize(&self, positions: &[Position], step: f32) -> Tokenization {
        let n = positions.len();
        if !(MIN_PATH_POINTS..=MAX_PATH_POINTS).contains(&n) {
            debug!(points = n, "path length out of range, no strokes");
            return Tokenization::default();
        }

        let mut distances: Vec<f32> =
            positions.windows(2).map(|w| w[0].distance(&w[1])).collect();
        let mut angles: Vec<i32> =
            positions.windows(3).map(|w| turn_degrees(&w[0], &w[1], &w[2])).collect();

        if debug_flags::token_debug_enabled() {
            for (i, d) in distances.iter().enumerate() {
                trace!("between {} and {}: {:.2}", i, i + 1, d);
            }
            for (i, a) in angles.iter().enumerate() {
                trace!("between {}, {} and {}: {}", i, i + 1, i + 2, a);
            }
        }

        let threshold = step * self.collapse_ratio;
        let last_angle = angles.len() - 1;
        let mut tracker = ReversalTracker::new();
        let mut strokes = Vec::with_capacity(angles.len());
        let mut collapsed = Vec::new();

        // angle i sits on point i + 1
        for i in 0..angles.len() {
            if distances[i] < threshold {
                distances[i + 1] = positions[i].distance(&positions[i + 2]);
                if i < last_angle {
                    angles[i + 1] =
                        turn_degrees(&positions[i], &positions[i + 2], &positions[i + 3]);
                }
                trace!(
                    point = i + 1,
                    dist = distances[i],
                    threshold,
                    "near-duplicate point folded into neighbour"
                );
                collapsed.push(i + 1);
                continue;
            }
            strokes.push(tracker.classify(angles[i]));
        }

        let tokens = Tokenization { distances, angles, strokes, collapsed };
        debug!(
            points = n,
            collapsed = tokens.collapsed.len(),
            strokes = %tokens.stroke_summary(),
            "path tokenized"
        );
        tokens
    }
}

/// Tokenize with the default collapse ratio
pub fn tokenize(positions: &[Position], step: f32) -> Tokenization {
    Tokenizer::default().tokenize(positions, step)
}
