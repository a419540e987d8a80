//! # rune_core - Hand-Drawn Rune Recognition Engine
//!
//! Turns a traced path of 2D waypoints into one of a fixed set of rune
//! symbols, and checks whether the runes collected by a subject complete a
//! runeword.
//!
//! ## Features
//! - Waypoint tokenizing with near-duplicate folding
//! - Fuzzy stroke matching (elidable slots, one tolerated miss, both directions)
//! - Tier-weighted tie breaking with a seedable RNG
//! - Order-independent runeword detection

// Loop style - index loops mirror the stroke/slot walk
#![allow(clippy::needless_range_loop)]

pub mod catalog;
pub mod config;
pub mod debug_flags;
pub mod disambiguation;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod recognizer;
pub mod stroke;

pub use catalog::{AtomicPattern, Catalog, CompositePattern, PatternId, Rune, RuneTier, Runeword};
pub use config::{RecognizerConfig, TierWeights};
pub use disambiguation::session_rng;
pub use error::{CatalogError, ConfigError, Result, StrokeError};
pub use geometry::Position;
pub use matcher::{contains, matches, Alignment, SequenceMatcher};
pub use recognizer::{MatchSession, Recognizer, SubjectState};
pub use stroke::{classify, tokenize, Stroke, StrokeClass, StrokeClassSet, Tokenization};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_rune_then_runeword() {
        let recognizer = Recognizer::default();
        let mut rng = session_rng(2024);
        let mut subject = SubjectState::new();

        // Tir, then El, drawn by forcing the pick
        for index in [4, 0] {
            let path: Vec<Position> =
                (0..7).map(|i| Position::new(i as f32, if i % 2 == 0 { 0.0 } else { 1.0 })).collect();
            let forced = PatternId::new(index);
            let session = recognizer.recognize(&path, 1.0, forced, &mut rng);
            subject.record_rune(session.rune.unwrap());
        }

        assert_eq!(subject.runes(), &[Rune::Tir, Rune::El]);
        assert_eq!(recognizer.recognize_composite(&subject, &mut rng), Some(Runeword::Steel));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
