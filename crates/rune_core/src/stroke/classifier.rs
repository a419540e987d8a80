//! Turn angle → stroke class
//!
//! | |turn| (deg) | class |
//! |-------------|-------|
//! | 0-15 | LineReversed |
//! | 16-80 | TurnSharp |
//! | 81-100 | TurnCubic |
//! | 101-120 | CurveHigh |
//! | 121-140 | CurveMedium |
//! | 141-170 | CurveLow |
//! | 171-180 | Line |

use super::types::{Stroke, StrokeClass};

/// 회전 각도를 획 종류로 분류 (순수 함수)
pub fn classify(turn_degrees: i32) -> StrokeClass {
    match turn_degrees.unsigned_abs().min(180) {
        0..=15 => StrokeClass::LineReversed,
        16..=80 => StrokeClass::TurnSharp,
        81..=100 => StrokeClass::TurnCubic,
        101..=120 => StrokeClass::CurveHigh,
        121..=140 => StrokeClass::CurveMedium,
        141..=170 => StrokeClass::CurveLow,
        _ => StrokeClass::Line,
    }
}

/// Classifies a run of turns left to right, tracking reversal.
///
/// A curve or turn is reversed when it bends the other way from the most
/// recent non-line stroke. Lines never carry the flag and never become the
/// reference for later strokes.
#[derive(Debug, Clone, Default)]
pub struct ReversalTracker {
    last_turn: Option<i32>,
}

impl ReversalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, turn_degrees: i32) -> Stroke {
        let class = classify(turn_degrees);
        if class.is_line() {
            return Stroke::classified(class, false);
        }

        let reversed = self.last_turn.is_some_and(|prev| (prev < 0) != (turn_degrees < 0));
        self.last_turn = Some(turn_degrees);
        Stroke::classified(class, reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_edges() {
        let cases = [
            (0, StrokeClass::LineReversed),
            (15, StrokeClass::LineReversed),
            (16, StrokeClass::TurnSharp),
            (80, StrokeClass::TurnSharp),
            (81, StrokeClass::TurnCubic),
            (100, StrokeClass::TurnCubic),
            (101, StrokeClass::CurveHigh),
            (120, StrokeClass::CurveHigh),
            (121, StrokeClass::CurveMedium),
            (140, StrokeClass::CurveMedium),
            (141, StrokeClass::CurveLow),
            (170, StrokeClass::CurveLow),
            (171, StrokeClass::Line),
            (180, StrokeClass::Line),
        ];
        for (deg, expected) in cases {
            assert_eq!(classify(deg), expected, "{deg}");
            assert_eq!(classify(-deg), expected, "-{deg}");
        }
    }

    #[test]
    fn test_classify_is_pure() {
        for deg in -180..=180 {
            assert_eq!(classify(deg), classify(deg));
        }
    }

    #[test]
    fn test_reversal_relative_to_last_turn() {
        let mut tracker = ReversalTracker::new();
        let first = tracker.classify(45);
        let line = tracker.classify(-176);
        let opposite = tracker.classify(-130);
        let same = tracker.classify(-110);

        assert_eq!(first.class(), StrokeClass::TurnSharp);
        assert!(!first.is_reversed());
        // lines are skipped when looking for the reference turn
        assert_eq!(line.class(), StrokeClass::Line);
        assert!(!line.is_reversed());
        assert_eq!(opposite.class(), StrokeClass::CurveMedium);
        assert!(opposite.is_reversed());
        assert_eq!(same.class(), StrokeClass::CurveHigh);
        assert!(!same.is_reversed());
    }

    #[test]
    fn test_line_reversed_never_flagged() {
        let mut tracker = ReversalTracker::new();
        tracker.classify(60);
        let stroke = tracker.classify(-5);
        assert_eq!(stroke.class(), StrokeClass::LineReversed);
        assert!(!stroke.is_reversed());
    }
}
