//! Planar geometry for traced waypoints
//!
//! Waypoints arrive from the host as plain 2D coordinates. The tokenizer only
//! needs two measurements from them: the gap between consecutive points and the
//! signed turn taken at an interior point.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// 2D 웨이포인트 좌표
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Planar distance to `other`
    #[inline]
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from `self` toward `other` in radians, normalized to `[0, 2π)`.
    /// Counter-clockwise from the +x axis.
    #[inline]
    pub fn absolute_angle(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        normalize_orientation(dy.atan2(dx))
    }
}

impl From<(f32, f32)> for Position {
    fn from(pos: (f32, f32)) -> Self {
        Self::new(pos.0, pos.1)
    }
}

/// 각도를 [0, 2π) 범위로 정규화
#[inline]
pub fn normalize_orientation(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Signed turn at `mid`, in whole degrees within `[-180, 180]`.
///
/// Measured as the bearing back toward `prev` minus the bearing ahead toward
/// `next`, so walking straight through `mid` gives ±180 and doubling back on
/// the incoming segment gives 0. Fractions are truncated toward zero.
pub fn turn_degrees(prev: &Position, mid: &Position, next: &Position) -> i32 {
    let mut angle = mid.absolute_angle(prev) - mid.absolute_angle(next);
    if angle > PI {
        angle -= TAU;
    } else if angle < -PI {
        angle += TAU;
    }
    (angle.to_degrees() as i32).clamp(-180, 180)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
        assert!((b.distance(&a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_absolute_angle_is_full_circle() {
        let origin = Position::new(0.0, 0.0);
        let below = Position::new(0.0, -1.0);
        let angle = origin.absolute_angle(&below);
        assert!((angle - 1.5 * PI).abs() < 1e-5);
        assert!((0.0..TAU).contains(&angle));
    }

    #[test]
    fn test_straight_line_is_half_turn() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        let c = Position::new(2.0, 0.0);
        assert!(turn_degrees(&a, &b, &c).abs() >= 179);
    }

    #[test]
    fn test_double_back_is_zero() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        let c = Position::new(0.0, 0.001);
        assert!(turn_degrees(&a, &b, &c).abs() <= 1);
    }

    #[test]
    fn test_turn_sign_follows_direction() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        let left = Position::new(1.0, 1.0);
        let right = Position::new(1.0, -1.0);

        let l = turn_degrees(&a, &b, &left);
        let r = turn_degrees(&a, &b, &right);
        assert!((89..=90).contains(&l.abs()));
        assert!((89..=90).contains(&r.abs()));
        assert_ne!(l.signum(), r.signum());
    }
}
