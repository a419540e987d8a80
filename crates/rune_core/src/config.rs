//! Recognizer tuning
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `collapse_ratio` | 0.25 | Fraction of `step` under which a point is folded |
//! | `unmatch_tolerance` | 1 | Non-line strokes allowed to disagree |
//! | `tier_weights` | 2 / 3 / 4 | Roll weight per rune tier |
//! | `composite_roll_unit` | 100 | Roll span per runeword candidate |
//!
//! ## Usage
//!
//! ```rust
//! use rune_core::RecognizerConfig;
//!
//! let config = RecognizerConfig::default();
//! let strict = RecognizerConfig::strict();
//! let from_env = RecognizerConfig::from_env_or_default();
//! ```
//!
//! ## Environment Variables
//!
//! - `RUNE_MATCH_PROFILE`: Select preset (strict, lenient, flat, default)

use serde::{Deserialize, Serialize};
use std::env;

use crate::catalog::RuneTier;
use crate::error::ConfigError;
use crate::matcher::DEFAULT_UNMATCH_TOLERANCE;
use crate::stroke::DEFAULT_COLLAPSE_RATIO;

/// 인식기 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub collapse_ratio: f32,
    pub unmatch_tolerance: u32,
    pub tier_weights: TierWeights,
    pub composite_roll_unit: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            collapse_ratio: DEFAULT_COLLAPSE_RATIO,
            unmatch_tolerance: DEFAULT_UNMATCH_TOLERANCE,
            tier_weights: TierWeights::default(),
            composite_roll_unit: 100,
        }
    }
}

impl RecognizerConfig {
    /// No disagreement allowed
    pub fn strict() -> Self {
        Self { unmatch_tolerance: 0, ..Self::default() }
    }

    /// Noisier input: two disagreements, wider duplicate radius
    pub fn lenient() -> Self {
        Self { unmatch_tolerance: 2, collapse_ratio: 0.35, ..Self::default() }
    }

    /// Every tier rolls with the same weight
    pub fn flat_weights() -> Self {
        Self { tier_weights: TierWeights { low: 1, mid: 1, high: 1 }, ..Self::default() }
    }

    /// Load from environment variable RUNE_MATCH_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        match env::var("RUNE_MATCH_PROFILE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "strict" => Self::strict(),
            "lenient" => Self::lenient(),
            "flat" => Self::flat_weights(),
            _ => Self::default(),
        }
    }

    /// Parse and validate; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.collapse_ratio) {
            return Err(ConfigError::InvalidValue {
                field: "collapse_ratio",
                reason: format!("{} is outside [0, 1)", self.collapse_ratio),
            });
        }
        let w = &self.tier_weights;
        if w.low == 0 || w.mid == 0 || w.high == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tier_weights",
                reason: "every tier needs a non-zero weight".to_string(),
            });
        }
        if self.composite_roll_unit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "composite_roll_unit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// 티어별 가중치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self { low: 2, mid: 3, high: 4 }
    }
}

impl TierWeights {
    #[inline]
    pub fn weight(&self, tier: RuneTier) -> u32 {
        match tier {
            RuneTier::Low => self.low,
            RuneTier::Mid => self.mid,
            RuneTier::High => self.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert!((config.collapse_ratio - 0.25).abs() < 0.001);
        assert_eq!(config.unmatch_tolerance, 1);
        assert_eq!(config.tier_weights.weight(RuneTier::Low), 2);
        assert_eq!(config.tier_weights.weight(RuneTier::Mid), 3);
        assert_eq!(config.tier_weights.weight(RuneTier::High), 4);
        assert_eq!(config.composite_roll_unit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(RecognizerConfig::strict().unmatch_tolerance, 0);
        let lenient = RecognizerConfig::lenient();
        assert_eq!(lenient.unmatch_tolerance, 2);
        assert!(lenient.collapse_ratio > 0.25);
        assert_eq!(RecognizerConfig::flat_weights().tier_weights.weight(RuneTier::High), 1);
        for preset in [
            RecognizerConfig::strict(),
            RecognizerConfig::lenient(),
            RecognizerConfig::flat_weights(),
        ] {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_from_env_default() {
        // unset in the test environment
        let config = RecognizerConfig::from_env_or_default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = RecognizerConfig::from_json(r#"{"unmatch_tolerance": 3}"#).unwrap();
        assert_eq!(config.unmatch_tolerance, 3);
        assert_eq!(config.tier_weights, TierWeights::default());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = RecognizerConfig::from_json(r#"{"collapse_ratio": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "collapse_ratio", .. }));

        let err = RecognizerConfig::from_json(r#"{"tier_weights": {"low": 0, "mid": 3, "high": 4}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "tier_weights", .. }));

        let err = RecognizerConfig::from_json(r#"{"composite_roll_unit": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "composite_roll_unit", .. }));

        assert!(matches!(RecognizerConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serialization() {
        let config = RecognizerConfig::lenient();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RecognizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
