//! Scoring table: color band windows and linear weights.
//!
//! The built-in values are uncalibrated heuristics. They live here as named
//! constants so they can be tested and tuned without touching the scoring
//! control flow in [`crate::analysis`].
//!
//! | Band  | H          | S         | V         | Weight |
//! |-------|------------|-----------|-----------|--------|
//! | Blue  | 100..=130  | 50..=255  | 50..=255  | +1.0   |
//! | Green | 40..=80    | 50..=255  | 50..=255  | -2.0   |
//! | Brown | 10..=20    | 50..=255  | 20..=200  | -3.0   |
//!
//! Clarity (normalized gray std-dev) is weighted +0.5 on top of a 5.0 base.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HsvRange;
use crate::error::{Error, Result};

/// Clear open water.
pub const BLUE_RANGE: HsvRange = HsvRange::new([100, 50, 50], [130, 255, 255]);
/// Algae and vegetation.
pub const GREEN_RANGE: HsvRange = HsvRange::new([40, 50, 50], [80, 255, 255]);
/// Sediment and mud.
pub const BROWN_RANGE: HsvRange = HsvRange::new([10, 50, 20], [20, 255, 200]);

pub const BLUE_WEIGHT: f64 = 1.0;
pub const GREEN_WEIGHT: f64 = -2.0;
pub const BROWN_WEIGHT: f64 = -3.0;
pub const CLARITY_WEIGHT: f64 = 0.5;

/// Score before any band or clarity adjustment.
pub const BASE_SCORE: f64 = 5.0;

/// Lowest reportable quality score.
pub const MIN_SCORE: u8 = 1;
/// Highest reportable quality score.
pub const MAX_SCORE: u8 = 5;

/// One hue band and its contribution per unit of pixel coverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    /// Inclusive HSV window.
    pub range: HsvRange,
    /// Added to the raw score per unit of coverage (ratio in `0..=1`).
    pub weight: f64,
}

/// Complete scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting raw score.
    pub base_score: f64,
    /// Blue band (clear water).
    pub blue: ColorBand,
    /// Green band (algae).
    pub green: ColorBand,
    /// Brown band (sediment).
    pub brown: ColorBand,
    /// Weight applied to normalized gray std-dev.
    pub clarity_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            blue: ColorBand {
                range: BLUE_RANGE,
                weight: BLUE_WEIGHT,
            },
            green: ColorBand {
                range: GREEN_RANGE,
                weight: GREEN_WEIGHT,
            },
            brown: ColorBand {
                range: BROWN_RANGE,
                weight: BROWN_WEIGHT,
            },
            clarity_weight: CLARITY_WEIGHT,
        }
    }
}

impl ScoringConfig {
    /// Check that every range is well formed and every weight is finite.
    pub fn validate(&self) -> Result<()> {
        for (name, band) in self.bands() {
            if !band.range.is_valid() {
                return Err(Error::InvalidConfig(format!(
                    "{name} range {:?}..={:?} is inverted or hue exceeds 179",
                    band.range.lo, band.range.hi
                )));
            }
            if !band.weight.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} weight is not finite")));
            }
        }
        if !self.base_score.is_finite() {
            return Err(Error::InvalidConfig("base_score is not finite".to_string()));
        }
        if !self.clarity_weight.is_finite() {
            return Err(Error::InvalidConfig("clarity_weight is not finite".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Named bands in evaluation order.
    #[must_use]
    pub fn bands(&self) -> [(&'static str, &ColorBand); 3] {
        [("blue", &self.blue), ("green", &self.green), ("brown", &self.brown)]
    }
}
