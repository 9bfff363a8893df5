//! Result types returned by the scorer.
//!
//! These serialize to the same JSON shape the water-quality service has
//! always returned: `quality_score`, `pollution_level`, `analysis`.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_SCORE, MIN_SCORE};

/// Pollution category derived from the integer quality score.
///
/// Ordered from worst to best so that `a < b` means `a` is more polluted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollutionLevel {
    /// Score <= 1.
    HeavilyPolluted,
    /// Score == 2.
    Polluted,
    /// Score == 3.
    Moderate,
    /// Score >= 4.
    Clean,
}

impl PollutionLevel {
    /// Get all levels, best first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Clean, Self::Moderate, Self::Polluted, Self::HeavilyPolluted]
    }

    /// Bucket a quality score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            Self::Clean
        } else if score >= 3 {
            Self::Moderate
        } else if score >= 2 {
            Self::Polluted
        } else {
            Self::HeavilyPolluted
        }
    }

    /// Fixed human-readable assessment for this level.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Clean => "水質は良好です。透明度が高く、汚染物質は検出されませんでした。",
            Self::Moderate => "水質は普通です。軽微な濁りが見られますが、大きな問題はありません。",
            Self::Polluted => "水質に問題があります。汚染物質や藻類の存在が疑われます。",
            Self::HeavilyPolluted => "水質が深刻に汚染されています。immediate attention が必要です。",
        }
    }

    /// Wire label, e.g. `heavily_polluted`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Moderate => "moderate",
            Self::Polluted => "polluted",
            Self::HeavilyPolluted => "heavily_polluted",
        }
    }
}

impl std::fmt::Display for PollutionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PollutionLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown pollution level: {s}"))
    }
}

/// Outcome of scoring one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Integer score in `1..=5`, 5 = cleanest.
    pub quality_score: u8,
    /// Category derived from `quality_score`.
    pub pollution_level: PollutionLevel,
    /// Fixed description for `pollution_level`.
    pub analysis: String,
}

impl AnalysisResult {
    /// Build the result for a score, clamping it into `1..=5`.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        let quality_score = score.clamp(MIN_SCORE, MAX_SCORE);
        let pollution_level = PollutionLevel::from_score(quality_score);
        Self {
            quality_score,
            pollution_level,
            analysis: pollution_level.description().to_string(),
        }
    }
}

/// Intermediate values behind a score, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Fraction of pixels in the blue band.
    pub blue_ratio: f64,
    /// Fraction of pixels in the green (algae) band.
    pub green_ratio: f64,
    /// Fraction of pixels in the brown (sediment) band.
    pub brown_ratio: f64,
    /// Population std-dev of gray intensity, divided by 255.
    pub clarity: f64,
    /// Weighted sum before truncation and clamping.
    pub raw_score: f64,
}
