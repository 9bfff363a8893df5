//! Transport-agnostic adapter around the scorer.
//!
//! An HTTP handler (or any other front end) only needs these two calls:
//! [`analyze_bytes`] for the upload route and [`health`] for liveness.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, score_with};
use crate::config::ScoringConfig;
use crate::decode::decode_image;
use crate::error::Result;

/// Service name reported by [`health`].
pub const SERVICE_NAME: &str = "AI Processing";

/// Static liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"OK"`.
    pub status: String,
    /// Service identifier.
    pub service: String,
}

/// Liveness check. Never touches the scorer.
#[must_use]
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
    }
}

/// Decode uploaded bytes and score them with the built-in table.
pub fn analyze_bytes(data: &[u8]) -> Result<AnalysisResult> {
    analyze_bytes_with(data, &ScoringConfig::default())
}

/// Decode uploaded bytes and score them with `config`.
pub fn analyze_bytes_with(data: &[u8], config: &ScoringConfig) -> Result<AnalysisResult> {
    let image = decode_image(data)?;
    Ok(score_with(&image, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PollutionLevel;
    use crate::error::Error;
    use ::image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(px: [u8; 3]) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb(px)));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_health_payload() {
        let json = serde_json::to_string(&health()).unwrap();
        assert_eq!(json, r#"{"status":"OK","service":"AI Processing"}"#);
    }

    #[test]
    fn test_analyze_muddy_png() {
        let result = analyze_bytes(&png([100, 71, 41])).unwrap();
        assert_eq!(result.quality_score, 2);
        assert_eq!(result.pollution_level, PollutionLevel::Polluted);
    }

    #[test]
    fn test_analyze_with_custom_table() {
        let mut config = ScoringConfig::default();
        config.brown.weight = 0.0;
        let result = analyze_bytes_with(&png([100, 71, 41]), &config).unwrap();
        assert_eq!(result.quality_score, 5);
    }

    #[test]
    fn test_analyze_rejects_garbage() {
        assert!(matches!(analyze_bytes(b"GIF89a?").unwrap_err(), Error::Decode(_)));
    }
}
