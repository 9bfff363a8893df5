//! Image analysis command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use water_quality::decode::decode_image;
use water_quality::analysis::quantize;
use water_quality::{AnalysisResult, Measurements, ScoringConfig, measure, score_with};

#[derive(Serialize)]
struct Detailed {
    result: AnalysisResult,
    measurements: Measurements,
}

pub fn run(input: PathBuf, config: Option<PathBuf>, details: bool, pretty: bool) -> Result<()> {
    let config = load_config(config.as_deref())?;
    println!("{}", render(&input, &config, details, pretty)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading scoring table");
            ScoringConfig::from_json_file(path)
                .with_context(|| format!("Failed to load scoring table from {}", path.display()))
        }
        None => Ok(ScoringConfig::default()),
    }
}

fn render(input: &Path, config: &ScoringConfig, details: bool, pretty: bool) -> Result<String> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let image = decode_image(&bytes)
        .with_context(|| format!("Failed to decode {}", input.display()))?;
    info!(
        path = %input.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "analyzing"
    );

    let json = if details {
        // One pass, so the printed measurements are the ones behind the score.
        let measurements = measure(&image, config);
        let detailed = Detailed {
            result: AnalysisResult::from_score(quantize(measurements.raw_score)),
            measurements,
        };
        to_json(&detailed, pretty)?
    } else {
        to_json(&score_with(&image, config), pretty)?
    };
    Ok(json)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn write_png(dir: &Path, name: &str, px: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(6, 6, Rgb(px))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn test_render_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "blue.png", [43, 69, 200]);
        let json = render(&path, &ScoringConfig::default(), false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quality_score"], 5);
        assert_eq!(value["pollution_level"], "clean");
    }

    #[test]
    fn test_render_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "mud.png", [100, 71, 41]);
        let json = render(&path, &ScoringConfig::default(), true, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["quality_score"], 2);
        assert_eq!(value["measurements"]["brown_ratio"], 1.0);
    }

    #[test]
    fn test_details_agree_with_plain_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.png");
        RgbImage::from_fn(10, 4, |x, _| {
            if x < 6 { Rgb([100, 71, 41]) } else { Rgb([128, 128, 128]) }
        })
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

        let config = ScoringConfig::default();
        let detailed: serde_json::Value =
            serde_json::from_str(&render(&path, &config, true, false).unwrap()).unwrap();
        let plain: serde_json::Value =
            serde_json::from_str(&render(&path, &config, false, false).unwrap()).unwrap();

        let raw = detailed["measurements"]["raw_score"].as_f64().unwrap();
        assert_eq!(detailed["result"]["quality_score"], quantize(raw));
        assert_eq!(detailed["result"], plain);
        assert_eq!(plain["quality_score"], 3);
    }

    #[test]
    fn test_custom_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScoringConfig::default();
        config.brown.weight = 0.0;
        let config_path = dir.path().join("table.json");
        std::fs::write(&config_path, config.to_json().unwrap()).unwrap();

        let loaded = load_config(Some(&config_path)).unwrap();
        let path = write_png(dir.path(), "mud.png", [100, 71, 41]);
        let json = render(&path, &loaded, false, false).unwrap();
        assert!(json.contains("\"quality_score\":5"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = render(
            Path::new("/nonexistent/lake.png"),
            &ScoringConfig::default(),
            false,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let err = render(&path, &ScoringConfig::default(), false, false).unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }
}
