//! Water quality scoring from color distribution.
//!
//! The score is a short deterministic chain:
//!
//! 1. Convert each pixel to 8-bit HSV and count hits in the blue, green and
//!    brown bands of the [`ScoringConfig`].
//! 2. Compute clarity as the population std-dev of gray intensity / 255.
//! 3. `raw = base + green_w*green + brown_w*brown + blue_w*blue + clarity_w*clarity`
//! 4. Truncate toward zero (not round) and clamp to `1..=5`.
//! 5. Look up the [`PollutionLevel`] and its description.
//!
//! Gray images carry no hue, so every band ratio is zero for them and only
//! clarity moves the score.

pub mod report;

use tracing::debug;

use crate::color::{rgb_to_gray, rgb_to_hsv};
use crate::config::{MAX_SCORE, MIN_SCORE, ScoringConfig};
use crate::pixels::Image;

pub use report::{AnalysisResult, Measurements, PollutionLevel};

/// Score an image with the built-in table.
#[must_use]
pub fn score(image: &Image) -> AnalysisResult {
    score_with(image, &ScoringConfig::default())
}

/// Score an image with a caller-supplied table.
#[must_use]
pub fn score_with(image: &Image, config: &ScoringConfig) -> AnalysisResult {
    let m = measure(image, config);
    let result = AnalysisResult::from_score(quantize(m.raw_score));
    debug!(
        width = image.width(),
        height = image.height(),
        score = result.quality_score,
        level = %result.pollution_level,
        "scored image"
    );
    result
}

/// Compute band ratios, clarity and the raw score.
#[must_use]
pub fn measure(image: &Image, config: &ScoringConfig) -> Measurements {
    let total = image.pixel_count() as f64;
    let mut hist = [0u64; 256];
    let (mut blue, mut green, mut brown) = (0u64, 0u64, 0u64);

    if let Some(rgb) = image.rgb() {
        for px in rgb.pixels() {
            let hsv = rgb_to_hsv(px);
            blue += u64::from(config.blue.range.contains(hsv));
            green += u64::from(config.green.range.contains(hsv));
            brown += u64::from(config.brown.range.contains(hsv));
            hist[rgb_to_gray(px) as usize] += 1;
        }
    } else if let Some(gray) = image.gray() {
        for px in gray.pixels() {
            hist[px as usize] += 1;
        }
    }

    let blue_ratio = blue as f64 / total;
    let green_ratio = green as f64 / total;
    let brown_ratio = brown as f64 / total;
    let clarity = std_dev(&hist, total) / 255.0;

    // Accumulation order matches the reference weighted sum term by term.
    let mut raw_score = config.base_score;
    raw_score += config.green.weight * green_ratio;
    raw_score += config.brown.weight * brown_ratio;
    raw_score += config.blue.weight * blue_ratio;
    raw_score += config.clarity_weight * clarity;

    let m = Measurements {
        blue_ratio,
        green_ratio,
        brown_ratio,
        clarity,
        raw_score,
    };
    debug!(
        blue = m.blue_ratio,
        green = m.green_ratio,
        brown = m.brown_ratio,
        clarity = m.clarity,
        raw = m.raw_score,
        "measured color bands"
    );
    m
}

/// Truncate toward zero, then clamp into `1..=5`.
#[must_use]
pub fn quantize(raw: f64) -> u8 {
    raw.trunc().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

/// Population standard deviation of a 256-bin intensity histogram.
///
/// The mean is exact. The variance is summed per bin rather than per pixel,
/// so it can differ from a pixel-wise pairwise sum by a few ulps.
fn std_dev(hist: &[u64; 256], total: f64) -> f64 {
    let mean = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as f64 * n as f64)
        .sum::<f64>()
        / total;
    let variance = hist
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(v, &n)| {
            let d = v as f64 - mean;
            d * d * n as f64
        })
        .sum::<f64>()
        / total;
    variance.sqrt()
}
