//! # water-quality
//!
//! Coarse water quality estimation from a photograph of the water surface.
//!
//! The estimate is a color heuristic, not a measurement: the share of blue,
//! green (algae) and brown (sediment) pixels in 8-bit HSV, plus the spread of
//! brightness as a clarity proxy, are combined into an integer score from 1
//! (heavily polluted) to 5 (clean).
//!
//! ## Quick Start
//!
//! ```rust
//! use water_quality::{Image, PollutionLevel, score};
//!
//! // 2x2 uniform muddy brown, RGB interleaved.
//! let image = Image::from_raw([100u8, 71, 41].repeat(4), 2, 2, 3)?;
//! let result = score(&image);
//!
//! assert_eq!(result.quality_score, 2);
//! assert_eq!(result.pollution_level, PollutionLevel::Polluted);
//! # Ok::<(), water_quality::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`pixels`]: Validated image container
//! - [`color`]: 8-bit HSV and luma conversion
//! - [`config`]: Band windows and weights
//! - [`analysis`]: The scorer and its result types
//! - [`decode`]: Encoded bytes to [`Image`] (feature `decode`)
//! - [`service`]: Byte-in, struct-out adapter for transports (feature `decode`)

pub mod analysis;
pub mod color;
pub mod config;
#[cfg(feature = "decode")]
pub mod decode;
pub mod error;
pub mod pixels;
#[cfg(feature = "decode")]
pub mod service;

// Re-export commonly used types
pub use analysis::{AnalysisResult, Measurements, PollutionLevel, measure, score, score_with};
pub use config::ScoringConfig;
pub use error::{Error, Result};
pub use pixels::Image;
