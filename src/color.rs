//! 8-bit color conversions used by the scorer.
//!
//! HSV uses the conventional 8-bit quantization: hue in half degrees
//! (`0..=179`), saturation and value in `0..=255`. Both conversions are
//! integer fixed-point with a rounded reciprocal table, so results are
//! bit-exact with other implementations of the same convention.

use rgb::RGB8;
use serde::{Deserialize, Serialize};

const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

/// Hue range in 8-bit HSV (half degrees).
pub const HUE_RANGE: i32 = 180;

const GRAY_SHIFT: u32 = 14;
const GRAY_R: u32 = 4899;
const GRAY_G: u32 = 9617;
const GRAY_B: u32 = 1868;

/// round((255 << 12) / v), 0 for v == 0.
const SDIV_TABLE: [i32; 256] = {
    let mut table = [0i32; 256];
    let mut v = 1;
    while v < 256 {
        let num = 2 * (255 << HSV_SHIFT);
        table[v] = (num + v as i32) / (2 * v as i32);
        v += 1;
    }
    table
};

/// round((180 << 12) / (6 * d)), 0 for d == 0.
const HDIV_TABLE: [i32; 256] = {
    let mut table = [0i32; 256];
    let mut d = 1;
    while d < 256 {
        let num = 2 * (HUE_RANGE << HSV_SHIFT);
        let den = 6 * d as i32;
        table[d] = (num + den) / (2 * den);
        d += 1;
    }
    table
};

/// A pixel in 8-bit HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue in half degrees, `0..=179`.
    pub h: u8,
    /// Saturation, `0..=255`.
    pub s: u8,
    /// Value (brightness), `0..=255`.
    pub v: u8,
}

/// Convert one RGB pixel to 8-bit HSV.
#[must_use]
pub fn rgb_to_hsv(px: RGB8) -> Hsv {
    let (r, g, b) = (i32::from(px.r), i32::from(px.g), i32::from(px.b));
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * SDIV_TABLE[v as usize] + HSV_ROUND) >> HSV_SHIFT;

    // Red wins ties, then green.
    let numerator = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (numerator * HDIV_TABLE[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE;
    }

    Hsv {
        h: h as u8,
        s: s as u8,
        v: v as u8,
    }
}

/// Convert one RGB pixel to 8-bit luma (0.299 R + 0.587 G + 0.114 B).
#[must_use]
pub fn rgb_to_gray(px: RGB8) -> u8 {
    let y = GRAY_R * u32::from(px.r) + GRAY_G * u32::from(px.g) + GRAY_B * u32::from(px.b);
    ((y + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8
}

/// Inclusive box in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    /// Lower corner `[h, s, v]`.
    pub lo: [u8; 3],
    /// Upper corner `[h, s, v]`.
    pub hi: [u8; 3],
}

impl HsvRange {
    /// Create a range from lower and upper `[h, s, v]` corners.
    #[must_use]
    pub const fn new(lo: [u8; 3], hi: [u8; 3]) -> Self {
        Self { lo, hi }
    }

    /// Whether `px` lies inside the box on all three axes.
    #[must_use]
    pub fn contains(&self, px: Hsv) -> bool {
        (self.lo[0]..=self.hi[0]).contains(&px.h)
            && (self.lo[1]..=self.hi[1]).contains(&px.s)
            && (self.lo[2]..=self.hi[2]).contains(&px.v)
    }

    /// Whether the box is well formed: `lo <= hi` per axis and hue within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lo.iter().zip(self.hi.iter()).all(|(lo, hi)| lo <= hi)
            && i32::from(self.hi[0]) < HUE_RANGE
    }
}
