//! End-to-end checks through the byte adapter with real encoded files.
#![cfg(feature = "decode")]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use water_quality::service::analyze_bytes;
use water_quality::{Image, PollutionLevel, score};

/// Left half water blue, right half muddy brown.
fn split_scene(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([43, 69, 200])
        } else {
            Rgb([100, 71, 41])
        }
    })
}

#[test]
fn png_file_matches_raw_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    let scene = split_scene(40, 20);
    scene.save_with_format(&path, ImageFormat::Png).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let via_file = analyze_bytes(&bytes).unwrap();

    let raw = Image::from_raw(scene.into_raw(), 40, 20, 3).unwrap();
    assert_eq!(via_file, score(&raw));
    // 50% blue, 50% brown, equal luma: 5 - 1.5 + 0.5 = 4.0
    assert_eq!(via_file.quality_score, 4);
    assert_eq!(via_file.pollution_level, PollutionLevel::Clean);
}

#[test]
fn gray_jpeg_is_clean() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([128, 128, 128])));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();

    let result = analyze_bytes(buf.get_ref()).unwrap();
    assert_eq!(result.quality_score, 5);
    assert_eq!(result.pollution_level, PollutionLevel::Clean);
}

#[test]
fn result_serializes_with_three_fields() {
    let scene = split_scene(10, 10);
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(scene).write_to(&mut buf, ImageFormat::Png).unwrap();

    let value = serde_json::to_value(analyze_bytes(buf.get_ref()).unwrap()).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    for key in ["quality_score", "pollution_level", "analysis"] {
        assert!(keys.contains(&key), "missing {key}");
    }
}
