//! Color-balance fitness.
//!
//! An image scores well when its distinct colors cover roughly equal numbers of pixels.
//! The score is the total absolute deviation of each color's pixel count from the even
//! share `pixels / colors`; lower is better and a single flat color scores 0.

use std::collections::BTreeMap;

use image::RgbImage;

/// Pixel count per distinct color, ordered by channel values.
pub fn color_histogram(image: &RgbImage) -> BTreeMap<[u8; 3], usize> {
    let mut counts = BTreeMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct colors in `image`.
pub fn distinct_colors(image: &RgbImage) -> usize {
    color_histogram(image).len()
}

/// Score `image`. Zero-size images have nothing to balance and score 0.
pub fn evaluate(image: &RgbImage) -> f64 {
    let counts = color_histogram(image);
    if counts.is_empty() {
        return 0.0;
    }
    let total = (image.width() as usize * image.height() as usize) as f64;
    let expected = total / counts.len() as f64;
    counts
        .values()
        .map(|&count| (count as f64 - expected).abs())
        .sum()
}
