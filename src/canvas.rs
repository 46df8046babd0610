//! Seed images and shape helpers.
//!
//! Every image in a run is an [`RgbImage`] with quantized `u8` channels, so two pixels
//! share a color only when all three channels are equal.

use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage, imageops::FilterType};

use crate::error::{PainterError, Result};

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// An image filled with a single color.
pub fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// The default seed pair: solid red and solid blue of the same size.
pub fn red_and_blue(width: u32, height: u32) -> (RgbImage, RgbImage) {
    (solid(width, height, RED), solid(width, height, BLUE))
}

/// Load an image from disk and resize it to exactly `width`×`height`.
///
/// Nearest-neighbour filtering keeps the palette of the source intact, which matters
/// because fitness counts exact colors.
pub fn load_seed(path: &Path, width: u32, height: u32) -> Result<RgbImage> {
    let img = image::open(path)?;
    let img = if img.dimensions() == (width, height) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Nearest)
    };
    Ok(img.to_rgb8())
}

/// Fail with [`PainterError::DimensionMismatch`] unless both images share a shape.
pub fn ensure_same_shape(a: &RgbImage, b: &RgbImage) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(PainterError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fills_every_pixel() {
        let img = solid(3, 2, RED);
        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_red_and_blue_share_shape() {
        let (a, b) = red_and_blue(5, 7);
        assert!(ensure_same_shape(&a, &b).is_ok());
        assert_eq!(*a.get_pixel(0, 0), RED);
        assert_eq!(*b.get_pixel(4, 6), BLUE);
    }

    #[test]
    fn test_shape_mismatch_is_reported() {
        let a = solid(4, 4, RED);
        let b = solid(4, 5, BLUE);
        match ensure_same_shape(&a, &b) {
            Err(PainterError::DimensionMismatch { left, right }) => {
                assert_eq!(left, (4, 4));
                assert_eq!(right, (4, 5));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_load_seed_resizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.png");
        let mut img = solid(8, 8, RED);
        img.put_pixel(7, 7, BLUE);
        img.save(&path).unwrap();

        let loaded = load_seed(&path, 4, 4).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert!(loaded.pixels().all(|p| *p == RED || *p == BLUE));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let err = load_seed(Path::new("/nonexistent/seed.png"), 4, 4).unwrap_err();
        assert!(matches!(err, PainterError::Image(_)));
    }
}
