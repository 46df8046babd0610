//! Genetic operators: single-cut recombination and global color mutation.
//!
//! Both take the random source explicitly so a seeded engine reproduces a run exactly.

use image::{Rgb, RgbImage};
use rand::{Rng, seq::IndexedRandom};

use crate::canvas::ensure_same_shape;
use crate::error::{PainterError, Result};
use crate::fitness::color_histogram;

/// Direction of the straight cut used by [`recombine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut across rows: rows above the cut come from the first parent.
    Rows,
    /// Cut across columns: columns left of the cut come from the first parent.
    Columns,
}

impl Axis {
    /// Pixels along this axis; the largest valid cut.
    pub fn extent(self, image: &RgbImage) -> u32 {
        match self {
            Axis::Rows => image.height(),
            Axis::Columns => image.width(),
        }
    }
}

/// Build the child of `a` and `b` for a fixed cut. `cut` ranges over `0..=axis.extent()`.
pub fn split(a: &RgbImage, b: &RgbImage, axis: Axis, cut: u32) -> RgbImage {
    RgbImage::from_fn(a.width(), a.height(), |x, y| {
        let pos = match axis {
            Axis::Rows => y,
            Axis::Columns => x,
        };
        if pos < cut {
            *a.get_pixel(x, y)
        } else {
            *b.get_pixel(x, y)
        }
    })
}

/// Merge two equally sized images along a random straight cut.
///
/// The orientation is a fair coin and the cut is uniform over every position including
/// both edges, so a child may be an exact copy of either parent.
pub fn recombine<R: Rng>(a: &RgbImage, b: &RgbImage, rng: &mut R) -> Result<RgbImage> {
    ensure_same_shape(a, b)?;
    let axis = if rng.random_bool(0.5) {
        Axis::Rows
    } else {
        Axis::Columns
    };
    let cut = rng.random_range(0..=axis.extent(a));
    Ok(split(a, b, axis, cut))
}

/// Replace one existing color, everywhere it occurs, with a fresh random color.
///
/// The victim is drawn uniformly from the distinct colors, not weighted by area. The
/// image is taken by value and handed back rewritten.
pub fn mutate<R: Rng>(mut image: RgbImage, rng: &mut R) -> Result<RgbImage> {
    let replacement = Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()]);
    let colors: Vec<[u8; 3]> = color_histogram(&image).into_keys().collect();
    let victim = Rgb(*colors.choose(rng).ok_or(PainterError::EmptyColorSet)?);
    log::trace!("mutate {:?} -> {:?}", victim.0, replacement.0);

    for pixel in image.pixels_mut() {
        if *pixel == victim {
            *pixel = replacement;
        }
    }
    Ok(image)
}
