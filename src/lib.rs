//! Genetic-algorithm painter.
//!
//! A population of images is evolved toward an even split of pixels between their
//! distinct colors. Children are made by cutting parents along a random straight line;
//! mutation recolors one whole color class at a time.
//!
//! ```
//! use genetic_painter::{Painter, PainterConfig, canvas};
//!
//! let (red, blue) = canvas::red_and_blue(16, 16);
//! let config = PainterConfig::default().with_generations(5).with_seed(1);
//! let mut painter = Painter::new(config, &red, &blue)?;
//! let painting = painter.run()?;
//! assert_eq!(painting.image.dimensions(), (16, 16));
//! # Ok::<(), genetic_painter::PainterError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod operators;

pub use config::PainterConfig;
pub use engine::{Member, Painter, Painting};
pub use error::{PainterError, Result};
