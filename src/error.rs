//! Error type shared by the operators and the engine.

/// Everything that can go wrong while painting.
#[derive(Debug, thiserror::Error)]
pub enum PainterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },
    #[error("Cannot mutate an image with no pixels")]
    EmptyColorSet,
    #[error("Image I/O failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PainterError>;
