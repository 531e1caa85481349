//! This crate provides [`CmykaImage`], an in-memory image storing [`Cmyka`] pixels in a flat byte
//! buffer, together with the [`Image`] and [`ImageMut`] traits describing color-addressable
//! surfaces.
//!
//! [`Cmyka`]: cmyka_color::Cmyka
mod cmyka_image;
mod image;
mod rect;
pub use cmyka_image::*;
pub use image::*;
pub use rect::*;


#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    InvalidBounds(Rectangle),
    StrideTooSmall { stride: usize, required: usize },
    BufferTooSmall { len: usize, required: usize },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBounds(rect) => write!(
                f,
                "invalid image bounds: ({}, {})-({}, {})",
                rect.min.x, rect.min.y, rect.max.x, rect.max.y,
            ),
            Self::StrideTooSmall { stride, required } => {
                write!(f, "stride too small: {stride} < {required}")
            }
            Self::BufferTooSmall { len, required } => {
                write!(f, "pixel buffer too small: {len} byte(s) < {required} byte(s)")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
