//! This crate provides [`Cmyka`], a color with 8-bit cyan, magenta, yellow, black and alpha
//! channels, along with the [`Color`] and [`ColorModel`] traits used to move colors between
//! pixel formats.
//!
//! Every color converts to the same interchange representation: premultiplied RGBA with 16 bits
//! of precision per channel, returned as `u32`s in `0..=0xffff`. CMYK conversion uses the naive
//! formulas; no color profile is involved.
mod cmyk;
mod model;
mod rgb;

pub use cmyk::*;
pub use model::*;
pub use rgb::*;

/// A color that can be expressed as premultiplied 16-bit RGBA.
pub trait Color {
    /// Returns red, green, blue and alpha, each in the range `0..=0xffff`.
    fn rgba(&self) -> [u32; 4];
}
