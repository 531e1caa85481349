//! Various integrations to other library crates.
//!
//! # Available integrations
//!
//! Integrations are enabled with feature flags.
//! - `to_rgba16_image`, which renders any [`Image`][crate::Image] into an `image::ImageBuffer`
//!   (`image` feature)
//! - `from_rgba8_image`, which converts an `image::RgbaImage` into a [`CmykaImage`][crate::CmykaImage]
//!   (`image` feature)

#[cfg(feature = "image")]
mod image;

#[cfg(feature = "image")]
pub use self::image::*;
