use cmyka_color::{Color, ColorModel, Rgba64};

use crate::Rectangle;

/// A finite rectangular grid of colors.
pub trait Image {
    type Pixel: Color + 'static;
    type Model: ColorModel;

    fn color_model(&self) -> Self::Model;

    /// Returns the domain for which [`at`](Image::at) can return non-zero colors.
    fn bounds(&self) -> Rectangle;

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// Coordinates outside of [`bounds`](Image::bounds) yield the zero color.
    fn at(&self, x: i32, y: i32) -> Self::Pixel;

    /// Returns the color of the pixel at `(x, y)` as 16-bit RGBA.
    #[inline]
    fn rgba64_at(&self, x: i32, y: i32) -> Rgba64 {
        Rgba64::from_color(&self.at(x, y))
    }

    /// Returns whether the image is known to be fully opaque.
    fn opaque(&self) -> bool;
}

/// An [`Image`] whose pixels can be written.
pub trait ImageMut: Image {
    /// Converts `color` with the image's color model and stores it at `(x, y)`.
    ///
    /// Coordinates outside of [`bounds`](Image::bounds) are ignored.
    fn set<C: Color + 'static>(&mut self, x: i32, y: i32, color: C);

    #[inline]
    fn set_rgba64(&mut self, x: i32, y: i32, color: Rgba64) {
        self.set(x, y, color)
    }
}
