use image::{ImageBuffer, Rgba, RgbaImage};

use crate::{CmykaImage, Image, ImageMut, NRgba, Rectangle};

/// Renders `src` into a 16-bit RGBA image buffer.
///
/// The pixel at `bounds().min` of `src` lands at `(0, 0)`. Samples are premultiplied, as returned
/// by [`Image::rgba64_at`].
pub fn to_rgba16_image<I: Image + ?Sized>(src: &I) -> ImageBuffer<Rgba<u16>, Vec<u16>> {
    let bounds = src.bounds();
    let (width, height) = bounds.size().unwrap_or((0, 0));
    tracing::trace!(width, height, "Rendering into RGBA16 image buffer");

    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let c = src.rgba64_at(bounds.min.x + x as i32, bounds.min.y + y as i32);
        Rgba([c.r, c.g, c.b, c.a])
    })
}

/// Converts an 8-bit RGBA image buffer into a [`CmykaImage`] with bounds starting at `(0, 0)`.
///
/// Colors go through [`CmykaModel`](crate::CmykaModel), so every resulting pixel is opaque.
pub fn from_rgba8_image(src: &RgbaImage) -> CmykaImage {
    let rect = Rectangle::from_size(src.width(), src.height());
    let mut out = CmykaImage::new(rect);
    for (x, y, &Rgba([r, g, b, a])) in src.enumerate_pixels() {
        out.set(x as i32, y as i32, NRgba::new(r, g, b, a));
    }
    out
}
