use cmyka_color::{Cmyka, CmykaModel, Color, ColorModel};

use crate::{Error, Image, ImageMut, Point, Rectangle, Result};

const BYTES: usize = Cmyka::BYTES;

/// An in-memory image whose pixels are [`Cmyka`] values.
///
/// The pixel at `(x, y)` starts at `pix[(y - rect.min.y) * stride + (x - rect.min.x) * 5]` and
/// occupies five bytes, in C, M, Y, K, A order.
///
/// `B` is the backing storage. Owned images use `Vec<u8>`; [`sub_image`](Self::sub_image) and
/// [`sub_image_mut`](Self::sub_image_mut) return views borrowing the parent's buffer.
#[derive(Debug, Clone)]
pub struct CmykaImage<B = Vec<u8>> {
    pix: B,
    stride: usize,
    rect: Rectangle,
}

/// Returns `(stride, length)` of a tightly packed buffer covering `rect`.
fn packed_layout(rect: Rectangle) -> Option<(usize, usize)> {
    let (width, height) = rect.size()?;
    let stride = width.checked_mul(BYTES)?;
    let len = stride.checked_mul(height)?;
    Some((stride, len))
}

impl CmykaImage {
    /// Creates a new image with the given bounds, with every byte zeroed.
    ///
    /// Zeroed pixels have no ink and are fully transparent.
    ///
    /// # Panics
    /// Panics if `rect` is not well-formed or the buffer size overflows `usize`.
    pub fn new(rect: Rectangle) -> Self {
        let Some((stride, len)) = packed_layout(rect) else {
            panic!("invalid image bounds {rect:?}");
        };

        Self {
            pix: vec![0u8; len],
            stride,
            rect,
        }
    }

    /// Creates a new zeroed image, or returns an error if `rect` is not well-formed or the buffer
    /// size overflows `usize`.
    pub fn try_new(rect: Rectangle) -> Result<Self> {
        let Some((stride, len)) = packed_layout(rect) else {
            tracing::debug!(?rect, "Cannot allocate image with given bounds");
            return Err(Error::InvalidBounds(rect));
        };

        Ok(Self {
            pix: vec![0u8; len],
            stride,
            rect,
        })
    }

    /// Converts every pixel of `src` with [`CmykaModel`] into a new image with the same bounds.
    pub fn convert_from<I: Image + ?Sized>(src: &I) -> Self {
        let rect = src.bounds();
        let mut out = Self::new(rect);
        for y in rect.min.y..rect.max.y {
            for x in rect.min.x..rect.max.x {
                out.set(x, y, src.at(x, y));
            }
        }
        out
    }

    /// Decomposes the image into the buffer, stride and bounds.
    #[inline]
    pub fn into_raw(self) -> (Vec<u8>, usize, Rectangle) {
        (self.pix, self.stride, self.rect)
    }
}

impl<B: AsRef<[u8]>> CmykaImage<B> {
    /// Wraps an existing buffer laid out as described in [`CmykaImage`].
    ///
    /// Returns an error if `stride` is shorter than a row of `rect`, or `pix` doesn't reach the
    /// last pixel of the last row.
    pub fn from_raw(pix: B, stride: usize, rect: Rectangle) -> Result<Self> {
        let (width, height) = rect.size().ok_or(Error::InvalidBounds(rect))?;
        let row_bytes = width.checked_mul(BYTES).ok_or(Error::InvalidBounds(rect))?;
        if stride < row_bytes {
            tracing::debug!(stride, row_bytes, "Stride is shorter than a row");
            return Err(Error::StrideTooSmall {
                stride,
                required: row_bytes,
            });
        }

        let required = if width == 0 || height == 0 {
            0
        } else {
            stride
                .checked_mul(height - 1)
                .and_then(|x| x.checked_add(row_bytes))
                .ok_or(Error::InvalidBounds(rect))?
        };
        let len = pix.as_ref().len();
        if len < required {
            tracing::debug!(len, required, "Pixel buffer is too small");
            return Err(Error::BufferTooSmall { len, required });
        }

        Ok(Self {
            pix,
            stride,
            rect,
        })
    }

    #[inline]
    pub fn pix(&self) -> &[u8] {
        self.pix.as_ref()
    }

    /// Byte distance between vertically adjacent pixels.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the index of the first byte of the pixel at `(x, y)`.
    ///
    /// Bounds are not checked. The result for coordinates outside of the image is meaningless,
    /// and indexing [`pix`](Self::pix) with it may panic.
    #[inline]
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        let dy = y as i64 - self.rect.min.y as i64;
        let dx = x as i64 - self.rect.min.x as i64;
        (dy * self.stride as i64 + dx * BYTES as i64) as usize
    }

    pub fn cmyka_at(&self, x: i32, y: i32) -> Cmyka {
        if !Point::new(x, y).is_in(self.rect) {
            return Cmyka::default();
        }

        let i = self.pix_offset(x, y);
        let s = &self.pix.as_ref()[i..i + BYTES];
        Cmyka::new(s[0], s[1], s[2], s[3], s[4])
    }

    /// Returns the bytes of row `y`, or `None` if the row is out of bounds.
    pub fn row(&self, y: i32) -> Option<&[u8]> {
        if self.rect.is_empty() || y < self.rect.min.y || y >= self.rect.max.y {
            return None;
        }

        let i = self.pix_offset(self.rect.min.x, y);
        let row_bytes = self.rect.dx() as usize * BYTES;
        Some(&self.pix.as_ref()[i..i + row_bytes])
    }

    /// Returns a view of the part of the image visible through `rect`.
    ///
    /// The view shares pixels with `self`. Its bounds are the intersection of `rect` and the
    /// bounds of `self`; if they don't overlap, the view is empty and has an empty buffer.
    pub fn sub_image(&self, rect: Rectangle) -> CmykaImage<&[u8]> {
        let rect = rect.intersect(self.rect);
        if rect.is_empty() {
            tracing::trace!(?rect, bounds = ?self.rect, "Empty sub-image");
            return CmykaImage {
                pix: Default::default(),
                stride: 0,
                rect: Rectangle::empty(),
            };
        }

        let i = self.pix_offset(rect.min.x, rect.min.y);
        CmykaImage {
            pix: &self.pix.as_ref()[i..],
            stride: self.stride,
            rect,
        }
    }

    /// Copies the image into a new, tightly packed buffer.
    pub fn to_owned_image(&self) -> CmykaImage {
        let mut out = CmykaImage::new(self.rect);
        let row_bytes = out.stride;
        if row_bytes == 0 {
            return out;
        }

        let rows = self.rect.min.y..self.rect.max.y;
        for (y, out_row) in rows.zip(out.pix.chunks_exact_mut(row_bytes)) {
            if let Some(row) = self.row(y) {
                out_row.copy_from_slice(row);
            }
        }
        out
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CmykaImage<B> {
    #[inline]
    pub fn pix_mut(&mut self) -> &mut [u8] {
        self.pix.as_mut()
    }

    /// Stores `color` at `(x, y)` without going through the color model.
    ///
    /// Coordinates outside of the image are ignored.
    pub fn set_cmyka(&mut self, x: i32, y: i32, color: Cmyka) {
        if !Point::new(x, y).is_in(self.rect) {
            return;
        }

        let i = self.pix_offset(x, y);
        self.pix.as_mut()[i..i + BYTES].copy_from_slice(&color.to_bytes());
    }

    /// Returns the mutable bytes of row `y`, or `None` if the row is out of bounds.
    pub fn row_mut(&mut self, y: i32) -> Option<&mut [u8]> {
        if self.rect.is_empty() || y < self.rect.min.y || y >= self.rect.max.y {
            return None;
        }

        let i = self.pix_offset(self.rect.min.x, y);
        let row_bytes = self.rect.dx() as usize * BYTES;
        Some(&mut self.pix.as_mut()[i..i + row_bytes])
    }

    /// Returns a mutable view of the part of the image visible through `rect`.
    ///
    /// Writes through the view are visible in `self`. Bounds are computed as in
    /// [`sub_image`](Self::sub_image).
    pub fn sub_image_mut(&mut self, rect: Rectangle) -> CmykaImage<&mut [u8]> {
        let rect = rect.intersect(self.rect);
        if rect.is_empty() {
            tracing::trace!(?rect, bounds = ?self.rect, "Empty sub-image");
            return CmykaImage {
                pix: Default::default(),
                stride: 0,
                rect: Rectangle::empty(),
            };
        }

        let i = self.pix_offset(rect.min.x, rect.min.y);
        let stride = self.stride;
        CmykaImage {
            pix: &mut self.pix.as_mut()[i..],
            stride,
            rect,
        }
    }
}

impl<B: AsRef<[u8]>> Image for CmykaImage<B> {
    type Pixel = Cmyka;
    type Model = CmykaModel;

    #[inline]
    fn color_model(&self) -> CmykaModel {
        CmykaModel
    }

    #[inline]
    fn bounds(&self) -> Rectangle {
        self.rect
    }

    #[inline]
    fn at(&self, x: i32, y: i32) -> Cmyka {
        self.cmyka_at(x, y)
    }

    /// Always returns `false`; pixels are not scanned.
    #[inline]
    fn opaque(&self) -> bool {
        false
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ImageMut for CmykaImage<B> {
    fn set<C: Color + 'static>(&mut self, x: i32, y: i32, color: C) {
        if !Point::new(x, y).is_in(self.rect) {
            return;
        }

        let color = CmykaModel.convert(color);
        self.set_cmyka(x, y, color);
    }
}
