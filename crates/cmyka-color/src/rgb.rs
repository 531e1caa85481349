use crate::Color;

/// Premultiplied RGBA color with 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[inline]
fn expand(v: u8) -> u32 {
    let v = v as u32;
    v | (v << 8)
}

impl Color for Rgba {
    #[inline]
    fn rgba(&self) -> [u32; 4] {
        [self.r, self.g, self.b, self.a].map(expand)
    }
}

/// Non-premultiplied RGBA color with 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct NRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl NRgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Color for NRgba {
    fn rgba(&self) -> [u32; 4] {
        let a = self.a as u32;
        let [r, g, b] = [self.r, self.g, self.b].map(|v| expand(v) * a / 0xff);
        [r, g, b, expand(self.a)]
    }
}

/// Premultiplied RGBA color with 16 bits per channel.
///
/// This is the canonical form every [`Color`] converts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Narrows the output of [`Color::rgba`].
    ///
    /// Every component is expected to be in `0..=0xffff` already.
    #[inline]
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let [r, g, b, a] = color.rgba();
        Self {
            r: r as u16,
            g: g as u16,
            b: b as u16,
            a: a as u16,
        }
    }
}

impl Color for Rgba64 {
    #[inline]
    fn rgba(&self) -> [u32; 4] {
        [self.r, self.g, self.b, self.a].map(u32::from)
    }
}
