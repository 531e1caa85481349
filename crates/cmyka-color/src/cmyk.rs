use crate::Color;

/// Converts CMYK to 16-bit RGB, returning values in `0..=0xffff`.
#[inline]
fn cmyk_to_rgb16(c: u8, m: u8, y: u8, k: u8) -> [u32; 3] {
    let w = 0xffff - k as u32 * 0x101;
    [c, m, y].map(|ink| (0xffff - ink as u32 * 0x101) * w / 0xffff)
}

/// Converts naive CMYK to 8-bit RGB.
///
/// Each channel is computed with 16 bits of precision and then truncated to its high byte.
#[inline]
pub fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let [r, g, b] = cmyk_to_rgb16(c, m, y, k);
    ((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8)
}

/// Converts 8-bit RGB to naive CMYK.
///
/// Black (all zero) maps to `(0, 0, 0, 255)`, full black ink only.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> (u8, u8, u8, u8) {
    let r = r as u32;
    let g = g as u32;
    let b = b as u32;
    let w = r.max(g).max(b);
    if w == 0 {
        return (0, 0, 0, 0xff);
    }

    let c = (w - r) * 0xff / w;
    let m = (w - g) * 0xff / w;
    let y = (w - b) * 0xff / w;
    (c as u8, m as u8, y as u8, (0xff - w) as u8)
}

/// Opaque CMYK color with 8 bits per ink.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl Color for Cmyk {
    #[inline]
    fn rgba(&self) -> [u32; 4] {
        let [r, g, b] = cmyk_to_rgb16(self.c, self.m, self.y, self.k);
        [r, g, b, 0xffff]
    }
}

/// CMYK color with an alpha channel, 8 bits each.
///
/// Inks range from 0 (no ink) to 255 (full coverage); alpha ranges from 0 (transparent) to 255
/// (opaque). The value isn't associated with any color profile.
///
/// The zero value, fully transparent with no ink, is what out-of-bounds pixel reads return.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Cmyka {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
    pub a: u8,
}

impl Cmyka {
    /// Number of bytes a pixel takes, in C, M, Y, K, A order.
    pub const BYTES: usize = 5;

    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8, a: u8) -> Self {
        Self { c, m, y, k, a }
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 5]) -> Self {
        Self {
            c: bytes[0],
            m: bytes[1],
            y: bytes[2],
            k: bytes[3],
            a: bytes[4],
        }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 5] {
        [self.c, self.m, self.y, self.k, self.a]
    }
}

impl From<Cmyk> for Cmyka {
    #[inline]
    fn from(Cmyk { c, m, y, k }: Cmyk) -> Self {
        Self { c, m, y, k, a: 0xff }
    }
}

impl Color for Cmyka {
    // Transparency is scaled by the light the black ink lets through.
    #[inline]
    fn rgba(&self) -> [u32; 4] {
        let [r, g, b] = cmyk_to_rgb16(self.c, self.m, self.y, self.k);

        let w = 0xffff - self.k as u32 * 0x101;
        let a = (0xffff - self.a as u32 * 0x101) * w / 0xffff;
        [r, g, b, 0xffff - a]
    }
}
