use std::any::Any;

use crate::{Cmyka, Color, Rgba64, rgb_to_cmyk};

/// Conversion of arbitrary colors into one color type.
pub trait ColorModel {
    type Output: Color;

    fn convert<C: Color + 'static>(&self, color: C) -> Self::Output;
}

/// Color model for [`Cmyka`].
///
/// `Cmyka` values pass through unchanged. Other colors are reduced to 8-bit RGB, converted with
/// the naive RGB to CMYK formula and made fully opaque; alpha of the source color is not
/// carried over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CmykaModel;

impl ColorModel for CmykaModel {
    type Output = Cmyka;

    fn convert<C: Color + 'static>(&self, color: C) -> Cmyka {
        if let Some(&cmyka) = (&color as &dyn Any).downcast_ref::<Cmyka>() {
            return cmyka;
        }

        let [r, g, b, _] = color.rgba();
        let (c, m, y, k) = rgb_to_cmyk((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8);
        Cmyka { c, m, y, k, a: 0xff }
    }
}

/// Color model for [`Rgba64`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgba64Model;

impl ColorModel for Rgba64Model {
    type Output = Rgba64;

    fn convert<C: Color + 'static>(&self, color: C) -> Rgba64 {
        if let Some(&rgba64) = (&color as &dyn Any).downcast_ref::<Rgba64>() {
            return rgba64;
        }

        Rgba64::from_color(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cmyk, NRgba, Rgba};

    #[test]
    fn cmyka_passes_through() {
        let c = Cmyka::new(10, 20, 30, 40, 50);
        assert_eq!(CmykaModel.convert(c), c);
        let transparent = Cmyka::new(1, 2, 3, 4, 0);
        assert_eq!(CmykaModel.convert(transparent).a, 0);
    }

    #[test]
    fn red_to_cmyka() {
        assert_eq!(
            CmykaModel.convert(Rgba::new(0xff, 0, 0, 0xff)),
            Cmyka::new(0, 0xff, 0xff, 0, 0xff),
        );
    }

    #[test]
    fn source_alpha_is_discarded() {
        let half_red = NRgba::new(0xff, 0, 0, 0x80);
        assert_eq!(CmykaModel.convert(half_red), Cmyka::new(0, 0xff, 0xff, 0x7f, 0xff));

        let transparent = Rgba::new(0, 0, 0, 0);
        assert_eq!(CmykaModel.convert(transparent), Cmyka::new(0, 0, 0, 0xff, 0xff));
    }

    #[test]
    fn cmyk_gains_full_alpha() {
        let c = Cmyk::new(0, 0, 0, 0);
        assert_eq!(CmykaModel.convert(c), Cmyka::new(0, 0, 0, 0, 0xff));
    }

    #[test]
    fn rgba64_model() {
        let c = Rgba64::new(1, 2, 3, 4);
        assert_eq!(Rgba64Model.convert(c), c);
        assert_eq!(
            Rgba64Model.convert(Cmyka::new(0, 0, 0, 0, 0xff)),
            Rgba64::new(0xffff, 0xffff, 0xffff, 0xffff),
        );
    }
}
