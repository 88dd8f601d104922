//! Model a color with the HSV notation.

use crate::{
    color::{Component, Components},
    convert::util,
    hsl::Hsl,
    rgb::{Encoding, Rgb, RgbEncoding},
};

pigment_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        #[hue]
        pub hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 1.0)]
        pub saturation: Component,
        /// The value component of the color.
        #[range(0.0, 1.0)]
        pub value: Component,
        /// The encoding of the RGB color this color was derived from, and
        /// will convert back to.
        #[tag]
        pub encoding: RgbEncoding,
    }
}

impl<E: Encoding> From<Rgb<E>> for Hsv {
    fn from(value: Rgb<E>) -> Self {
        let (hue, min, max) = util::rgb_to_hue_with_min_max(&value.to_components());
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new(hue, saturation, max, E::KIND)
    }
}

impl<E: Encoding> From<Hsv> for Rgb<E> {
    /// The channels are computed in the encoding the [`Hsv`] is tagged with
    /// and then converted to `E`.
    fn from(value: Hsv) -> Self {
        let Hsv {
            hue,
            saturation,
            value: v,
            ..
        } = value;

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            v - v * saturation * k.min(4.0 - k).min(1.0).max(0.0)
        };

        Rgb::from_encoded(value.encoding, Components(f(5.0), f(3.0), f(1.0)))
    }
}

impl From<Hsl> for Hsv {
    fn from(value: Hsl) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
            encoding,
        } = value;

        let v = lightness + saturation * lightness.min(1.0 - lightness);
        let saturation = if v == 0.0 {
            0.0
        } else {
            2.0 - 2.0 * lightness / v
        };

        Hsv::new(hue, saturation, v, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GammaRgb, LinearRgb, Srgb};

    #[test]
    fn hue_wraps_around() {
        assert_eq!(Hsv::new(370.0, 0.5, 0.5, RgbEncoding::Srgb).hue, 10.0);
        assert_eq!(Hsv::new(-10.0, 0.5, 0.5, RgbEncoding::Srgb).hue, 350.0);
    }

    #[test]
    fn saturation_and_value_are_clamped() {
        let hsv = Hsv::new(0.0, 1.5, -1.0, RgbEncoding::Srgb);
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 0.0);
    }

    #[test]
    fn hsv_to_srgb() {
        let srgb = Srgb::from(Hsv::new(100.0, 0.5, 0.5, RgbEncoding::Srgb));
        assert_component_eq!(srgb.red, 0.333333);
        assert_component_eq!(srgb.green, 0.5);
        assert_component_eq!(srgb.blue, 0.25);
    }

    #[test]
    fn primaries_to_hsv() {
        let red = Hsv::from(Srgb::new(1.0, 0.0, 0.0));
        assert_eq!((red.hue, red.saturation, red.value), (0.0, 1.0, 1.0));

        let green = Hsv::from(Srgb::new(0.0, 1.0, 0.0));
        assert_eq!(green.hue, 120.0);

        let blue = Hsv::from(Srgb::new(0.0, 0.0, 1.0));
        assert_eq!(blue.hue, 240.0);

        let magenta = Hsv::from(Srgb::new(1.0, 0.0, 1.0));
        assert_eq!(magenta.hue, 300.0);
    }

    #[test]
    fn black_and_gray_have_no_saturation() {
        let black = Hsv::from(Srgb::new(0.0, 0.0, 0.0));
        assert_eq!((black.hue, black.saturation, black.value), (0.0, 0.0, 0.0));

        let gray = Hsv::from(Srgb::new(0.5, 0.5, 0.5));
        assert_eq!((gray.hue, gray.saturation, gray.value), (0.0, 0.0, 0.5));
    }

    #[test]
    fn encoding_tag_follows_the_source() {
        let hsv = Hsv::from(GammaRgb::new(0.2, 0.4, 0.6));
        assert_eq!(hsv.encoding, RgbEncoding::Gamma);

        let back = GammaRgb::from(hsv);
        assert_component_eq!(back.red, 0.2);
        assert_component_eq!(back.green, 0.4);
        assert_component_eq!(back.blue, 0.6);
    }

    #[test]
    fn rgb_in_another_encoding_is_converted() {
        let hsv = Hsv::from(Srgb::new(0.5, 0.0, 1.0));
        let linear = LinearRgb::from(hsv);
        assert_component_eq!(linear.red, 0.214041);
        assert_component_eq!(linear.green, 0.0);
        assert_component_eq!(linear.blue, 1.0);
    }

    #[test]
    fn hsl_to_hsv() {
        let hsv = Hsv::from(Hsl::new(100.0, 0.333333, 0.375, RgbEncoding::Gamma));
        assert_eq!(hsv.hue, 100.0);
        assert_component_eq!(hsv.saturation, 0.5);
        assert_component_eq!(hsv.value, 0.5);
        assert_eq!(hsv.encoding, RgbEncoding::Gamma);

        let black = Hsv::from(Hsl::new(0.0, 0.5, 0.0, RgbEncoding::Srgb));
        assert_eq!(black.saturation, 0.0);
        assert_eq!(black.value, 0.0);
    }
}
