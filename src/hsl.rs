//! Model a color with the HSL notation.

use crate::{
    color::{Component, Components},
    convert::util,
    hsv::Hsv,
    rgb::{Encoding, Rgb, RgbEncoding},
};

pigment_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        #[hue]
        pub hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 1.0)]
        pub saturation: Component,
        /// The lightness component of the color.
        #[range(0.0, 1.0)]
        pub lightness: Component,
        /// The encoding of the RGB color this color was derived from, and
        /// will convert back to.
        #[tag]
        pub encoding: RgbEncoding,
    }
}

impl<E: Encoding> From<Rgb<E>> for Hsl {
    fn from(value: Rgb<E>) -> Self {
        let (hue, min, max) = util::rgb_to_hue_with_min_max(&value.to_components());
        let delta = max - min;

        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl::new(hue, saturation, lightness, E::KIND)
    }
}

impl<E: Encoding> From<Hsl> for Rgb<E> {
    /// The channels are computed in the encoding the [`Hsl`] is tagged with
    /// and then converted to `E`.
    fn from(value: Hsl) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
            encoding,
        } = value;

        let a = saturation * lightness.min(1.0 - lightness);
        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };

        Rgb::from_encoded(encoding, Components(f(0.0), f(8.0), f(4.0)))
    }
}

impl From<Hsv> for Hsl {
    fn from(value: Hsv) -> Self {
        let Hsv {
            hue,
            saturation,
            value: v,
            encoding,
        } = value;

        let lightness = v - v * saturation / 2.0;
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (v - lightness) / lightness.min(1.0 - lightness)
        };

        Hsl::new(hue, saturation, lightness, encoding)
    }
}
