//! Model a color with red, green and blue channels in one of three
//! encodings: linear light, sRGB or a pure 2.2 gamma.

use std::fmt::Debug;

use crate::{
    color::{Color, Component, Components},
    math::{transform, transform_3x3, Transform},
    white_point::WhitePoint,
    xyz::Xyz,
};

/// Runtime tag naming the encoding of RGB channels. Carried by models that
/// are derived from RGB (HSV and HSL) so that converting back produces RGB
/// in the original encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RgbEncoding {
    /// No transfer function, channels are proportional to light intensity.
    Linear,
    /// The piecewise sRGB transfer function.
    #[default]
    Srgb,
    /// A pure power law with an exponent of 2.2.
    Gamma,
}

impl RgbEncoding {
    /// Decode components in this encoding to linear light.
    pub fn to_linear(self, from: &Components) -> Components {
        match self {
            RgbEncoding::Linear => encoding::Linear::to_linear(from),
            RgbEncoding::Srgb => encoding::Srgb::to_linear(from),
            RgbEncoding::Gamma => encoding::Gamma::to_linear(from),
        }
    }

    /// Encode linear light components with this encoding.
    pub fn from_linear(self, from: &Components) -> Components {
        match self {
            RgbEncoding::Linear => encoding::Linear::from_linear(from),
            RgbEncoding::Srgb => encoding::Srgb::from_linear(from),
            RgbEncoding::Gamma => encoding::Gamma::from_linear(from),
        }
    }
}

/// A transfer function strategy relating encoded RGB channels to linear
/// light. Implemented by the tags in [`encoding`].
pub trait Encoding: Clone + Copy + Debug + PartialEq {
    /// The runtime tag for this encoding.
    const KIND: RgbEncoding;

    /// Decode the components to linear light.
    fn to_linear(from: &Components) -> Components;

    /// Encode the linear light components.
    fn from_linear(from: &Components) -> Components;
}

pub mod encoding {
    //! Tags for the RGB encodings.

    use super::{Encoding, RgbEncoding};
    use crate::color::{Component, Components};

    /// Tag for RGB without a transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Linear;

    impl Encoding for Linear {
        const KIND: RgbEncoding = RgbEncoding::Linear;

        fn to_linear(from: &Components) -> Components {
            *from
        }

        fn from_linear(from: &Components) -> Components {
            *from
        }
    }

    /// Tag for RGB encoded with the sRGB transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Srgb;

    impl Encoding for Srgb {
        const KIND: RgbEncoding = RgbEncoding::Srgb;

        fn to_linear(from: &Components) -> Components {
            from.map(|value| {
                if value <= 0.04045 {
                    value / 12.92
                } else {
                    ((value + 0.055) / 1.055).powf(2.4)
                }
            })
        }

        fn from_linear(from: &Components) -> Components {
            from.map(|value| {
                if value <= 0.0031308 {
                    value * 12.92
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
        }
    }

    /// Tag for RGB encoded with a pure power law.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Gamma;

    impl Gamma {
        /// The exponent of the power law.
        pub const EXPONENT: Component = 2.2;
    }

    impl Encoding for Gamma {
        const KIND: RgbEncoding = RgbEncoding::Gamma;

        fn to_linear(from: &Components) -> Components {
            from.map(|v| v.powf(Self::EXPONENT))
        }

        fn from_linear(from: &Components) -> Components {
            from.map(|v| v.powf(1.0 / Self::EXPONENT))
        }
    }
}

pigment_macros::gen_model! {
    /// A color specified with red, green and blue channels, stored in the
    /// encoding `E`.
    pub struct Rgb<E: Encoding> {
        /// The red component of the color.
        #[range(0.0, 1.0)]
        pub red: Component,
        /// The green component of the color.
        #[range(0.0, 1.0)]
        pub green: Component,
        /// The blue component of the color.
        #[range(0.0, 1.0)]
        pub blue: Component,
    }
}

/// Model for a color in RGB without a transfer function.
pub type LinearRgb = Rgb<encoding::Linear>;

/// Model for a color in RGB encoded with the sRGB transfer function.
pub type Srgb = Rgb<encoding::Srgb>;

/// Model for a color in RGB encoded with a 2.2 power law.
pub type GammaRgb = Rgb<encoding::Gamma>;

impl<E: Encoding> Rgb<E> {
    fn from_components(from: Components) -> Self {
        Self::new(from.0, from.1, from.2)
    }

    /// Create a color in this encoding from channels that are expressed in
    /// the given `encoding`.
    pub fn from_encoded(encoding: RgbEncoding, from: Components) -> Self {
        if encoding == E::KIND {
            Self::from_components(from)
        } else {
            Self::from_linear(LinearRgb::from_components(encoding.to_linear(&from)))
        }
    }

    /// The encoding of the channels of this color.
    pub fn encoding(&self) -> RgbEncoding {
        E::KIND
    }

    /// Convert this color to linear light.
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::from_components(E::to_linear(&self.to_components()))
    }

    /// Encode a linear light color with this encoding.
    pub fn from_linear(linear: LinearRgb) -> Self {
        Self::from_components(E::from_linear(&linear.to_components()))
    }

    /// Convert this color to another encoding. Converting to the same
    /// encoding returns an equal color.
    pub fn to_encoding<F: Encoding>(&self) -> Rgb<F> {
        Rgb::from_encoded(E::KIND, self.to_components())
    }
}

impl<E: Encoding> From<Rgb<E>> for Color {
    fn from(value: Rgb<E>) -> Self {
        match E::KIND {
            RgbEncoding::Linear => Color::LinearRgb(value.to_encoding()),
            RgbEncoding::Srgb => Color::Srgb(value.to_encoding()),
            RgbEncoding::Gamma => Color::GammaRgb(value.to_encoding()),
        }
    }
}

impl From<Xyz> for LinearRgb {
    /// The matrix is for sRGB primaries relative to D65. The white point of
    /// the source color is not adapted.
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()))
    }
}

impl From<LinearRgb> for Xyz {
    fn from(value: LinearRgb) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        let Components(x, y, z) = transform(&TO_XYZ, value.to_components());
        Xyz::new(x, y, z, WhitePoint::D65)
    }
}
