//! Each color model is its own type, and the direct conversions between
//! them are implemented with [`From`]. The [`Convert`] trait composes those
//! direct conversions so that any model can be converted to any other.
//!
//! Device models (RGB, HSV, HSL, CMY, CMYK) reach the CIE models through
//! linear RGB and CIE-XYZ, and the other way around.
//!
//! ```rust
//! use pigment::{Convert, RgbEncoding, Hsv};
//! let lab = Hsv::new(100.0, 0.5, 0.5, RgbEncoding::Srgb).to_lab();
//! let back = lab.to_hsv();
//! ```
//!
//! Tags are kept wherever the target model has a slot for them. When the
//! source has no tag to give, CIE models get [`WhitePoint::D65`] and HSV/HSL
//! get [`RgbEncoding::Srgb`].

use crate::{
    color::{Color, Model, Space},
    rgb::{encoding, Encoding, Rgb},
    Cmy, Cmyk, GammaRgb, Hsl, Hsv, Lab, Lch, LinearRgb, Luv, Srgb, Xyz, Yxy,
};

#[cfg(doc)]
use crate::{RgbEncoding, WhitePoint};

/// Conversion of a color to every supported model.
///
/// Converting to the model a color is already in returns an equal color.
pub trait Convert {
    /// Convert to RGB with the encoding `E`.
    fn to_rgb<E: Encoding>(&self) -> Rgb<E>;

    /// Convert to RGB without a transfer function.
    fn to_linear_rgb(&self) -> LinearRgb {
        self.to_rgb()
    }

    /// Convert to RGB encoded with the sRGB transfer function.
    fn to_srgb(&self) -> Srgb {
        self.to_rgb()
    }

    /// Convert to RGB encoded with a 2.2 power law.
    fn to_gamma_rgb(&self) -> GammaRgb {
        self.to_rgb()
    }

    /// Convert to the HSV notation.
    fn to_hsv(&self) -> Hsv;

    /// Convert to the HSL notation.
    fn to_hsl(&self) -> Hsl;

    /// Convert to CMY.
    fn to_cmy(&self) -> Cmy;

    /// Convert to CMYK.
    fn to_cmyk(&self) -> Cmyk;

    /// Convert to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;

    /// Convert to CIE-xyY.
    fn to_yxy(&self) -> Yxy;

    /// Convert to CIE-Lab.
    fn to_lab(&self) -> Lab;

    /// Convert to CIE-Luv.
    fn to_luv(&self) -> Luv;

    /// Convert to CIE-LCh.
    fn to_lch(&self) -> Lch;
}

impl Convert for Color {
    fn to_rgb<E: Encoding>(&self) -> Rgb<E> {
        match *self {
            Color::LinearRgb(c) => c.to_encoding(),
            Color::Srgb(c) => c.to_encoding(),
            Color::GammaRgb(c) => c.to_encoding(),
            Color::Hsv(c) => c.into(),
            Color::Hsl(c) => c.into(),
            Color::Cmy(c) => Srgb::from(c).to_encoding(),
            Color::Cmyk(c) => Srgb::from(c).to_encoding(),
            Color::Xyz(_) | Color::Yxy(_) | Color::Lab(_) | Color::Luv(_) | Color::Lch(_) => {
                Rgb::from_linear(LinearRgb::from(self.to_xyz()))
            }
        }
    }

    fn to_hsv(&self) -> Hsv {
        match *self {
            Color::LinearRgb(c) => c.into(),
            Color::Srgb(c) => c.into(),
            Color::GammaRgb(c) => c.into(),
            Color::Hsv(c) => c,
            Color::Hsl(c) => c.into(),
            Color::Cmy(_)
            | Color::Cmyk(_)
            | Color::Xyz(_)
            | Color::Yxy(_)
            | Color::Lab(_)
            | Color::Luv(_)
            | Color::Lch(_) => self.to_srgb().into(),
        }
    }

    fn to_hsl(&self) -> Hsl {
        match *self {
            Color::LinearRgb(c) => c.into(),
            Color::Srgb(c) => c.into(),
            Color::GammaRgb(c) => c.into(),
            Color::Hsv(c) => c.into(),
            Color::Hsl(c) => c,
            Color::Cmy(_)
            | Color::Cmyk(_)
            | Color::Xyz(_)
            | Color::Yxy(_)
            | Color::Lab(_)
            | Color::Luv(_)
            | Color::Lch(_) => self.to_srgb().into(),
        }
    }

    fn to_cmy(&self) -> Cmy {
        match *self {
            Color::Cmy(c) => c,
            Color::Cmyk(c) => c.into(),
            Color::LinearRgb(_)
            | Color::Srgb(_)
            | Color::GammaRgb(_)
            | Color::Hsv(_)
            | Color::Hsl(_)
            | Color::Xyz(_)
            | Color::Yxy(_)
            | Color::Lab(_)
            | Color::Luv(_)
            | Color::Lch(_) => self.to_srgb().into(),
        }
    }

    fn to_cmyk(&self) -> Cmyk {
        match *self {
            Color::Cmy(c) => c.into(),
            Color::Cmyk(c) => c,
            Color::LinearRgb(_)
            | Color::Srgb(_)
            | Color::GammaRgb(_)
            | Color::Hsv(_)
            | Color::Hsl(_)
            | Color::Xyz(_)
            | Color::Yxy(_)
            | Color::Lab(_)
            | Color::Luv(_)
            | Color::Lch(_) => self.to_srgb().into(),
        }
    }

    fn to_xyz(&self) -> Xyz {
        match *self {
            Color::Xyz(c) => c,
            Color::Yxy(c) => c.into(),
            Color::Lab(c) => c.into(),
            Color::Luv(c) => c.into(),
            Color::Lch(c) => Lab::from(c).into(),
            Color::LinearRgb(_)
            | Color::Srgb(_)
            | Color::GammaRgb(_)
            | Color::Hsv(_)
            | Color::Hsl(_)
            | Color::Cmy(_)
            | Color::Cmyk(_) => self.to_linear_rgb().into(),
        }
    }

    fn to_yxy(&self) -> Yxy {
        match *self {
            Color::Yxy(c) => c,
            _ => self.to_xyz().into(),
        }
    }

    fn to_lab(&self) -> Lab {
        match *self {
            Color::Lab(c) => c,
            Color::Lch(c) => c.into(),
            _ => self.to_xyz().into(),
        }
    }

    fn to_luv(&self) -> Luv {
        match *self {
            Color::Luv(c) => c,
            _ => self.to_xyz().into(),
        }
    }

    fn to_lch(&self) -> Lch {
        match *self {
            Color::Lch(c) => c,
            _ => self.to_lab().into(),
        }
    }
}

impl<M: Model> Convert for M {
    fn to_rgb<E: Encoding>(&self) -> Rgb<E> {
        self.to_color().to_rgb()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_color().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_color().to_hsl()
    }

    fn to_cmy(&self) -> Cmy {
        self.to_color().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_color().to_cmyk()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_color().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_color().to_yxy()
    }

    fn to_lab(&self) -> Lab {
        self.to_color().to_lab()
    }

    fn to_luv(&self) -> Luv {
        self.to_color().to_luv()
    }

    fn to_lch(&self) -> Lch {
        self.to_color().to_lch()
    }
}

impl Color {
    /// Convert this color from its current model to the specified model.
    pub fn to_space(&self, space: Space) -> Self {
        tracing::trace!(from = ?self.space(), to = ?space, "converting color");

        match space {
            Space::LinearRgb => self.to_rgb::<encoding::Linear>().into(),
            Space::Srgb => self.to_rgb::<encoding::Srgb>().into(),
            Space::GammaRgb => self.to_rgb::<encoding::Gamma>().into(),
            Space::Hsv => self.to_hsv().into(),
            Space::Hsl => self.to_hsl().into(),
            Space::Cmy => self.to_cmy().into(),
            Space::Cmyk => self.to_cmyk().into(),
            Space::Xyz => self.to_xyz().into(),
            Space::Yxy => self.to_yxy().into(),
            Space::Lab => self.to_lab().into(),
            Space::Luv => self.to_luv().into(),
            Space::Lch => self.to_lch().into(),
        }
    }
}

pub(crate) mod util {
    use crate::color::{Component, Components};

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    pub fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();

        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        (hue, min, max)
    }
}
