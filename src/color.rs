//! A [`Color`] holds a value of any of the supported color models, tagged
//! with the model it was specified in.

use crate::{Cmy, Cmyk, GammaRgb, Hsl, Hsv, Lab, Lch, LinearRgb, Luv, Srgb, Xyz, Yxy};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent three components of a color, without any meaning attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }
}

/// Implemented by every color model. A model is a plain value that can be
/// lifted into a [`Color`].
pub trait Model: Copy + Into<Color> {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color {
        (*self).into()
    }
}

/// The color models a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// RGB without any transfer function applied.
    LinearRgb = 0,
    /// RGB encoded with the sRGB transfer function.
    Srgb = 1,
    /// RGB encoded with a pure 2.2 power law.
    GammaRgb = 2,
    /// Hue, saturation and value.
    Hsv = 3,
    /// Hue, saturation and lightness.
    Hsl = 4,
    /// Cyan, magenta and yellow.
    Cmy = 5,
    /// Cyan, magenta, yellow and black.
    Cmyk = 6,
    /// CIE 1931 XYZ tristimulus values.
    Xyz = 7,
    /// CIE xyY chromaticity and luminance.
    Yxy = 8,
    /// CIE L*a*b*.
    Lab = 9,
    /// CIE L*u*v*.
    Luv = 10,
    /// CIE LCh, the polar form of L*a*b*.
    Lch = 11,
}

impl Space {
    /// All the supported spaces.
    pub const ALL: [Space; 12] = [
        Space::LinearRgb,
        Space::Srgb,
        Space::GammaRgb,
        Space::Hsv,
        Space::Hsl,
        Space::Cmy,
        Space::Cmyk,
        Space::Xyz,
        Space::Yxy,
        Space::Lab,
        Space::Luv,
        Space::Lch,
    ];
}

/// A color in any of the supported models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// See [`LinearRgb`].
    LinearRgb(LinearRgb),
    /// See [`Srgb`].
    Srgb(Srgb),
    /// See [`GammaRgb`].
    GammaRgb(GammaRgb),
    /// See [`Hsv`].
    Hsv(Hsv),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Cmy`].
    Cmy(Cmy),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
    /// See [`Xyz`].
    Xyz(Xyz),
    /// See [`Yxy`].
    Yxy(Yxy),
    /// See [`Lab`].
    Lab(Lab),
    /// See [`Luv`].
    Luv(Luv),
    /// See [`Lch`].
    Lch(Lch),
}

impl Color {
    /// The model this color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::LinearRgb(_) => Space::LinearRgb,
            Color::Srgb(_) => Space::Srgb,
            Color::GammaRgb(_) => Space::GammaRgb,
            Color::Hsv(_) => Space::Hsv,
            Color::Hsl(_) => Space::Hsl,
            Color::Cmy(_) => Space::Cmy,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Xyz(_) => Space::Xyz,
            Color::Yxy(_) => Space::Yxy,
            Color::Lab(_) => Space::Lab,
            Color::Luv(_) => Space::Luv,
            Color::Lch(_) => Space::Lch,
        }
    }
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Color::$model(value)
                }
            }
        )*
    };
}

impl_from_model!(Hsv, Hsl, Cmy, Cmyk, Xyz, Yxy, Lab, Luv, Lch);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WhitePoint;

    #[test]
    fn models_know_their_space() {
        assert_eq!(Color::from(Srgb::new(0.1, 0.2, 0.3)).space(), Space::Srgb);
        assert_eq!(
            Color::from(LinearRgb::new(0.1, 0.2, 0.3)).space(),
            Space::LinearRgb
        );
        assert_eq!(
            Color::from(GammaRgb::new(0.1, 0.2, 0.3)).space(),
            Space::GammaRgb
        );
        assert_eq!(Color::from(Cmyk::new(0.1, 0.2, 0.3, 0.4)).space(), Space::Cmyk);
        assert_eq!(
            Color::from(Lab::new(50.0, 10.0, -10.0, WhitePoint::D65)).space(),
            Space::Lab
        );
    }

    #[test]
    fn components_min_max() {
        let c = Components(0.3, 0.1, 0.2);
        assert_eq!(c.min(), 0.1);
        assert_eq!(c.max(), 0.3);
        assert_eq!(c.map(|v| v * 2.0), Components(0.6, 0.2, 0.4));
    }
}
