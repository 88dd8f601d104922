//! Models for CIE-Lab in its rectangular (Lab) and cylindrical polar (LCh)
//! forms.

use crate::{
    color::{Component, Components},
    math::normalize_hue,
    white_point::WhitePoint,
    xyz::Xyz,
};

/// The CIE threshold between the cube root and the linear segment of the
/// lightness function.
pub(crate) const EPSILON: Component = 0.008856;

/// The CIE slope of the linear segment of the lightness function.
pub(crate) const KAPPA: Component = 903.3;

/// The CIE lightness function, applied to a ratio relative to the white
/// point.
pub(crate) fn f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of the lightness function for the Y ratio, driven by `L`.
pub(crate) fn y_ratio_from_lightness(lightness: Component) -> Component {
    if lightness > KAPPA * EPSILON {
        let v = (lightness + 16.0) / 116.0;
        v * v * v
    } else {
        lightness / KAPPA
    }
}

pigment_macros::gen_model! {
    /// A color in the CIE-Lab color space, relative to a white point.
    pub struct Lab {
        /// The lightness component.
        #[range(0.0, 100.0)]
        pub lightness: Component,
        /// The green-red opponent component.
        pub a: Component,
        /// The blue-yellow opponent component.
        pub b: Component,
        /// The reference white.
        #[tag]
        pub white_point: WhitePoint,
    }
}

pigment_macros::gen_model! {
    /// A color in the CIE-LCh color space, the cylindrical polar form of
    /// CIE-Lab.
    pub struct Lch {
        /// The lightness component.
        #[range(0.0, 100.0)]
        pub lightness: Component,
        /// The chroma component.
        #[range(0.0, Component::INFINITY)]
        pub chroma: Component,
        /// The hue component, in degrees.
        #[hue]
        pub hue: Component,
        /// The reference white.
        #[tag]
        pub white_point: WhitePoint,
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let white_point = value.white_point;

        let Components(f0, f1, f2) = Components(
            value.x / white_point.x,
            value.y / white_point.y,
            value.z / white_point.z,
        )
        .map(f);

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b, white_point)
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        // To avoid accessing the values through value all the time.
        let Lab {
            lightness,
            a,
            b,
            white_point,
        } = value;

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let inverse = |f: Component| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (116.0 * f - 16.0) / KAPPA
            }
        };

        let x = inverse(f0);
        let y = y_ratio_from_lightness(lightness);
        let z = inverse(f2);

        Xyz::new(
            x * white_point.x,
            y * white_point.y,
            z * white_point.z,
            white_point,
        )
    }
}

impl From<Lab> for Lch {
    fn from(value: Lab) -> Self {
        let chroma = (value.a * value.a + value.b * value.b).sqrt();
        let hue = normalize_hue(value.b.atan2(value.a).to_degrees());

        Lch::new(value.lightness, chroma, hue, value.white_point)
    }
}

impl From<Lch> for Lab {
    fn from(value: Lch) -> Self {
        let hue = value.hue.to_radians();
        let a = value.chroma * hue.cos();
        let b = value.chroma * hue.sin();

        Lab::new(value.lightness, a, b, value.white_point)
    }
}
