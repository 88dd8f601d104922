//! Model a color in the CIE-Luv color space.

use crate::{
    color::Component,
    lab::{y_ratio_from_lightness, EPSILON, KAPPA},
    white_point::WhitePoint,
    xyz::Xyz,
};

pigment_macros::gen_model! {
    /// A color in the CIE-Luv color space, relative to a white point.
    pub struct Luv {
        /// The lightness component.
        #[range(0.0, 100.0)]
        pub lightness: Component,
        /// The u chromaticity component.
        #[range(-84.0, 176.0)]
        pub u: Component,
        /// The v chromaticity component.
        #[range(-135.0, 108.0)]
        pub v: Component,
        /// The reference white.
        #[tag]
        pub white_point: WhitePoint,
    }
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let Xyz {
            x,
            y,
            z,
            white_point,
        } = value;

        let denominator = x + 15.0 * y + 3.0 * z;
        if denominator == 0.0 {
            return Luv::new(0.0, 0.0, 0.0, white_point);
        }

        let y_ratio = y / white_point.y;
        let lightness = if y_ratio > EPSILON {
            116.0 * y_ratio.cbrt() - 16.0
        } else {
            KAPPA * y_ratio
        };

        let (u0, v0) = white_point.uv_prime();
        let u_prime = 4.0 * x / denominator;
        let v_prime = 9.0 * y / denominator;

        Luv::new(
            lightness,
            13.0 * lightness * (u_prime - u0),
            13.0 * lightness * (v_prime - v0),
            white_point,
        )
    }
}

impl From<Luv> for Xyz {
    fn from(value: Luv) -> Self {
        let Luv {
            lightness,
            u,
            v,
            white_point,
        } = value;

        if lightness == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0, white_point);
        }

        let y = y_ratio_from_lightness(lightness) * white_point.y;

        let (u0, v0) = white_point.uv_prime();
        let u_prime = u / (13.0 * lightness) + u0;
        let v_prime = v / (13.0 * lightness) + v0;

        // A chromaticity with no v' component has no defined tristimulus
        // values.
        if v_prime == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0, white_point);
        }

        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);

        Xyz::new(x, y, z, white_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_clamped() {
        let luv = Luv::new(120.0, -100.0, 200.0, WhitePoint::D65);
        assert_eq!(luv.lightness, 100.0);
        assert_eq!(luv.u, -84.0);
        assert_eq!(luv.v, 108.0);
    }

    #[test]
    fn xyz_to_luv() {
        let luv = Luv::from(Xyz::new(0.5, 0.5, 0.5, WhitePoint::D65));
        assert_component_eq!(luv.lightness, 76.069261);
        assert_component_eq!(luv.u, 12.545676);
        assert_component_eq!(luv.v, 5.288548);

        let luv = Luv::from(Xyz::new(0.2, 0.1, 0.05, WhitePoint::D65));
        assert_component_eq!(luv.lightness, 37.842430);
        assert_component_eq!(luv.u, 115.408208);
        assert_component_eq!(luv.v, 8.929012);
    }

    #[test]
    fn white_has_no_chroma() {
        let d65 = WhitePoint::D65;
        let luv = Luv::from(Xyz::new(d65.x, d65.y, d65.z, d65));
        assert_component_eq!(luv.lightness, 100.0);
        assert_component_eq!(luv.u, 0.0);
        assert_component_eq!(luv.v, 0.0);
    }

    #[test]
    fn black_is_guarded() {
        let luv = Luv::from(Xyz::new(0.0, 0.0, 0.0, WhitePoint::D65));
        assert_eq!((luv.lightness, luv.u, luv.v), (0.0, 0.0, 0.0));

        let xyz = Xyz::from(Luv::new(0.0, 20.0, 20.0, WhitePoint::D65));
        assert_eq!((xyz.x, xyz.y, xyz.z), (0.0, 0.0, 0.0));

        // v' of this white is exactly 0.5, so v = -13 * L * 0.5 cancels it.
        let white = WhitePoint::new(3.0, 1.0, 0.0);
        assert_eq!(white.uv_prime().1, 0.5);
        let xyz = Xyz::from(Luv::new(10.0, 0.0, -65.0, white));
        assert_eq!((xyz.x, xyz.y, xyz.z), (0.0, 0.0, 0.0));
        assert_eq!(xyz.white_point, white);
    }

    #[test]
    fn luv_round_trips() {
        for &(x, y, z) in &[(0.5, 0.5, 0.5), (0.2, 0.1, 0.05), (0.004, 0.005, 0.006)] {
            let xyz = Xyz::from(Luv::from(Xyz::new(x, y, z, WhitePoint::D65)));
            assert_component_eq!(xyz.x, x, 1.0e-6);
            assert_component_eq!(xyz.y, y, 1.0e-6);
            assert_component_eq!(xyz.z, z, 1.0e-6);
            assert_eq!(xyz.white_point, WhitePoint::D65);
        }
    }
}
