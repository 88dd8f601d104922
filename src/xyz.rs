//! Model a color in the CIE-XYZ color space and its xyY chromaticity form.

use crate::{color::Component, white_point::WhitePoint};

pigment_macros::gen_model! {
    /// A color in the CIE-XYZ color space. Each channel is bounded by the
    /// matching tristimulus value of the white point.
    pub struct Xyz {
        /// The X component of the color.
        #[range(0.0, white_point.x)]
        pub x: Component,
        /// The Y component of the color.
        #[range(0.0, white_point.y)]
        pub y: Component,
        /// The Z component of the color.
        #[range(0.0, white_point.z)]
        pub z: Component,
        /// The reference white.
        #[tag]
        pub white_point: WhitePoint,
    }
}

pigment_macros::gen_model! {
    /// A color in the CIE xyY color space: chromaticity coordinates plus the
    /// luminance of the color.
    pub struct Yxy {
        /// The x chromaticity coordinate.
        #[range(0.0, 1.0)]
        pub x: Component,
        /// The y chromaticity coordinate.
        #[range(0.0, 1.0)]
        pub y: Component,
        /// The luminance, equal to the Y component in CIE-XYZ.
        #[range(0.0, 1.0)]
        pub luma: Component,
        /// The reference white.
        #[tag]
        pub white_point: WhitePoint,
    }
}

impl From<Xyz> for Yxy {
    fn from(value: Xyz) -> Self {
        let sum = value.x + value.y + value.z;
        if sum == 0.0 {
            return Yxy::new(0.0, 0.0, 0.0, value.white_point);
        }

        Yxy::new(value.x / sum, value.y / sum, value.y, value.white_point)
    }
}

impl From<Yxy> for Xyz {
    fn from(value: Yxy) -> Self {
        let Yxy {
            x,
            y,
            luma,
            white_point,
        } = value;

        if y == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0, white_point);
        }

        Xyz::new(x * luma / y, luma, (1.0 - x - y) * luma / y, white_point)
    }
}
