//! Subtractive color models used for print: CMY and CMYK.
//!
//! Both models are defined relative to sRGB. Colors in other RGB encodings
//! have to be converted to [`Srgb`] first.

use crate::{color::Component, rgb::Srgb};

pigment_macros::gen_model! {
    /// A color specified with cyan, magenta and yellow inks.
    pub struct Cmy {
        /// The cyan component of the color.
        #[range(0.0, 1.0)]
        pub cyan: Component,
        /// The magenta component of the color.
        #[range(0.0, 1.0)]
        pub magenta: Component,
        /// The yellow component of the color.
        #[range(0.0, 1.0)]
        pub yellow: Component,
    }
}

pigment_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and black (key) inks.
    pub struct Cmyk {
        /// The cyan component of the color.
        #[range(0.0, 1.0)]
        pub cyan: Component,
        /// The magenta component of the color.
        #[range(0.0, 1.0)]
        pub magenta: Component,
        /// The yellow component of the color.
        #[range(0.0, 1.0)]
        pub yellow: Component,
        /// The black component of the color.
        #[range(0.0, 1.0)]
        pub black: Component,
    }
}

impl Cmyk {
    /// Pure black, all of it carried by the key channel.
    pub const BLACK: Cmyk = Cmyk {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        black: 1.0,
    };
}

impl From<Cmy> for Srgb {
    fn from(value: Cmy) -> Self {
        Srgb::new(1.0 - value.cyan, 1.0 - value.magenta, 1.0 - value.yellow)
    }
}

impl From<Srgb> for Cmy {
    fn from(value: Srgb) -> Self {
        Cmy::new(1.0 - value.red, 1.0 - value.green, 1.0 - value.blue)
    }
}

impl From<Cmy> for Cmyk {
    fn from(value: Cmy) -> Self {
        let black = value.to_components().min();
        if black == 1.0 {
            return Cmyk::BLACK;
        }

        let f = |v: Component| (v - black) / (1.0 - black);
        Cmyk::new(f(value.cyan), f(value.magenta), f(value.yellow), black)
    }
}

impl From<Cmyk> for Cmy {
    fn from(value: Cmyk) -> Self {
        let black = value.black;
        let f = |v: Component| v * (1.0 - black) + black;
        Cmy::new(f(value.cyan), f(value.magenta), f(value.yellow))
    }
}

impl From<Cmyk> for Srgb {
    fn from(value: Cmyk) -> Self {
        let black = value.black;
        let f = |v: Component| (1.0 - v) * (1.0 - black);
        Srgb::new(f(value.cyan), f(value.magenta), f(value.yellow))
    }
}

impl From<Srgb> for Cmyk {
    fn from(value: Srgb) -> Self {
        let black = 1.0 - value.to_components().max();
        if black == 1.0 {
            return Cmyk::BLACK;
        }

        let f = |v: Component| (1.0 - v - black) / (1.0 - black);
        Cmyk::new(f(value.red), f(value.green), f(value.blue), black)
    }
}
