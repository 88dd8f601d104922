//! pigment provides color models for screen, print and colorimetric work,
//! and exact conversions between them.
//!
//! Every model is its own immutable type that clamps its channels when it is
//! created:
//!
//! - RGB in three encodings: [`LinearRgb`], [`Srgb`] and [`GammaRgb`].
//! - The cylindrical notations [`Hsv`] and [`Hsl`].
//! - The subtractive models [`Cmy`] and [`Cmyk`].
//! - The CIE models [`Xyz`], [`Yxy`], [`Lab`], [`Luv`] and [`Lch`].
//!
//! Any model can be converted to any other with the [`Convert`] trait, or
//! held in a [`Color`] and converted with [`Color::to_space`].
//!
//! ```rust
//! use pigment::{Convert, Srgb};
//! let lab = Srgb::new(0.5, 0.0, 1.0).to_lab();
//! let cmyk = lab.to_cmyk();
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod cmy;
mod color;
mod convert;
mod error;
mod hsl;
mod hsv;
mod lab;
mod luv;
mod math;
mod rgb;
mod white_point;
mod xyz;

pub use cmy::{Cmy, Cmyk};
pub use color::{Color, Component, Components, Model, Space};
pub use convert::Convert;
pub use error::Error;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use luv::Luv;
pub use rgb::{encoding, Encoding, GammaRgb, LinearRgb, Rgb, RgbEncoding, Srgb};
pub use white_point::WhitePoint;
pub use xyz::{Xyz, Yxy};
