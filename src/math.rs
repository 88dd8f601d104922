//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::{Float, NumCast};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. The values are laid out so that
/// each row holds the coefficients for one input component, i.e. the matrix
/// is transposed compared to the usual column vector notation.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Components(x, y, z) = from;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Replace NaN with zero, leaving every other value as is.
pub fn zero_if_nan<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value
    }
}

/// Saturate `value` to the inclusive range `min..=max`. NaN is treated as
/// zero before it is brought into range.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    zero_if_nan(value).max(min).min(max)
}

/// Wrap a hue in degrees into `[0, 360)`. Non-finite hues become 0.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    if !hue.is_finite() {
        return T::zero();
    }

    let full_turn = <T as NumCast>::from(360.0).unwrap_or_else(T::zero);
    let hue = hue % full_turn;
    let hue = if hue < T::zero() { hue + full_turn } else { hue };

    // Adding a full turn to a tiny negative value rounds up to exactly 360.
    if hue >= full_turn {
        T::zero()
    } else {
        hue
    }
}
