//! Reference white points used by the CIE color models.

use crate::color::Component;

/// The tristimulus values of the color treated as reference white.
///
/// The values also act as the upper bound of the channels of [`crate::Xyz`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePoint {
    /// The X tristimulus value.
    pub x: Component,
    /// The Y tristimulus value.
    pub y: Component,
    /// The Z tristimulus value.
    pub z: Component,
}

impl WhitePoint {
    /// CIE standard illuminant D65 for the 2° standard observer.
    pub const D65: WhitePoint = WhitePoint::new(0.95047, 1.0, 1.08883);

    /// Create a white point from its tristimulus values.
    pub const fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// The `(u', v')` chromaticity coordinates of this white point in the
    /// CIE 1976 UCS diagram.
    pub fn uv_prime(&self) -> (Component, Component) {
        let denominator = self.x + 15.0 * self.y + 3.0 * self.z;
        (4.0 * self.x / denominator, 9.0 * self.y / denominator)
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        Self::D65
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d65_reference_chromaticity() {
        let (u, v) = WhitePoint::D65.uv_prime();
        assert_component_eq!(u, 0.19784);
        assert_component_eq!(v, 0.46834);
    }
}
