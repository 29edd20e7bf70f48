//! This file defines the [`Color`] trait, which every device-independent color representation in
//! this crate implements, and [`XYZColor`], the CIE 1931 XYZ point that all of them convert through.
//!
//! RGB values are deliberately *not* `Color`s: an RGB triplet only describes a color relative to a
//! working space, so converting one always goes through a
//! [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile).

use rulinalg::vector::Vector;

use crate::illuminants::Illuminant;

/// A point in the CIE 1931 XYZ color space, scaled so that the white point has Y = 1, together with
/// the illuminant it is relative to.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors.
    pub x: f64,
    /// The Y axis of the CIE 1931 XYZ space, the luminance.
    pub y: f64,
    /// The Z axis of the CIE 1931 XYZ space, roughly representing the short-wavelength receptors.
    pub z: f64,
    /// The illuminant this point is relative to.
    pub illuminant: Illuminant,
}

impl XYZColor {
    /// The white point of the given illuminant, as an `XYZColor`.
    pub fn white_point(illuminant: Illuminant) -> XYZColor {
        let wp = illuminant.white_point();
        XYZColor {
            x: wp[0],
            y: wp[1],
            z: wp[2],
            illuminant,
        }
    }

    /// Converts this color so that it appears the same under `other` as it does under its current
    /// illuminant, using the Bradford transform.
    pub fn color_adapt(&self, other: Illuminant) -> XYZColor {
        if self.illuminant == other {
            return *self;
        }
        let adapted = &self.illuminant.adaptation_to(other) * Vector::new(vec![self.x, self.y, self.z]);
        XYZColor {
            x: adapted[0],
            y: adapted[1],
            z: adapted[2],
            illuminant: other,
        }
    }

    /// Returns `true` if both colors, seen under the same illuminant, agree within `1e-10` on every
    /// axis.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        let other_c = other.color_adapt(self.illuminant);
        approx_eq!(f64, self.x, other_c.x, epsilon = 1e-10)
            && approx_eq!(f64, self.y, other_c.y, epsilon = 1e-10)
            && approx_eq!(f64, self.z, other_c.z, epsilon = 1e-10)
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931
/// XYZ color space.
pub trait Color: Sized {
    /// Converts from a color in CIE 1931 XYZ to the given color type.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from the given color type to a color in CIE 1931 XYZ space, seen under `illuminant`.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor;

    /// Converts this color into another color type, through XYZ under D50.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz(Illuminant::D50))
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }

    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        self.color_adapt(illuminant)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_color_adapt_round_trip() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
            illuminant: Illuminant::D65,
        };
        let there = xyz.color_adapt(Illuminant::D50);
        assert_eq!(there.illuminant, Illuminant::D50);
        let back = there.color_adapt(Illuminant::D65);
        assert!(xyz.approx_equal(&back));
        assert!(xyz.approx_equal(&there));
    }

    #[test]
    fn test_white_point_adapts_to_white_point() {
        let white = XYZColor::white_point(Illuminant::D65).color_adapt(Illuminant::D50);
        assert!(white.approx_equal(&XYZColor::white_point(Illuminant::D50)));
        assert!(approx_eq!(f64, white.y, 1.0, epsilon = 1e-12));
    }
}
