//! This module implements the floating-point RGB triplet. Unlike the other types in
//! [`colors`](crate::colors), an RGB triplet has no meaning by itself: it is always relative to the
//! working space of some [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile).

use std::fmt;

use crate::bound::Bound;

/// An RGB color with floating-point channels, each ranging from 0 to 1 for in-gamut colors.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl RGBColor {
    /// Creates a new color from its three channels.
    pub fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }

    fn components(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    fn from_components(components: [f64; 3]) -> RGBColor {
        RGBColor {
            r: components[0],
            g: components[1],
            b: components[2],
        }
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(rgb: [f64; 3]) -> RGBColor {
        RGBColor::from_components(rgb)
    }
}

impl From<RGBColor> for [f64; 3] {
    fn from(rgb: RGBColor) -> [f64; 3] {
        rgb.components()
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RGB({} {} {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_zero_one_bounds() {
        let color = RGBColor::new(0.1, -0.2, 1.2);
        assert!(!color.in_bounds());
        assert_eq!(color.clamp(), RGBColor::new(0.1, 0., 1.));
        assert!(RGBColor::new(0., 0.5, 1.).in_bounds());
    }

    #[test]
    fn test_array_conversion() {
        let rgb = RGBColor::from([0.25, 0.5, 0.75]);
        assert_eq!(rgb, RGBColor::new(0.25, 0.5, 0.75));
        let array: [f64; 3] = rgb.into();
        assert_eq!(array, [0.25, 0.5, 0.75]);
    }
}
