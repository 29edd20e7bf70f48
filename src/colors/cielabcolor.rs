//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module.

use std::fmt;

use super::cielchcolor::CIELCHColor;
use crate::color::{Color, XYZColor};
use crate::illuminants::Illuminant;

/// A color in the CIELAB color space, always relative to D50.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis, green (negative) to magenta (positive). Usually between -128
    /// and 127; see [`LabBoundaries`](crate::bound::LabBoundaries).
    pub a: f64,
    /// The second opponent color axis, blue (negative) to yellow (positive).
    pub b: f64,
}

impl CIELABColor {
    /// Creates a new color from its three components.
    pub fn new(l: f64, a: f64, b: f64) -> CIELABColor {
        CIELABColor { l, a, b }
    }
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB. Because CIELAB is implicitly in a given illuminant
    /// space, this is explicitly CIELAB D50: any other illuminant is adapted to D50 first. This is
    /// in line with ICC color management, which also uses CIELAB D50.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |x: f64| {
            let delta: f64 = 6.0 / 29.0;
            if x <= delta.powi(3) {
                x / (3.0 * delta * delta) + 4.0 / 29.0
            } else {
                x.cbrt()
            }
        };
        let white_point = Illuminant::D50.white_point();
        let xyz_adapted = xyz.color_adapt(Illuminant::D50);
        let fx = f(xyz_adapted.x / white_point[0]);
        let fy = f(xyz_adapted.y / white_point[1]);
        let fz = f(xyz_adapted.z / white_point[2]);

        // a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Returns an XYZ color that corresponds to the CIELAB color, adapted from D50 to `illuminant`.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        // inverse of the nonlinearity in from_xyz
        let f_inv = |x: f64| {
            let delta: f64 = 6.0 / 29.0;
            if x > delta {
                x * x * x
            } else {
                3.0 * delta * delta * (x - 4.0 / 29.0)
            }
        };
        let xyz_n = Illuminant::D50.white_point();
        let fy = (self.l + 16.0) / 116.0;
        XYZColor {
            x: xyz_n[0] * f_inv(fy + self.a / 500.0),
            y: xyz_n[1] * f_inv(fy),
            z: xyz_n[2] * f_inv(fy - self.b / 200.0),
            illuminant: Illuminant::D50,
        }
        .color_adapt(illuminant)
    }
}

impl From<CIELCHColor> for CIELABColor {
    /// The cartesian form of an LCh color: `a = C cos h`, `b = C sin h`.
    fn from(lch: CIELCHColor) -> CIELABColor {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        CIELABColor {
            l: lch.l,
            a: lch.c * cos,
            b: lch.c * sin,
        }
    }
}

impl fmt::Display for CIELABColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lab({} {} {})", self.l, self.a, self.b)
    }
}
