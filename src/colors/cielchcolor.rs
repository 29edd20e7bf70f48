//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. Chroma is the distance from the neutral
//! (gray) axis and hue is the angle around it, so chroma and hue form a
//! [`PolarCoord`](crate::coord::PolarCoord).

use std::fmt;

use super::cielabcolor::CIELABColor;
use crate::color::{Color, XYZColor};
use crate::coord::PolarCoord;
use crate::illuminants::Illuminant;

/// A cylindrical form of CIELAB, analogous to the relationship between HSV and RGB.
/// # Example
///
/// ```
/// # use perceptual_color::colors::{CIELABColor, CIELCHColor};
/// let lab = CIELABColor::new(50., 0., -20.);
/// let lch = CIELCHColor::from(lab);
/// assert_eq!(lch.l, 50.);
/// assert_eq!(lch.c, 20.);
/// assert!((lch.h - 270.).abs() < 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component, the distance from the grayscale color of the same luminance. It
    /// ranges from 0 to roughly 150 for physically possible colors, although for most luminance
    /// values the range is much smaller.
    pub c: f64,
    /// The hue component, in degrees. 90 degrees corresponds to yellow, 180 to green, 270 to blue
    /// and 0 to magenta-red.
    pub h: f64,
}

impl CIELCHColor {
    /// Creates a new color from its three components, as given.
    pub fn new(l: f64, c: f64, h: f64) -> CIELCHColor {
        CIELCHColor { l, c, h }
    }

    /// Returns the same color with a non-negative chroma and a hue in [0, 360), following the
    /// normalization rules of [`PolarCoord`].
    pub fn normalized(&self) -> CIELCHColor {
        let polar = PolarCoord::new(self.c, self.h);
        CIELCHColor {
            l: self.l,
            c: polar.radius(),
            h: polar.angle_degrees(),
        }
    }
}

impl From<CIELABColor> for CIELCHColor {
    /// Chroma is `hypot(a, b)`; hue is the angle of `(a, b)`, in [0, 360), and 0 for neutral grays.
    fn from(lab: CIELABColor) -> CIELCHColor {
        let c = lab.a.hypot(lab.b);
        let h = if lab.a == 0.0 && lab.b == 0.0 {
            0.0
        } else {
            PolarCoord::normalize_angle(lab.b.atan2(lab.a).to_degrees())
        };
        CIELCHColor { l: lab.l, c, h }
    }
}

impl Color for CIELCHColor {
    /// Converts from XYZ to LCH by way of CIELAB.
    fn from_xyz(xyz: XYZColor) -> CIELCHColor {
        CIELCHColor::from(CIELABColor::from_xyz(xyz))
    }

    /// Converts from LCH back to XYZ by way of CIELAB, chromatically adapting it as CIELAB does.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        CIELABColor::from(*self).to_xyz(illuminant)
    }
}

impl fmt::Display for CIELCHColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LCh({} {} {}°)", self.l, self.c, self.h)
    }
}
