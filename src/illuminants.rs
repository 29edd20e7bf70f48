//! This module provides an enum of the illuminants used by the color model, along with a table of
//! white point values for them. The source for this table is the [ASTM E308
//! standard](https://www.astm.org/Standards/E308.htm), which copies the CIE values. They are
//! normalized so that the Y (luminance) value is 1.
//!
//! CIELAB is always relative to D50 here, as in ICC color management. RGB working spaces may use
//! another white (sRGB and Adobe RGB use D65), so conversions between them and CIELAB go through a
//! Bradford chromatic adaptation, built by [`Illuminant::adaptation_to`].

use rulinalg::matrix::Matrix;

use crate::consts::{BRADFORD_TRANSFORM, BRADFORD_TRANSFORM_INV};

/// A listing of the supported CIE standard illuminants: standards that describe a particular set of
/// lighting conditions. D50 is the reference white of CIELAB, D65 the one of most monitor RGB spaces.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon daylight, about 5000 K. The ICC profile connection space white.
    D50,
    /// Noon daylight, about 6500 K.
    D65,
    /// A light of any given chromaticity, as an array [X, Y, Z] in CIE 1931 space.
    Custom([f64; 3]),
}

/// White points for D50 and D65, in the order of the enum definition.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 2] = [
    [0.96422, 1.00000, 0.82521],
    [0.95047, 1.00000, 1.08883],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant, scaled to Y = 1.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::Custom(xyz) => [xyz[0] / xyz[1], 1.0, xyz[2] / xyz[1]],
        }
    }

    /// Returns the matrix that maps XYZ values seen under `self` to corresponding values under
    /// `target`, using the Bradford cone response model. For identical illuminants this is the
    /// identity.
    pub fn adaptation_to(&self, target: Illuminant) -> Matrix<f64> {
        if *self == target {
            return Matrix::identity(3);
        }
        let source_wp = self.white_point();
        let target_wp = target.white_point();
        let source_cone = &*BRADFORD_TRANSFORM * rulinalg::vector::Vector::new(source_wp.to_vec());
        let target_cone = &*BRADFORD_TRANSFORM * rulinalg::vector::Vector::new(target_wp.to_vec());
        let scale = Matrix::from_diag(&[
            target_cone[0] / source_cone[0],
            target_cone[1] / source_cone[1],
            target_cone[2] / source_cone[2],
        ]);
        &(&*BRADFORD_TRANSFORM_INV * &scale) * &*BRADFORD_TRANSFORM
    }
}
