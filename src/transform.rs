//! One-directional color transforms between CIELAB D50 and an RGB working space. This is the seam
//! to the color-management engine: a [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile) only
//! ever talks to boxed [`ColorTransform`]s, so an ICC-based engine can stand in for the built-in
//! matrix-and-curve transforms below.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::color::{Color, XYZColor};
use crate::colors::CIELABColor;
use crate::consts::{RGB_ROUNDING_TOLERANCE, WORD_MAX};
use crate::illuminants::Illuminant;
use crate::working_space::RGBSpace;

/// A transform of one three-channel color value into another.
///
/// Implementations are not required to be usable from several threads at once, so profiles hold
/// them as `Box<dyn ColorTransform + Send>`: a profile may move between threads, but sharing one
/// needs external synchronization.
pub trait ColorTransform {
    /// Transforms a single color.
    fn transform(&self, input: [f64; 3]) -> [f64; 3];
}

/// The numeric format of a transform's output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Unbounded double precision: out-of-gamut colors produce channels outside of [0, 1].
    Double,
    /// 16-bit words, returned as fractions of 65535. Always in gamut: out-of-gamut colors are
    /// clipped in linear light.
    Word,
}

/// CIELAB D50 to RGB, in the given output format.
#[derive(Debug, Clone)]
pub struct LabToRgbTransform {
    space: RGBSpace,
    format: PixelFormat,
    xyz_to_linear: Matrix<f64>,
}

impl LabToRgbTransform {
    /// Creates the transform into `space`.
    pub fn new(space: RGBSpace, format: PixelFormat) -> LabToRgbTransform {
        let adapt = Illuminant::D50.adaptation_to(space.white());
        LabToRgbTransform {
            space,
            format,
            xyz_to_linear: space.from_xyz_matrix() * &adapt,
        }
    }
}

impl ColorTransform for LabToRgbTransform {
    fn transform(&self, input: [f64; 3]) -> [f64; 3] {
        let xyz = CIELABColor::new(input[0], input[1], input[2]).to_xyz(Illuminant::D50);
        let linear = &self.xyz_to_linear * Vector::new(vec![xyz.x, xyz.y, xyz.z]);
        let mut rgb = [0.0; 3];
        for (channel, &value) in rgb.iter_mut().zip(linear.data().iter()) {
            *channel = match self.format {
                // matrix residues around 0 are zero; a pure power curve would amplify them
                PixelFormat::Double if value.abs() < RGB_ROUNDING_TOLERANCE => 0.0,
                PixelFormat::Double => self.space.encode(value),
                PixelFormat::Word => {
                    let clipped = if value.is_nan() { 0.0 } else { num::clamp(value, 0.0, 1.0) };
                    let encoded = num::clamp(self.space.encode(clipped), 0.0, 1.0);
                    (encoded * WORD_MAX).round() / WORD_MAX
                }
            };
        }
        rgb
    }
}

/// RGB to CIELAB D50, in double precision.
#[derive(Debug, Clone)]
pub struct RgbToLabTransform {
    space: RGBSpace,
    linear_to_xyz: Matrix<f64>,
}

impl RgbToLabTransform {
    /// Creates the transform out of `space`.
    pub fn new(space: RGBSpace) -> RgbToLabTransform {
        let adapt = space.white().adaptation_to(Illuminant::D50);
        RgbToLabTransform {
            space,
            linear_to_xyz: &adapt * space.to_xyz_matrix(),
        }
    }
}

impl ColorTransform for RgbToLabTransform {
    fn transform(&self, input: [f64; 3]) -> [f64; 3] {
        let linear: Vec<f64> = input.iter().map(|&x| self.space.decode(x)).collect();
        let xyz = &self.linear_to_xyz * Vector::new(linear);
        let lab = CIELABColor::from_xyz(XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
            illuminant: Illuminant::D50,
        });
        [lab.l, lab.a, lab.b]
    }
}
