//! RGB working spaces. A working space is defined by the chromaticities of its three primaries, its
//! reference white and its transfer function (the "gamma" that turns linear light into encoded
//! channel values). From the primaries and the white, the matrices between linear RGB and CIE XYZ
//! follow.
//!
//! sRGB is what almost every monitor shows and the default everywhere in this crate. Adobe RGB has
//! a noticeably wider green region, and ROMM RGB (also known as ProPhoto RGB) covers about 90% of
//! surface colors at the price of including some imaginary ones.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::illuminants::Illuminant;

/// A supported RGB working space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RGBSpace {
    /// IEC 61966-2-1 sRGB, D65.
    Srgb,
    /// Adobe RGB (1998), D65.
    AdobeRgb,
    /// ROMM RGB / ProPhoto RGB, D50.
    RommRgb,
}

impl Default for RGBSpace {
    fn default() -> RGBSpace {
        RGBSpace::Srgb
    }
}

/// Builds the matrix from linear RGB to XYZ for the given primaries and white: each primary's XYZ
/// column is scaled so that (1, 1, 1) maps exactly to the white point.
fn rgb_to_xyz_matrix(primaries: [(f64, f64); 3], white: Illuminant) -> Matrix<f64> {
    let mut columns = Vec::with_capacity(9);
    for row in 0..3 {
        for &(x, y) in primaries.iter() {
            columns.push(match row {
                0 => x / y,
                1 => 1.0,
                _ => (1.0 - x - y) / y,
            });
        }
    }
    let primaries_xyz = Matrix::new(3, 3, columns);
    let scale = primaries_xyz
        .clone()
        .inverse()
        .expect("Matrix is invertible.")
        * Vector::new(white.white_point().to_vec());
    primaries_xyz * Matrix::from_diag(&[scale[0], scale[1], scale[2]])
}

lazy_static! {
    static ref SRGB_TO_XYZ: Matrix<f64> = rgb_to_xyz_matrix(
        RGBSpace::Srgb.primaries(),
        RGBSpace::Srgb.white()
    );
    static ref XYZ_TO_SRGB: Matrix<f64> = SRGB_TO_XYZ
        .clone()
        .inverse()
        .expect("Matrix is invertible.");
    static ref ADOBE_RGB_TO_XYZ: Matrix<f64> = rgb_to_xyz_matrix(
        RGBSpace::AdobeRgb.primaries(),
        RGBSpace::AdobeRgb.white()
    );
    static ref XYZ_TO_ADOBE_RGB: Matrix<f64> = ADOBE_RGB_TO_XYZ
        .clone()
        .inverse()
        .expect("Matrix is invertible.");
    static ref ROMM_RGB_TO_XYZ: Matrix<f64> = rgb_to_xyz_matrix(
        RGBSpace::RommRgb.primaries(),
        RGBSpace::RommRgb.white()
    );
    static ref XYZ_TO_ROMM_RGB: Matrix<f64> = ROMM_RGB_TO_XYZ
        .clone()
        .inverse()
        .expect("Matrix is invertible.");
}

impl RGBSpace {
    /// A human-readable name of the space.
    pub fn description(&self) -> &'static str {
        match *self {
            RGBSpace::Srgb => "sRGB",
            RGBSpace::AdobeRgb => "Adobe RGB (1998)",
            RGBSpace::RommRgb => "ROMM RGB (ProPhoto)",
        }
    }

    /// The reference white.
    pub fn white(&self) -> Illuminant {
        match *self {
            RGBSpace::Srgb | RGBSpace::AdobeRgb => Illuminant::D65,
            RGBSpace::RommRgb => Illuminant::D50,
        }
    }

    /// CIE xy chromaticities of the red, green and blue primaries.
    pub fn primaries(&self) -> [(f64, f64); 3] {
        match *self {
            RGBSpace::Srgb => [(0.64, 0.33), (0.30, 0.60), (0.15, 0.06)],
            RGBSpace::AdobeRgb => [(0.64, 0.33), (0.21, 0.71), (0.15, 0.06)],
            RGBSpace::RommRgb => [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
        }
    }

    /// The matrix from linear RGB to XYZ under [`white`](RGBSpace::white).
    pub fn to_xyz_matrix(&self) -> &'static Matrix<f64> {
        match *self {
            RGBSpace::Srgb => &SRGB_TO_XYZ,
            RGBSpace::AdobeRgb => &ADOBE_RGB_TO_XYZ,
            RGBSpace::RommRgb => &ROMM_RGB_TO_XYZ,
        }
    }

    /// The matrix from XYZ under [`white`](RGBSpace::white) to linear RGB.
    pub fn from_xyz_matrix(&self) -> &'static Matrix<f64> {
        match *self {
            RGBSpace::Srgb => &XYZ_TO_SRGB,
            RGBSpace::AdobeRgb => &XYZ_TO_ADOBE_RGB,
            RGBSpace::RommRgb => &XYZ_TO_ROMM_RGB,
        }
    }

    /// Applies the transfer function: linear light to encoded channel value. Values outside of
    /// [0, 1] are extended symmetrically, so out-of-gamut colors stay recognizably out of range.
    pub fn encode(&self, linear: f64) -> f64 {
        let sign = linear.signum();
        let x = linear.abs();
        let encoded = match *self {
            RGBSpace::Srgb => {
                if x <= 0.0031308 {
                    12.92 * x
                } else {
                    1.055 * x.powf(1.0 / 2.4) - 0.055
                }
            }
            RGBSpace::AdobeRgb => x.powf(256.0 / 563.0),
            RGBSpace::RommRgb => {
                // the linear toe ends at 2^-9
                if x < 1.0 / 512.0 {
                    16.0 * x
                } else {
                    x.powf(1.0 / 1.8)
                }
            }
        };
        sign * encoded
    }

    /// Inverse of [`encode`](RGBSpace::encode): encoded channel value to linear light.
    pub fn decode(&self, encoded: f64) -> f64 {
        let sign = encoded.signum();
        let x = encoded.abs();
        let linear = match *self {
            RGBSpace::Srgb => {
                if x <= 0.04045 {
                    x / 12.92
                } else {
                    ((x + 0.055) / 1.055).powf(2.4)
                }
            }
            RGBSpace::AdobeRgb => x.powf(563.0 / 256.0),
            RGBSpace::RommRgb => {
                if x < 1.0 / 32.0 {
                    x / 16.0
                } else {
                    x.powf(1.8)
                }
            }
        };
        sign * linear
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    const SPACES: [RGBSpace; 3] = [RGBSpace::Srgb, RGBSpace::AdobeRgb, RGBSpace::RommRgb];

    #[test]
    fn test_white_maps_to_white_point() {
        for space in SPACES.iter() {
            let white = space.to_xyz_matrix() * Vector::new(vec![1., 1., 1.]);
            let wp = space.white().white_point();
            for i in 0..3 {
                assert!(approx_eq!(f64, white[i], wp[i], epsilon = 1e-12));
            }
        }
    }

    #[test]
    fn test_srgb_matrix_matches_published_values() {
        // IEC 61966-2-1 rounds these to four digits
        let m = RGBSpace::Srgb.to_xyz_matrix();
        assert!((m[[0, 0]] - 0.4124).abs() < 1e-3);
        assert!((m[[1, 1]] - 0.7152).abs() < 1e-3);
        assert!((m[[2, 2]] - 0.9505).abs() < 1e-3);
    }

    #[test]
    fn test_transfer_round_trip() {
        for space in SPACES.iter() {
            let mut x = -0.2;
            while x <= 1.2 {
                let back = space.decode(space.encode(x));
                assert!(approx_eq!(f64, back, x, epsilon = 1e-12), "{:?} {}", space, x);
                x += 0.01;
            }
            assert_eq!(space.encode(0.), 0.);
            assert!(approx_eq!(f64, space.encode(1.), 1., epsilon = 1e-12));
        }
    }

    #[test]
    fn test_encoding_keeps_out_of_range_values_out_of_range() {
        for space in SPACES.iter() {
            assert!(space.encode(-0.01) < 0.);
            assert!(space.encode(1.01) > 1.);
        }
    }
}
