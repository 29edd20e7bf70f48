//! This file provides constants that are used for matrix multiplication and color space conversion,
//! and the numeric limits of the gamut searches. Matrices are built once, lazily, and their inverses
//! are computed from them instead of being tabulated separately: tabulated inverses are slightly off,
//! which lets errors creep in even when doing things that should not change the result at all, e.g.,
//! converting to an illuminant and back again.

use rulinalg::matrix::Matrix;

/// Default step of the scan along the neutral axis that locates the black and white points.
pub const GAMUT_MESH_SIZE: f64 = 0.01;

/// Default interval width at which gamut boundary bisections stop. Must stay below
/// [`GAMUT_MESH_SIZE`].
pub const GAMUT_PRECISION: f64 = 0.001;

/// Smallest accepted bisection precision. Finer intervals run into the spacing of `f64` values in
/// the L* and chroma ranges.
pub const MIN_GAMUT_PRECISION: f64 = 1e-9;

/// Slack allowed when testing RGB channels against [0, 1]. Colors that are mathematically on the
/// gamut boundary (white, black, primaries) otherwise fall outside by a rounding error after the
/// round trip through XYZ.
pub const RGB_ROUNDING_TOLERANCE: f64 = 1e-9;

/// Largest value of a 16-bit channel, as used by word-precision transforms and `DeviceColor`.
pub const WORD_MAX: f64 = 65535.0;

#[cfg(test)]
pub(crate) const TEST_PRECISION: f64 = 1e-6;

lazy_static! {
    /// The Bradford cone response matrix used for chromatic adaptation.
    pub static ref BRADFORD_TRANSFORM: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            00.8951, 00.2664, -0.1614,
            -0.7502, 01.7135, 00.0367,
            00.0389, -0.0685, 01.0296,
        ]
    );
    pub static ref BRADFORD_TRANSFORM_INV: Matrix<f64> = BRADFORD_TRANSFORM
        .clone()
        .inverse()
        .expect("Matrix is invertible.");
}
