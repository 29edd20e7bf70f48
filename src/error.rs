//! Error types. Ordinary out-of-gamut colors are never errors: they are resolved by the gamut
//! mapping of [`FullColor`](crate::full_color::FullColor). What remains is profile construction,
//! which cannot continue without a sane neutral axis, and parsing of color names.

use thiserror::Error;

/// Failure to build a [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The scan along the neutral axis did not find an in-gamut black point strictly darker than an
    /// in-gamut white point. The fields hold where the scan ended.
    #[error(
        "unable to find blackpoint and whitepoint on gray axis \
         (blackpoint L* {blackpoint_l}, whitepoint L* {whitepoint_l})"
    )]
    AchromaticAxis {
        /// Where the upward scan from L* = 0 ended.
        blackpoint_l: f64,
        /// Where the downward scan from L* = 100 ended.
        whitepoint_l: f64,
    },
    /// The gamut settings would make a boundary search fail to terminate or be meaningless.
    #[error("invalid gamut settings: {0}")]
    InvalidSettings(String),
}

/// Failure to parse a [`DeviceColor`](crate::colors::DeviceColor) from a hex name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum DeviceColorParseError {
    /// Color names must start with `#`.
    #[error("color name does not start with '#'")]
    MissingHash,
    /// The name is not `#rgb`, `#rrggbb` or `#aarrggbb` with hexadecimal digits.
    #[error("color name is not #rgb, #rrggbb or #aarrggbb")]
    InvalidHexCode,
}
