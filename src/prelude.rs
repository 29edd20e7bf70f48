//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: the traits, the color value types, the profile and [`FullColor`] with its gamut
//! behaviour. Transforms and working spaces for custom profiles are not included.

pub use crate::bound::Bound;
pub use crate::color::{Color, XYZColor};
pub use crate::colors::{CIELABColor, CIELCHColor, ColorSpec, DeviceColor, RGBColor};
pub use crate::error::ProfileError;
pub use crate::full_color::{FullColor, OutOfGamutBehaviour};
pub use crate::illuminants::Illuminant;
pub use crate::profile::ColorSpaceProfile;
pub use crate::settings::{AchromaticFallback, GamutSettings};
