//! The value types of the color model, one per module. For convenience, each main type is imported
//! into this module's namespace directly.
//!
//! [`CIELABColor`] and [`CIELCHColor`] implement [`Color`](crate::color::Color) and convert through
//! CIE XYZ. [`RGBColor`] and [`DeviceColor`] are device values that only mean something relative to
//! a [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile).
pub mod cielabcolor;
pub mod cielchcolor;
pub mod devicecolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::devicecolor::{ColorSpec, DeviceColor};
pub use self::rgbcolor::RGBColor;
