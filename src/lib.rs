//! A color model for color pickers that think in perceptually uniform terms. Colors are chosen in
//! CIELCH, whose lightness, chroma and hue roughly match how people describe color, but are shown
//! on RGB devices that can only display part of that space. This crate keeps both worlds in sync.
//!
//! A [`ColorSpaceProfile`](profile::ColorSpaceProfile) wraps the transforms between CIELAB and one
//! RGB working space, tests gamut membership and finds where the neutral axis enters and leaves the
//! gamut. A [`FullColor`](full_color::FullColor) is an immutable value holding one color as RGB,
//! toolkit RGB and HSV, CIELAB and CIELCH at once, built through a profile. Colors the profile can't
//! display are either kept as they are or brought into gamut by sacrificing chroma, see
//! [`gamut_mapping`].
//!
//! ```
//! use perceptual_color::prelude::*;
//!
//! let profile = ColorSpaceProfile::srgb().unwrap();
//! let color = FullColor::from_lch(
//!     &profile,
//!     CIELCHColor::new(60., 150., 250.),
//!     OutOfGamutBehaviour::SacrificeChroma,
//!     1.,
//! );
//! assert!(profile.in_gamut_lch(&color.to_lch()));
//! assert_eq!(color.to_lch().h, 250.);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
extern crate log;
extern crate num;
extern crate regex;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod error;
pub mod full_color;
pub mod gamut_mapping;
pub mod illuminants;
pub mod prelude;
pub mod profile;
pub mod settings;
pub mod transform;
pub mod working_space;
