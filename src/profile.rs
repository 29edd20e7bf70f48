//! The RGB profile that every color of the picker is measured against. A [`ColorSpaceProfile`]
//! owns three one-directional transforms between CIELAB D50 and its RGB space, answers gamut
//! membership questions, and knows how far the neutral axis reaches inside its gamut.

use std::fmt;

use crate::bound::{in_range, Bound};
use crate::colors::{CIELABColor, CIELCHColor, DeviceColor, RGBColor};
use crate::consts::RGB_ROUNDING_TOLERANCE;
use crate::error::ProfileError;
use crate::gamut_mapping::bisect;
use crate::settings::GamutSettings;
use crate::transform::{ColorTransform, LabToRgbTransform, PixelFormat, RgbToLabTransform};
use crate::working_space::RGBSpace;

/// An RGB color space together with its gamut boundaries on the neutral axis.
///
/// The transforms are only `Send`, so a profile can be moved to another thread but not shared
/// between threads without a lock around it.
/// # Example
///
/// ```
/// # use perceptual_color::profile::ColorSpaceProfile;
/// # use perceptual_color::colors::CIELABColor;
/// let profile = ColorSpaceProfile::srgb().unwrap();
/// assert!(profile.blackpoint_l() < profile.whitepoint_l());
/// assert!(profile.in_gamut(50., 20., 120.));
/// assert!(!profile.in_gamut(50., 200., 0.));
/// assert!(profile.to_rgb(&CIELABColor::new(50., 120., 0.)).is_none());
/// ```
///
/// Sharing a profile by reference across threads doesn't compile:
///
/// ```compile_fail
/// # use perceptual_color::profile::ColorSpaceProfile;
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<ColorSpaceProfile>();
/// ```
pub struct ColorSpaceProfile {
    description: String,
    blackpoint_l: f64,
    whitepoint_l: f64,
    settings: GamutSettings,
    lab_to_rgb: Box<dyn ColorTransform + Send>,
    lab_to_rgb_bounded: Box<dyn ColorTransform + Send>,
    rgb_to_lab: Box<dyn ColorTransform + Send>,
}

impl ColorSpaceProfile {
    /// Builds the profile of one of the built-in working spaces.
    pub fn new(space: RGBSpace, settings: GamutSettings) -> Result<ColorSpaceProfile, ProfileError> {
        ColorSpaceProfile::from_transforms(
            space.description(),
            Box::new(LabToRgbTransform::new(space, PixelFormat::Double)),
            Box::new(LabToRgbTransform::new(space, PixelFormat::Word)),
            Box::new(RgbToLabTransform::new(space)),
            settings,
        )
    }

    /// The sRGB profile with default settings.
    pub fn srgb() -> Result<ColorSpaceProfile, ProfileError> {
        ColorSpaceProfile::new(RGBSpace::Srgb, GamutSettings::default())
    }

    /// Builds a profile from transforms of an external color-management engine. `lab_to_rgb` must
    /// be unbounded, so that out-of-gamut colors produce channels outside of [0, 1];
    /// `lab_to_rgb_bounded` must always produce channels within [0, 1].
    ///
    /// Fails if `settings` are invalid or if the neutral axis doesn't cross the gamut with the
    /// black point below the white point.
    pub fn from_transforms<S: Into<String>>(
        description: S,
        lab_to_rgb: Box<dyn ColorTransform + Send>,
        lab_to_rgb_bounded: Box<dyn ColorTransform + Send>,
        rgb_to_lab: Box<dyn ColorTransform + Send>,
        settings: GamutSettings,
    ) -> Result<ColorSpaceProfile, ProfileError> {
        settings.validate()?;
        let mut profile = ColorSpaceProfile {
            description: description.into(),
            blackpoint_l: 0.0,
            whitepoint_l: 100.0,
            settings,
            lab_to_rgb,
            lab_to_rgb_bounded,
            rgb_to_lab,
        };
        let (blackpoint_l, whitepoint_l) = profile.scan_neutral_axis();
        match (blackpoint_l, whitepoint_l) {
            (Some(black), Some(white)) if black < white => {
                log::debug!(
                    "{}: blackpoint L* {}, whitepoint L* {}",
                    profile.description,
                    black,
                    white
                );
                profile.blackpoint_l = black;
                profile.whitepoint_l = white;
                Ok(profile)
            }
            (black, white) => {
                let err = ProfileError::AchromaticAxis {
                    blackpoint_l: black.unwrap_or(std::f64::NAN),
                    whitepoint_l: white.unwrap_or(std::f64::NAN),
                };
                log::error!("{}: {}", profile.description, err);
                Err(err)
            }
        }
    }

    /// Steps along the neutral axis from both ends, then narrows each hit down to the precision.
    fn scan_neutral_axis(&self) -> (Option<f64>, Option<f64>) {
        let mesh = self.settings.mesh_size;
        let steps = (100.0 / mesh).ceil() as usize;
        let lightness = |i: usize| (i as f64 * mesh).min(100.0);

        let black = (0..=steps)
            .map(lightness)
            .find(|&l| self.in_gamut(l, 0.0, 0.0))
            .map(|l| {
                if l > 0.0 {
                    self.refine_neutral(l, (l - mesh).max(0.0))
                } else {
                    l
                }
            });
        let white = (0..=steps)
            .map(|i| 100.0 - lightness(i))
            .find(|&l| self.in_gamut(l, 0.0, 0.0))
            .map(|l| {
                if l < 100.0 {
                    self.refine_neutral(l, (l + mesh).min(100.0))
                } else {
                    l
                }
            });
        (black, white)
    }

    /// Bisects between an in-gamut and an out-of-gamut gray, returning the in-gamut end.
    fn refine_neutral(&self, inside: f64, outside: f64) -> f64 {
        bisect(inside, outside, self.settings.precision, |l| {
            self.in_gamut(l, 0.0, 0.0)
        })
    }

    /// A human-readable name of the RGB space.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The lowest lightness at which the neutral axis is within the gamut.
    pub fn blackpoint_l(&self) -> f64 {
        self.blackpoint_l
    }

    /// The highest lightness at which the neutral axis is within the gamut.
    pub fn whitepoint_l(&self) -> f64 {
        self.whitepoint_l
    }

    /// The settings the profile was built with.
    pub fn settings(&self) -> &GamutSettings {
        &self.settings
    }

    fn is_rgb_in_gamut(rgb: [f64; 3]) -> bool {
        rgb.iter()
            .all(|&x| in_range(-RGB_ROUNDING_TOLERANCE, x, 1.0 + RGB_ROUNDING_TOLERANCE))
    }

    /// The RGB value of `lab`, or `None` if `lab` is outside of the gamut. Channels of in-gamut
    /// colors are clamped to [0, 1], which only removes rounding noise.
    pub fn to_rgb(&self, lab: &CIELABColor) -> Option<RGBColor> {
        let rgb = self.lab_to_rgb.transform([lab.l, lab.a, lab.b]);
        if ColorSpaceProfile::is_rgb_in_gamut(rgb) {
            Some(RGBColor::from(rgb).clamp())
        } else {
            None
        }
    }

    /// Like [`to_rgb`](ColorSpaceProfile::to_rgb), for an LCh color.
    pub fn to_rgb_lch(&self, lch: &CIELCHColor) -> Option<RGBColor> {
        self.to_rgb(&CIELABColor::from(*lch))
    }

    /// An RGB value for any `lab`: out-of-gamut colors are clipped by the bounded transform,
    /// which works at 16-bit precision.
    pub fn to_rgb_bounded(&self, lab: &CIELABColor) -> RGBColor {
        RGBColor::from(self.lab_to_rgb_bounded.transform([lab.l, lab.a, lab.b])).clamp()
    }

    /// Like [`to_rgb`](ColorSpaceProfile::to_rgb), as an opaque toolkit color; the invalid color
    /// stands for out-of-gamut.
    pub fn to_device_color(&self, lab: &CIELABColor) -> DeviceColor {
        match self.to_rgb(lab) {
            Some(rgb) => DeviceColor::from_rgb_f(rgb.r, rgb.g, rgb.b, 1.0),
            None => DeviceColor::invalid(),
        }
    }

    /// Like [`to_rgb_bounded`](ColorSpaceProfile::to_rgb_bounded), as an opaque toolkit color.
    pub fn to_device_color_bounded(&self, lab: &CIELABColor) -> DeviceColor {
        let rgb = self.to_rgb_bounded(lab);
        DeviceColor::from_rgb_f(rgb.r, rgb.g, rgb.b, 1.0)
    }

    /// Like [`to_device_color_bounded`](ColorSpaceProfile::to_device_color_bounded), for an LCh
    /// color.
    pub fn to_device_color_bounded_lch(&self, lch: &CIELCHColor) -> DeviceColor {
        self.to_device_color_bounded(&CIELABColor::from(*lch))
    }

    /// The CIELAB value of an RGB color of this profile.
    pub fn to_lab(&self, rgb: &RGBColor) -> CIELABColor {
        let lab = self.rgb_to_lab.transform(rgb.components());
        CIELABColor::new(lab[0], lab[1], lab[2])
    }

    /// The CIELAB value of a toolkit color, read as RGB of this profile. Alpha is ignored; the
    /// invalid color reads as black.
    pub fn to_lab_device(&self, color: &DeviceColor) -> CIELABColor {
        self.to_lab(&RGBColor::new(color.red_f(), color.green_f(), color.blue_f()))
    }

    /// Returns `true` if the LCh color is displayable in this profile. Hue is in degrees.
    pub fn in_gamut(&self, lightness: f64, chroma: f64, hue: f64) -> bool {
        let lab = CIELABColor::from(CIELCHColor::new(lightness, chroma, hue));
        ColorSpaceProfile::is_rgb_in_gamut(self.lab_to_rgb.transform([lab.l, lab.a, lab.b]))
    }

    /// Like [`in_gamut`](ColorSpaceProfile::in_gamut), for an LCh color.
    pub fn in_gamut_lch(&self, lch: &CIELCHColor) -> bool {
        self.in_gamut(lch.l, lch.c, lch.h)
    }
}

impl fmt::Debug for ColorSpaceProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColorSpaceProfile")
            .field("description", &self.description)
            .field("blackpoint_l", &self.blackpoint_l)
            .field("whitepoint_l", &self.whitepoint_l)
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::consts::TEST_PRECISION;

    /// sRGB with every output channel mapped through `x * scale + offset`, to shrink the gamut.
    struct Distorted {
        inner: LabToRgbTransform,
        scale: f64,
        offset: f64,
    }

    impl ColorTransform for Distorted {
        fn transform(&self, input: [f64; 3]) -> [f64; 3] {
            let rgb = self.inner.transform(input);
            [
                rgb[0] * self.scale + self.offset,
                rgb[1] * self.scale + self.offset,
                rgb[2] * self.scale + self.offset,
            ]
        }
    }

    struct Constant([f64; 3]);

    impl ColorTransform for Constant {
        fn transform(&self, _input: [f64; 3]) -> [f64; 3] {
            self.0
        }
    }

    fn distorted(scale: f64, offset: f64) -> Result<ColorSpaceProfile, ProfileError> {
        ColorSpaceProfile::from_transforms(
            "distorted sRGB",
            Box::new(Distorted {
                inner: LabToRgbTransform::new(RGBSpace::Srgb, PixelFormat::Double),
                scale,
                offset,
            }),
            Box::new(LabToRgbTransform::new(RGBSpace::Srgb, PixelFormat::Word)),
            Box::new(RgbToLabTransform::new(RGBSpace::Srgb)),
            GamutSettings::default(),
        )
    }

    #[test]
    fn test_builtin_profiles() {
        for &space in &[RGBSpace::Srgb, RGBSpace::AdobeRgb, RGBSpace::RommRgb] {
            let profile = ColorSpaceProfile::new(space, GamutSettings::default()).unwrap();
            assert_eq!(profile.description(), space.description());
            assert!(profile.blackpoint_l() < profile.whitepoint_l());
            assert!(profile.blackpoint_l().abs() <= TEST_PRECISION);
            assert!((profile.whitepoint_l() - 100.).abs() <= TEST_PRECISION);
        }
    }

    #[test]
    fn test_profile_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ColorSpaceProfile>();
    }

    #[test]
    fn test_narrow_neutral_axis() {
        let profile = distorted(1.25, -0.05).unwrap();
        let precision = profile.settings().precision;
        let black = profile.blackpoint_l();
        let white = profile.whitepoint_l();
        assert!(black > 0. && black < 20., "{}", black);
        assert!(white > 60. && white < 95., "{}", white);
        // the scan keeps the in-gamut side of each boundary
        assert!(profile.in_gamut(black, 0., 0.));
        assert!(profile.in_gamut(white, 0., 0.));
        assert!(!profile.in_gamut(black - precision, 0., 0.));
        assert!(!profile.in_gamut(white + precision, 0., 0.));
    }

    #[test]
    fn test_no_neutral_axis() {
        let err = ColorSpaceProfile::from_transforms(
            "nothing",
            Box::new(Constant([2., 2., 2.])),
            Box::new(Constant([1., 1., 1.])),
            Box::new(Constant([0., 0., 0.])),
            GamutSettings::default(),
        )
        .unwrap_err();
        match err {
            ProfileError::AchromaticAxis {
                blackpoint_l,
                whitepoint_l,
            } => assert!(blackpoint_l.is_nan() && whitepoint_l.is_nan()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_settings_fail() {
        let settings = GamutSettings {
            mesh_size: 0.0001,
            ..GamutSettings::default()
        };
        assert!(ColorSpaceProfile::new(RGBSpace::Srgb, settings).is_err());
    }

    #[test]
    fn test_rgb_lab_round_trip() {
        let profile = ColorSpaceProfile::srgb().unwrap();
        for &(r, g, b) in &[(0., 0., 0.), (1., 1., 1.), (1., 0., 0.), (0.3, 0.6, 0.9), (0.2, 0.2, 0.)] {
            let rgb = RGBColor::new(r, g, b);
            let back = profile.to_rgb(&profile.to_lab(&rgb)).unwrap();
            assert!(approx_eq!(f64, back.r, r, epsilon = 1e-9));
            assert!(approx_eq!(f64, back.g, g, epsilon = 1e-9));
            assert!(approx_eq!(f64, back.b, b, epsilon = 1e-9));
        }
    }

    #[test]
    fn test_cube_corners_are_in_gamut() {
        for &space in &[RGBSpace::Srgb, RGBSpace::AdobeRgb, RGBSpace::RommRgb] {
            let profile = ColorSpaceProfile::new(space, GamutSettings::default()).unwrap();
            for corner in 0..8 {
                let rgb = RGBColor::new(
                    f64::from(corner & 1),
                    f64::from((corner >> 1) & 1),
                    f64::from((corner >> 2) & 1),
                );
                let lch = CIELCHColor::from(profile.to_lab(&rgb));
                assert!(profile.in_gamut_lch(&lch), "{:?} {}", space, rgb);
                let back = profile.to_rgb(&profile.to_lab(&rgb)).unwrap();
                assert!(approx_eq!(f64, back.r, rgb.r, epsilon = 1e-9));
                assert!(approx_eq!(f64, back.g, rgb.g, epsilon = 1e-9));
                assert!(approx_eq!(f64, back.b, rgb.b, epsilon = 1e-9));
            }
        }
    }

    #[test]
    fn test_out_of_gamut_conversions() {
        let profile = ColorSpaceProfile::srgb().unwrap();
        let lab = CIELABColor::new(50., 100., -100.);
        assert!(profile.to_rgb(&lab).is_none());
        assert!(!profile.to_device_color(&lab).is_valid());
        let bounded = profile.to_rgb_bounded(&lab);
        assert!(bounded.in_bounds());
        assert!(profile.to_device_color_bounded(&lab).is_valid());
        let lch = CIELCHColor::from(lab);
        assert!(!profile.in_gamut_lch(&lch));
        assert!(profile.to_rgb_lch(&lch).is_none());
        assert_eq!(
            profile.to_device_color_bounded_lch(&lch),
            profile.to_device_color_bounded(&CIELABColor::from(lch))
        );
    }

    #[test]
    fn test_device_color_conversions() {
        let profile = ColorSpaceProfile::srgb().unwrap();
        let red = DeviceColor::from_rgb8(255, 0, 0);
        let lab = profile.to_lab_device(&red);
        assert_eq!(lab, profile.to_lab(&RGBColor::new(1., 0., 0.)));
        assert_eq!(profile.to_device_color(&lab).name(), "#ff0000");
        let gray = profile.to_device_color(&CIELABColor::new(50., 0., 0.));
        assert!(gray.is_valid());
        assert_eq!(gray.red_f(), gray.blue_f());
    }
}
