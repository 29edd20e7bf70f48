//! [`FullColor`] holds one color in every representation the color picker works with at once: RGB
//! of the profile, toolkit RGB and HSV, CIELAB and CIELCH, plus alpha. All of them are computed
//! when the value is built, so they always describe the same color. Widgets build a fresh
//! `FullColor` on every change and compare it to the previous one to decide whether anything needs
//! to be repainted.

use std::fmt;

use crate::colors::{CIELABColor, CIELCHColor, ColorSpec, DeviceColor, RGBColor};
use crate::gamut_mapping::sacrifice_chroma;
use crate::profile::ColorSpaceProfile;

/// What to do with CIELAB or CIELCH input that the profile can't display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutOfGamutBehaviour {
    /// Keep the given values; only the RGB representations are clipped into the gamut, so they may
    /// show a somewhat different color.
    Preserve,
    /// Reduce chroma (and, if even gray is out of gamut, move lightness) until the color is in
    /// gamut, and store the adjusted values everywhere.
    SacrificeChroma,
}

/// A color in all of its representations.
///
/// Equality compares every stored representation, so two values built along different paths can
/// be unequal even when they look the same. The default value is invalid and holds no color.
/// # Example
///
/// ```
/// # use perceptual_color::colors::{CIELCHColor, RGBColor};
/// # use perceptual_color::full_color::{FullColor, OutOfGamutBehaviour};
/// # use perceptual_color::profile::ColorSpaceProfile;
/// let profile = ColorSpaceProfile::srgb().unwrap();
/// let red = FullColor::from_rgb(&profile, &RGBColor::new(1., 0., 0.), 0.5);
/// assert!(red.is_valid());
/// assert_eq!(red.alpha(), 0.5);
/// assert_eq!(red.to_rgb_color().name(), "#ff0000");
///
/// let vivid = FullColor::from_lch(
///     &profile,
///     CIELCHColor::new(50., 200., 0.),
///     OutOfGamutBehaviour::SacrificeChroma,
///     1.,
/// );
/// assert!(profile.in_gamut_lch(&vivid.to_lch()));
/// assert!(vivid.to_lch().c < 200.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullColor {
    rgb: RGBColor,
    rgb_color: DeviceColor,
    hsv_color: DeviceColor,
    lab: CIELABColor,
    lch: CIELCHColor,
    alpha: f64,
    valid: bool,
}

impl FullColor {
    /// The invalid color, same as `FullColor::default()`.
    pub fn invalid() -> FullColor {
        FullColor::default()
    }

    /// Builds a color from RGB of `profile`. Always valid.
    pub fn from_rgb(profile: &ColorSpaceProfile, rgb: &RGBColor, alpha: f64) -> FullColor {
        let rgb_color = DeviceColor::from_rgb_f(rgb.r, rgb.g, rgb.b, alpha);
        let lab = profile.to_lab(rgb);
        FullColor {
            rgb: *rgb,
            rgb_color,
            hsv_color: rgb_color.to_hsv(),
            lab,
            lch: CIELCHColor::from(lab),
            alpha,
            valid: true,
        }
    }

    /// Builds a color from a toolkit color, read as RGB of `profile`. HSV input is kept as the HSV
    /// representation. The invalid toolkit color gives the invalid `FullColor`.
    pub fn from_device_color(profile: &ColorSpaceProfile, color: DeviceColor) -> FullColor {
        let (rgb_color, hsv_color) = match color.spec() {
            ColorSpec::Invalid => return FullColor::invalid(),
            ColorSpec::Hsv => (color.to_rgb(), color),
            ColorSpec::Rgb => (color, color.to_hsv()),
        };
        let rgb = RGBColor::new(rgb_color.red_f(), rgb_color.green_f(), rgb_color.blue_f());
        let lab = profile.to_lab(&rgb);
        FullColor {
            rgb,
            rgb_color,
            hsv_color,
            lab,
            lch: CIELCHColor::from(lab),
            alpha: color.alpha_f(),
            valid: true,
        }
    }

    /// Builds a color from CIELAB. With [`OutOfGamutBehaviour::Preserve`], and for in-gamut input
    /// with [`OutOfGamutBehaviour::SacrificeChroma`], the given Lab is stored bit for bit instead of
    /// being recomputed from LCh. Compared to a Lab → LCh → Lab round trip, the stored Lab can
    /// therefore differ in the last bits, and a `FullColor` built from the same color through
    /// [`from_lch`](FullColor::from_lch) need not compare equal.
    pub fn from_lab(
        profile: &ColorSpaceProfile,
        lab: CIELABColor,
        behaviour: OutOfGamutBehaviour,
        alpha: f64,
    ) -> FullColor {
        let lch = CIELCHColor::from(lab);
        match behaviour {
            OutOfGamutBehaviour::Preserve => FullColor::from_lab_and_lch(profile, lab, lch, alpha),
            OutOfGamutBehaviour::SacrificeChroma => {
                let mapped = sacrifice_chroma(profile, lch);
                if mapped == lch {
                    FullColor::from_lab_and_lch(profile, lab, lch, alpha)
                } else {
                    FullColor::from_lab_and_lch(profile, CIELABColor::from(mapped), mapped, alpha)
                }
            }
        }
    }

    /// Builds a color from CIELCH. Chroma and hue are normalized first: a negative chroma flips
    /// the hue, and the hue is brought into [0, 360).
    pub fn from_lch(
        profile: &ColorSpaceProfile,
        lch: CIELCHColor,
        behaviour: OutOfGamutBehaviour,
        alpha: f64,
    ) -> FullColor {
        let mut lch = lch.normalized();
        if behaviour == OutOfGamutBehaviour::SacrificeChroma {
            lch = sacrifice_chroma(profile, lch);
        }
        FullColor::from_lab_and_lch(profile, CIELABColor::from(lch), lch, alpha)
    }

    fn from_lab_and_lch(
        profile: &ColorSpaceProfile,
        lab: CIELABColor,
        lch: CIELCHColor,
        alpha: f64,
    ) -> FullColor {
        let rgb = profile.to_rgb_bounded(&lab);
        let rgb_color = DeviceColor::from_rgb_f(rgb.r, rgb.g, rgb.b, alpha);
        FullColor {
            rgb,
            rgb_color,
            hsv_color: rgb_color.to_hsv(),
            lab,
            lch,
            alpha,
            valid: true,
        }
    }

    /// Returns the same color with a new alpha. The invalid color stays as it is.
    pub fn with_alpha(&self, alpha: f64) -> FullColor {
        if !self.valid {
            return *self;
        }
        FullColor {
            rgb_color: self.rgb_color.with_alpha_f(alpha),
            hsv_color: self.hsv_color.with_alpha_f(alpha),
            alpha,
            ..*self
        }
    }

    /// RGB of the profile the color was built with, each channel in [0, 1].
    pub fn to_rgb(&self) -> RGBColor {
        self.rgb
    }

    /// The toolkit color as RGB, alpha included.
    pub fn to_rgb_color(&self) -> DeviceColor {
        self.rgb_color
    }

    /// The toolkit color as HSV, alpha included.
    pub fn to_hsv_color(&self) -> DeviceColor {
        self.hsv_color
    }

    /// CIELAB D50.
    pub fn to_lab(&self) -> CIELABColor {
        self.lab
    }

    /// CIELCH D50, with a non-negative chroma and a hue in [0, 360).
    pub fn to_lch(&self) -> CIELCHColor {
        self.lch
    }

    /// Opacity in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `false` for the invalid color, whose other values mean nothing.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for FullColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.valid {
            return write!(f, "FullColor(invalid)");
        }
        writeln!(f, "FullColor(")?;
        writeln!(f, "    {}", self.rgb)?;
        writeln!(f, "    {}", self.rgb_color)?;
        writeln!(f, "    {}", self.hsv_color)?;
        writeln!(f, "    {}", self.lab)?;
        writeln!(f, "    {}", self.lch)?;
        writeln!(f, "    alpha {}", self.alpha)?;
        write!(f, ")")
    }
}
