//! Gamut mapping by sacrificing chroma. A color outside of the profile's gamut keeps its lightness
//! and hue while its chroma is reduced, found by bisection, until the color becomes displayable.
//! Lightness only changes when not even the neutral gray of that lightness is in gamut: then the
//! color snaps to the black or white point of the profile.

use crate::bound::LchBoundaries;
use crate::colors::CIELCHColor;
use crate::profile::ColorSpaceProfile;
use crate::settings::AchromaticFallback;

/// Narrows down the boundary between `inside`, where `contains` holds, and `outside`, where it
/// doesn't, until they are at most `precision` apart or no `f64` lies between them. Returns the
/// end that is inside.
pub(crate) fn bisect<F: Fn(f64) -> bool>(
    mut inside: f64,
    mut outside: f64,
    precision: f64,
    contains: F,
) -> f64 {
    while (outside - inside).abs() > precision {
        let middle = (inside + outside) / 2.0;
        if middle == inside || middle == outside {
            break;
        }
        if contains(middle) {
            inside = middle;
        } else {
            outside = middle;
        }
    }
    inside
}

/// Returns the color closest to `lch` in chroma that is within the gamut of `profile`.
///
/// Expects a normalized hue, see [`CIELCHColor::normalized`]. In-gamut colors are returned as they
/// are.
/// # Example
///
/// ```
/// # use perceptual_color::colors::CIELCHColor;
/// # use perceptual_color::gamut_mapping::sacrifice_chroma;
/// # use perceptual_color::profile::ColorSpaceProfile;
/// let profile = ColorSpaceProfile::srgb().unwrap();
/// let mapped = sacrifice_chroma(&profile, CIELCHColor::new(50., 200., 0.));
/// assert_eq!(mapped.l, 50.);
/// assert_eq!(mapped.h, 0.);
/// assert!(mapped.c < 200.);
/// assert!(profile.in_gamut_lch(&mapped));
/// ```
pub fn sacrifice_chroma(profile: &ColorSpaceProfile, lch: CIELCHColor) -> CIELCHColor {
    if profile.in_gamut_lch(&lch) {
        return lch;
    }

    if profile.in_gamut(lch.l, 0.0, lch.h) {
        // an infinite or NaN chroma would never halve below the precision
        let requested = if lch.c.is_finite() {
            lch.c
        } else {
            LchBoundaries::PHYSICAL_MAXIMUM_CHROMA
        };
        let c = bisect(0.0, requested, profile.settings().precision, |c| {
            profile.in_gamut(lch.l, c, lch.h)
        });
        return CIELCHColor { c, ..lch };
    }

    let snapped_l = if lch.l < profile.blackpoint_l() {
        profile.blackpoint_l()
    } else if lch.l > profile.whitepoint_l() {
        match profile.settings().bright_fallback {
            AchromaticFallback::Nearest => profile.whitepoint_l(),
            AchromaticFallback::Blackpoint => profile.blackpoint_l(),
        }
    } else {
        // gray out of gamut between the black and white points: the gamut isn't convex along the
        // neutral axis, or L* is NaN
        profile.blackpoint_l()
    };
    log::trace!("{} has no in-gamut chroma, snapped to L* {}", lch, snapped_l);
    CIELCHColor {
        l: snapped_l,
        c: 0.0,
        h: lch.h,
    }
}
