//! This module describes the Bound trait, which allows for a description of what values a color
//! representation supports, together with the conventional ranges of CIELAB and CIELCH. For
//! example, an RGB color can't have channels outside of [0, 1], whereas CIELAB can describe even
//! colors that cannot be seen by humans.

/// Returns `true` if `low <= x <= high`.
/// ```
/// # use perceptual_color::bound::in_range;
/// assert!(in_range(0, 2, 2));
/// assert!(!in_range(3, 3, 2));
/// assert!(in_range(-1., 0.5, 1.));
/// ```
pub fn in_range<T: PartialOrd>(low: T, x: T, high: T) -> bool {
    low <= x && x <= high
}

/// Describes a color representation whose components have explicit bounds. Components are taken
/// in the order they appear in the type's name.
pub trait Bound: Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component.
    fn bounds() -> [(f64, f64); 3];
    /// The components, in the same order as the bounds.
    fn components(&self) -> [f64; 3];
    /// Rebuilds a value from its components.
    fn from_components(components: [f64; 3]) -> Self;

    /// Returns `true` if every component is within its bounds.
    fn in_bounds(&self) -> bool {
        let ranges = Self::bounds();
        self.components()
            .iter()
            .zip(ranges.iter())
            .all(|(&x, &(min, max))| in_range(min, x, max))
    }

    /// Returns a new value with each component clamped to its bounds. NaN components become the
    /// lower bound.
    fn clamp(&self) -> Self {
        let ranges = Self::bounds();
        let mut clamped = self.components();
        for (x, &(min, max)) in clamped.iter_mut().zip(ranges.iter()) {
            *x = if x.is_nan() { min } else { num::clamp(*x, min, max) };
        }
        Self::from_components(clamped)
    }
}

/// Conventional and physical ranges of the CIELAB opponent axes. Software usually stores a and b
/// in a signed 8-bit range; physically, surface colors reach somewhat further on some sides.
#[derive(Debug, Copy, Clone)]
pub struct LabBoundaries;

impl LabBoundaries {
    /// Lowest physically reachable a.
    pub const PHYSICAL_MINIMUM_A: f64 = -170.0;
    /// Highest physically reachable a.
    pub const PHYSICAL_MAXIMUM_A: f64 = 100.0;
    /// Lowest physically reachable b.
    pub const PHYSICAL_MINIMUM_B: f64 = -100.0;
    /// Highest physically reachable b.
    pub const PHYSICAL_MAXIMUM_B: f64 = 150.0;
    /// Lower end of the conventional (signed 8-bit) a range.
    pub const USUAL_MINIMUM_A: f64 = -128.0;
    /// Upper end of the conventional (signed 8-bit) a range.
    pub const USUAL_MAXIMUM_A: f64 = 127.0;
    /// Lower end of the conventional (signed 8-bit) b range.
    pub const USUAL_MINIMUM_B: f64 = -128.0;
    /// Upper end of the conventional (signed 8-bit) b range.
    pub const USUAL_MAXIMUM_B: f64 = 127.0;
}

/// Ranges and defaults for CIELCH.
///
/// Chroma can't exceed √((−170)² + 150²) ≈ 227, following [`LabBoundaries`]. A lightness of 50 and
/// a chroma of 0 sit in the middle of the gamut body of any RGB space, which makes them safe
/// defaults. 29 is the highest chroma that stays within sRGB at lightness 50 for every hue, and 132
/// is about the highest chroma sRGB reaches at all.
#[derive(Debug, Copy, Clone)]
pub struct LchBoundaries;

impl LchBoundaries {
    /// Upper bound for the chroma of any physically possible color.
    pub const PHYSICAL_MAXIMUM_CHROMA: f64 = 227.0;
    /// A neutral default chroma.
    pub const DEFAULT_CHROMA: f64 = 0.0;
    /// The conventional default hue.
    pub const DEFAULT_HUE: f64 = 0.0;
    /// The middle of the lightness range.
    pub const DEFAULT_LIGHTNESS: f64 = 50.0;
    /// Highest chroma that is in sRGB at lightness 50 for all hues.
    pub const VERSATILE_SRGB_CHROMA: f64 = 29.0;
    /// Approximate highest chroma within sRGB.
    pub const MAX_SRGB_CHROMA: f64 = 132.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_int() {
        let cases: [(i32, i32, i32, bool); 30] = [
            (3, 3, 2, false),
            (3, 2, 2, false),
            (3, 0, 2, false),
            (3, 4, 2, false),
            (3, 3, 3, true),
            (3, 4, 3, false),
            (3, 2, 3, false),
            (0, 1, 2, true),
            (0, 0, 2, true),
            (0, 2, 2, true),
            (0, 3, 2, false),
            (0, -1, 2, false),
            (1, 2, 3, true),
            (1, 1, 3, true),
            (1, 3, 3, true),
            (1, 0, 3, false),
            (1, 4, 3, false),
            (-1, 0, 1, true),
            (-1, -1, 1, true),
            (-1, 1, 1, true),
            (-1, 2, 1, false),
            (-1, -2, 1, false),
            (-2, -1, 0, true),
            (-2, -2, 0, true),
            (-2, 0, 0, true),
            (-2, -3, 0, false),
            (-2, 1, 0, false),
            (-3, -2, -1, true),
            (-3, -4, -1, false),
            (-3, 0, -1, false),
        ];
        for &(low, x, high, expected) in cases.iter() {
            assert_eq!(in_range(low, x, high), expected);
            assert_eq!(
                in_range(f64::from(low), f64::from(x), f64::from(high)),
                expected
            );
        }
    }

    #[test]
    fn test_in_range_nan() {
        assert!(!in_range(0., std::f64::NAN, 1.));
    }

    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Unit([f64; 3]);

    impl Bound for Unit {
        fn bounds() -> [(f64, f64); 3] {
            [(0., 1.), (0., 1.), (-1., 1.)]
        }
        fn components(&self) -> [f64; 3] {
            self.0
        }
        fn from_components(components: [f64; 3]) -> Unit {
            Unit(components)
        }
    }

    #[test]
    fn test_clamp() {
        let value = Unit([0.1, -0.2, 1.2]);
        assert!(!value.in_bounds());
        assert_eq!(value.clamp(), Unit([0.1, 0., 1.]));
        assert!(value.clamp().in_bounds());
        assert_eq!(Unit([std::f64::NAN, 2., -3.]).clamp(), Unit([0., 1., -1.]));
    }
}
