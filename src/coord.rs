//! This module contains a struct, [`PolarCoord`], that models a point in the two-dimensional polar
//! coordinate system. Cylindrical color spaces such as CIELCH use it for their chroma and hue
//! components: chroma is the radius and hue is the angle.
//!
//! Polar coordinates allow many representations of the same point. An angle of 0° is the same as
//! 360° or -360°, a radius of 1 at 0° is the same as a radius of -1 at 180°, and at a radius of 0
//! the angle carries no information at all. `PolarCoord` always stores a normalized form: the
//! radius is never negative and the angle is in the range [0, 360).

use std::fmt;

/// A normalized point in polar coordinates, with the angle measured in degrees.
///
/// When constructed from a radius of 0 and some angle, the (meaningless) angle is kept, although
/// normalized. Only construction from the cartesian origin forces the angle to 0. Equality ignores
/// the angle whenever the radius is 0.
///
/// # Example
/// ```
/// # use perceptual_color::coord::PolarCoord;
/// let point = PolarCoord::new(-2., 183.);
/// assert_eq!(point.radius(), 2.);
/// assert_eq!(point.angle_degrees(), 3.);
/// assert_eq!(PolarCoord::new(0., 10.), PolarCoord::new(0., 370.));
/// assert_ne!(PolarCoord::new(1., 10.), PolarCoord::new(1., 11.));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PolarCoord {
    radius: f64,
    angle_degrees: f64,
}

impl PolarCoord {
    /// Creates a point from a radius and an angle in degrees. A negative radius is made positive
    /// by turning the angle by 180°, which describes the same point.
    pub fn new(radius: f64, angle_degrees: f64) -> PolarCoord {
        if radius < 0.0 {
            PolarCoord {
                radius: -radius,
                angle_degrees: PolarCoord::normalize_angle(angle_degrees + 180.0),
            }
        } else {
            PolarCoord {
                radius,
                angle_degrees: PolarCoord::normalize_angle(angle_degrees),
            }
        }
    }

    /// Creates a point from cartesian coordinates. The origin gets an angle of 0°.
    pub fn from_cartesian(x: f64, y: f64) -> PolarCoord {
        let radius = x.hypot(y);
        if radius == 0.0 {
            return PolarCoord {
                radius: 0.0,
                angle_degrees: 0.0,
            };
        }
        // acos is exact on the axes, where atan2 can leave a rounding residue
        let angle = num::clamp(x / radius, -1.0, 1.0).acos().to_degrees();
        let angle_degrees = if y >= 0.0 { angle } else { 360.0 - angle };
        PolarCoord {
            radius,
            angle_degrees: PolarCoord::normalize_angle(angle_degrees),
        }
    }

    /// Normalizes an angle in degrees to the range [0, 360). Multiples of 360, negative ones
    /// included, map exactly to 0.
    /// ```
    /// # use perceptual_color::coord::PolarCoord;
    /// assert_eq!(PolarCoord::normalize_angle(360.), 0.);
    /// assert_eq!(PolarCoord::normalize_angle(-720.), 0.);
    /// assert_eq!(PolarCoord::normalize_angle(361.5), 1.5);
    /// assert_eq!(PolarCoord::normalize_angle(-1.), 359.);
    /// ```
    pub fn normalize_angle(angle_degrees: f64) -> f64 {
        let rem = angle_degrees % 360.0;
        if rem < 0.0 {
            // tiny negative remainders would round up to exactly 360
            let wrapped = rem + 360.0;
            if wrapped >= 360.0 {
                0.0
            } else {
                wrapped
            }
        } else {
            // turns -0.0 into 0.0
            rem + 0.0
        }
    }

    /// The radius, always at least 0.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The angle in degrees, always in the range [0, 360).
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Converts back to cartesian coordinates, as a tuple `(x, y)`.
    pub fn to_cartesian(&self) -> (f64, f64) {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        (self.radius * cos, self.radius * sin)
    }
}

impl PartialEq for PolarCoord {
    fn eq(&self, other: &PolarCoord) -> bool {
        self.radius == other.radius
            && (self.angle_degrees == other.angle_degrees || self.radius == 0.0)
    }
}

impl fmt::Display for PolarCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PolarCoord(radius: {}, angle: {}°)",
            self.radius, self.angle_degrees
        )
    }
}
