//! Tunables of the gamut searches, loadable from any serde format.

use crate::consts::{GAMUT_MESH_SIZE, GAMUT_PRECISION, MIN_GAMUT_PRECISION};
use crate::error::ProfileError;

/// Where a color that is too bright for the profile lands when chroma alone can't bring it into
/// gamut.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchromaticFallback {
    /// The nearest achromatic bound: the white point.
    Nearest,
    /// The black point, like colors that are too dark. This is how earlier versions of the color
    /// picker behaved, and is kept for reproducing their output.
    Blackpoint,
}

impl Default for AchromaticFallback {
    fn default() -> AchromaticFallback {
        AchromaticFallback::Nearest
    }
}

/// Numeric settings for a [`ColorSpaceProfile`](crate::profile::ColorSpaceProfile).
/// # Example
///
/// ```
/// # use perceptual_color::settings::{AchromaticFallback, GamutSettings};
/// let settings = GamutSettings {
///     precision: 0.0001,
///     ..GamutSettings::default()
/// };
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.bright_fallback, AchromaticFallback::Nearest);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamutSettings {
    /// Step of the neutral-axis scan for the black and white points, in L* units.
    pub mesh_size: f64,
    /// Interval width at which bisections stop. Must be at least 1e-9 and below `mesh_size`.
    pub precision: f64,
    /// Resolution of too-bright colors in chroma-sacrificing gamut mapping.
    pub bright_fallback: AchromaticFallback,
}

impl Default for GamutSettings {
    fn default() -> GamutSettings {
        GamutSettings {
            mesh_size: GAMUT_MESH_SIZE,
            precision: GAMUT_PRECISION,
            bright_fallback: AchromaticFallback::default(),
        }
    }
}

impl GamutSettings {
    /// Checks that every search driven by these settings terminates.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(self.precision.is_finite() && self.precision >= MIN_GAMUT_PRECISION) {
            return Err(ProfileError::InvalidSettings(format!(
                "precision must be finite and at least {}, got {}",
                MIN_GAMUT_PRECISION, self.precision
            )));
        }
        if !(self.mesh_size > self.precision && self.mesh_size <= 100.0) {
            return Err(ProfileError::InvalidSettings(format!(
                "mesh size must be larger than the precision {} and at most 100, got {}",
                self.precision, self.mesh_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GamutSettings::default();
        assert_eq!(settings.mesh_size, 0.01);
        assert_eq!(settings.precision, 0.001);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_settings() {
        let zero = GamutSettings {
            precision: 0.,
            ..GamutSettings::default()
        };
        assert!(zero.validate().is_err());
        let nan = GamutSettings {
            precision: std::f64::NAN,
            ..GamutSettings::default()
        };
        assert!(nan.validate().is_err());
        let below_float_spacing = GamutSettings {
            precision: 1e-20,
            ..GamutSettings::default()
        };
        assert!(below_float_spacing.validate().is_err());
        let huge_mesh = GamutSettings {
            mesh_size: 1000.,
            ..GamutSettings::default()
        };
        assert!(huge_mesh.validate().is_err());
        let finest = GamutSettings {
            precision: MIN_GAMUT_PRECISION,
            ..GamutSettings::default()
        };
        assert_eq!(finest.validate(), Ok(()));
        let coarse = GamutSettings {
            mesh_size: 0.001,
            precision: 0.01,
            ..GamutSettings::default()
        };
        match coarse.validate() {
            Err(ProfileError::InvalidSettings(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_partial_json() {
        let settings: GamutSettings =
            serde_json::from_str(r#"{"precision": 0.0005, "bright_fallback": "Blackpoint"}"#)
                .unwrap();
        assert_eq!(settings.mesh_size, GAMUT_MESH_SIZE);
        assert_eq!(settings.precision, 0.0005);
        assert_eq!(settings.bright_fallback, AchromaticFallback::Blackpoint);
        let json = serde_json::to_string(&GamutSettings::default()).unwrap();
        assert_eq!(serde_json::from_str::<GamutSettings>(&json).unwrap(), GamutSettings::default());
    }
}
