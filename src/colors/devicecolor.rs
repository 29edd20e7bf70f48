//! This module implements [`DeviceColor`], the color value that GUI toolkits pass around: 16 bits
//! per channel, an alpha channel, and a tag saying whether the channels hold RGB or HSV. It can
//! also be invalid, which is how toolkits say "no color".
//!
//! The HSV model here is the usual hexcone derived from RGB: a poor analog of perceived hue and
//! lightness, but what color dialogs and toolkits speak. For perceptual work use
//! [`CIELCHColor`](super::CIELCHColor) through a [`FullColor`](crate::full_color::FullColor).

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::consts::WORD_MAX;
use crate::coord::PolarCoord;
use crate::error::DeviceColorParseError;

/// The hue word that marks an achromatic (gray) HSV color, whose hue is undefined.
const ACHROMATIC_HUE: u16 = u16::MAX;

/// Which model the channels of a [`DeviceColor`] are stored in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpec {
    /// No color at all.
    Invalid,
    /// Red, green and blue.
    Rgb,
    /// Hue, saturation and value.
    Hsv,
}

/// A toolkit color: 16-bit channels tagged with a [`ColorSpec`], plus a 16-bit alpha.
///
/// For `Rgb` the channels are red, green and blue. For `Hsv` they are the hue in hundredths of a
/// degree (or an achromatic marker), the saturation and the value. Equality is structural: the same
/// visible color stored as RGB and as HSV compares unequal.
///
/// # Example
/// ```
/// # use perceptual_color::colors::{ColorSpec, DeviceColor};
/// let red: DeviceColor = "#ff0000".parse().unwrap();
/// assert_eq!(red.spec(), ColorSpec::Rgb);
/// let hsv = red.to_hsv();
/// assert_eq!(hsv.hue_f(), 0.);
/// assert_eq!(hsv.saturation_f(), 1.);
/// assert_eq!(hsv.to_rgb(), red);
/// assert!(!DeviceColor::invalid().is_valid());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceColor {
    spec: ColorSpec,
    alpha: u16,
    channels: [u16; 3],
}

fn to_word(x: f64) -> u16 {
    let clamped = if x.is_nan() { 0.0 } else { num::clamp(x, 0.0, 1.0) };
    (clamped * WORD_MAX).round() as u16
}

fn from_word(word: u16) -> f64 {
    f64::from(word) / WORD_MAX
}

impl DeviceColor {
    /// A color that holds no color.
    pub fn invalid() -> DeviceColor {
        DeviceColor {
            spec: ColorSpec::Invalid,
            alpha: 0,
            channels: [0; 3],
        }
    }

    /// An RGB color from floating-point channels. Every channel, alpha included, is clamped to
    /// [0, 1] and rounded to 16 bits.
    pub fn from_rgb_f(r: f64, g: f64, b: f64, alpha: f64) -> DeviceColor {
        DeviceColor {
            spec: ColorSpec::Rgb,
            alpha: to_word(alpha),
            channels: [to_word(r), to_word(g), to_word(b)],
        }
    }

    /// An opaque RGB color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> DeviceColor {
        DeviceColor::from_rgba8(r, g, b, u8::MAX)
    }

    /// An RGB color from 8-bit channels and alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, alpha: u8) -> DeviceColor {
        // 0xab widens to 0xabab
        let widen = |x: u8| u16::from(x) * 257;
        DeviceColor {
            spec: ColorSpec::Rgb,
            alpha: widen(alpha),
            channels: [widen(r), widen(g), widen(b)],
        }
    }

    /// An HSV color. The hue is in degrees and gets normalized to [0, 360); a negative hue means
    /// achromatic. Saturation, value and alpha are clamped to [0, 1].
    pub fn from_hsv_f(hue: f64, saturation: f64, value: f64, alpha: f64) -> DeviceColor {
        let hue_word = if hue < 0.0 || hue.is_nan() {
            ACHROMATIC_HUE
        } else {
            ((PolarCoord::normalize_angle(hue) * 100.0).round() as u16) % 36000
        };
        DeviceColor {
            spec: ColorSpec::Hsv,
            alpha: to_word(alpha),
            channels: [hue_word, to_word(saturation), to_word(value)],
        }
    }

    /// Returns `false` for the invalid color.
    pub fn is_valid(&self) -> bool {
        self.spec != ColorSpec::Invalid
    }

    /// The model the channels are stored in.
    pub fn spec(&self) -> ColorSpec {
        self.spec
    }

    /// The alpha channel in [0, 1]; 0 is fully transparent.
    pub fn alpha_f(&self) -> f64 {
        from_word(self.alpha)
    }

    /// Returns the same color with a new alpha, clamped to [0, 1]. The invalid color stays invalid.
    pub fn with_alpha_f(&self, alpha: f64) -> DeviceColor {
        if !self.is_valid() {
            return *self;
        }
        DeviceColor {
            alpha: to_word(alpha),
            ..*self
        }
    }

    /// The red channel in [0, 1], converting from HSV if needed. 0 for the invalid color.
    pub fn red_f(&self) -> f64 {
        self.rgb_channel(0)
    }

    /// The green channel in [0, 1], converting from HSV if needed. 0 for the invalid color.
    pub fn green_f(&self) -> f64 {
        self.rgb_channel(1)
    }

    /// The blue channel in [0, 1], converting from HSV if needed. 0 for the invalid color.
    pub fn blue_f(&self) -> f64 {
        self.rgb_channel(2)
    }

    /// The hue in degrees, converting from RGB if needed. -1 for achromatic and invalid colors.
    pub fn hue_f(&self) -> f64 {
        match self.spec {
            ColorSpec::Invalid => -1.0,
            ColorSpec::Rgb => self.to_hsv().hue_f(),
            ColorSpec::Hsv => {
                if self.channels[0] == ACHROMATIC_HUE {
                    -1.0
                } else {
                    f64::from(self.channels[0]) / 100.0
                }
            }
        }
    }

    /// The HSV saturation in [0, 1], converting from RGB if needed.
    pub fn saturation_f(&self) -> f64 {
        self.hsv_channel(1)
    }

    /// The HSV value in [0, 1], converting from RGB if needed.
    pub fn value_f(&self) -> f64 {
        self.hsv_channel(2)
    }

    fn rgb_channel(&self, index: usize) -> f64 {
        match self.spec {
            ColorSpec::Invalid => 0.0,
            ColorSpec::Rgb => from_word(self.channels[index]),
            ColorSpec::Hsv => from_word(self.to_rgb().channels[index]),
        }
    }

    fn hsv_channel(&self, index: usize) -> f64 {
        match self.spec {
            ColorSpec::Invalid => 0.0,
            ColorSpec::Rgb => from_word(self.to_hsv().channels[index]),
            ColorSpec::Hsv => from_word(self.channels[index]),
        }
    }

    /// Returns the same color stored as RGB. Invalid and RGB colors are returned as they are.
    pub fn to_rgb(&self) -> DeviceColor {
        if self.spec != ColorSpec::Hsv {
            return *self;
        }
        let [hue, saturation, value] = self.channels;
        if saturation == 0 || hue == ACHROMATIC_HUE {
            return DeviceColor {
                spec: ColorSpec::Rgb,
                alpha: self.alpha,
                channels: [value; 3],
            };
        }
        let h = f64::from(hue) / 100.0;
        let s = from_word(saturation);
        let v = from_word(value);

        // the largest channel is v, the smallest v - chroma; x is the middle one before offsetting
        let chroma = s * v;
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        // which line of the hexagon we're on decides the order of the channels
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = v - chroma;
        DeviceColor {
            spec: ColorSpec::Rgb,
            alpha: self.alpha,
            channels: [to_word(r1 + offset), to_word(g1 + offset), to_word(b1 + offset)],
        }
    }

    /// Returns the same color stored as HSV. Invalid and HSV colors are returned as they are. Grays
    /// get the achromatic hue.
    pub fn to_hsv(&self) -> DeviceColor {
        if self.spec != ColorSpec::Rgb {
            return *self;
        }
        let r = from_word(self.channels[0]);
        let g = from_word(self.channels[1]);
        let b = from_word(self.channels[2]);
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;
        let value = to_word(max_c);

        if approx_eq!(f64, chroma, 0.0, epsilon = 1e-12) {
            return DeviceColor {
                spec: ColorSpec::Hsv,
                alpha: self.alpha,
                channels: [ACHROMATIC_HUE, 0, value],
            };
        }

        // position on the hexagon, in sixths of a turn
        let sector = if approx_eq!(f64, r, max_c, ulps = 2) {
            (g - b) / chroma
        } else if approx_eq!(f64, g, max_c, ulps = 2) {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        let hue = PolarCoord::normalize_angle(sector * 60.0);
        DeviceColor {
            spec: ColorSpec::Hsv,
            alpha: self.alpha,
            channels: [
                ((hue * 100.0).round() as u16) % 36000,
                to_word(chroma / max_c),
                value,
            ],
        }
    }

    /// The 8-bit red, green and blue channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let narrow = |x: u16| (f64::from(x) / 257.0).round() as u8;
        let rgb = self.to_rgb();
        (
            narrow(rgb.channels[0]),
            narrow(rgb.channels[1]),
            narrow(rgb.channels[2]),
        )
    }

    /// The `#rrggbb` name of the color. The invalid color is named `#000000`.
    pub fn name(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The `#aarrggbb` name of the color.
    pub fn name_argb(&self) -> String {
        let alpha = (f64::from(self.alpha) / 257.0).round() as u8;
        format!("#{:02x}{}", alpha, &self.name()[1..])
    }
}

impl Default for DeviceColor {
    fn default() -> DeviceColor {
        DeviceColor::invalid()
    }
}

impl FromStr for DeviceColor {
    type Err = DeviceColorParseError;

    /// Parses `#rgb`, `#rrggbb` and `#aarrggbb`, case-insensitively.
    fn from_str(s: &str) -> Result<DeviceColor, DeviceColorParseError> {
        lazy_static! {
            static ref HEX_CODE: Regex =
                Regex::new(r"^#([[:xdigit:]]{3}|[[:xdigit:]]{6}|[[:xdigit:]]{8})$")
                    .expect("Regex is valid.");
        }
        let trimmed = s.trim();
        if !trimmed.starts_with('#') {
            return Err(DeviceColorParseError::MissingHash);
        }
        let digits = HEX_CODE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .ok_or(DeviceColorParseError::InvalidHexCode)?
            .as_str();
        let byte = |start: usize, len: usize| -> Result<u8, DeviceColorParseError> {
            let value = u8::from_str_radix(&digits[start..start + len], 16)
                .map_err(|_| DeviceColorParseError::InvalidHexCode)?;
            // a single digit d means dd
            Ok(if len == 1 { value * 17 } else { value })
        };
        match digits.len() {
            3 => Ok(DeviceColor::from_rgb8(byte(0, 1)?, byte(1, 1)?, byte(2, 1)?)),
            6 => Ok(DeviceColor::from_rgb8(byte(0, 2)?, byte(2, 2)?, byte(4, 2)?)),
            _ => Ok(DeviceColor::from_rgba8(
                byte(2, 2)?,
                byte(4, 2)?,
                byte(6, 2)?,
                byte(0, 2)?,
            )),
        }
    }
}

impl fmt::Display for DeviceColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.spec {
            ColorSpec::Invalid => write!(f, "DeviceColor(Invalid)"),
            ColorSpec::Rgb => write!(
                f,
                "DeviceColor(ARGB {}, {}, {}, {})",
                self.alpha_f(),
                self.red_f(),
                self.green_f(),
                self.blue_f()
            ),
            ColorSpec::Hsv => write!(
                f,
                "DeviceColor(AHSV {}, {}, {}, {})",
                self.alpha_f(),
                self.hue_f(),
                self.saturation_f(),
                self.value_f()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_hsv_conversion() {
        let red = DeviceColor::from_rgb_f(1., 0., 0., 1.);
        let red_hsv = red.to_hsv();
        assert_eq!(red_hsv.spec(), ColorSpec::Hsv);
        assert_eq!(red_hsv.hue_f(), 0.);
        assert_eq!(red_hsv.saturation_f(), 1.);
        assert_eq!(red_hsv.value_f(), 1.);
        assert_eq!(red_hsv.to_rgb(), red);

        let lavender = DeviceColor::from_hsv_f(243.5, 0.568, 0.925, 1.);
        assert_eq!(lavender.to_rgb().name(), "#6e66ec");
    }

    #[test]
    fn test_hue_sectors() {
        let cases = [
            ("#ffff00", 60.),
            ("#00ff00", 120.),
            ("#00ffff", 180.),
            ("#0000ff", 240.),
            ("#ff00ff", 300.),
        ];
        for &(name, hue) in cases.iter() {
            let color: DeviceColor = name.parse().unwrap();
            assert_eq!(color.hue_f(), hue);
            assert_eq!(color.to_hsv().to_rgb(), color);
        }
        // red sector with more blue than green wraps around below 360
        let pink: DeviceColor = "#ff0080".parse().unwrap();
        assert!(pink.hue_f() > 300. && pink.hue_f() < 360.);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray = DeviceColor::from_rgb8(128, 128, 128);
        let hsv = gray.to_hsv();
        assert_eq!(hsv.hue_f(), -1.);
        assert_eq!(hsv.saturation_f(), 0.);
        assert_eq!(hsv.to_rgb(), gray);
        let achromatic = DeviceColor::from_hsv_f(-1., 0.7, 0.5, 1.);
        assert_eq!(achromatic.red_f(), achromatic.blue_f());
    }

    #[test]
    fn test_clamping_and_alpha() {
        let color = DeviceColor::from_rgb_f(1.5, -0.5, 0.5, 0.5);
        assert_eq!(color.red_f(), 1.);
        assert_eq!(color.green_f(), 0.);
        assert!((color.alpha_f() - 0.5).abs() <= 1. / 65535.);
        let opaque = color.with_alpha_f(1.);
        assert_eq!(opaque.alpha_f(), 1.);
        assert_eq!(opaque.red_f(), color.red_f());
        assert!(!DeviceColor::invalid().with_alpha_f(1.).is_valid());
    }

    #[test]
    fn test_hex_parsing() {
        let short: DeviceColor = "#f80".parse().unwrap();
        assert_eq!(short.to_rgb8(), (255, 136, 0));
        let long: DeviceColor = "#11457C".parse().unwrap();
        assert_eq!(long.name(), "#11457c");
        let argb: DeviceColor = "#80ff0000".parse().unwrap();
        assert_eq!(argb.to_rgb8(), (255, 0, 0));
        assert_eq!(argb.name_argb(), "#80ff0000");
        assert_eq!(
            "ff0000".parse::<DeviceColor>(),
            Err(DeviceColorParseError::MissingHash)
        );
        assert_eq!(
            "#ff00".parse::<DeviceColor>(),
            Err(DeviceColorParseError::InvalidHexCode)
        );
        assert_eq!(
            "#gg0000".parse::<DeviceColor>(),
            Err(DeviceColorParseError::InvalidHexCode)
        );
    }

    #[test]
    fn test_invalid() {
        let invalid = DeviceColor::default();
        assert!(!invalid.is_valid());
        assert_eq!(invalid.spec(), ColorSpec::Invalid);
        assert_eq!(invalid.to_rgb(), invalid);
        assert_eq!(invalid.to_hsv(), invalid);
        assert_eq!(invalid.name(), "#000000");
        assert_ne!(invalid, DeviceColor::from_rgb8(0, 0, 0));
    }
}
