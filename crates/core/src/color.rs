//! Color value types for the delta-e pipeline.
//!
//! Provides `Rgb` (display-encoded, 0–255 scale), the crate-private `Xyz`
//! intermediate and `Lab` (CIE L*a*b*, D65 / 2° observer). All three are plain
//! `Copy` values; nothing here validates ranges. Out-of-range RGB is carried
//! through the arithmetic as-is.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color with components on the 0–255 scale.
///
/// Components are `f64` so callers may pass fractional or out-of-range values;
/// the conversion does not clamp them. Use [`Rgb::to_display`] to obtain
/// displayable 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus values on the 0–100 scale (D65, 2° observer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* color.
///
/// `l` is lightness (nominally 0–100), `a` runs green to red and `b` blue to
/// yellow (typically within ±128).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Rgb {
    /// Creates a color from 0–255 channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as `[r, g, b]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "non-ASCII characters in {hex:?}"
            )));
        }
        if hex.len() != 6 {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb::from([
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ]))
    }

    /// Clamps each channel to [0, 255] and rounds to the nearest integer.
    ///
    /// NaN channels map to 0.
    pub fn to_display(self) -> [u8; 3] {
        self.to_array().map(|c| c.clamp(0.0, 255.0).round() as u8)
    }

    /// Formats the displayable channels as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_display();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// Accepted wire forms for `Rgb`: a `[r, g, b]` array or a hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Triple([f64; 3]),
    Hex(String),
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RgbRepr::deserialize(deserializer)? {
            RgbRepr::Triple(rgb) => Ok(Rgb::from(rgb)),
            RgbRepr::Hex(s) => Rgb::from_hex(&s).map_err(serde::de::Error::custom),
        }
    }
}

impl Xyz {
    pub(crate) const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Xyz {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Lab {
    /// Creates a color from lightness and the two chromaticity axes.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Returns the components as `[l, a, b]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }
}

impl From<Lab> for [f64; 3] {
    fn from(c: Lab) -> Self {
        c.to_array()
    }
}

impl Serialize for Lab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Lab {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 3]>::deserialize(deserializer).map(Lab::from)
    }
}
