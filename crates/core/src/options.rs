//! Conversion options: where the pipeline rounds and to how many decimals.
//!
//! The defaults reproduce the reference output exactly: XYZ is rounded right
//! after projection and Lab is rounded again at the end, both to 4 decimals.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest accepted `decimals` value. `f64` carries ~15-17 significant digits.
pub const MAX_DECIMALS: u32 = 15;

/// Rounding policy for the RGB -> Lab pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Round XYZ after projection and Lab at the end (reference-compatible).
    #[default]
    Reference,
    /// Round Lab at the end only.
    FinalOnly,
    /// Keep full `f64` precision throughout.
    None,
}

impl Rounding {
    pub(crate) fn rounds_xyz(self) -> bool {
        matches!(self, Rounding::Reference)
    }

    pub(crate) fn rounds_lab(self) -> bool {
        !matches!(self, Rounding::None)
    }
}

/// Options accepted by [`rgb_to_lab_with`](crate::rgb_to_lab_with) and
/// [`delta_e_with`](crate::delta_e_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    pub rounding: Rounding,
    pub decimals: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            rounding: Rounding::Reference,
            decimals: 4,
        }
    }
}

impl ConvertOptions {
    /// Builds options from a JSON object. Missing keys fall back to defaults.
    ///
    /// Returns `ColorError::InvalidOptions` for unknown keys, wrong types or
    /// `decimals` above [`MAX_DECIMALS`].
    pub fn from_json(value: &Value) -> Result<Self, ColorError> {
        let options = ConvertOptions::deserialize(value)
            .map_err(|e| ColorError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that `decimals` is at most [`MAX_DECIMALS`].
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ColorError::InvalidOptions(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }

    /// Current options as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "rounding": self.rounding,
            "decimals": self.decimals,
        })
    }
}

/// Rounds `v` to `decimals` places, ties to even.
pub(crate) fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (v * scale).round_ties_even() / scale
}

pub(crate) fn round3(v: [f64; 3], decimals: u32) -> [f64; 3] {
    v.map(|c| round_to(c, decimals))
}
