//! Lab -> RGB as a pluggable collaborator.
//!
//! The forward path does not depend on any particular inverse. Implementors
//! of [`LabToRgb`] return RGB on the 0.0–1.0 scale; [`lab_to_rgb`] performs the
//! final scaling to 0–255. Neither step clamps, so out-of-gamut Lab values
//! come back as out-of-range channels.

use crate::channel::{LAB_EXPAND, SRGB_ENCODE};
use crate::color::{Lab, Rgb};
use crate::convert::{rgb_to_xyz_matrix, D65_WHITE};
use glam::{DMat3, DVec3};

/// A Lab -> RGB transform.
///
/// This trait is object-safe: callers can hold a `&dyn LabToRgb` or
/// `Box<dyn LabToRgb>` and swap implementations (matrix inverse, lookup
/// table, an external color library) without touching the forward path.
pub trait LabToRgb {
    /// Converts a Lab color to RGB on the 0.0–1.0 scale, unclamped.
    fn lab_to_unit_rgb(&self, lab: Lab) -> [f64; 3];
}

impl<F> LabToRgb for F
where
    F: Fn(Lab) -> [f64; 3],
{
    fn lab_to_unit_rgb(&self, lab: Lab) -> [f64; 3] {
        self(lab)
    }
}

/// Converts `lab` through `inverse` and scales the result to 0–255.
///
/// The result is not clamped; use [`Rgb::to_display`] for displayable channels.
pub fn lab_to_rgb(inverse: &dyn LabToRgb, lab: Lab) -> Rgb {
    let rgb = Rgb::from(inverse.lab_to_unit_rgb(lab).map(|c| c * 255.0));
    tracing::trace!(?lab, ?rgb, "lab_to_rgb");
    if rgb.to_array().iter().any(|c| !(0.0..=255.0).contains(c)) {
        tracing::debug!(?lab, ?rgb, "Lab color is outside the sRGB gamut");
    }
    rgb
}

/// Analytic inverse of the forward pipeline.
///
/// Undoes companding, denormalizes by the D65 white, multiplies by the
/// inverse of the forward RGB -> XYZ matrix and re-applies the sRGB gamma.
/// Rounding in the forward path is not undone, so round trips agree to within
/// the rounding step rather than exactly.
#[derive(Debug, Clone, Copy)]
pub struct MatrixInverse {
    xyz_to_rgb: DMat3,
}

impl MatrixInverse {
    /// Precomputes the XYZ -> linear RGB matrix.
    pub fn new() -> Self {
        Self {
            xyz_to_rgb: rgb_to_xyz_matrix().inverse(),
        }
    }
}

impl Default for MatrixInverse {
    fn default() -> Self {
        Self::new()
    }
}

impl LabToRgb for MatrixInverse {
    fn lab_to_unit_rgb(&self, lab: Lab) -> [f64; 3] {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let white = DVec3::from_array(D65_WHITE);
        let xyz = DVec3::from_array(LAB_EXPAND.map3([fx, fy, fz])) * white;
        let linear = (self.xyz_to_rgb * xyz) / 100.0;
        SRGB_ENCODE.map3(linear.to_array())
    }
}
