//! Forward conversion: RGB (0–255) -> linear RGB -> XYZ -> CIE L*a*b*.
//!
//! The constants are the four-digit sRGB/D65 matrix and the D65 2° reference
//! white used by the reference formula. Changing any of them changes every
//! output, so they are fixed here rather than configurable.

use crate::channel::{LAB_COMPAND, SRGB_DECODE};
use crate::color::{Lab, Rgb, Xyz};
use crate::options::{round3, ConvertOptions};
use glam::{DMat3, DVec3};

/// Linear RGB (0–100 scale) to XYZ, row-major as written.
pub(crate) const RGB_TO_XYZ_ROWS: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// D65 reference white, 2° observer, on the 0–100 scale.
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

pub(crate) fn rgb_to_xyz_matrix() -> DMat3 {
    // glam stores columns; transpose the row-major table.
    DMat3::from_cols_array_2d(&RGB_TO_XYZ_ROWS).transpose()
}

/// Normalizes to [0, 1], removes the sRGB gamma and scales to 0–100.
pub(crate) fn linearize(c: Rgb) -> [f64; 3] {
    SRGB_DECODE
        .map3(c.to_array().map(|v| v / 255.0))
        .map(|v| v * 100.0)
}

pub(crate) fn rgb_to_xyz(c: Rgb, options: &ConvertOptions) -> Xyz {
    let xyz = rgb_to_xyz_matrix() * DVec3::from_array(linearize(c));
    let xyz = xyz.to_array();
    if options.rounding.rounds_xyz() {
        Xyz::from(round3(xyz, options.decimals))
    } else {
        Xyz::from(xyz)
    }
}

pub(crate) fn xyz_to_lab(c: Xyz, options: &ConvertOptions) -> Lab {
    let [wx, wy, wz] = D65_WHITE;
    let [x, y, z] = c.to_array();
    let [fx, fy, fz] = LAB_COMPAND.map3([x / wx, y / wy, z / wz]);

    let lab = [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)];
    if options.rounding.rounds_lab() {
        Lab::from(round3(lab, options.decimals))
    } else {
        Lab::from(lab)
    }
}

/// Converts an RGB color (0–255 per channel) to CIE L*a*b* with the default
/// reference rounding (4 decimals, applied to XYZ and to Lab).
///
/// Never fails and never clamps: out-of-range input yields an out-of-range
/// (but finite) result.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    rgb_to_lab_with(c, &ConvertOptions::default())
}

/// Converts an RGB color to CIE L*a*b* with explicit rounding options.
pub fn rgb_to_lab_with(c: Rgb, options: &ConvertOptions) -> Lab {
    xyz_to_lab(rgb_to_xyz(c, options), options)
}
