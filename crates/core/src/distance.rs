//! CIE76 color difference: Euclidean distance in L*a*b*.

use crate::color::{Lab, Rgb};
use crate::convert::rgb_to_lab_with;
use crate::options::ConvertOptions;
use glam::DVec3;

/// Euclidean distance between two Lab colors.
pub fn delta_e_lab(a: Lab, b: Lab) -> f64 {
    DVec3::from_array(a.to_array()).distance(DVec3::from_array(b.to_array()))
}

/// Perceptual distance (CIE76 deltaE) between two RGB colors.
///
/// Both inputs go through [`rgb_to_lab`](crate::rgb_to_lab) with the default
/// reference rounding, so two distinct RGB inputs that round to the same Lab
/// triple are at distance zero.
pub fn delta_e(a: Rgb, b: Rgb) -> f64 {
    delta_e_with(a, b, &ConvertOptions::default())
}

/// Like [`delta_e`], with explicit conversion options.
pub fn delta_e_with(a: Rgb, b: Rgb, options: &ConvertOptions) -> f64 {
    delta_e_lab(rgb_to_lab_with(a, options), rgb_to_lab_with(b, options))
}
