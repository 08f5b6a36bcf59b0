#![deny(unsafe_code)]
//! Lab -> RGB for delta-e, delegated to the `palette` crate.
//!
//! `delta-e-core` only defines the [`LabToRgb`] seam. This crate plugs a
//! general-purpose color library into it: the Lab triple is handed to
//! `palette` as `Lab<D65, f64>` and converted to gamma-encoded sRGB without
//! clamping. Scaling to 0–255 stays with the caller (see
//! [`delta_e_core::lab_to_rgb`]).

use delta_e_core::{Lab, LabToRgb};
use palette::convert::IntoColorUnclamped;
use palette::white_point::D65;
use palette::Srgb;

type PaletteLab = palette::Lab<D65, f64>;

/// [`LabToRgb`] backed by `palette`'s Lab -> XYZ -> sRGB conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteInverse;

impl PaletteInverse {
    /// Creates the collaborator. It carries no state.
    pub fn new() -> Self {
        Self
    }
}

impl LabToRgb for PaletteInverse {
    fn lab_to_unit_rgb(&self, lab: Lab) -> [f64; 3] {
        let rgb: Srgb<f64> = PaletteLab::new(lab.l, lab.a, lab.b).into_color_unclamped();
        let (r, g, b) = rgb.into_components();
        [r, g, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delta_e_core::{lab_to_rgb, rgb_to_lab, MatrixInverse, Rgb};

    #[test]
    fn mid_gray_round_trips_to_display_value() {
        let lab = rgb_to_lab(Rgb::new(100.0, 100.0, 100.0));
        let rgb = lab_to_rgb(&PaletteInverse::new(), lab);
        let display = rgb.to_display();
        for c in display {
            assert!((i32::from(c) - 100).abs() <= 2, "{display:?}");
        }
    }

    #[test]
    fn white_and_black_map_to_extremes() {
        let inverse = PaletteInverse::new();
        assert_eq!(
            lab_to_rgb(&inverse, Lab::new(100.0, 0.0, 0.0)).to_display(),
            [255, 255, 255]
        );
        assert_eq!(
            lab_to_rgb(&inverse, Lab::new(0.0, 0.0, 0.0)).to_display(),
            [0, 0, 0]
        );
    }

    #[test]
    fn result_is_on_unit_scale_before_post_scaling() {
        let [r, g, b] = PaletteInverse::new().lab_to_unit_rgb(Lab::new(100.0, 0.0, 0.0));
        for c in [r, g, b] {
            assert!((c - 1.0).abs() < 1e-2, "expected ~1.0, got {c}");
        }
    }

    #[test]
    fn unclamped_conversion_passes_through_palette() {
        // A clamping conversion would pin every channel to [0, 1].
        let unit = PaletteInverse::new().lab_to_unit_rgb(Lab::new(50.0, 120.0, -120.0));
        assert!(
            unit.iter().any(|c| !(0.0..=1.0).contains(c)),
            "expected an unclamped channel, got {unit:?}"
        );
    }

    #[test]
    fn out_of_gamut_is_not_clamped() {
        let rgb = lab_to_rgb(&PaletteInverse::new(), Lab::new(50.0, 120.0, -120.0));
        assert!(
            rgb.to_array().iter().any(|c| !(0.0..=255.0).contains(c)),
            "expected an out-of-range channel, got {rgb:?}"
        );
    }

    #[test]
    fn usable_as_trait_object() {
        let inverses: [Box<dyn LabToRgb>; 2] =
            [Box::new(PaletteInverse::new()), Box::new(MatrixInverse::new())];
        let lab = rgb_to_lab(Rgb::new(255.0, 123.0, 12.0));
        for inverse in &inverses {
            let display = lab_to_rgb(inverse.as_ref(), lab).to_display();
            assert_eq!(display, [255, 123, 12]);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_recovers_rgb_within_two_levels(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
            ) {
                let lab = rgb_to_lab(Rgb::from([r, g, b]));
                let display = lab_to_rgb(&PaletteInverse::new(), lab).to_display();
                for (got, want) in display.into_iter().zip([r, g, b]) {
                    prop_assert!(
                        (i32::from(got) - i32::from(want)).abs() <= 2,
                        "{display:?} vs {:?}", [r, g, b]
                    );
                }
            }

            #[test]
            fn agrees_with_matrix_inverse(
                l in 0.0_f64..=100.0,
                a in -60.0_f64..=60.0,
                b in -60.0_f64..=60.0,
            ) {
                let lab = Lab::new(l, a, b);
                let ours = lab_to_rgb(&MatrixInverse::new(), lab);
                let theirs = lab_to_rgb(&PaletteInverse::new(), lab);
                for (x, y) in ours.to_array().into_iter().zip(theirs.to_array()) {
                    prop_assert!((x - y).abs() < 1.5, "{ours:?} vs {theirs:?}");
                }
            }
        }
    }
}
