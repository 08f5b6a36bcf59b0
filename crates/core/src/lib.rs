#![deny(unsafe_code)]
//! RGB to CIE L*a*b* conversion and CIE76 color difference.
//!
//! Provides the `Rgb` and `Lab` value types, the forward RGB -> XYZ -> Lab
//! pipeline (`rgb_to_lab`), the Euclidean deltaE metric (`delta_e`), the
//! pluggable `LabToRgb` inverse with a built-in `MatrixInverse`, and
//! `ConvertOptions` for choosing where the pipeline rounds.
//!
//! ```
//! use delta_e_core::{delta_e, rgb_to_lab, Rgb};
//!
//! let lab = rgb_to_lab(Rgb::new(255.0, 255.0, 255.0));
//! assert!((lab.l - 100.0).abs() < 1e-9);
//!
//! let orange = Rgb::new(255.0, 123.0, 12.0);
//! assert!(delta_e(orange, Rgb::new(255.0, 123.0, 155.0)) > delta_e(orange, Rgb::new(255.0, 99.0, 61.0)));
//! ```

pub mod channel;
pub mod color;
pub mod convert;
pub mod distance;
pub mod error;
pub mod inverse;
pub mod options;

pub use color::{Lab, Rgb};
pub use convert::{rgb_to_lab, rgb_to_lab_with};
pub use distance::{delta_e, delta_e_lab, delta_e_with};
pub use error::ColorError;
pub use inverse::{lab_to_rgb, LabToRgb, MatrixInverse};
pub use options::{ConvertOptions, Rounding};
