//! Two-branch per-channel transfer functions.
//!
//! Gamma decoding and CIE companding (and their inverses) share one shape: a
//! threshold picks between a curved and a linear segment. [`Piecewise`] holds
//! that shape once and is applied elementwise across a 3-tuple.

/// A scalar transform that switches branch at `threshold`.
///
/// `above` applies when `v > threshold`; `below` applies otherwise, so the
/// threshold value itself takes the linear branch.
#[derive(Clone, Copy)]
pub struct Piecewise {
    pub threshold: f64,
    pub above: fn(f64) -> f64,
    pub below: fn(f64) -> f64,
}

impl Piecewise {
    /// Applies the transform to one value.
    pub fn apply(&self, v: f64) -> f64 {
        if v > self.threshold {
            (self.above)(v)
        } else {
            (self.below)(v)
        }
    }

    /// Applies the transform to each channel of a triple.
    pub fn map3(&self, v: [f64; 3]) -> [f64; 3] {
        v.map(|c| self.apply(c))
    }
}

impl std::fmt::Debug for Piecewise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piecewise")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// CIE companding breakpoint (6/29)^3 as used by the reference formula.
pub const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear companding segment.
pub const LAB_KAPPA: f64 = 7.787;

/// Offset of the linear companding segment.
pub const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Inverse sRGB gamma: display-encoded [0, 1] to linear [0, 1].
pub const SRGB_DECODE: Piecewise = Piecewise {
    threshold: 0.04045,
    above: |v| ((v + 0.055) / 1.055).powf(2.4),
    below: |v| v / 12.92,
};

/// sRGB gamma: linear [0, 1] to display-encoded [0, 1].
pub const SRGB_ENCODE: Piecewise = Piecewise {
    threshold: 0.0031308,
    above: |v| 1.055 * v.powf(1.0 / 2.4) - 0.055,
    below: |v| v * 12.92,
};

/// CIE companding of white-normalized XYZ.
pub const LAB_COMPAND: Piecewise = Piecewise {
    threshold: LAB_EPSILON,
    above: |v| v.powf(1.0 / 3.0),
    below: |v| LAB_KAPPA * v + LAB_OFFSET,
};

/// Inverse of [`LAB_COMPAND`]. The threshold is `LAB_EPSILON` mapped through
/// the forward curve, i.e. its cube root.
pub const LAB_EXPAND: Piecewise = Piecewise {
    threshold: 0.206_893_034_422_963_9,
    above: |t| t * t * t,
    below: |t| (t - LAB_OFFSET) / LAB_KAPPA,
};
