//! Tolerant floating point comparisons shared by every equality check in the crate.

/// The acceptable error for matrix equality checks when no tolerance is given.
pub const DEFAULT_EPSILON: f64 = 1e-10;

pub fn abs_error(d1: f64, d2: f64) -> f64 {
    (d1 - d2).abs()
}

/// Infinite (or NaN) when `d2 == 0`, callers must avoid that case.
pub fn rel_error(d1: f64, d2: f64) -> f64 {
    ((d1 - d2) / d2).abs()
}

/// Passes if either value is within `epsilon` relative error of the other.
pub fn equals_rel(d1: f64, d2: f64, epsilon: f64) -> bool {
    if d1 == d2 {
        return true;
    }
    rel_error(d1, d2) <= epsilon || rel_error(d2, d1) <= epsilon
}

pub fn equals_abs(d1: f64, d2: f64, epsilon: f64) -> bool {
    if d1 == d2 {
        return true;
    }
    abs_error(d1, d2) <= epsilon
}

/// How two elements are compared when checking matrices for equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    Absolute(f64),
    Relative(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_EPSILON)
    }
}

impl Tolerance {
    pub fn matches(self, d1: f64, d2: f64) -> bool {
        match self {
            Tolerance::Absolute(epsilon) => equals_abs(d1, d2, epsilon),
            Tolerance::Relative(epsilon) => equals_rel(d1, d2, epsilon),
        }
    }
}
