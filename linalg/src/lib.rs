//! Dense linear algebra over `f64`.
//!
//! Every concrete shape ([`MatrixNxM`](matrices::general::MatrixNxM),
//! [`MatrixNxN`](matrices::square::MatrixNxN), [`Matrix2x2`](matrices::fixed::Matrix2x2)
//! and [`VectorN`](matrices::vector::VectorN)) implements the [`Matrix`](matrices::Matrix)
//! contract together with [`LinearObject`](matrices::LinearObject).
//!
//! Arithmetic always allocates a fresh result. The only operations that mutate their
//! receiver are [`Matrix::swap_rows`](matrices::Matrix::swap_rows) and
//! [`Matrix::swap_cols`](matrices::Matrix::swap_cols).

use std::fmt;

use thiserror::Error;

pub mod display;
pub mod matrices;
pub mod precision;
pub mod reduction;

pub use matrices::{
    fixed::Matrix2x2, general::MatrixNxM, square::MatrixNxN, vector::VectorN, LinearObject,
    Matrix, MatrixProduct, SquareMatrix, Vector,
};
pub use precision::{Tolerance, DEFAULT_EPSILON};

/// The shape of a matrix, carried by errors for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn of<M: Matrix + ?Sized>(matrix: &M) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}x{}}}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The operands of `add`, `sub`, `multiply` or `dot` have incompatible shapes.
    #[error("Matrix 1: {left}, Matrix 2: {right}")]
    IncompatibleDimension { left: Dimensions, right: Dimensions },

    /// A general matrix could not be viewed as a square one.
    #[error("Matrix {0} is not square")]
    NotSquare(Dimensions),

    /// A square matrix of the wrong order was converted into a fixed size matrix.
    #[error("Expected a matrix of order {expected}, found {found}")]
    WrongOrder { expected: usize, found: Dimensions },
}

impl LinalgError {
    pub fn incompatible<L, R>(left: &L, right: &R) -> Self
    where
        L: Matrix + ?Sized,
        R: Matrix + ?Sized,
    {
        LinalgError::IncompatibleDimension {
            left: Dimensions::of(left),
            right: Dimensions::of(right),
        }
    }
}

pub type LinalgResult<T> = Result<T, LinalgError>;
