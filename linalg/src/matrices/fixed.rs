//! A 2x2 matrix with closed form overrides for the determinant and the shape predicates.

use std::fmt;
use std::ops::Index;

use crate::{display, precision::Tolerance, LinalgError, LinalgResult};

use super::{
    general::MatrixNxM, square::MatrixNxN, LinearObject, Matrix, MatrixProduct, SquareMatrix,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix2x2 {
    elements: [[f64; 2]; 2],
}

impl Matrix2x2 {
    /// `[[a, b], [c, d]]`
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            elements: [[a, b], [c, d]],
        }
    }

    pub fn zeros() -> Self {
        Self::default()
    }

    pub fn from_array(elements: [[f64; 2]; 2]) -> Self {
        Self { elements }
    }

    pub fn row_echelon(&self) -> Matrix2x2 {
        let [a, b] = self.elements[0];
        let [c, d] = self.elements[1];
        // Partial pivoting over the first column
        let (top, bottom) = if c.abs() > a.abs() {
            ([c, d], [a, b])
        } else {
            ([a, b], [c, d])
        };
        let ratio = bottom[0] / top[0];
        Self::new(top[0], top[1], 0.0, bottom[1] - top[1] * ratio)
    }

    /// The other index of a 2x2 matrix. Panics unless `index` is 0 or 1.
    fn complement(index: usize) -> usize {
        assert!(index < 2, "index {index} out of range for a 2x2 matrix");
        1 - index
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        Self {
            elements: self.elements.map(|row| row.map(&op)),
        }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;
        Self::new(op(a, e), op(b, f), op(c, g), op(d, h))
    }
}

impl TryFrom<MatrixNxN> for Matrix2x2 {
    type Error = LinalgError;

    fn try_from(value: MatrixNxN) -> Result<Self, Self::Error> {
        if value.order() != 2 {
            return Err(LinalgError::WrongOrder {
                expected: 2,
                found: value.dimensions(),
            });
        }
        Ok(Self::new(
            value.get(0, 0),
            value.get(0, 1),
            value.get(1, 0),
            value.get(1, 1),
        ))
    }
}

impl From<Matrix2x2> for MatrixNxN {
    fn from(value: Matrix2x2) -> Self {
        MatrixNxN::from_rows(&value.elements)
    }
}

impl Index<(usize, usize)> for Matrix2x2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.elements[row][col]
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::render(self, f)
    }
}

// ======== Contracts ==========================================

impl SquareMatrix for Matrix2x2 {
    fn order(&self) -> usize {
        2
    }

    fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.elements;
        (a * d) - (b * c)
    }
}

impl LinearObject for Matrix2x2 {
    fn add(&self, other: &Self) -> LinalgResult<Self> {
        Ok(self.zip_with(other, |a, b| a + b))
    }

    fn sub(&self, other: &Self) -> LinalgResult<Self> {
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn scale(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }
}

impl Matrix for Matrix2x2 {
    type Transpose = Matrix2x2;
    type Minor = MatrixNxN;
    type RowRemoved = MatrixNxM;

    fn rows(&self) -> usize {
        2
    }

    fn cols(&self) -> usize {
        2
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    fn is_square(&self) -> bool {
        true
    }

    fn is_diagonal(&self) -> bool {
        self.elements[0][1] == 0.0 && self.elements[1][0] == 0.0
    }

    /// Unlike the general check, the zero matrix counts as REF.
    fn is_ref(&self) -> bool {
        let [[a, _], [c, d]] = self.elements;
        if a != 0.0 {
            c == 0.0
        } else {
            c == 0.0 && d == 0.0
        }
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.elements.swap(row1, row2);
    }

    fn swap_cols(&mut self, col1: usize, col2: usize) {
        for row in self.elements.iter_mut() {
            row.swap(col1, col2);
        }
    }

    fn transpose(&self) -> Self::Transpose {
        let [[a, b], [c, d]] = self.elements;
        Self::new(a, c, b, d)
    }

    fn remove_row(&self, row: usize) -> Option<Self::RowRemoved> {
        Some(MatrixNxM::from_rows(&[self.elements[Self::complement(row)]]))
    }

    fn remove_col(&self, col: usize) -> Option<MatrixNxM> {
        let keep = Self::complement(col);
        Some(MatrixNxM::from_rows(&[
            [self.elements[0][keep]],
            [self.elements[1][keep]],
        ]))
    }

    fn remove(&self, row: usize, col: usize) -> Option<Self::Minor> {
        let (row, col) = (Self::complement(row), Self::complement(col));
        Some(MatrixNxN::from_rows(&[[self.elements[row][col]]]))
    }

    fn equals_within<M: Matrix + ?Sized>(&self, other: &M, tolerance: Tolerance) -> bool {
        if other.rows() != 2 || other.cols() != 2 {
            return false;
        }
        let [[a, b], [c, d]] = self.elements;
        tolerance.matches(a, other.get(0, 0))
            && tolerance.matches(b, other.get(0, 1))
            && tolerance.matches(c, other.get(1, 0))
            && tolerance.matches(d, other.get(1, 1))
    }
}

impl MatrixProduct for Matrix2x2 {
    type Output = Matrix2x2;

    fn multiply(&self, rhs: &Self) -> LinalgResult<Self::Output> {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = rhs.elements;
        Ok(Self::new(
            a * e + b * g,
            a * f + b * h,
            c * e + d * g,
            c * f + d * h,
        ))
    }
}
