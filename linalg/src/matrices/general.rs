//! The general dense rectangular matrix.

use std::fmt;
use std::ops::Index;

use crate::{display, reduction, LinalgError, LinalgResult};

use super::{product_rows, vector::VectorN, LinearObject, Matrix, MatrixProduct};

/// An `rows x cols` matrix stored as a vector of rows.
///
/// The store is always rectangular and at least 1x1.
#[derive(Debug, Clone)]
pub struct MatrixNxM {
    rows: usize,
    cols: usize,
    elements: Vec<Vec<f64>>,
}

impl MatrixNxM {
    /// Zero matrix; each dimension is clamped to a minimum of 1.
    pub fn new(n: usize, m: usize) -> Self {
        let rows = n.max(1);
        let cols = m.max(1);
        Self {
            rows,
            cols,
            elements: vec![vec![0.0; cols]; rows],
        }
    }

    /// Square zero matrix with `n` rows and `n` columns.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Copies from a possibly jagged array of rows.
    ///
    /// The width is that of the widest row, shorter rows are padded with zeroes.
    /// An empty input gives a 1x1 zero matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        Self::from(
            rows.iter()
                .map(|row| row.as_ref().to_vec())
                .collect::<Vec<_>>(),
        )
    }

    /// Takes ownership of a store that is known to be rectangular and non-empty.
    pub(crate) fn from_store(elements: Vec<Vec<f64>>) -> Self {
        debug_assert!(!elements.is_empty() && !elements[0].is_empty());
        debug_assert!(elements.iter().all(|row| row.len() == elements[0].len()));
        Self {
            rows: elements.len(),
            cols: elements[0].len(),
            elements,
        }
    }

    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.elements
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.elements
    }

    /// The row echelon form of the matrix, from Gaussian elimination with partial pivoting.
    /// `self` is left untouched; see [`reduction`] for how zero pivots behave.
    pub fn row_echelon(&self) -> MatrixNxM {
        let mut elements = self.elements.clone();
        reduction::row_echelon_in_place(&mut elements, self.cols);
        Self::from_store(elements)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> LinalgResult<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinalgError::incompatible(self, other));
        }

        let elements = self
            .elements
            .iter()
            .zip(other.elements.iter())
            .map(|(lhs, rhs)| lhs.iter().zip(rhs.iter()).map(|(&a, &b)| op(a, b)).collect())
            .collect();
        Ok(Self::from_store(elements))
    }

    pub(crate) fn assert_row(&self, row: usize) {
        assert!(row < self.rows, "row index {row} out of range for {}", self.dimensions());
    }

    pub(crate) fn assert_col(&self, col: usize) {
        assert!(col < self.cols, "column index {col} out of range for {}", self.dimensions());
    }

    /// Copies every row except `row`. Panics if `row` is out of range.
    pub(crate) fn without_row(&self, row: usize) -> Vec<Vec<f64>> {
        self.assert_row(row);
        self.elements
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, elements)| elements.clone())
            .collect()
    }

    /// Copies every column except `col`. Panics if `col` is out of range.
    pub(crate) fn without_col(&self, col: usize) -> Vec<Vec<f64>> {
        self.assert_col(col);
        self.elements
            .iter()
            .map(|elements| {
                elements
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &x)| x)
                    .collect()
            })
            .collect()
    }

    /// Copies every element outside of `row` and `col`. Panics if either is out of range.
    pub(crate) fn without_row_and_col(&self, row: usize, col: usize) -> Vec<Vec<f64>> {
        self.assert_row(row);
        self.assert_col(col);
        self.elements
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, elements)| {
                elements
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &x)| x)
                    .collect()
            })
            .collect()
    }
}

impl From<Vec<Vec<f64>>> for MatrixNxM {
    fn from(mut rows: Vec<Vec<f64>>) -> Self {
        if rows.is_empty() {
            return Self::new(1, 1);
        }

        // Find the largest row of a jagged array
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for row in rows.iter_mut() {
            row.resize(cols, 0.0);
        }
        Self::from_store(rows)
    }
}

impl Index<(usize, usize)> for MatrixNxM {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.elements[row][col]
    }
}

impl fmt::Display for MatrixNxM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::render(self, f)
    }
}

// ======== Contracts ==========================================

impl LinearObject for MatrixNxM {
    fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    fn sub(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn scale(&self, scalar: f64) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|row| row.iter().map(|x| x * scalar).collect())
            .collect();
        Self::from_store(elements)
    }
}

impl Matrix for MatrixNxM {
    type Transpose = MatrixNxM;
    type Minor = MatrixNxM;
    type RowRemoved = MatrixNxM;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
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
        let elements = (0..self.cols)
            .map(|j| self.elements.iter().map(|row| row[j]).collect())
            .collect();
        Self::from_store(elements)
    }

    fn remove_row(&self, row: usize) -> Option<Self::RowRemoved> {
        self.assert_row(row);
        if self.rows == 1 {
            return None;
        }
        Some(Self::from_store(self.without_row(row)))
    }

    fn remove_col(&self, col: usize) -> Option<MatrixNxM> {
        self.assert_col(col);
        if self.cols == 1 {
            return None;
        }
        Some(Self::from_store(self.without_col(col)))
    }

    fn remove(&self, row: usize, col: usize) -> Option<Self::Minor> {
        self.assert_row(row);
        self.assert_col(col);
        if self.rows == 1 || self.cols == 1 {
            return None;
        }
        Some(Self::from_store(self.without_row_and_col(row, col)))
    }
}

impl MatrixProduct for MatrixNxM {
    type Output = MatrixNxM;

    fn multiply(&self, rhs: &Self) -> LinalgResult<Self::Output> {
        Ok(Self::from_store(product_rows(self, rhs)?))
    }
}

impl MatrixProduct<VectorN> for MatrixNxM {
    type Output = VectorN;

    fn multiply(&self, rhs: &VectorN) -> LinalgResult<Self::Output> {
        let rows = product_rows(self, rhs)?;
        Ok(rows.into_iter().map(|row| row[0]).collect())
    }
}
