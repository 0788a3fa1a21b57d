//! Square matrices and the cofactor expansion determinant.

use std::fmt;
use std::ops::Index;

use log::debug;

use crate::{display, LinalgError, LinalgResult};

use super::{
    general::MatrixNxM, product_rows, vector::VectorN, LinearObject, Matrix, MatrixProduct,
    SquareMatrix,
};

/// An `n x n` matrix. Removing a row and a column always yields another square matrix,
/// which is what the determinant recursion relies on.
#[derive(Debug, Clone)]
pub struct MatrixNxN {
    inner: MatrixNxM,
}

impl MatrixNxN {
    /// Zero matrix of order `n`, clamped to a minimum of 1.
    pub fn new(n: usize) -> Self {
        Self {
            inner: MatrixNxM::square(n),
        }
    }

    pub fn identity(n: usize) -> Self {
        let n = n.max(1);
        let elements = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self {
            inner: MatrixNxM::from_store(elements),
        }
    }

    /// The order is the larger of the number of rows and the widest row; missing
    /// elements are zero.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let order = rows
            .iter()
            .map(|row| row.as_ref().len())
            .chain(std::iter::once(rows.len()))
            .max()
            .unwrap_or(1)
            .max(1);

        let mut elements: Vec<Vec<f64>> =
            rows.iter().map(|row| row.as_ref().to_vec()).collect();
        elements.resize(order, Vec::new());
        for row in elements.iter_mut() {
            row.resize(order, 0.0);
        }
        Self {
            inner: MatrixNxM::from_store(elements),
        }
    }

    pub fn as_general(&self) -> &MatrixNxM {
        &self.inner
    }

    pub fn row_echelon(&self) -> MatrixNxN {
        Self {
            inner: self.inner.row_echelon(),
        }
    }

    /// Drops `row` and `col`. Only valid for order 2 and above.
    fn minor(&self, row: usize, col: usize) -> MatrixNxN {
        Self {
            inner: MatrixNxM::from_store(self.inner.without_row_and_col(row, col)),
        }
    }
}

impl TryFrom<MatrixNxM> for MatrixNxN {
    type Error = LinalgError;

    fn try_from(value: MatrixNxM) -> Result<Self, Self::Error> {
        if !value.is_square() {
            return Err(LinalgError::NotSquare(value.dimensions()));
        }
        Ok(Self { inner: value })
    }
}

impl From<MatrixNxN> for MatrixNxM {
    fn from(value: MatrixNxN) -> Self {
        value.inner
    }
}

impl Index<(usize, usize)> for MatrixNxN {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}

impl fmt::Display for MatrixNxN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::render(self, f)
    }
}

// ======== Contracts ==========================================

impl SquareMatrix for MatrixNxN {
    /// Cofactor expansion along the first row.
    ///
    /// The cost grows factorially with the order, so this is only suitable for small matrices.
    fn determinant(&self) -> f64 {
        if self.order() == 1 {
            return self.get(0, 0);
        }
        debug!("Expanding determinant of order {}", self.order());

        let mut sum = 0.0;
        for i in 0..self.order() {
            let mut cofactor = self.minor(0, i).determinant();
            if i % 2 == 1 {
                cofactor = -cofactor;
            }
            sum += self.get(0, i) * cofactor;
        }
        sum
    }
}

impl LinearObject for MatrixNxN {
    fn add(&self, other: &Self) -> LinalgResult<Self> {
        Ok(Self {
            inner: self.inner.add(&other.inner)?,
        })
    }

    fn sub(&self, other: &Self) -> LinalgResult<Self> {
        Ok(Self {
            inner: self.inner.sub(&other.inner)?,
        })
    }

    fn scale(&self, scalar: f64) -> Self {
        Self {
            inner: self.inner.scale(scalar),
        }
    }
}

impl Matrix for MatrixNxN {
    type Transpose = MatrixNxN;
    type Minor = MatrixNxN;
    type RowRemoved = MatrixNxM;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.inner.get(row, col)
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.inner.swap_rows(row1, row2);
    }

    fn swap_cols(&mut self, col1: usize, col2: usize) {
        self.inner.swap_cols(col1, col2);
    }

    fn transpose(&self) -> Self::Transpose {
        Self {
            inner: self.inner.transpose(),
        }
    }

    fn remove_row(&self, row: usize) -> Option<Self::RowRemoved> {
        self.inner.remove_row(row)
    }

    fn remove_col(&self, col: usize) -> Option<MatrixNxM> {
        self.inner.remove_col(col)
    }

    fn remove(&self, row: usize, col: usize) -> Option<Self::Minor> {
        self.inner.assert_row(row);
        self.inner.assert_col(col);
        if self.order() == 1 {
            return None;
        }
        Some(self.minor(row, col))
    }
}

impl MatrixProduct for MatrixNxN {
    type Output = MatrixNxN;

    fn multiply(&self, rhs: &Self) -> LinalgResult<Self::Output> {
        Ok(Self {
            inner: MatrixNxM::from_store(product_rows(self, rhs)?),
        })
    }
}

impl MatrixProduct<VectorN> for MatrixNxN {
    type Output = VectorN;

    fn multiply(&self, rhs: &VectorN) -> LinalgResult<Self::Output> {
        self.inner.multiply(rhs)
    }
}
