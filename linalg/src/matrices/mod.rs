use crate::{precision::Tolerance, reduction, Dimensions, LinalgError, LinalgResult};

use self::general::MatrixNxM;
use self::vector::VectorN;

pub mod fixed;
pub mod general;
pub mod square;
pub mod vector;

// ======== Algebraic contract =================================

/// Closure of a shape under addition, subtraction and scaling.
pub trait LinearObject: Sized {
    /// Fails with [`LinalgError::IncompatibleDimension`] when the shapes differ.
    fn add(&self, other: &Self) -> LinalgResult<Self>;

    /// Fails with [`LinalgError::IncompatibleDimension`] when the shapes differ.
    fn sub(&self, other: &Self) -> LinalgResult<Self>;

    fn scale(&self, scalar: f64) -> Self;
}

/// Row-by-column product, with the result shape chosen by the operands.
pub trait MatrixProduct<Rhs = Self> {
    type Output: Matrix;

    /// Fails with [`LinalgError::IncompatibleDimension`] when `self.cols() != rhs.rows()`.
    fn multiply(&self, rhs: &Rhs) -> LinalgResult<Self::Output>;
}

// ======== Abstract matrix trait ==============================

pub trait Matrix {
    type Transpose: Matrix;
    /// The result of removing one row and one column.
    type Minor: Matrix;
    /// The result of removing a single row.
    type RowRemoved: Matrix;

    /// Always at least 1.
    fn rows(&self) -> usize;

    /// Always at least 1.
    fn cols(&self) -> usize;

    /// Panics if `row` or `col` is out of range.
    fn get(&self, row: usize, col: usize) -> f64;

    fn dimensions(&self) -> Dimensions {
        Dimensions::of(self)
    }

    fn row(&self, row: usize) -> VectorN {
        (0..self.cols()).map(|col| self.get(row, col)).collect()
    }

    fn col(&self, col: usize) -> VectorN {
        (0..self.rows()).map(|row| self.get(row, col)).collect()
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Square, with every off-diagonal element exactly zero.
    fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows())
            .all(|row| (0..self.cols()).all(|col| row == col || self.get(row, col) == 0.0))
    }

    fn is_ref(&self) -> bool {
        reduction::is_ref(self)
    }

    fn rank(&self) -> usize {
        reduction::rank(self)
    }

    /// Swaps two rows in place.
    fn swap_rows(&mut self, row1: usize, row2: usize);

    /// Swaps two columns in place.
    fn swap_cols(&mut self, col1: usize, col2: usize);

    fn transpose(&self) -> Self::Transpose;

    /// `None` when the matrix has a single row.
    fn remove_row(&self, row: usize) -> Option<Self::RowRemoved>;

    /// `None` when the matrix has a single column.
    fn remove_col(&self, col: usize) -> Option<MatrixNxM>;

    /// Removes a row and then a column, `None` if either would leave nothing behind.
    fn remove(&self, row: usize, col: usize) -> Option<Self::Minor>;

    fn equals<M: Matrix + ?Sized>(&self, other: &M) -> bool {
        self.equals_within(other, Tolerance::default())
    }

    fn equals_eps<M: Matrix + ?Sized>(&self, other: &M, epsilon: f64) -> bool {
        self.equals_within(other, Tolerance::Absolute(epsilon))
    }

    fn equals_within<M: Matrix + ?Sized>(&self, other: &M, tolerance: Tolerance) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        (0..self.rows()).all(|row| {
            (0..self.cols()).all(|col| tolerance.matches(self.get(row, col), other.get(row, col)))
        })
    }
}

// ======== Square matrices ====================================

pub trait SquareMatrix: Matrix {
    fn order(&self) -> usize {
        self.rows()
    }

    fn determinant(&self) -> f64;
}

// ======== Single column matrices =============================

pub trait Vector: Matrix + LinearObject {
    fn len(&self) -> usize {
        self.rows()
    }

    fn at(&self, index: usize) -> f64 {
        self.get(index, 0)
    }

    /// Fails with [`LinalgError::IncompatibleDimension`] when the lengths differ.
    fn dot(&self, other: &Self) -> LinalgResult<f64>;

    /// Sum of squares, accumulated in ascending order of the elements.
    fn mag2(&self) -> f64;

    fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }
}

// ======== Shared helpers =====================================

/// Row store of `left * right`, for any pair of shapes.
pub(crate) fn product_rows<L, R>(left: &L, right: &R) -> LinalgResult<Vec<Vec<f64>>>
where
    L: Matrix + ?Sized,
    R: Matrix + ?Sized,
{
    if left.cols() != right.rows() {
        return Err(LinalgError::incompatible(left, right));
    }

    let rows = (0..left.rows())
        .map(|row| {
            (0..right.cols())
                .map(|col| {
                    // Take the corresponding dot product
                    let mut sum = 0.0;
                    for i in 0..left.cols() {
                        sum += left.get(row, i) * right.get(i, col);
                    }
                    sum
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

/// Copies any matrix into a fresh row store.
pub(crate) fn to_rows<M: Matrix + ?Sized>(matrix: &M) -> Vec<Vec<f64>> {
    (0..matrix.rows())
        .map(|row| (0..matrix.cols()).map(|col| matrix.get(row, col)).collect())
        .collect()
}
