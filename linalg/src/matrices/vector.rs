//! Column vectors: single column matrices with a dot product and a magnitude.
//!
//! Column operations only accept column index `0`; any other index panics.

use std::fmt;
use std::ops::Index;

use ordered_float::OrderedFloat;

use crate::{display, LinalgError, LinalgResult};

use super::{general::MatrixNxM, LinearObject, Matrix, MatrixProduct, Vector};

/// An n-dimensional column vector, `n >= 1`.
#[derive(Debug, Clone)]
pub struct VectorN {
    elements: Vec<f64>,
}

impl VectorN {
    /// Zero vector; the length is clamped to a minimum of 1.
    pub fn new(n: usize) -> Self {
        Self {
            elements: vec![0.0; n.max(1)],
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    pub fn row_echelon(&self) -> VectorN {
        MatrixNxM::from(self.clone()).row_echelon().col(0)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> LinalgResult<Self> {
        if self.elements.len() != other.elements.len() {
            return Err(LinalgError::incompatible(self, other));
        }
        Ok(self
            .elements
            .iter()
            .zip(other.elements.iter())
            .map(|(&a, &b)| op(a, b))
            .collect())
    }

    fn assert_row(&self, row: usize) {
        let len = self.elements.len();
        assert!(row < len, "row index {row} out of range for a vector of length {len}");
    }
}

fn assert_first_col(col: usize) {
    assert!(col == 0, "vectors have a single column, got column index {col}");
}

impl From<Vec<f64>> for VectorN {
    /// An empty input gives the 1-dimensional zero vector.
    fn from(mut elements: Vec<f64>) -> Self {
        if elements.is_empty() {
            elements.push(0.0);
        }
        Self { elements }
    }
}

impl FromIterator<f64> for VectorN {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl From<VectorN> for MatrixNxM {
    fn from(value: VectorN) -> Self {
        MatrixNxM::from_store(value.elements.into_iter().map(|x| vec![x]).collect())
    }
}

impl Index<usize> for VectorN {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::render(self, f)
    }
}

// ======== Contracts ==========================================

impl Vector for VectorN {
    fn at(&self, index: usize) -> f64 {
        self.elements[index]
    }

    fn dot(&self, other: &Self) -> LinalgResult<f64> {
        if self.elements.len() != other.elements.len() {
            return Err(LinalgError::incompatible(self, other));
        }

        let mut sum = 0.0;
        for (a, b) in self.elements.iter().zip(other.elements.iter()) {
            sum += a * b;
        }
        Ok(sum)
    }

    fn mag2(&self) -> f64 {
        // Sorted to reduce summation error
        let mut sorted = self.elements.clone();
        sorted.sort_by_key(|&x| OrderedFloat(x));

        let mut mag2 = 0.0;
        for x in sorted {
            mag2 += x * x;
        }
        mag2
    }
}

impl LinearObject for VectorN {
    fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    fn sub(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn scale(&self, scalar: f64) -> Self {
        self.elements.iter().map(|x| x * scalar).collect()
    }
}

impl Matrix for VectorN {
    type Transpose = MatrixNxM;
    type Minor = MatrixNxM;
    type RowRemoved = VectorN;

    fn rows(&self) -> usize {
        self.elements.len()
    }

    fn cols(&self) -> usize {
        1
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        assert_first_col(col);
        self.elements[row]
    }

    fn row(&self, row: usize) -> VectorN {
        Self {
            elements: vec![self.elements[row]],
        }
    }

    /// Column `0` is the vector itself.
    fn col(&self, col: usize) -> VectorN {
        assert_first_col(col);
        self.clone()
    }

    fn is_diagonal(&self) -> bool {
        self.elements.len() == 1
    }

    /// Every element after the first must be zero.
    fn is_ref(&self) -> bool {
        self.elements.iter().skip(1).all(|&x| x == 0.0)
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.elements.swap(row1, row2);
    }

    /// The only column swap is `(0, 0)`, which leaves the vector unchanged.
    fn swap_cols(&mut self, col1: usize, col2: usize) {
        assert_first_col(col1);
        assert_first_col(col2);
    }

    /// The `1 x n` row vector.
    fn transpose(&self) -> Self::Transpose {
        MatrixNxM::from_store(vec![self.elements.clone()])
    }

    fn remove_row(&self, row: usize) -> Option<Self::RowRemoved> {
        self.assert_row(row);
        if self.elements.len() == 1 {
            return None;
        }
        let elements = self
            .elements
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, &x)| x)
            .collect();
        Some(Self { elements })
    }

    /// Removing the only column never leaves anything behind.
    fn remove_col(&self, col: usize) -> Option<MatrixNxM> {
        assert_first_col(col);
        None
    }

    fn remove(&self, row: usize, col: usize) -> Option<Self::Minor> {
        self.assert_row(row);
        assert_first_col(col);
        None
    }
}

impl MatrixProduct for VectorN {
    type Output = MatrixNxM;

    /// Outer product, treating `rhs` as a row vector.
    fn multiply(&self, rhs: &Self) -> LinalgResult<Self::Output> {
        let rows = self
            .elements
            .iter()
            .map(|&a| rhs.elements.iter().map(|&b| a * b).collect())
            .collect();
        Ok(MatrixNxM::from_store(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let u = VectorN::from(vec![1.0, 2.0, 3.0]);
        let v = VectorN::from(vec![4.0, -5.0, 6.0]);
        assert_eq!(u.dot(&v).unwrap(), 12.0);
        assert_eq!(u.dot(&u).unwrap(), u.mag2());

        let err = u.dot(&VectorN::new(2)).unwrap_err();
        assert_eq!(err.to_string(), "Matrix 1: {3x1}, Matrix 2: {2x1}");
    }

    #[test]
    fn test_magnitude() {
        let v = VectorN::from(vec![-3.0, 4.0]);
        assert_eq!(v.mag2(), 25.0);
        assert_eq!(v.mag(), 5.0);
        assert_eq!(VectorN::new(4).mag(), 0.0);
        assert_eq!(VectorN::from(vec![2.0, -1.0, 0.5, 2.0]).mag2(), 9.25);
    }

    #[test]
    fn test_accessors() {
        let mut v = VectorN::from(vec![5.0, 6.0, 7.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.at(1), 6.0);
        assert_eq!(v[2], 7.0);
        assert_eq!(v.get(0, 0), 5.0);
        assert_eq!(v.row(2).as_slice(), &[7.0]);
        assert!(v.col(0).equals(&v));

        v.swap_rows(0, 2);
        assert_eq!(v.as_slice(), &[7.0, 6.0, 5.0]);
        v.swap_cols(0, 0);
        assert_eq!(v.as_slice(), &[7.0, 6.0, 5.0]);
    }

    #[test]
    #[should_panic]
    fn test_column_index_rejected() {
        let mut v = VectorN::new(3);
        v.swap_cols(0, 1);
    }

    #[test]
    #[should_panic]
    fn test_col_rejected() {
        VectorN::new(3).col(1);
    }

    #[test]
    fn test_arithmetic() {
        let u = VectorN::from(vec![1.0, 2.0]);
        let v = VectorN::from(vec![0.5, -2.0]);
        assert!(u.add(&v).unwrap().equals(&VectorN::from(vec![1.5, 0.0])));
        assert!(u.sub(&u).unwrap().equals(&VectorN::new(2)));
        assert!(u.scale(3.0).equals(&VectorN::from(vec![3.0, 6.0])));
        assert!(u.add(&VectorN::new(3)).is_err());
    }

    #[test]
    fn test_transpose_and_outer_product() {
        let u = VectorN::from(vec![1.0, 2.0, 3.0]);
        let row = u.transpose();
        assert_eq!((row.rows(), row.cols()), (1, 3));
        assert!(row.transpose().equals(&u));

        let outer = u.multiply(&VectorN::from(vec![1.0, -1.0])).unwrap();
        assert!(outer.equals(&MatrixNxM::from_rows(&[
            [1.0, -1.0],
            [2.0, -2.0],
            [3.0, -3.0],
        ])));
        assert_eq!(row.multiply(&MatrixNxM::from(u)).unwrap().get(0, 0), 14.0);
    }

    #[test]
    fn test_ref_and_rank() {
        assert!(VectorN::from(vec![2.0, 0.0, 0.0]).is_ref());
        assert!(VectorN::new(3).is_ref());
        assert_eq!(VectorN::new(3).rank(), 0);

        let v = VectorN::from(vec![0.0, -1.0, 4.0]);
        assert!(!v.is_ref());
        assert_eq!(v.rank(), 1);
        assert!(v
            .row_echelon()
            .equals(&VectorN::from(vec![4.0, 0.0, 0.0])));
    }

    #[test]
    fn test_remove() {
        let v = VectorN::from(vec![1.0, 2.0, 3.0]);
        let removed = v.remove_row(0).unwrap();
        assert_eq!(removed.as_slice(), &[2.0, 3.0]);
        assert!(VectorN::new(1).remove_row(0).is_none());
        assert!(v.remove_col(0).is_none());
        assert!(v.remove(1, 0).is_none());
    }

    #[test]
    #[should_panic]
    fn test_remove_row_out_of_range() {
        VectorN::new(3).remove_row(3);
    }

    #[test]
    fn test_empty_and_display() {
        let v: VectorN = std::iter::empty().collect();
        assert_eq!(v.len(), 1);
        assert_eq!(VectorN::from(vec![1.0, 2.0]).to_string(), "{2x1}[[1.0],[2.0]]");
    }
}
