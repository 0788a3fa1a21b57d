//! Gaussian elimination with partial pivoting, and the row echelon form (REF) queries built on it.
//!
//! Elimination runs over a row store (`[Vec<f64>]`) so that pivot swaps exchange whole rows.
//! Pivots are not guarded: if a pivot column is zero in the pivot row and every row below it,
//! the elimination ratio is `0 / 0` and `NaN` propagates into the rows below.

use log::{debug, trace, warn};

use crate::matrices::{to_rows, Matrix};

/// Reduces `rows` to REF in place. Every row must have exactly `cols` elements.
pub fn row_echelon_in_place(rows: &mut [Vec<f64>], cols: usize) {
    let n_rows = rows.len();

    for i in 0..n_rows.min(cols) {
        // Keep the largest magnitude candidate as pivot, ties keep the earlier row
        for j in (i + 1)..n_rows {
            if rows[j][i].abs() > rows[i][i].abs() {
                trace!("Pivot column {i}: swapping rows {i} and {j}");
                rows.swap(i, j);
            }
        }

        if rows[i][i] == 0.0 && i + 1 < n_rows {
            warn!("Zero pivot in column {i}, elimination divides by zero");
        }

        // Reduce each of the rows below the pivot row
        let (upper, lower) = rows.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        for (offset, row) in lower.iter_mut().enumerate() {
            trace!("Eliminating column {i} from row {}", i + 1 + offset);
            let ratio = row[i] / pivot_row[i];
            for k in (i + 1)..cols {
                row[k] -= pivot_row[k] * ratio;
            }
            row[i] = 0.0;
        }
    }

    debug!("Reduced {n_rows}x{cols} matrix to row echelon form");
}

/// Copies `matrix` and reduces the copy to REF.
pub fn row_echelon<M: Matrix + ?Sized>(matrix: &M) -> Vec<Vec<f64>> {
    let mut rows = to_rows(matrix);
    row_echelon_in_place(&mut rows, matrix.cols());
    rows
}

/// Column of the first non-zero entry in `row`, or `matrix.cols()` if the row is zero.
pub fn leading_index<M: Matrix + ?Sized>(matrix: &M, row: usize) -> usize {
    (0..matrix.cols())
        .find(|&col| matrix.get(row, col) != 0.0)
        .unwrap_or(matrix.cols())
}

/// Leading indices must strictly increase down the rows.
/// A zero row counts as leading past the last column, so only one zero row may appear, last.
pub fn is_ref<M: Matrix + ?Sized>(matrix: &M) -> bool {
    let mut previous: Option<usize> = None;
    for row in 0..matrix.rows() {
        let leading = leading_index(matrix, row);
        if previous.is_some_and(|prev| leading <= prev) {
            return false;
        }
        previous = Some(leading);
    }
    true
}

/// Index of the first zero row in a REF row store, or its height if there is none.
pub fn rank_of_ref(rows: &[Vec<f64>]) -> usize {
    rows.iter()
        .position(|row| row.iter().all(|&x| x == 0.0))
        .unwrap_or(rows.len())
}

/// Takes `matrix` as it is if already in REF, otherwise reduces a copy first.
pub fn rank<M: Matrix + ?Sized>(matrix: &M) -> usize {
    let rank = if matrix.is_ref() {
        rank_of_ref(&to_rows(matrix))
    } else {
        rank_of_ref(&row_echelon(matrix))
    };
    debug!("Rank of {} matrix is {rank}", matrix.dimensions());
    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::general::MatrixNxM;

    #[test]
    fn test_pivots_on_largest_magnitude() {
        let mut rows = vec![vec![1.0, 2.0], vec![-4.0, 1.0], vec![3.0, 0.0]];
        row_echelon_in_place(&mut rows, 2);
        assert_eq!(rows[0], vec![-4.0, 1.0]);
        assert_eq!(rows[1][0], 0.0);
        assert_eq!(rows[2][0], 0.0);
    }

    #[test]
    fn test_ties_keep_earlier_row() {
        let mut rows = vec![vec![2.0, 1.0], vec![-2.0, 5.0]];
        row_echelon_in_place(&mut rows, 2);
        assert_eq!(rows, vec![vec![2.0, 1.0], vec![0.0, 6.0]]);
    }

    #[test]
    fn test_zero_pivot_propagates_nan() {
        let mut rows = vec![vec![0.0, 1.0], vec![0.0, 1.0]];
        row_echelon_in_place(&mut rows, 2);
        assert_eq!(rows[1][0], 0.0);
        assert!(rows[1][1].is_nan());
    }

    #[test]
    fn test_wide_and_tall() {
        let wide = MatrixNxM::from_rows(&[vec![2.0, 4.0, 6.0]]);
        assert_eq!(row_echelon(&wide), vec![vec![2.0, 4.0, 6.0]]);

        let tall = MatrixNxM::from_rows(&[vec![1.0], vec![3.0], vec![2.0]]);
        assert_eq!(row_echelon(&tall), vec![vec![3.0], vec![0.0], vec![0.0]]);
    }

    #[test]
    fn test_is_ref() {
        let matrix = MatrixNxM::from_rows(&[
            vec![-5.0, -4.0, -3.0, -2.0, -1.0],
            vec![0.0, -3.0, 8.0, 3.0, -2.0],
            vec![0.0, 0.0, 0.0, -4.8, -4.0],
        ]);
        assert!(is_ref(&matrix));

        let one_zero_row_last = MatrixNxM::from_rows(&[vec![1.0, 1.0], vec![0.0, 0.0]]);
        assert!(is_ref(&one_zero_row_last));

        let zero_row_first = MatrixNxM::from_rows(&[vec![0.0, 0.0], vec![0.0, 1.0]]);
        assert!(!is_ref(&zero_row_first));

        let two_zero_rows =
            MatrixNxM::from_rows(&[vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert!(!is_ref(&two_zero_rows));
    }

    #[test]
    fn test_rank_of_ref() {
        assert_eq!(rank_of_ref(&[vec![1.0, 2.0], vec![0.0, 0.0]]), 1);
        assert_eq!(rank_of_ref(&[vec![1.0, 2.0], vec![0.0, 3.0]]), 2);
        assert_eq!(rank_of_ref(&[vec![0.0, 0.0]]), 0);
    }
}
