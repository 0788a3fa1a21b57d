//! Renders any matrix as `{RxC}[[e,e,...],[...],...]`.

use std::fmt;

use itertools::Itertools;

use crate::matrices::Matrix;

pub fn render<M: Matrix + ?Sized>(matrix: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rows = (0..matrix.rows()).format_with(",", |row, f| {
        let elements = (0..matrix.cols())
            .format_with(",", |col, f| f(&format_args!("{:?}", matrix.get(row, col))));
        f(&format_args!("[{elements}]"))
    });
    write!(f, "{}[{rows}]", matrix.dimensions())
}
