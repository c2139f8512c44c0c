use std::ops::{Index, IndexMut};

use ndarray::Array2;

use super::AlignmentStep;

pub mod iterators;

/// A row/column pair locating one entry of an [`AlignmentMatrix`](super::AlignmentMatrix).
///
/// Rows follow the reference sequence and columns the query sequence, so the
/// entry at `[row, column]` scores the length-`row` reference prefix against
/// the length-`column` query prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixIndex {
    pub(in crate::alignment_matrix) row: usize,
    pub(in crate::alignment_matrix) column: usize,
}

impl MatrixIndex {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn insertion_predecessor(&self) -> Self {
        debug_assert!(self.column > 0);

        Self {
            row: self.row,
            column: self.column - 1,
        }
    }

    pub fn deletion_predecessor(&self) -> Self {
        debug_assert!(self.row > 0);

        Self {
            row: self.row - 1,
            column: self.column,
        }
    }

    pub fn diagonal_predecessor(&self) -> Self {
        debug_assert!(self.row > 0);
        debug_assert!(self.column > 0);

        Self {
            row: self.row - 1,
            column: self.column - 1,
        }
    }

    pub fn predecessor(&self, step: AlignmentStep) -> Self {
        match step {
            AlignmentStep::None => {
                panic!("Alignment step 'None' has no predecessor")
            }
            AlignmentStep::Insertion => self.insertion_predecessor(),
            AlignmentStep::Deletion => self.deletion_predecessor(),
            AlignmentStep::Match | AlignmentStep::Substitution => self.diagonal_predecessor(),
        }
    }
}

impl<T> Index<MatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: MatrixIndex) -> &Self::Output {
        &self[[index.row, index.column]]
    }
}

impl<T> IndexMut<MatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: MatrixIndex) -> &mut Self::Output {
        &mut self[[index.row, index.column]]
    }
}
