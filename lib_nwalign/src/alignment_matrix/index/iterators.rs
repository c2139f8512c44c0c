use super::MatrixIndex;

/// An iterator over the row indices of a fixed column.
pub struct RowIndexIterator {
    index: MatrixIndex,
    limit: usize,
}

/// An iterator over the column indices of a fixed row.
pub struct ColumnIndexIterator {
    index: MatrixIndex,
    limit: usize,
}

/// An iterator over the alignment matrix indices skipping row and column zero.
///
/// The iterator is row-major, i.e. it increments the column every iteration,
/// and increments the row only after reaching the column limit. This matches
/// the memory layout of the matrix, so the interior fill walks it linearly.
pub struct InteriorIndexIterator {
    index: MatrixIndex,
    limit: MatrixIndex,
}

impl RowIndexIterator {
    pub(in crate::alignment_matrix) fn new(column: usize, limit: usize) -> Self {
        Self {
            index: MatrixIndex::new(0, column),
            limit,
        }
    }
}

impl ColumnIndexIterator {
    pub(in crate::alignment_matrix) fn new(row: usize, limit: usize) -> Self {
        Self {
            index: MatrixIndex::new(row, 0),
            limit,
        }
    }
}

impl InteriorIndexIterator {
    pub(in crate::alignment_matrix) fn new(limit: MatrixIndex) -> Self {
        debug_assert!(limit.row > 0);
        debug_assert!(limit.column > 0);

        Self {
            index: if limit.row > 1 && limit.column > 1 {
                MatrixIndex::new(1, 1)
            } else {
                limit
            },
            limit,
        }
    }
}

impl Iterator for RowIndexIterator {
    type Item = MatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.row < self.limit {
            let result = self.index;
            self.index.row += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for ColumnIndexIterator {
    type Item = MatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.column < self.limit {
            let result = self.index;
            self.index.column += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for InteriorIndexIterator {
    type Item = MatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.column < self.limit.column {
            let result = self.index;
            self.index.column += 1;
            Some(result)
        } else if self.index.row < self.limit.row - 1 {
            self.index.column = 1;
            self.index.row += 1;
            let result = self.index;
            self.index.column += 1;
            Some(result)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::alignment_matrix::index::{MatrixIndex, iterators::InteriorIndexIterator};

    #[test]
    fn interior_index_iterator() {
        assert_eq!(
            InteriorIndexIterator::new(MatrixIndex::new(3, 3)).collect::<Vec<_>>(),
            vec![
                MatrixIndex::new(1, 1),
                MatrixIndex::new(1, 2),
                MatrixIndex::new(2, 1),
                MatrixIndex::new(2, 2)
            ],
        );
        assert_eq!(
            InteriorIndexIterator::new(MatrixIndex::new(1, 3)).collect::<Vec<_>>(),
            vec![],
        );
        assert_eq!(
            InteriorIndexIterator::new(MatrixIndex::new(3, 1)).collect::<Vec<_>>(),
            vec![],
        );
        assert_eq!(
            InteriorIndexIterator::new(MatrixIndex::new(1, 1)).collect::<Vec<_>>(),
            vec![],
        );
    }

    #[test]
    #[should_panic]
    fn interior_index_iterator_zero() {
        InteriorIndexIterator::new(MatrixIndex::new(0, 0));
    }
}
