use index::{
    MatrixIndex,
    iterators::{ColumnIndexIterator, InteriorIndexIterator, RowIndexIterator},
};
use ndarray::Array2;

use crate::{alignment_configuration::AlignmentConfiguration, score::Score};

pub mod index;

/// The dynamic-programming matrix of one pairwise global alignment.
///
/// Entry `[row, column]` holds the optimal score of aligning the length-`row`
/// prefix of the reference against the length-`column` prefix of the query,
/// along with the step that produced it. The matrix is owned by a single
/// pair computation and dropped once its traceback is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    matrix: Array2<MatrixEntry>,
    configuration: AlignmentConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixEntry {
    pub score: Score,
    pub step: AlignmentStep,
}

/// The step that produced a matrix entry.
///
/// `Match` and `Substitution` both originate from the diagonal predecessor;
/// `Insertion` gaps the reference and `Deletion` gaps the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentStep {
    /// Marks the matrix origin at [0, 0].
    None,
    Match,
    Substitution,
    Insertion,
    Deletion,
}

impl AlignmentMatrix {
    pub fn new(
        configuration: AlignmentConfiguration,
        reference_length: usize,
        query_length: usize,
    ) -> Self {
        Self {
            matrix: Array2::default((reference_length + 1, query_length + 1)),
            configuration,
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.dim().0
    }

    pub fn columns(&self) -> usize {
        self.matrix.dim().1
    }

    pub fn entry(&self, index: MatrixIndex) -> MatrixEntry {
        self.matrix[index]
    }

    pub fn row_index_iter(&self, column: usize) -> RowIndexIterator {
        RowIndexIterator::new(column, self.rows())
    }

    pub fn column_index_iter(&self, row: usize) -> ColumnIndexIterator {
        ColumnIndexIterator::new(row, self.columns())
    }

    pub fn interior_index_iter(&self) -> InteriorIndexIterator {
        InteriorIndexIterator::new(MatrixIndex::new(self.rows(), self.columns()))
    }

    /// Fills the matrix and returns the optimal global alignment score.
    ///
    /// Empty sequences are valid degenerate input: the corresponding matrix
    /// dimension collapses to the border, and the score is the remaining
    /// sequence length times the gap score.
    pub fn align(&mut self, reference: &[u8], query: &[u8]) -> Score {
        debug_assert_eq!(self.rows(), reference.len() + 1);
        debug_assert_eq!(self.columns(), query.len() + 1);

        self.initialise();
        self.fill_interior(reference, query);
        self.matrix[[self.rows() - 1, self.columns() - 1]].score
    }

    fn initialise(&mut self) {
        // Initialise matrix origin.
        self.matrix[[0, 0]].score = Score::ZERO;
        self.matrix[[0, 0]].step = AlignmentStep::None;

        // Initialise matrix edges.
        for index in self.row_index_iter(0).skip(1) {
            self.set_deletion_entry(index);
        }
        for index in self.column_index_iter(0).skip(1) {
            self.set_insertion_entry(index);
        }
    }

    fn fill_interior(&mut self, reference: &[u8], query: &[u8]) {
        for index in self.interior_index_iter() {
            self.set_best_entry(index, reference, query);
        }
    }

    fn set_insertion_entry(&mut self, index: MatrixIndex) {
        self.matrix[index] = self.compute_insertion_entry(index);
    }

    fn set_deletion_entry(&mut self, index: MatrixIndex) {
        self.matrix[index] = self.compute_deletion_entry(index);
    }

    fn set_best_entry(&mut self, index: MatrixIndex, reference: &[u8], query: &[u8]) {
        // Handle matches and substitutions.
        let mut entry = self.compute_match_or_substitution_entry(index, reference, query);

        // Handle insertions. On ties the diagonal entry is kept.
        let insertion_entry = self.compute_insertion_entry(index);
        if insertion_entry.score > entry.score {
            entry = insertion_entry;
        }

        // Handle deletions. On ties the insertion entry is kept.
        let deletion_entry = self.compute_deletion_entry(index);
        if deletion_entry.score > entry.score {
            entry = deletion_entry;
        }

        self.matrix[index] = entry;
    }

    fn compute_insertion_entry(&self, index: MatrixIndex) -> MatrixEntry {
        let step = AlignmentStep::Insertion;
        let predecessor_score = self.matrix[index.predecessor(step)].score;

        MatrixEntry {
            score: predecessor_score + self.configuration.score(step),
            step,
        }
    }

    fn compute_deletion_entry(&self, index: MatrixIndex) -> MatrixEntry {
        let step = AlignmentStep::Deletion;
        let predecessor_score = self.matrix[index.predecessor(step)].score;

        MatrixEntry {
            score: predecessor_score + self.configuration.score(step),
            step,
        }
    }

    fn compute_match_or_substitution_entry(
        &self,
        index: MatrixIndex,
        reference: &[u8],
        query: &[u8],
    ) -> MatrixEntry {
        let step = if reference[index.row - 1] == query[index.column - 1] {
            AlignmentStep::Match
        } else {
            AlignmentStep::Substitution
        };
        let predecessor_score = self.matrix[index.diagonal_predecessor()].score;

        MatrixEntry {
            score: predecessor_score + self.configuration.score(step),
            step,
        }
    }

    #[cfg(test)]
    fn manual_debug_fill(&mut self, entries: impl IntoIterator<Item = MatrixEntry>) {
        let mut entries = entries.into_iter();
        for index in self.interior_index_iter() {
            self.matrix[index] = entries.next().unwrap();
        }
        assert!(entries.next().is_none());
    }
}

impl Default for MatrixEntry {
    fn default() -> Self {
        Self {
            score: Score::MIN,
            step: AlignmentStep::None,
        }
    }
}

impl core::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut score_column_widths = vec![0; self.columns()];
        for row in 0..self.rows() {
            for (column, score_column_width) in score_column_widths.iter_mut().enumerate() {
                let width = self.matrix[[row, column]].score.to_string().len();
                *score_column_width = width.max(*score_column_width);
            }
        }

        for row in 0..self.rows() {
            write!(f, "[ ")?;
            #[allow(clippy::needless_range_loop)]
            for column in 0..self.columns() {
                write!(
                    f,
                    "{: >width$}",
                    self.matrix[[row, column]].score,
                    width = score_column_widths[column],
                )?;
                write!(
                    f,
                    "{} ",
                    match self.matrix[[row, column]].step {
                        AlignmentStep::None => "N",
                        AlignmentStep::Match => "M",
                        AlignmentStep::Substitution => "S",
                        AlignmentStep::Insertion => "I",
                        AlignmentStep::Deletion => "D",
                    }
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
