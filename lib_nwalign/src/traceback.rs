use crate::alignment_matrix::{AlignmentMatrix, AlignmentStep, index::MatrixIndex};

/// The character emitted into an aligned string where the other sequence
/// contributes a residue.
pub const GAP_CHARACTER: u8 = b'-';

/// One optimal global alignment of a sequence pair.
///
/// Both strings have equal length, which is at least the length of the
/// longer input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub reference: String,
    pub query: String,
}

/// Reconstructs one optimal alignment from a filled matrix.
///
/// The walk starts at the bottom-right entry and follows each entry's step
/// to its predecessor index until it reaches the matrix origin, emitting the
/// aligned characters in reverse. Because the matrix fill breaks ties with a
/// fixed precedence, the walk is deterministic and reconstructs exactly one
/// alignment even when several optimal alignments exist.
pub fn reconstruct_alignment(
    matrix: &AlignmentMatrix,
    reference: &[u8],
    query: &[u8],
) -> AlignedPair {
    debug_assert_eq!(matrix.rows(), reference.len() + 1);
    debug_assert_eq!(matrix.columns(), query.len() + 1);

    let mut aligned_reference = Vec::with_capacity(reference.len() + query.len());
    let mut aligned_query = Vec::with_capacity(reference.len() + query.len());
    let mut index = MatrixIndex::new(matrix.rows() - 1, matrix.columns() - 1);

    loop {
        let step = matrix.entry(index).step;
        match step {
            AlignmentStep::None => break,
            AlignmentStep::Match | AlignmentStep::Substitution => {
                aligned_reference.push(reference[index.row() - 1]);
                aligned_query.push(query[index.column() - 1]);
            }
            AlignmentStep::Insertion => {
                aligned_reference.push(GAP_CHARACTER);
                aligned_query.push(query[index.column() - 1]);
            }
            AlignmentStep::Deletion => {
                aligned_reference.push(reference[index.row() - 1]);
                aligned_query.push(GAP_CHARACTER);
            }
        }
        index = index.predecessor(step);
    }
    debug_assert_eq!(index, MatrixIndex::new(0, 0));

    aligned_reference.reverse();
    aligned_query.reverse();

    AlignedPair {
        reference: bytes_to_string(aligned_reference),
        query: bytes_to_string(aligned_query),
    }
}

fn bytes_to_string(bytes: Vec<u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}
