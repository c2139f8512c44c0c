use std::{
    fmt::{Display, Formatter},
    sync::atomic::{AtomicBool, Ordering},
};

use log::debug;
use rayon::prelude::*;

use crate::{
    alignment_configuration::AlignmentConfiguration,
    alignment_matrix::AlignmentMatrix,
    error::{Error, Result},
    score::Score,
    sequence::SequenceRecord,
    traceback::reconstruct_alignment,
};

/// The alignment of one sequence pair, held until final output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseAlignment {
    pub reference_name: String,
    pub query_name: String,
    pub score: Score,
    pub aligned_reference: String,
    pub aligned_query: String,
}

/// Aligns every unordered pair of records under the given configuration.
///
/// Results are returned in canonical pair order: for records `0..k`, the
/// pairs `(0,1), (0,2), ..., (0,k-1), (1,2), ...`. Fewer than two records is
/// a configuration error, reported before any alignment is attempted.
pub fn align_all_pairs(
    records: &[SequenceRecord],
    configuration: AlignmentConfiguration,
) -> Result<Vec<PairwiseAlignment>> {
    let cancelled = AtomicBool::new(false);
    align_all_pairs_cancellable(records, configuration, &cancelled)
}

/// Like [`align_all_pairs`], but aborts with [`Error::Cancelled`] once the
/// flag is observed set. The flag is checked between pair computations, so
/// cancellation is coarse-grained: a running matrix fill completes first.
pub fn align_all_pairs_cancellable(
    records: &[SequenceRecord],
    configuration: AlignmentConfiguration,
    cancelled: &AtomicBool,
) -> Result<Vec<PairwiseAlignment>> {
    if records.len() < 2 {
        return Err(Error::NotEnoughSequences {
            found: records.len(),
        });
    }

    let mut pairs = Vec::with_capacity(records.len() * (records.len() - 1) / 2);
    for reference in 0..records.len() {
        for query in reference + 1..records.len() {
            pairs.push((reference, query));
        }
    }
    debug!("Aligning {} sequence pairs", pairs.len());

    // The pairs are independent, so they are aligned in parallel. The
    // indexed collect restores canonical pair order regardless of
    // completion order.
    pairs
        .par_iter()
        .map(|&(reference, query)| {
            if cancelled.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
            Ok(align_pair(&records[reference], &records[query], configuration))
        })
        .collect()
}

/// Aligns a single ordered pair of records.
pub fn align_pair(
    reference: &SequenceRecord,
    query: &SequenceRecord,
    configuration: AlignmentConfiguration,
) -> PairwiseAlignment {
    debug!("Aligning {} against {}", reference.name, query.name);

    let mut matrix = AlignmentMatrix::new(configuration, reference.len(), query.len());
    let score = matrix.align(reference.residues.as_bytes(), query.residues.as_bytes());
    let aligned = reconstruct_alignment(
        &matrix,
        reference.residues.as_bytes(),
        query.residues.as_bytes(),
    );

    PairwiseAlignment {
        reference_name: reference.name.clone(),
        query_name: query.name.clone(),
        score,
        aligned_reference: aligned.reference,
        aligned_query: aligned.query,
    }
}

impl Display for PairwiseAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Score for alignment of {} to {} is {}",
            self.reference_name, self.query_name, self.score
        )?;
        writeln!(f, "{}", self.aligned_reference)?;
        write!(f, "{}", self.aligned_query)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::{
        alignment_configuration::AlignmentConfiguration,
        error::Error,
        sequence::SequenceRecord,
    };

    use super::{align_all_pairs, align_all_pairs_cancellable, align_pair};

    fn trio() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("alpha", "GCATGCU"),
            SequenceRecord::new("beta", "GATTACA"),
            SequenceRecord::new("gamma", "AA"),
        ]
    }

    #[test]
    fn canonical_pair_order() {
        let results = align_all_pairs(&trio(), AlignmentConfiguration::default()).unwrap();
        assert_eq!(results.len(), 3);

        let names = results
            .iter()
            .map(|result| (result.reference_name.as_str(), result.query_name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![("alpha", "beta"), ("alpha", "gamma"), ("beta", "gamma")],
        );
    }

    #[test]
    fn too_few_sequences() {
        let records = vec![SequenceRecord::new("alpha", "ACGT")];
        let error = align_all_pairs(&records, AlignmentConfiguration::default()).unwrap_err();
        assert!(matches!(error, Error::NotEnoughSequences { found: 1 }));

        let error = align_all_pairs(&[], AlignmentConfiguration::default()).unwrap_err();
        assert!(matches!(error, Error::NotEnoughSequences { found: 0 }));
    }

    #[test]
    fn cancellation() {
        let cancelled = AtomicBool::new(false);
        cancelled.store(true, Ordering::Relaxed);

        let error =
            align_all_pairs_cancellable(&trio(), AlignmentConfiguration::default(), &cancelled)
                .unwrap_err();
        assert!(matches!(error, Error::Cancelled));
    }

    #[test]
    fn textbook_pair() {
        let configuration = AlignmentConfiguration {
            match_score: 1.into(),
            mismatch_score: (-1).into(),
            gap_score: (-1).into(),
        };
        let result = align_pair(
            &SequenceRecord::new("alpha", "GCATGCU"),
            &SequenceRecord::new("beta", "GATTACA"),
            configuration,
        );
        assert_eq!(result.score.as_i64(), 0);
        assert_eq!(result.aligned_reference.len(), result.aligned_query.len());
    }

    #[test]
    fn determinism() {
        let first = align_all_pairs(&trio(), AlignmentConfiguration::default()).unwrap();
        let second = align_all_pairs(&trio(), AlignmentConfiguration::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn display_format() {
        let result = align_pair(
            &SequenceRecord::new("alpha", "AA"),
            &SequenceRecord::new("beta", "AA"),
            AlignmentConfiguration {
                match_score: 2.into(),
                mismatch_score: (-1).into(),
                gap_score: (-2).into(),
            },
        );
        assert_eq!(
            result.to_string(),
            "Score for alignment of alpha to beta is 4\nAA\nAA",
        );
    }
}
