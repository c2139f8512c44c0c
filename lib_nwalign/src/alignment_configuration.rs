use crate::{alignment_matrix::AlignmentStep, score::Score};

/// The scoring scheme shared by all pairwise alignments of one run.
///
/// A single gap score applies to both insertions and deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentConfiguration {
    pub match_score: Score,
    pub mismatch_score: Score,
    pub gap_score: Score,
}

impl AlignmentConfiguration {
    pub fn score(&self, step: AlignmentStep) -> Score {
        match step {
            AlignmentStep::None => {
                panic!("Alignment step 'None' has no score")
            }
            AlignmentStep::Match => self.match_score,
            AlignmentStep::Substitution => self.mismatch_score,
            AlignmentStep::Insertion | AlignmentStep::Deletion => self.gap_score,
        }
    }
}

impl Default for AlignmentConfiguration {
    fn default() -> Self {
        Self {
            match_score: 1.into(),
            mismatch_score: (-1).into(),
            gap_score: (-2).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_score_lookup() {
        let configuration = AlignmentConfiguration {
            match_score: 3.into(),
            mismatch_score: (-2).into(),
            gap_score: (-5).into(),
        };

        assert_eq!(configuration.score(AlignmentStep::Match), 3.into());
        assert_eq!(configuration.score(AlignmentStep::Substitution), (-2).into());
        assert_eq!(configuration.score(AlignmentStep::Insertion), (-5).into());
        assert_eq!(configuration.score(AlignmentStep::Deletion), (-5).into());
    }

    #[test]
    #[should_panic]
    fn step_none_has_no_score() {
        AlignmentConfiguration::default().score(AlignmentStep::None);
    }
}
