/// A named sequence record, immutable once parsed.
///
/// Records are kept in an ordered `Vec`, and the pairwise orchestrator
/// borrows them in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub residues: String,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceRecord;

    #[test]
    fn record_length() {
        let record = SequenceRecord::new("alpha", "ACGT");
        assert_eq!(record.len(), 4);
        assert!(!record.is_empty());

        let degenerate = SequenceRecord::new("beta", "");
        assert_eq!(degenerate.len(), 0);
        assert!(degenerate.is_empty());
    }
}
