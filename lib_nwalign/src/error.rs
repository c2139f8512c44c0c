use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected at least two sequences, but found {found}.")]
    NotEnoughSequences { found: usize },

    #[error("The computation was cancelled before all pairs were aligned.")]
    Cancelled,
}
