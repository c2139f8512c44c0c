pub mod alignment_configuration;
pub mod alignment_matrix;
pub mod error;
pub mod pairwise;
pub mod score;
pub mod sequence;
pub mod traceback;
