//! Model selection via k-fold cross-validation
//!
//! Partitions documents into folds, trains the sampler on the training
//! folds, and scores held-out perplexity for each candidate topic count.

pub mod folds;
pub mod harness;

use thiserror::Error;

use crate::models::lda::LdaError;

pub use folds::{k_fold, FoldSplit};
pub use harness::{CrossValidator, CvConfig, FoldScore};

/// Errors from fold partitioning and cross-validated evaluation
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("fold count {n_folds} is out of bounds for {n_docs} documents")]
    InvalidFoldCount { n_folds: usize, n_docs: usize },

    #[error(transparent)]
    Lda(#[from] LdaError),
}
