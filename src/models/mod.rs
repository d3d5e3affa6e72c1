//! Topic models
//!
//! Currently a single estimator, LDA via collapsed Gibbs sampling, wrapped
//! in a tagged [`TopicModel`] variant so callers dispatch over model kinds
//! without trait objects.

pub mod lda;

use ndarray::Array2;

use lda::{Lda, LdaError};

/// Tagged topic-model variant exposing the shared fit/score surface.
pub enum TopicModel {
    Lda(Lda),
}

impl TopicModel {
    /// Fit the wrapped model on a document-term count matrix
    pub fn fit(&mut self, dtm: &Array2<f64>) -> Result<(), LdaError> {
        match self {
            TopicModel::Lda(model) => model.fit(dtm),
        }
    }

    /// Per-document topic proportions of the fitted model
    pub fn theta(&self) -> Result<Array2<f64>, LdaError> {
        match self {
            TopicModel::Lda(model) => model.theta(),
        }
    }

    /// Per-topic term distributions of the fitted model
    pub fn phi(&self) -> Result<Array2<f64>, LdaError> {
        match self {
            TopicModel::Lda(model) => model.phi(),
        }
    }

    /// Perplexity of `dtm` under the fitted model and the given θ
    pub fn perplexity(&self, dtm: &Array2<f64>, theta: &Array2<f64>) -> Result<f64, LdaError> {
        match self {
            TopicModel::Lda(model) => model.perplexity(dtm, theta),
        }
    }
}
