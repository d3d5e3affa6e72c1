//! Cross-validated topic-count evaluation
//!
//! For each candidate K, every fold fits a fresh sampler on the other
//! folds and scores held-out perplexity. Folds run in parallel; the DTM is
//! shared read-only and each fold worker owns its sampler state. The
//! multi-K sweep itself is a plain loop over [`CrossValidator::evaluate_k`]
//! so a caller can stop between candidates.

use ndarray::{Array2, Axis};
use rayon::prelude::*;

use super::folds::k_fold;
use super::SelectionError;
use crate::models::lda::{Lda, LdaConfig};

/// Held-out score for one (K, fold) pair
#[derive(Debug, Clone)]
pub struct FoldScore {
    /// Candidate topic count
    pub k: usize,
    /// Fold index in [0, n_folds)
    pub fold: usize,
    /// exp(−LL / held-out token count); lower is better
    pub perplexity: f64,
    /// Total held-out log-likelihood
    pub log_likelihood: f64,
}

/// Cross-validation configuration
#[derive(Debug, Clone)]
pub struct CvConfig {
    /// Number of folds
    pub n_folds: usize,
    /// Document-topic prior passed to every fit
    pub alpha: f64,
    /// Topic-term prior passed to every fit
    pub beta: f64,
    /// Retained sampling iterations per training fit
    pub n_iterations: usize,
    /// Burn-in iterations per training fit
    pub burn_in: usize,
    /// Iterations of the short held-out θ estimation pass
    pub fold_in_iterations: usize,
    /// Base seed; per-fold and per-K seeds are derived from it
    pub seed: u64,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            n_folds: 5,
            alpha: 0.1,
            beta: 0.01,
            n_iterations: 200,
            burn_in: 50,
            fold_in_iterations: 20,
            seed: 42,
        }
    }
}

impl CvConfig {
    /// Set the fold count
    pub fn n_folds(mut self, n: usize) -> Self {
        self.n_folds = n;
        self
    }

    /// Set alpha
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set beta
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set retained iterations per fit
    pub fn n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Set burn-in per fit
    pub fn burn_in(mut self, n: usize) -> Self {
        self.burn_in = n;
        self
    }

    /// Set held-out estimation pass length
    pub fn fold_in_iterations(mut self, n: usize) -> Self {
        self.fold_in_iterations = n;
        self
    }

    /// Set the base seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// K-fold cross-validation harness for LDA topic-count selection
pub struct CrossValidator {
    config: CvConfig,
}

impl CrossValidator {
    /// Create a harness with the given configuration
    pub fn new(config: CvConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &CvConfig {
        &self.config
    }

    /// Evaluate one candidate topic count across all folds.
    ///
    /// Returns one [`FoldScore`] per fold, in fold order. Folds run in
    /// parallel; results are deterministic because every fold derives its
    /// own seeds from the base seed.
    pub fn evaluate_k(&self, dtm: &Array2<f64>, k: usize) -> Result<Vec<FoldScore>, SelectionError> {
        let splits = k_fold(dtm.nrows(), self.config.n_folds, self.config.seed)?;

        splits
            .par_iter()
            .enumerate()
            .map(|(fold, split)| {
                let train = dtm.select(Axis(0), &split.train_indices);
                let test = dtm.select(Axis(0), &split.test_indices);

                let lda_config = LdaConfig::new(k)
                    .alpha(self.config.alpha)
                    .beta(self.config.beta)
                    .n_iterations(self.config.n_iterations)
                    .burn_in(self.config.burn_in)
                    .seed(derive_seed(self.config.seed, k, fold, 0));

                let mut lda = Lda::new(lda_config)?;
                lda.fit(&train)?;

                let theta = lda.transform(
                    &test,
                    self.config.fold_in_iterations,
                    derive_seed(self.config.seed, k, fold, 1),
                )?;
                let log_likelihood = lda.log_likelihood(&test, &theta)?;
                let perplexity = lda.perplexity(&test, &theta)?;

                log::debug!(
                    "k={} fold={} perplexity={:.2} ll={:.2}",
                    k,
                    fold,
                    perplexity,
                    log_likelihood
                );

                Ok(FoldScore {
                    k,
                    fold,
                    perplexity,
                    log_likelihood,
                })
            })
            .collect()
    }

    /// Evaluate every candidate topic count in order.
    ///
    /// Flattens the per-fold records of each K into one table. Callers
    /// needing to abort between candidates can loop over
    /// [`CrossValidator::evaluate_k`] themselves.
    pub fn sweep(
        &self,
        dtm: &Array2<f64>,
        candidates: &[usize],
    ) -> Result<Vec<FoldScore>, SelectionError> {
        let mut scores = Vec::with_capacity(candidates.len() * self.config.n_folds);
        for &k in candidates {
            scores.extend(self.evaluate_k(dtm, k)?);
        }
        Ok(scores)
    }
}

/// Mix the base seed with the K value, fold index, and stream id so each
/// sampling pass gets its own reproducible RNG.
fn derive_seed(base: u64, k: usize, fold: usize, stream: u64) -> u64 {
    base.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ (k as u64).wrapping_mul(0xd1b5_4a32_d192_ed03)
        ^ (fold as u64).wrapping_mul(0x94d0_49bb_1331_11eb)
        ^ stream
}
