//! Latent Dirichlet Allocation (LDA)
//!
//! Collapsed Gibbs sampling inference over a document-term count matrix.
//! Each token occurrence carries a latent topic label; the sampler sweeps
//! documents in order, resampling one label at a time from the conditional
//!
//! ```text
//! p(z = k | rest) ∝ (ndk[d][k] + α) * (nkw[k][w] + β) / (nk[k] + β·V)
//! ```
//!
//! After the burn-in iterations are discarded, the count matrices are
//! accumulated once per retained iteration and θ/φ are computed from the
//! mean accumulated counts. Runs are bitwise reproducible for a fixed seed.

use ndarray::{Array1, Array2};
use rand::prelude::*;
use thiserror::Error;

/// Errors that can occur during LDA estimation
#[derive(Error, Debug)]
pub enum LdaError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("document {doc} has no tokens after preprocessing")]
    EmptyDocument { doc: usize },

    #[error("model not fitted yet")]
    NotFitted,

    #[error("non-finite sampling weights at document {doc}, token position {position}")]
    NumericInstability { doc: usize, position: usize },
}

/// LDA model configuration
#[derive(Debug, Clone)]
pub struct LdaConfig {
    /// Number of topics
    pub n_topics: usize,
    /// Document-topic Dirichlet prior (alpha)
    pub alpha: f64,
    /// Topic-term Dirichlet prior (beta)
    pub beta: f64,
    /// Sampling iterations retained after burn-in
    pub n_iterations: usize,
    /// Burn-in iterations discarded before accumulation starts
    pub burn_in: usize,
    /// RNG seed; every sampling pass is reproducible for a fixed seed
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            n_topics: 10,
            alpha: 0.1,
            beta: 0.01,
            n_iterations: 500,
            burn_in: 100,
            seed: 42,
        }
    }
}

impl LdaConfig {
    /// Create a new configuration with the given number of topics
    pub fn new(n_topics: usize) -> Self {
        Self {
            n_topics,
            ..Default::default()
        }
    }

    /// Set alpha (document-topic prior)
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set beta (topic-term prior)
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set retained sampling iterations
    pub fn n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Set burn-in length
    pub fn burn_in(mut self, n: usize) -> Self {
        self.burn_in = n;
        self
    }

    /// Set the RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), LdaError> {
        if self.n_topics < 1 {
            return Err(LdaError::InvalidParameter(
                "n_topics must be at least 1".into(),
            ));
        }
        if self.alpha <= 0.0 {
            return Err(LdaError::InvalidParameter("alpha must be positive".into()));
        }
        if self.beta <= 0.0 {
            return Err(LdaError::InvalidParameter("beta must be positive".into()));
        }
        if self.n_iterations < 1 {
            return Err(LdaError::InvalidParameter(
                "n_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Per-fit sampler state: topic assignments plus the three count matrices
/// kept exactly consistent with them. Owned by the model, one per fit.
struct SamplerState {
    /// Topic label for every token occurrence: z[doc][position]
    z: Vec<Vec<usize>>,
    /// Document-topic counts: n_docs x n_topics
    ndk: Array2<f64>,
    /// Topic-term counts: n_topics x n_terms
    nkw: Array2<f64>,
    /// Tokens per topic
    nk: Array1<f64>,
}

impl SamplerState {
    /// Random uniform initialization of every token's topic, with the
    /// count matrices aggregated from that assignment.
    fn init(docs: &[Vec<usize>], n_topics: usize, n_terms: usize, rng: &mut StdRng) -> Self {
        let n_docs = docs.len();
        let mut z = Vec::with_capacity(n_docs);
        let mut ndk = Array2::zeros((n_docs, n_topics));
        let mut nkw = Array2::zeros((n_topics, n_terms));
        let mut nk = Array1::zeros(n_topics);

        for (doc_idx, doc) in docs.iter().enumerate() {
            let mut labels = Vec::with_capacity(doc.len());
            for &word_idx in doc {
                let topic = rng.gen_range(0..n_topics);
                labels.push(topic);
                ndk[[doc_idx, topic]] += 1.0;
                nkw[[topic, word_idx]] += 1.0;
                nk[topic] += 1.0;
            }
            z.push(labels);
        }

        Self { z, ndk, nkw, nk }
    }
}

/// Latent Dirichlet Allocation model
///
/// Owns its fitted state; nothing is shared across fits. Create one model
/// per fit and rebuild it to re-run with different parameters.
pub struct Lda {
    config: LdaConfig,
    /// Final-iteration sampler state, kept for inspection
    state: Option<SamplerState>,
    /// Accumulated doc-topic counts over retained iterations
    acc_ndk: Option<Array2<f64>>,
    /// Accumulated topic-term counts over retained iterations
    acc_nkw: Option<Array2<f64>>,
    /// Accumulated per-topic totals over retained iterations
    acc_nk: Option<Array1<f64>>,
    /// Number of retained iterations accumulated
    n_samples: usize,
    /// Token count per document
    doc_lengths: Vec<f64>,
    /// Vocabulary size seen at fit time
    n_terms: usize,
}

impl Lda {
    /// Create a new model. Fails fast on bad hyperparameters.
    pub fn new(config: LdaConfig) -> Result<Self, LdaError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            acc_ndk: None,
            acc_nkw: None,
            acc_nk: None,
            n_samples: 0,
            doc_lengths: Vec::new(),
            n_terms: 0,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    /// Vocabulary size the model was fitted on
    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    /// Expand a DTM into per-document token lists (word ids repeated by
    /// count, ascending word index). Fails on empty documents: those must
    /// be excluded upstream, not silently zero-weighted.
    fn expand_documents(dtm: &Array2<f64>) -> Result<Vec<Vec<usize>>, LdaError> {
        let mut docs = Vec::with_capacity(dtm.nrows());
        for doc_idx in 0..dtm.nrows() {
            let mut tokens = Vec::new();
            for word_idx in 0..dtm.ncols() {
                let count = dtm[[doc_idx, word_idx]] as usize;
                for _ in 0..count {
                    tokens.push(word_idx);
                }
            }
            if tokens.is_empty() {
                return Err(LdaError::EmptyDocument { doc: doc_idx });
            }
            docs.push(tokens);
        }
        Ok(docs)
    }

    /// Fit the model on a document-term count matrix.
    ///
    /// Runs `burn_in` discarded iterations followed by `n_iterations`
    /// retained iterations whose count matrices are accumulated for the
    /// θ/φ estimates.
    pub fn fit(&mut self, dtm: &Array2<f64>) -> Result<(), LdaError> {
        let n_docs = dtm.nrows();
        let n_terms = dtm.ncols();
        if n_docs == 0 || n_terms == 0 {
            return Err(LdaError::InvalidParameter(
                "document-term matrix must have at least one row and one column".into(),
            ));
        }

        let docs = Self::expand_documents(dtm)?;
        let n_topics = self.config.n_topics;
        let alpha = self.config.alpha;
        let beta = self.config.beta;
        let beta_sum = beta * n_terms as f64;

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut state = SamplerState::init(&docs, n_topics, n_terms, &mut rng);

        let mut acc_ndk = Array2::zeros((n_docs, n_topics));
        let mut acc_nkw = Array2::zeros((n_topics, n_terms));
        let mut acc_nk = Array1::zeros(n_topics);
        let mut n_samples = 0usize;

        let total_iters = self.config.burn_in + self.config.n_iterations;
        let mut weights = vec![0.0f64; n_topics];

        for iter in 0..total_iters {
            for (doc_idx, doc) in docs.iter().enumerate() {
                for (position, &word_idx) in doc.iter().enumerate() {
                    let old_topic = state.z[doc_idx][position];

                    // Decrement before computing the conditional so the
                    // token never counts itself.
                    state.ndk[[doc_idx, old_topic]] -= 1.0;
                    state.nkw[[old_topic, word_idx]] -= 1.0;
                    state.nk[old_topic] -= 1.0;

                    for (topic, w) in weights.iter_mut().enumerate() {
                        *w = (state.ndk[[doc_idx, topic]] + alpha)
                            * (state.nkw[[topic, word_idx]] + beta)
                            / (state.nk[topic] + beta_sum);
                    }

                    let new_topic = sample_categorical(&weights, &mut rng).ok_or(
                        LdaError::NumericInstability {
                            doc: doc_idx,
                            position,
                        },
                    )?;

                    state.z[doc_idx][position] = new_topic;
                    state.ndk[[doc_idx, new_topic]] += 1.0;
                    state.nkw[[new_topic, word_idx]] += 1.0;
                    state.nk[new_topic] += 1.0;
                }
            }

            if iter >= self.config.burn_in {
                acc_ndk += &state.ndk;
                acc_nkw += &state.nkw;
                acc_nk += &state.nk;
                n_samples += 1;
            }

            if (iter + 1) % 50 == 0 {
                log::debug!("gibbs sweep {}/{}", iter + 1, total_iters);
            }
        }

        self.doc_lengths = docs.iter().map(|d| d.len() as f64).collect();
        self.n_terms = n_terms;
        self.n_samples = n_samples;
        self.state = Some(state);
        self.acc_ndk = Some(acc_ndk);
        self.acc_nkw = Some(acc_nkw);
        self.acc_nk = Some(acc_nk);
        Ok(())
    }

    /// Per-document topic proportions θ (documents x topics).
    ///
    /// θ[d][k] = (mean ndk[d][k] + α) / (doc length + K·α); each row sums
    /// to 1.
    pub fn theta(&self) -> Result<Array2<f64>, LdaError> {
        let acc_ndk = self.acc_ndk.as_ref().ok_or(LdaError::NotFitted)?;
        let n_topics = self.config.n_topics;
        let alpha = self.config.alpha;
        let samples = self.n_samples as f64;

        let n_docs = acc_ndk.nrows();
        let mut theta = Array2::zeros((n_docs, n_topics));
        for doc_idx in 0..n_docs {
            let denom = self.doc_lengths[doc_idx] + n_topics as f64 * alpha;
            for topic in 0..n_topics {
                let mean_count = acc_ndk[[doc_idx, topic]] / samples;
                theta[[doc_idx, topic]] = (mean_count + alpha) / denom;
            }
        }
        Ok(theta)
    }

    /// Per-topic term distributions φ (topics x vocabulary size).
    ///
    /// φ[k][w] = (mean nkw[k][w] + β) / (mean nk[k] + β·V); each row sums
    /// to 1.
    pub fn phi(&self) -> Result<Array2<f64>, LdaError> {
        let acc_nkw = self.acc_nkw.as_ref().ok_or(LdaError::NotFitted)?;
        let acc_nk = self.acc_nk.as_ref().ok_or(LdaError::NotFitted)?;
        let n_topics = self.config.n_topics;
        let beta = self.config.beta;
        let beta_sum = beta * self.n_terms as f64;
        let samples = self.n_samples as f64;

        let mut phi = Array2::zeros((n_topics, self.n_terms));
        for topic in 0..n_topics {
            let denom = acc_nk[topic] / samples + beta_sum;
            for word_idx in 0..self.n_terms {
                let mean_count = acc_nkw[[topic, word_idx]] / samples;
                phi[[topic, word_idx]] = (mean_count + beta) / denom;
            }
        }
        Ok(phi)
    }

    /// Estimate θ for held-out documents against the frozen trained φ.
    ///
    /// Runs a short Gibbs pass per document where the topic-term side of
    /// the conditional is read from φ (β already folded in) and only the
    /// local document-topic counts evolve. α is unchanged. θ comes from
    /// the final-iteration local counts.
    pub fn transform(
        &self,
        dtm: &Array2<f64>,
        n_iterations: usize,
        seed: u64,
    ) -> Result<Array2<f64>, LdaError> {
        let phi = self.phi()?;
        if dtm.ncols() != self.n_terms {
            return Err(LdaError::InvalidParameter(format!(
                "expected {} vocabulary columns, got {}",
                self.n_terms,
                dtm.ncols()
            )));
        }
        if n_iterations < 1 {
            return Err(LdaError::InvalidParameter(
                "n_iterations must be at least 1".into(),
            ));
        }

        let docs = Self::expand_documents(dtm)?;
        let n_topics = self.config.n_topics;
        let alpha = self.config.alpha;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut theta = Array2::zeros((docs.len(), n_topics));
        let mut weights = vec![0.0f64; n_topics];

        for (doc_idx, doc) in docs.iter().enumerate() {
            let mut local = vec![0.0f64; n_topics];
            let mut labels = Vec::with_capacity(doc.len());
            for _ in doc {
                let topic = rng.gen_range(0..n_topics);
                labels.push(topic);
                local[topic] += 1.0;
            }

            for _ in 0..n_iterations {
                for (position, &word_idx) in doc.iter().enumerate() {
                    let old_topic = labels[position];
                    local[old_topic] -= 1.0;

                    for (topic, w) in weights.iter_mut().enumerate() {
                        *w = (local[topic] + alpha) * phi[[topic, word_idx]];
                    }

                    let new_topic = sample_categorical(&weights, &mut rng).ok_or(
                        LdaError::NumericInstability {
                            doc: doc_idx,
                            position,
                        },
                    )?;

                    labels[position] = new_topic;
                    local[new_topic] += 1.0;
                }
            }

            let denom = doc.len() as f64 + n_topics as f64 * alpha;
            for topic in 0..n_topics {
                theta[[doc_idx, topic]] = (local[topic] + alpha) / denom;
            }
        }

        Ok(theta)
    }

    /// Log-likelihood of the counts in `dtm` under the trained φ and the
    /// given θ: Σ count(d,w) · ln Σ_k θ[d][k]·φ[k][w].
    pub fn log_likelihood(&self, dtm: &Array2<f64>, theta: &Array2<f64>) -> Result<f64, LdaError> {
        let phi = self.phi()?;
        if theta.nrows() != dtm.nrows() || theta.ncols() != self.config.n_topics {
            return Err(LdaError::InvalidParameter(
                "theta shape does not match dtm rows and topic count".into(),
            ));
        }

        let mut ll = 0.0;
        for doc_idx in 0..dtm.nrows() {
            for word_idx in 0..dtm.ncols().min(self.n_terms) {
                let count = dtm[[doc_idx, word_idx]];
                if count > 0.0 {
                    let mut prob = 0.0;
                    for topic in 0..self.config.n_topics {
                        prob += theta[[doc_idx, topic]] * phi[[topic, word_idx]];
                    }
                    ll += count * prob.ln();
                }
            }
        }
        Ok(ll)
    }

    /// Perplexity of the counts in `dtm` under the trained φ and the given
    /// θ: exp(−LL / token count). Lower is better; always ≥ 1.
    pub fn perplexity(&self, dtm: &Array2<f64>, theta: &Array2<f64>) -> Result<f64, LdaError> {
        let ll = self.log_likelihood(dtm, theta)?;
        let total_tokens: f64 = dtm.iter().sum();
        if total_tokens <= 0.0 {
            return Err(LdaError::InvalidParameter(
                "held-out matrix has no tokens".into(),
            ));
        }
        Ok((-ll / total_tokens).exp())
    }

    /// Top `n` terms per topic by φ, labeled with the given term list.
    pub fn top_terms(
        &self,
        terms: &[String],
        n: usize,
    ) -> Result<Vec<Vec<(String, f64)>>, LdaError> {
        let phi = self.phi()?;
        let mut topics = Vec::with_capacity(self.config.n_topics);
        for topic in 0..self.config.n_topics {
            let mut pairs: Vec<(usize, f64)> =
                (0..self.n_terms).map(|w| (w, phi[[topic, w]])).collect();
            pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
            let top = pairs
                .into_iter()
                .take(n)
                .filter_map(|(w, p)| terms.get(w).map(|t| (t.clone(), p)))
                .collect();
            topics.push(top);
        }
        Ok(topics)
    }

    /// Dominant topic per training document
    pub fn dominant_topics(&self) -> Result<Vec<usize>, LdaError> {
        let theta = self.theta()?;
        let mut dominant = Vec::with_capacity(theta.nrows());
        for doc_idx in 0..theta.nrows() {
            let mut best = 0;
            for topic in 1..theta.ncols() {
                if theta[[doc_idx, topic]] > theta[[doc_idx, best]] {
                    best = topic;
                }
            }
            dominant.push(best);
        }
        Ok(dominant)
    }
}

/// Draw an index from unnormalized categorical weights via cumulative sum.
/// Returns None when the total mass is non-finite or non-positive, which
/// callers report as a numeric-instability failure.
fn sample_categorical(weights: &[f64], rng: &mut StdRng) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let threshold = rng.gen::<f64>() * total;
    let mut cumsum = 0.0;
    for (idx, &w) in weights.iter().enumerate() {
        cumsum += w;
        if cumsum >= threshold {
            return Some(idx);
        }
    }
    Some(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster_dtm() -> Array2<f64> {
        // Docs 0-2 use terms 0-2, docs 3-5 use terms 3-5.
        Array2::from_shape_vec(
            (6, 6),
            vec![
                3.0, 2.0, 2.0, 0.0, 0.0, 0.0, //
                2.0, 3.0, 1.0, 0.0, 0.0, 0.0, //
                1.0, 2.0, 3.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 3.0, 2.0, 2.0, //
                0.0, 0.0, 0.0, 2.0, 3.0, 1.0, //
                0.0, 0.0, 0.0, 1.0, 2.0, 3.0, //
            ],
        )
        .unwrap()
    }

    fn fitted(dtm: &Array2<f64>, k: usize, seed: u64) -> Lda {
        let config = LdaConfig::new(k)
            .alpha(0.1)
            .beta(0.01)
            .n_iterations(100)
            .burn_in(20)
            .seed(seed);
        let mut lda = Lda::new(config).unwrap();
        lda.fit(dtm).unwrap();
        lda
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            Lda::new(LdaConfig::new(0)),
            Err(LdaError::InvalidParameter(_))
        ));
        assert!(matches!(
            Lda::new(LdaConfig::new(2).alpha(0.0)),
            Err(LdaError::InvalidParameter(_))
        ));
        assert!(matches!(
            Lda::new(LdaConfig::new(2).beta(-0.5)),
            Err(LdaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_empty_matrix() {
        let mut lda = Lda::new(LdaConfig::new(2)).unwrap();
        let empty = Array2::zeros((0, 4));
        assert!(matches!(
            lda.fit(&empty),
            Err(LdaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_empty_document() {
        let dtm = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 0.0, 0.0, 2.0, 1.0]).unwrap();
        let mut lda = Lda::new(LdaConfig::new(2)).unwrap();
        match lda.fit(&dtm) {
            Err(LdaError::EmptyDocument { doc }) => assert_eq!(doc, 1),
            other => panic!("expected EmptyDocument, got {:?}", other.err()),
        }
    }

    #[test]
    fn accessors_fail_before_fit() {
        let lda = Lda::new(LdaConfig::new(2)).unwrap();
        assert!(matches!(lda.theta(), Err(LdaError::NotFitted)));
        assert!(matches!(lda.phi(), Err(LdaError::NotFitted)));
    }

    #[test]
    fn theta_and_phi_rows_are_stochastic() {
        // 4 docs, 5 terms, K=2, alpha=0.1, beta=0.01, seed=42,
        // 10 burn-in + 50 retained iterations.
        let dtm = Array2::from_shape_vec(
            (4, 5),
            vec![
                2.0, 1.0, 0.0, 0.0, 1.0, //
                0.0, 2.0, 1.0, 1.0, 0.0, //
                1.0, 0.0, 2.0, 0.0, 1.0, //
                0.0, 1.0, 0.0, 2.0, 2.0, //
            ],
        )
        .unwrap();
        let config = LdaConfig::new(2)
            .alpha(0.1)
            .beta(0.01)
            .n_iterations(50)
            .burn_in(10)
            .seed(42);
        let mut lda = Lda::new(config).unwrap();
        lda.fit(&dtm).unwrap();

        let theta = lda.theta().unwrap();
        let phi = lda.phi().unwrap();
        assert_eq!(theta.shape(), &[4, 2]);
        assert_eq!(phi.shape(), &[2, 5]);

        for row in theta.rows() {
            let sum: f64 = row.sum();
            assert!((sum - 1.0).abs() < 1e-6, "theta row sums to {}", sum);
            assert!(row.iter().all(|&p| p > 0.0));
        }
        for row in phi.rows() {
            let sum: f64 = row.sum();
            assert!((sum - 1.0).abs() < 1e-6, "phi row sums to {}", sum);
            assert!(row.iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn count_matrices_stay_consistent_with_assignments() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 7);
        let state = lda.state.as_ref().unwrap();

        // Rebuild the counts from the assignment state and compare.
        for (doc_idx, labels) in state.z.iter().enumerate() {
            assert_eq!(labels.len() as f64, lda.doc_lengths[doc_idx]);
            for topic in 0..2 {
                let from_z = labels.iter().filter(|&&t| t == topic).count() as f64;
                assert_eq!(from_z, state.ndk[[doc_idx, topic]]);
            }
        }
        for topic in 0..2 {
            let row_sum: f64 = state.nkw.row(topic).sum();
            assert_eq!(row_sum, state.nk[topic]);
            let doc_sum: f64 = state.ndk.column(topic).sum();
            assert_eq!(doc_sum, state.nk[topic]);
        }
    }

    #[test]
    fn identical_seeds_give_identical_assignments() {
        let dtm = two_cluster_dtm();
        let a = fitted(&dtm, 3, 123);
        let b = fitted(&dtm, 3, 123);
        assert_eq!(a.state.as_ref().unwrap().z, b.state.as_ref().unwrap().z);

        let c = fitted(&dtm, 3, 124);
        assert_ne!(a.state.as_ref().unwrap().z, c.state.as_ref().unwrap().z);
    }

    #[test]
    fn separates_disjoint_clusters() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 42);
        let dominant = lda.dominant_topics().unwrap();

        assert_eq!(dominant[0], dominant[1]);
        assert_eq!(dominant[1], dominant[2]);
        assert_eq!(dominant[3], dominant[4]);
        assert_eq!(dominant[4], dominant[5]);
        assert_ne!(dominant[0], dominant[3]);
    }

    #[test]
    fn transform_estimates_held_out_theta() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 42);

        let held_out = Array2::from_shape_vec((1, 6), vec![2.0, 2.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        let theta = lda.transform(&held_out, 20, 9).unwrap();
        assert_eq!(theta.shape(), &[1, 2]);
        let sum: f64 = theta.row(0).sum();
        assert!((sum - 1.0).abs() < 1e-6);

        // The held-out doc uses only cluster-one terms, so it should lean
        // the same way as the cluster-one training docs.
        let dominant = lda.dominant_topics().unwrap();
        let held_out_topic = if theta[[0, 0]] > theta[[0, 1]] { 0 } else { 1 };
        assert_eq!(held_out_topic, dominant[0]);
    }

    #[test]
    fn transform_rejects_empty_document() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 42);
        let held_out = Array2::zeros((1, 6));
        assert!(matches!(
            lda.transform(&held_out, 20, 9),
            Err(LdaError::EmptyDocument { doc: 0 })
        ));
    }

    #[test]
    fn perplexity_is_finite_and_at_least_one() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 42);
        let theta = lda.theta().unwrap();
        let perplexity = lda.perplexity(&dtm, &theta).unwrap();
        assert!(perplexity.is_finite());
        assert!(perplexity >= 1.0);
    }

    #[test]
    fn top_terms_are_labeled_and_sorted() {
        let dtm = two_cluster_dtm();
        let lda = fitted(&dtm, 2, 42);
        let terms: Vec<String> = ["tax", "vote", "bill", "river", "park", "trail"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let topics = lda.top_terms(&terms, 3).unwrap();
        assert_eq!(topics.len(), 2);
        for topic in &topics {
            assert_eq!(topic.len(), 3);
            assert!(topic[0].1 >= topic[1].1);
            assert!(topic[1].1 >= topic[2].1);
        }
    }
}
