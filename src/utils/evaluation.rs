//! Aggregation of cross-validation scores
//!
//! Turns the per-(K, fold) records produced by the harness into per-K
//! summaries for topic-count selection.

use crate::selection::FoldScore;

/// Per-K summary of fold scores
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    /// Candidate topic count
    pub k: usize,
    /// Number of folds aggregated
    pub n_folds: usize,
    pub mean_perplexity: f64,
    /// Population standard deviation across folds; spread across folds
    /// indicates stability of the candidate
    pub std_perplexity: f64,
    pub min_perplexity: f64,
    pub max_perplexity: f64,
    pub mean_log_likelihood: f64,
}

impl ScoreSummary {
    fn from_group(k: usize, group: &[&FoldScore]) -> Self {
        let n = group.len() as f64;
        let mean = group.iter().map(|s| s.perplexity).sum::<f64>() / n;
        let variance = group
            .iter()
            .map(|s| (s.perplexity - mean).powi(2))
            .sum::<f64>()
            / n;
        let min = group
            .iter()
            .map(|s| s.perplexity)
            .fold(f64::INFINITY, f64::min);
        let max = group
            .iter()
            .map(|s| s.perplexity)
            .fold(f64::NEG_INFINITY, f64::max);
        let mean_ll = group.iter().map(|s| s.log_likelihood).sum::<f64>() / n;

        Self {
            k,
            n_folds: group.len(),
            mean_perplexity: mean,
            std_perplexity: variance.sqrt(),
            min_perplexity: min,
            max_perplexity: max,
            mean_log_likelihood: mean_ll,
        }
    }

    /// One-line rendering for console output
    pub fn render(&self) -> String {
        format!(
            "K={:<3} perplexity mean={:.2} (+/- {:.2}) min={:.2} max={:.2} ll mean={:.2}",
            self.k,
            self.mean_perplexity,
            self.std_perplexity * 2.0,
            self.min_perplexity,
            self.max_perplexity,
            self.mean_log_likelihood
        )
    }
}

/// Group fold scores by K (in first-appearance order) and summarize each
/// group.
pub fn summarize(scores: &[FoldScore]) -> Vec<ScoreSummary> {
    let mut order: Vec<usize> = Vec::new();
    for score in scores {
        if !order.contains(&score.k) {
            order.push(score.k);
        }
    }

    order
        .into_iter()
        .map(|k| {
            let group: Vec<&FoldScore> = scores.iter().filter(|s| s.k == k).collect();
            ScoreSummary::from_group(k, &group)
        })
        .collect()
}

/// Pick the candidate with the lowest mean held-out perplexity.
pub fn best_k(summaries: &[ScoreSummary]) -> Option<usize> {
    summaries
        .iter()
        .min_by(|a, b| a.mean_perplexity.total_cmp(&b.mean_perplexity))
        .map(|s| s.k)
}
