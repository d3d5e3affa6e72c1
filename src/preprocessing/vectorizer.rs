//! Count vectorization (bag of words)
//!
//! Converts tokenized documents into a document-term count matrix with a
//! stable, alphabetically ordered vocabulary. Terms can be filtered by
//! document frequency and capped to a maximum vocabulary size.

use hashbrown::HashMap;
use ndarray::Array2;
use std::collections::HashSet;

/// Bag-of-words vectorizer
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    min_df: usize,
    max_df_ratio: f64,
    max_features: Option<usize>,
    is_fitted: bool,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            min_df: 1,
            max_df_ratio: 1.0,
            max_features: None,
            is_fitted: false,
        }
    }

    /// Set the minimum document frequency for a term to be kept
    pub fn min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the maximum document-frequency ratio for a term to be kept
    pub fn max_df_ratio(mut self, ratio: f64) -> Self {
        self.max_df_ratio = ratio;
        self
    }

    /// Cap the vocabulary to the most frequent terms
    pub fn max_features(mut self, max: usize) -> Self {
        self.max_features = Some(max);
        self
    }

    /// Build the vocabulary from tokenized documents.
    ///
    /// Terms are filtered by document frequency, truncated to
    /// `max_features` by corpus frequency, then sorted alphabetically so
    /// term indices are stable across runs.
    pub fn fit(&mut self, tokenized_docs: &[Vec<String>]) {
        let n_docs = tokenized_docs.len();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut total_freq: HashMap<String, usize> = HashMap::new();
        for doc in tokenized_docs {
            let unique: HashSet<&String> = doc.iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            for term in doc {
                *total_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let max_df = (n_docs as f64 * self.max_df_ratio) as usize;
        let mut kept: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && *df <= max_df)
            .map(|(term, _)| {
                let freq = total_freq.get(&term).copied().unwrap_or(0);
                (term, freq)
            })
            .collect();

        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(max) = self.max_features {
            kept.truncate(max);
        }
        kept.sort_by(|a, b| a.0.cmp(&b.0));

        self.vocabulary.clear();
        self.terms.clear();
        for (idx, (term, _)) in kept.into_iter().enumerate() {
            self.vocabulary.insert(term.clone(), idx);
            self.terms.push(term);
        }

        self.is_fitted = true;
    }

    /// Count matrix (documents x vocabulary) for tokenized documents.
    /// Out-of-vocabulary tokens are ignored.
    pub fn transform(&self, tokenized_docs: &[Vec<String>]) -> Array2<f64> {
        assert!(self.is_fitted, "vectorizer must be fitted before transform");

        let mut matrix = Array2::zeros((tokenized_docs.len(), self.vocabulary.len()));
        for (doc_idx, doc) in tokenized_docs.iter().enumerate() {
            for term in doc {
                if let Some(&term_idx) = self.vocabulary.get(term) {
                    matrix[[doc_idx, term_idx]] += 1.0;
                }
            }
        }
        matrix
    }

    /// Fit the vocabulary and return the full document-term matrix
    pub fn fit_transform(&mut self, tokenized_docs: &[Vec<String>]) -> DocumentTermMatrix {
        self.fit(tokenized_docs);
        let matrix = self.transform(tokenized_docs);
        DocumentTermMatrix {
            matrix,
            vocabulary: self.vocabulary.clone(),
            terms: self.terms.clone(),
        }
    }

    /// Term-to-index mapping
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Index-to-term list
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Document-term count matrix with its vocabulary
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    /// Counts, documents x terms
    pub matrix: Array2<f64>,
    /// Term to column index
    pub vocabulary: HashMap<String, usize>,
    /// Column index to term
    pub terms: Vec<String>,
}

impl DocumentTermMatrix {
    pub fn n_documents(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_terms(&self) -> usize {
        self.matrix.ncols()
    }

    /// Indices of documents that lost every token during preprocessing.
    /// The sampler rejects such rows, so callers drop them first.
    pub fn empty_documents(&self) -> Vec<usize> {
        (0..self.matrix.nrows())
            .filter(|&doc| self.matrix.row(doc).sum() == 0.0)
            .collect()
    }

    /// Copy of the matrix without the given document rows
    pub fn without_documents(&self, drop: &[usize]) -> DocumentTermMatrix {
        let keep: Vec<usize> = (0..self.matrix.nrows())
            .filter(|doc| !drop.contains(doc))
            .collect();
        DocumentTermMatrix {
            matrix: self.matrix.select(ndarray::Axis(0), &keep),
            vocabulary: self.vocabulary.clone(),
            terms: self.terms.clone(),
        }
    }

    /// Top terms of one document by count
    pub fn top_terms_for_document(&self, doc_idx: usize, n: usize) -> Vec<(String, f64)> {
        if doc_idx >= self.n_documents() {
            return vec![];
        }

        let row = self.matrix.row(doc_idx);
        let mut scored: Vec<(usize, f64)> = row
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0.0)
            .map(|(idx, &count)| (idx, count))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(n);

        scored
            .into_iter()
            .filter_map(|(idx, count)| self.terms.get(idx).map(|t| (t.clone(), count)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Vec<String>> {
        let raw = vec![
            vec!["budget", "vote", "budget"],
            vec!["vote", "hearing"],
            vec!["budget", "hearing", "amendment"],
        ];
        raw.into_iter()
            .map(|d| d.into_iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn counts_and_vocabulary_are_stable() {
        let mut vectorizer = CountVectorizer::new();
        let dtm = vectorizer.fit_transform(&docs());

        assert_eq!(dtm.n_documents(), 3);
        assert_eq!(dtm.n_terms(), 4);
        // Alphabetical: amendment, budget, hearing, vote.
        assert_eq!(dtm.terms, vec!["amendment", "budget", "hearing", "vote"]);
        assert_eq!(dtm.matrix[[0, 1]], 2.0);
        assert_eq!(dtm.matrix[[0, 3]], 1.0);
        assert_eq!(dtm.matrix[[2, 0]], 1.0);
    }

    #[test]
    fn min_df_filters_rare_terms() {
        let mut vectorizer = CountVectorizer::new().min_df(2);
        let dtm = vectorizer.fit_transform(&docs());
        // amendment appears in one document only.
        assert!(!dtm.terms.contains(&"amendment".to_string()));
        assert!(dtm.terms.contains(&"budget".to_string()));
    }

    #[test]
    fn max_features_keeps_most_frequent_terms() {
        let mut vectorizer = CountVectorizer::new().max_features(2);
        let dtm = vectorizer.fit_transform(&docs());
        assert_eq!(dtm.n_terms(), 2);
        // budget has the highest corpus frequency.
        assert!(dtm.terms.contains(&"budget".to_string()));
    }

    #[test]
    fn transform_ignores_unknown_terms() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&docs());

        let new_doc = vec![vec!["budget".to_string(), "filibuster".to_string()]];
        let matrix = vectorizer.transform(&new_doc);
        let total: f64 = matrix.row(0).sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn empty_documents_are_reported_and_removable() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&docs());

        let with_empty = vec![
            vec!["budget".to_string()],
            vec!["filibuster".to_string()], // fully out of vocabulary
        ];
        let matrix = vectorizer.transform(&with_empty);
        let dtm = DocumentTermMatrix {
            matrix,
            vocabulary: vectorizer.vocabulary().clone(),
            terms: vectorizer.terms().to_vec(),
        };

        assert_eq!(dtm.empty_documents(), vec![1]);
        let cleaned = dtm.without_documents(&[1]);
        assert_eq!(cleaned.n_documents(), 1);
        assert!(cleaned.empty_documents().is_empty());
    }

    #[test]
    fn top_terms_sorted_by_count() {
        let mut vectorizer = CountVectorizer::new();
        let dtm = vectorizer.fit_transform(&docs());
        let top = dtm.top_terms_for_document(0, 2);
        assert_eq!(top[0].0, "budget");
        assert_eq!(top[0].1, 2.0);
    }
}
