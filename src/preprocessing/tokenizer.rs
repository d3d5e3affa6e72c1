//! Tokenization and text normalization
//!
//! Cleans raw text (URLs, markup, punctuation), splits it into word
//! tokens, filters stopwords and out-of-range lengths, and optionally
//! forms n-grams.

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Compiled cleaning patterns shared by every tokenizer instance
struct CleaningPatterns {
    urls: Regex,
    markup: Regex,
    punctuation: Regex,
    numbers: Regex,
    whitespace: Regex,
}

impl CleaningPatterns {
    fn compile() -> Self {
        // Literal patterns; compilation cannot fail.
        Self {
            urls: Regex::new(r"https?://\S+").unwrap(),
            markup: Regex::new(r"<[^>]+>").unwrap(),
            punctuation: Regex::new(r"[^\w\s]").unwrap(),
            numbers: Regex::new(r"\b\d+\b").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }
}

/// Configurable word tokenizer
pub struct Tokenizer {
    stop_words: HashSet<String>,
    min_length: usize,
    max_length: usize,
    lowercase: bool,
    remove_numbers: bool,
    patterns: CleaningPatterns,
}

impl Tokenizer {
    /// Tokenizer with the default English stopword list
    pub fn new() -> Self {
        Self {
            stop_words: default_stop_words(),
            min_length: 2,
            max_length: 50,
            lowercase: true,
            remove_numbers: true,
            patterns: CleaningPatterns::compile(),
        }
    }

    /// Tokenizer tuned for short social-media posts: strips retweet
    /// markers, mention handles, and entity-escape residue on top of the
    /// default stopwords.
    pub fn for_tweets() -> Self {
        let mut tokenizer = Self::new();
        tokenizer.add_stop_words(&["rt", "amp", "via", "follow", "thread"]);
        tokenizer
    }

    /// Add stopwords to the filter set
    pub fn add_stop_words(&mut self, words: &[&str]) {
        for word in words {
            self.stop_words.insert(word.to_lowercase());
        }
    }

    /// Set the minimum token length
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Set the maximum token length
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    /// Enable or disable lowercasing
    pub fn lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    /// Enable or disable digit-token removal
    pub fn remove_numbers(mut self, enable: bool) -> Self {
        self.remove_numbers = enable;
        self
    }

    /// Normalize raw text: strip URLs, markup, and punctuation, collapse
    /// whitespace, optionally lowercase and drop numbers.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = self.patterns.urls.replace_all(text, " ").to_string();
        cleaned = self.patterns.markup.replace_all(&cleaned, " ").to_string();
        cleaned = self
            .patterns
            .punctuation
            .replace_all(&cleaned, " ")
            .to_string();

        if self.remove_numbers {
            cleaned = self.patterns.numbers.replace_all(&cleaned, " ").to_string();
        }
        if self.lowercase {
            cleaned = cleaned.to_lowercase();
        }

        self.patterns
            .whitespace
            .replace_all(&cleaned, " ")
            .trim()
            .to_string()
    }

    /// Tokenize one document into filtered word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .unicode_words()
            .filter(|word| {
                let len = word.len();
                len >= self.min_length
                    && len <= self.max_length
                    && !self.stop_words.contains(&word.to_lowercase())
            })
            .map(|s| s.to_string())
            .collect()
    }

    /// Tokenize a whole corpus, one token list per document
    pub fn tokenize_documents<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<String>> {
        documents
            .iter()
            .map(|doc| self.tokenize(doc.as_ref()))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn default_stop_words() -> HashSet<String> {
    let words = [
        "a", "an", "the", "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she",
        "her", "it", "its", "they", "them", "their", "what", "which", "who", "this", "that",
        "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "should", "could", "can", "may", "must",
        "shall", "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about",
        "between", "during", "before", "after", "above", "below", "up", "down", "out", "off",
        "over", "under", "again", "then", "once", "and", "but", "or", "nor", "so", "not", "only",
        "than", "when", "where", "while", "if", "because", "as", "until", "all", "each", "few",
        "more", "most", "other", "some", "such", "no", "any", "own", "same", "too", "very",
        "just", "also", "now", "how", "why", "here", "there",
    ];
    words.iter().map(|s| s.to_string()).collect()
}

/// Sliding-window n-gram generator; joins window tokens with underscores.
pub struct NGramGenerator {
    n: usize,
}

impl NGramGenerator {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// N-grams of one token list; empty when the document is shorter
    /// than the window.
    pub fn generate(&self, tokens: &[String]) -> Vec<String> {
        if tokens.len() < self.n {
            return vec![];
        }
        tokens
            .windows(self.n)
            .map(|window| window.join("_"))
            .collect()
    }

    /// Append n-grams to each document's unigram tokens
    pub fn augment_documents(&self, tokenized_docs: &mut [Vec<String>]) {
        for doc in tokenized_docs.iter_mut() {
            let ngrams = self.generate(doc);
            doc.extend(ngrams);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_stopwords_and_short_tokens() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("The committee is voting on a budget bill.");

        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"is".to_string()));
        assert!(tokens.contains(&"committee".to_string()));
        assert!(tokens.contains(&"voting".to_string()));
        assert!(tokens.contains(&"budget".to_string()));
    }

    #[test]
    fn strips_urls_and_punctuation() {
        let tokenizer = Tokenizer::new();
        let cleaned = tokenizer.clean("Read the report at https://example.gov/report!");
        assert!(!cleaned.contains("https"));
        assert!(!cleaned.contains('!'));
    }

    #[test]
    fn tweet_preset_drops_retweet_markers() {
        let tokenizer = Tokenizer::for_tweets();
        let tokens = tokenizer.tokenize("RT via @sen_office: hearing on water rights today");
        assert!(!tokens.contains(&"rt".to_string()));
        assert!(!tokens.contains(&"via".to_string()));
        assert!(tokens.contains(&"hearing".to_string()));
        assert!(tokens.contains(&"water".to_string()));
    }

    #[test]
    fn number_removal_is_configurable() {
        let keep = Tokenizer::new().remove_numbers(false).min_length(1);
        assert!(keep.tokenize("vote 227 passed").contains(&"227".to_string()));

        let drop = Tokenizer::new().min_length(1);
        assert!(!drop.tokenize("vote 227 passed").contains(&"227".to_string()));
    }

    #[test]
    fn bigrams_join_adjacent_tokens() {
        let generator = NGramGenerator::new(2);
        let tokens = vec![
            "clean".to_string(),
            "water".to_string(),
            "act".to_string(),
        ];
        let ngrams = generator.generate(&tokens);
        assert_eq!(ngrams, vec!["clean_water", "water_act"]);
    }

    #[test]
    fn augment_appends_ngrams_per_document() {
        let generator = NGramGenerator::new(2);
        let mut docs = vec![vec!["tax".to_string(), "reform".to_string()]];
        generator.augment_documents(&mut docs);
        assert_eq!(docs[0].len(), 3);
        assert!(docs[0].contains(&"tax_reform".to_string()));
    }
}
