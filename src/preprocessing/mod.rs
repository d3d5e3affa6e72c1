//! Corpus preprocessing
//!
//! Tokenization, stopword filtering, n-gram formation, and count
//! vectorization into a document-term matrix.

pub mod tokenizer;
pub mod vectorizer;
