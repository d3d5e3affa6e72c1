//! # Topic analytics
//!
//! Descriptive text analytics building blocks: corpus preprocessing,
//! document-term matrix construction, Latent Dirichlet Allocation via
//! collapsed Gibbs sampling, and cross-validated selection of the topic
//! count.
//!
//! ## Modules
//!
//! - `preprocessing` - tokenization, n-grams, and count vectorization
//! - `models` - topic models (LDA)
//! - `selection` - k-fold cross-validation over candidate topic counts
//! - `utils` - dataset IO and score aggregation

pub mod models;
pub mod preprocessing;
pub mod selection;
pub mod utils;

pub use models::lda::{Lda, LdaConfig, LdaError};
pub use models::TopicModel;
pub use preprocessing::tokenizer::Tokenizer;
pub use preprocessing::vectorizer::{CountVectorizer, DocumentTermMatrix};
pub use selection::{CrossValidator, FoldScore, SelectionError};
