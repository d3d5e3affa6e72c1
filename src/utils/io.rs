//! Document dataset loading

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single document with a caller-assigned id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// A collection of documents loaded from disk or built in memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDataset {
    pub documents: Vec<Document>,
}

impl DocumentDataset {
    /// Build a dataset from plain texts, assigning positional ids
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let documents = texts
            .iter()
            .enumerate()
            .map(|(idx, text)| Document {
                id: format!("doc-{idx}"),
                text: text.as_ref().to_string(),
            })
            .collect();
        Self { documents }
    }

    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Document texts in dataset order
    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
