//! Utility modules
//!
//! - `io` - dataset loading
//! - `evaluation` - cross-validation score aggregation

pub mod evaluation;
pub mod io;
