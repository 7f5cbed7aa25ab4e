//! # Lexstat
//!
//! A small lexical statistics library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Character-class counts (letters, whitespace, newlines, special symbols)
//! - Word counting and word-class classification (pronouns, prepositions, articles)
//! - Pluggable tokenizers
//! - Timestamped interaction logging for UI collaborators

pub mod analysis;
pub mod cli;
pub mod error;
pub mod interaction;

pub mod prelude {
    pub use crate::analysis::analyzer::{AnalysisReport, TextAnalyzer};
    pub use crate::error::{LexstatError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
