//! Text analysis module for lexstat.
//!
//! This module provides the core analysis functionality: tokenization,
//! word-class lexicons, and the statistics-producing analyzer.

pub mod analyzer;
pub mod lexicon;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use lexicon::*;
pub use token::*;
pub use tokenizer::*;
