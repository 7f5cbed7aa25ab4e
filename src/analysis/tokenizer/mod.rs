//! Tokenizer implementations for text analysis.
//!
//! This module provides the tokenization strategies used by the analyzer.
//! The two built-in tokenizers deliberately use different token definitions:
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters;
//!   this is the definition behind the word count.
//! - [`word_boundary::WordBoundaryTokenizer`] - Lowercases the text and
//!   extracts alphabetic tokens at regex word boundaries; this is the
//!   definition behind word-class classification.
//!
//! The two definitions do not always agree on token counts (`don't` is one
//! whitespace token but two word-boundary tokens). Keeping both is
//! intentional; see the analyzer documentation.
//!
//! # Examples
//!
//! ```
//! use lexstat::analysis::tokenizer::Tokenizer;
//! use lexstat::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexstat::analysis::token::{Token, TokenStream};
/// use lexstat::analysis::tokenizer::Tokenizer;
/// use lexstat::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to tokenize
    ///
    /// # Returns
    ///
    /// A `TokenStream` (boxed iterator of tokens) on success, or an error if
    /// tokenization fails.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod whitespace;
pub mod word_boundary;
