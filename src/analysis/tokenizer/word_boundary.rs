//! Word-boundary tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{LexstatError, Result};

/// The default extraction pattern: lowercase alphabetic runs at word boundaries.
const WORD_PATTERN: &str = r"\b[a-z]+\b";

/// A tokenizer that lowercases the input and extracts alphabetic tokens at
/// regex word boundaries.
///
/// This is the classification tokenizer: its output feeds the word-class
/// lookups. The `\b` anchors mean letter runs adjacent to digits or
/// underscores are not extracted at all (`abc1` yields nothing), and
/// punctuation splits words (`don't` yields `don` and `t`). Both behaviors
/// are intentional and differ from the whitespace word count.
///
/// Token offsets refer to the lowercased copy of the input, which for
/// non-ASCII text may differ in length from the original.
#[derive(Clone, Debug)]
pub struct WordBoundaryTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordBoundaryTokenizer {
    /// Create a new word-boundary tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new word-boundary tokenizer with a custom pattern.
    ///
    /// The pattern is applied to the lowercased input.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexstatError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordBoundaryTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordBoundaryTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&lowered)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_boundary"
    }
}
