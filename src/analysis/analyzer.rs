//! Text analyzer producing lexical statistics.
//!
//! [`TextAnalyzer`] is the main entry point of the library. Given a raw input
//! string it computes character-class counts over the raw text and word-class
//! counts over a classification tokenization, returning everything as one
//! [`AnalysisReport`].
//!
//! # Tokenizer discrepancy
//!
//! The word count and the word-class counts use different tokenizations on
//! purpose. Words are whitespace-delimited, while classification tokens are
//! lowercase alphabetic runs at word boundaries. A string like `don't` is one
//! word but two classification tokens (`don`, `t`). The original behavior is
//! the contract here; do not unify the tokenizers.
//!
//! # Examples
//!
//! ```
//! use lexstat::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let report = analyzer.analyze("The cat sat on the mat.").unwrap();
//!
//! assert_eq!(report.words, 6);
//! assert_eq!(report.articles, 2);
//! assert_eq!(report.prepositions, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::WordClassList;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
use crate::error::{LexstatError, Result};

/// Lexical statistics for one input text.
///
/// A pure value produced fresh per call; all fields are non-negative counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// ASCII letters (`a`-`z`, `A`-`Z`) in the raw text
    pub letters: usize,

    /// Whitespace-delimited words in the trimmed text
    pub words: usize,

    /// Whitespace characters (spaces, tabs, newlines) in the raw text
    pub spaces: usize,

    /// Line feed characters in the raw text
    pub newlines: usize,

    /// Characters that are neither ASCII alphanumeric nor whitespace
    pub special_symbols: usize,

    /// Classification tokens found in the pronoun list
    pub pronouns: usize,

    /// Classification tokens found in the preposition list
    pub prepositions: usize,

    /// Classification tokens found in the article list
    pub articles: usize,
}

/// Analyzer that computes an [`AnalysisReport`] for a text.
///
/// Holds only immutable state (two tokenizers and three word-class lists),
/// performs no I/O, and may be shared freely across threads. Each call to
/// [`analyze`](Self::analyze) is independent; identical inputs yield
/// identical reports.
#[derive(Clone, Debug)]
pub struct TextAnalyzer {
    word_tokenizer: WhitespaceTokenizer,
    class_tokenizer: WordBoundaryTokenizer,
    pronouns: WordClassList,
    prepositions: WordClassList,
    articles: WordClassList,
}

impl TextAnalyzer {
    /// Create a new analyzer with the built-in word-class lists.
    pub fn new() -> Result<Self> {
        Ok(TextAnalyzer {
            word_tokenizer: WhitespaceTokenizer::new(),
            class_tokenizer: WordBoundaryTokenizer::new()?,
            pronouns: WordClassList::pronouns(),
            prepositions: WordClassList::prepositions(),
            articles: WordClassList::articles(),
        })
    }

    /// Analyze the given text and return its lexical statistics.
    ///
    /// # Errors
    ///
    /// Returns [`LexstatError::InvalidInput`] when the text is empty or
    /// whitespace-only. The character counts are computed over the raw,
    /// untrimmed text; only the emptiness check trims.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(LexstatError::invalid_input(
                "text is empty or whitespace-only",
            ));
        }

        let mut report = AnalysisReport::default();

        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                report.letters += 1;
            }
            if ch.is_whitespace() {
                report.spaces += 1;
            } else if !ch.is_ascii_alphanumeric() {
                report.special_symbols += 1;
            }
            if ch == '\n' {
                report.newlines += 1;
            }
        }

        report.words = self.word_tokenizer.tokenize(text)?.count();

        for token in self.class_tokenizer.tokenize(text)? {
            if self.pronouns.contains(&token.text) {
                report.pronouns += 1;
            }
            if self.prepositions.contains(&token.text) {
                report.prepositions += 1;
            }
            if self.articles.contains(&token.text) {
                report.articles += 1;
            }
        }

        Ok(report)
    }
}
