//! Word-class lexicons for classification counting.
//!
//! This module provides the fixed word lists used to classify tokens as
//! pronouns, prepositions, or articles. The lists are English-only, fixed at
//! process start, and never mutated. Each list is exposed as a
//! [`WordClassList`] backed by a shared `HashSet` so membership checks are
//! O(1).
//!
//! # Examples
//!
//! ```
//! use lexstat::analysis::lexicon::WordClassList;
//!
//! let pronouns = WordClassList::pronouns();
//! assert!(pronouns.contains("myself"));
//! assert!(!pronouns.contains("dog"));
//!
//! let articles = WordClassList::articles();
//! assert_eq!(articles.len(), 3);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// English pronouns (personal, possessive, reflexive, demonstrative,
/// interrogative/relative).
const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours",
    "ourselves", "they", "them", "their", "theirs", "themselves", "this", "that", "these", "those",
    "who", "whom", "whose", "which", "what",
];

/// Common English prepositions.
const PREPOSITIONS: &[&str] = &[
    "about",
    "above",
    "across",
    "after",
    "against",
    "along",
    "amid",
    "among",
    "around",
    "at",
    "before",
    "behind",
    "below",
    "beneath",
    "beside",
    "between",
    "beyond",
    "by",
    "concerning",
    "considering",
    "despite",
    "down",
    "during",
    "except",
    "for",
    "from",
    "in",
    "inside",
    "into",
    "like",
    "near",
    "of",
    "off",
    "on",
    "onto",
    "out",
    "outside",
    "over",
    "past",
    "regarding",
    "round",
    "since",
    "through",
    "throughout",
    "to",
    "toward",
    "under",
    "underneath",
    "until",
    "unto",
    "up",
    "upon",
    "with",
    "within",
    "without",
];

/// English articles.
const ARTICLES: &[&str] = &["a", "an", "the"];

/// Pronoun list as a HashSet.
pub static PRONOUN_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| PRONOUNS.iter().map(|&s| s.to_string()).collect());

/// Preposition list as a HashSet.
pub static PREPOSITION_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| PREPOSITIONS.iter().map(|&s| s.to_string()).collect());

/// Article list as a HashSet.
pub static ARTICLE_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| ARTICLES.iter().map(|&s| s.to_string()).collect());

/// An immutable set of lowercase words belonging to one word class.
///
/// Construction from the built-in lists shares the underlying set, so
/// cloning a `WordClassList` is cheap.
#[derive(Clone, Debug)]
pub struct WordClassList {
    /// Human-readable class name (for debugging and output labels)
    name: &'static str,
    /// The set of lowercase member words
    words: Arc<HashSet<String>>,
}

impl WordClassList {
    /// Create a word-class list from an arbitrary set of words.
    ///
    /// Words are lowercased on the way in so membership checks against
    /// lowercased tokens behave as expected.
    pub fn from_words<I, S>(name: &'static str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        WordClassList {
            name,
            words: Arc::new(words),
        }
    }

    /// The built-in pronoun list.
    pub fn pronouns() -> Self {
        WordClassList {
            name: "pronouns",
            words: Arc::new(PRONOUN_SET.clone()),
        }
    }

    /// The built-in preposition list.
    pub fn prepositions() -> Self {
        WordClassList {
            name: "prepositions",
            words: Arc::new(PREPOSITION_SET.clone()),
        }
    }

    /// The built-in article list.
    pub fn articles() -> Self {
        WordClassList {
            name: "articles",
            words: Arc::new(ARTICLE_SET.clone()),
        }
    }

    /// Check whether a (lowercase) word belongs to this class.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the number of words in this class.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if this class is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list_sizes() {
        assert_eq!(WordClassList::pronouns().len(), 39);
        assert_eq!(WordClassList::prepositions().len(), 55);
        assert_eq!(WordClassList::articles().len(), 3);
    }

    #[test]
    fn test_membership() {
        let pronouns = WordClassList::pronouns();
        assert!(pronouns.contains("i"));
        assert!(pronouns.contains("themselves"));
        assert!(!pronouns.contains("and"));

        let prepositions = WordClassList::prepositions();
        assert!(prepositions.contains("on"));
        assert!(prepositions.contains("underneath"));
        assert!(!prepositions.contains("the"));

        let articles = WordClassList::articles();
        assert!(articles.contains("a"));
        assert!(articles.contains("an"));
        assert!(articles.contains("the"));
    }

    #[test]
    fn test_lists_are_disjoint() {
        let pronouns = WordClassList::pronouns();
        let prepositions = WordClassList::prepositions();
        let articles = WordClassList::articles();

        for word in &*PRONOUN_SET {
            assert!(!prepositions.contains(word), "{word} is in two classes");
            assert!(!articles.contains(word), "{word} is in two classes");
        }
        for word in &*PREPOSITION_SET {
            assert!(!pronouns.contains(word), "{word} is in two classes");
            assert!(!articles.contains(word), "{word} is in two classes");
        }
    }

    #[test]
    fn test_from_words_lowercases() {
        let list = WordClassList::from_words("custom", ["Foo", "BAR"]);
        assert!(list.contains("foo"));
        assert!(list.contains("bar"));
        assert!(!list.contains("Foo"));
        assert_eq!(list.name(), "custom");
    }
}
