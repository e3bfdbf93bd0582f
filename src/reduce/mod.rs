//! Linguistic reduction: stopword removal and stemming.
//!
//! The pipeline consumes this capability through the [`LinguisticReducer`]
//! trait - two sequential operations applied, in order, to the
//! slang-normalized text. Any implementation preserving Indonesian
//! stopword/word-root semantics can be substituted without touching
//! pipeline logic.

pub mod stemmer;
pub mod stopwords;

pub use stemmer::IndonesianStemmer;
pub use stopwords::StopwordRemover;

/// Two-method capability interface for linguistic reduction.
///
/// Contract:
/// - `remove_stopwords` is idempotent, preserves the order and spacing of
///   the remaining tokens, and maps an empty string to an empty string.
/// - `stem` is deterministic per token, order-preserving, and maps an
///   empty string to an empty string.
pub trait LinguisticReducer {
    /// Removes tokens belonging to a fixed stopword set.
    fn remove_stopwords(&self, text: &str) -> String;

    /// Reduces each token to its linguistic root.
    fn stem(&self, text: &str) -> String;

    /// Applies stopword removal then stemming, in that order.
    fn reduce(&self, text: &str) -> String {
        self.stem(&self.remove_stopwords(text))
    }
}

/// Default Indonesian reducer: fixed stopword list + rule-based
/// affix-stripping stemmer.
#[derive(Debug, Clone, Default)]
pub struct IndonesianReducer {
    stopwords: StopwordRemover,
    stemmer: IndonesianStemmer,
}

impl IndonesianReducer {
    /// Creates a reducer with the default Indonesian stopword list and
    /// stemmer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reducer with a custom stopword remover.
    pub fn with_stopwords(mut self, stopwords: StopwordRemover) -> Self {
        self.stopwords = stopwords;
        self
    }
}

impl LinguisticReducer for IndonesianReducer {
    fn remove_stopwords(&self, text: &str) -> String {
        self.stopwords.remove(text)
    }

    fn stem(&self, text: &str) -> String {
        self.stemmer.stem(text)
    }
}
