//! Sentiment pipeline: composes the text normalizer, slang dictionary,
//! and linguistic reducer into a single canonical-text transform.

use crate::normalize::{self, NormalizeOptions};
use crate::reduce::{IndonesianReducer, LinguisticReducer};
use crate::slang::SlangDictionary;

/// Produces the canonical string handed to the classifier.
///
/// Stage order is fixed: case folding, noise stripping, elongation
/// collapse, slang substitution, stopword removal, stemming. The transform
/// is pure - same input, same output - and only reads the immutable slang
/// dictionary, so a pipeline can be shared across threads.
pub struct SentimentPipeline {
    slang: SlangDictionary,
    reducer: Box<dyn LinguisticReducer + Send + Sync>,
    options: NormalizeOptions,
}

impl SentimentPipeline {
    /// Creates a pipeline with the given slang dictionary, the default
    /// Indonesian reducer, and default normalization options.
    pub fn new(slang: SlangDictionary) -> Self {
        Self {
            slang,
            reducer: Box::new(IndonesianReducer::new()),
            options: NormalizeOptions::default(),
        }
    }

    /// Substitutes the linguistic reducer (stopword removal + stemming).
    pub fn with_reducer(mut self, reducer: Box<dyn LinguisticReducer + Send + Sync>) -> Self {
        self.reducer = reducer;
        self
    }

    /// Overrides the normalization options.
    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the slang dictionary in use.
    pub fn slang(&self) -> &SlangDictionary {
        &self.slang
    }

    /// Normalizes raw text into canonical form.
    ///
    /// An empty input - or one consisting entirely of noise - yields an
    /// empty string, never an error.
    pub fn normalize(&self, raw_text: &str) -> String {
        let cleaned = normalize::clean(raw_text, &self.options);
        let substituted = self.slang.apply(&cleaned);
        self.reducer.reduce(&substituted)
    }
}

impl std::fmt::Debug for SentimentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentPipeline")
            .field("slang_entries", &self.slang.len())
            .field("options", &self.options)
            .finish()
    }
}
