//! # kicau
//!
//! Sentiment classification core for Indonesian social-media text.
//!
//! The crate centers on a deterministic **normalization pipeline** that
//! turns noisy, informal tweets into canonical text for a frozen
//! bag-of-features classifier:
//!
//! 1. Case folding
//! 2. Noise stripping (URLs, mentions, hashtags, digits, punctuation)
//! 3. Elongation collapse ("senangggg" -> "senangg")
//! 4. Slang substitution from a two-column dictionary resource
//! 5. Stopword removal and stemming for Indonesian
//!
//! ## Quick Start
//!
//! ```
//! use kicau::{SentimentPipeline, SlangDictionary};
//!
//! let slang = SlangDictionary::from_entries([("gk", "tidak"), ("bgt", "banget")]);
//! let pipeline = SentimentPipeline::new(slang);
//!
//! let cleaned = pipeline.normalize("Aplikasinya bagus bgt!! https://t.co/abc");
//! assert_eq!(cleaned, "aplikasi bagus banget");
//! ```
//!
//! ## Batch Classification
//!
//! ```no_run
//! use kicau::{classify_csv_file, Sentiment};
//!
//! fn main() -> kicau::Result<()> {
//!     let results = classify_csv_file("tweets.csv", "kamus_slang.csv", "model.json")?;
//!     for record in &results {
//!         println!("{} -> {}", record.cleaned_text, record.label);
//!     }
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod reduce;
pub mod service;
pub mod slang;

// Re-exports
pub use classify::{Classifier, LexiconModel, Sentiment, TrainingInfo};
pub use error::{Error, Result};
pub use normalize::NormalizeOptions;
pub use pipeline::SentimentPipeline;
pub use reduce::{IndonesianReducer, LinguisticReducer};
pub use service::{ClassificationService, NormalizedRecord, RawRecord};
pub use slang::SlangDictionary;

use std::path::Path;

/// Normalizes a single text with the given slang dictionary, using the
/// default Indonesian reducer and default options.
///
/// This is a convenience for one-off use; build a [`SentimentPipeline`]
/// once when normalizing many texts.
pub fn normalize_text(text: &str, slang: &SlangDictionary) -> String {
    SentimentPipeline::new(slang.clone()).normalize(text)
}

/// Classifies a CSV batch end to end: loads the slang dictionary
/// (degrading to an empty mapping if it is missing or malformed), loads
/// the frozen model artifact, reads the records, and classifies them.
///
/// Returns [`Error::ClassifierUnavailable`] when the model cannot be
/// loaded and [`Error::MissingColumn`] when the batch lacks `full_text`.
pub fn classify_csv_file(
    input: impl AsRef<Path>,
    slang_path: impl AsRef<Path>,
    model_path: impl AsRef<Path>,
) -> Result<Vec<NormalizedRecord>> {
    let (slang, _warning) = SlangDictionary::load_or_empty(slang_path);
    let model = LexiconModel::load(model_path)?;

    let records = service::read_records_from_path(input)?;
    let service = ClassificationService::new(SentimentPipeline::new(slang), Box::new(model));
    service.classify_batch(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalize_text_convenience() {
        let slang = SlangDictionary::from_entries([("gk", "tidak")]);
        assert_eq!(normalize_text("GK bagus!!", &slang), "bagus");
        assert_eq!(normalize_text("", &slang), "");
    }

    #[test]
    fn test_classify_csv_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();

        let input_path = dir.path().join("tweets.csv");
        std::fs::write(
            &input_path,
            "full_text,user_id\nPelayanan bagus sekali!,u1\nAplikasi error parah,u2\n",
        )
        .unwrap();

        let slang_path = dir.path().join("kamus_slang.csv");
        std::fs::write(&slang_path, "slang,baku\ngk,tidak\n").unwrap();

        let model_path = dir.path().join("model.json");
        let mut model_file = std::fs::File::create(&model_path).unwrap();
        write!(
            model_file,
            r#"{{"weights": {{"bagus": 0.8, "error": -0.6, "parah": -0.9}}}}"#
        )
        .unwrap();

        let results = classify_csv_file(&input_path, &slang_path, &model_path).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, Sentiment::Positive);
        assert_eq!(results[1].label, Sentiment::Negative);
    }

    #[test]
    fn test_classify_csv_file_runs_with_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();

        let input_path = dir.path().join("tweets.csv");
        std::fs::write(&input_path, "full_text\nbiasa saja\n").unwrap();

        let model_path = dir.path().join("model.json");
        std::fs::write(&model_path, r#"{"weights": {}}"#).unwrap();

        // Dictionary path does not exist: slang substitution degrades to a
        // no-op and classification still completes.
        let results =
            classify_csv_file(&input_path, dir.path().join("nope.csv"), &model_path).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, Sentiment::Neutral);
    }

    #[test]
    fn test_classify_csv_file_missing_model_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("tweets.csv");
        std::fs::write(&input_path, "full_text\nhalo\n").unwrap();

        let err = classify_csv_file(&input_path, dir.path().join("kamus.csv"), dir.path().join("model.json"))
            .unwrap_err();
        assert!(matches!(err, Error::ClassifierUnavailable { .. }));
    }
}
