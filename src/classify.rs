//! Sentiment labels, the classifier contract, and the bundled frozen
//! lexicon artifact.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Sentiment class assigned to a tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Canonical lower-case label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    /// Parses both the canonical English labels and the Indonesian
    /// spellings used by the original training data.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "positif" => Ok(Sentiment::Positive),
            "negative" | "negatif" => Ok(Sentiment::Negative),
            "neutral" | "netral" => Ok(Sentiment::Neutral),
            other => Err(Error::UnknownLabel(other.to_string())),
        }
    }
}

/// Contract for the frozen external classifier.
///
/// `predict` takes a batch of canonical (already normalized) texts and
/// returns one label per text, in input order. The pipeline treats any
/// implementation as opaque - feature extraction is owned by the artifact.
pub trait Classifier {
    /// Predicts one sentiment label per input text, positionally aligned.
    fn predict(&self, texts: &[String]) -> Result<Vec<Sentiment>>;
}

/// The bundled frozen classifier artifact: a token-weight lexicon.
///
/// Serialized as JSON:
///
/// ```json
/// {
///   "weights": { "bagus": 0.8, "parah": -0.9 },
///   "positive_threshold": 0.1,
///   "negative_threshold": -0.1
/// }
/// ```
///
/// A text's score is the sum of the weights of its whitespace tokens;
/// scores above `positive_threshold` are positive, below
/// `negative_threshold` negative, everything between neutral. The model is
/// read-only after load and is never retrained here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconModel {
    weights: HashMap<String, f64>,
    #[serde(default = "default_positive_threshold")]
    positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    negative_threshold: f64,
}

fn default_positive_threshold() -> f64 {
    0.1
}

fn default_negative_threshold() -> f64 {
    -0.1
}

impl LexiconModel {
    /// Builds a model from `(token, weight)` pairs with default thresholds.
    pub fn from_weights<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            weights: weights.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }

    /// Loads the frozen artifact from a JSON file.
    ///
    /// Failure is fatal at startup: the service cannot classify without a
    /// model, so every problem maps to [`Error::ClassifierUnavailable`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let data = std::fs::read_to_string(path).map_err(|err| Error::ClassifierUnavailable {
            path: display.clone(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|err| Error::ClassifierUnavailable {
            path: display,
            message: err.to_string(),
        })
    }

    /// Scores a single canonical text.
    pub fn score(&self, text: &str) -> f64 {
        text.split_whitespace()
            .filter_map(|token| self.weights.get(token))
            .sum()
    }

    fn label(&self, score: f64) -> Sentiment {
        if score > self.positive_threshold {
            Sentiment::Positive
        } else if score < self.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Classifier for LexiconModel {
    fn predict(&self, texts: &[String]) -> Result<Vec<Sentiment>> {
        Ok(texts
            .iter()
            .map(|text| self.label(self.score(text)))
            .collect())
    }
}

/// Descriptive metadata about the frozen model's training run.
///
/// Purely informational; no invariants beyond being a constant record.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingInfo {
    /// Number of tweets in the training split.
    pub train_size: usize,
    /// Number of tweets in the test split.
    pub test_size: usize,
    /// Label distribution over the full dataset.
    pub label_distribution: &'static [(Sentiment, usize)],
    /// Reported test accuracy.
    pub accuracy: f64,
    /// Reported weighted F1 score.
    pub weighted_f1: f64,
}

impl TrainingInfo {
    /// Metadata of the frozen model shipped with the original system.
    pub fn frozen() -> Self {
        Self {
            train_size: 10_168,
            test_size: 2_542,
            label_distribution: &[
                (Sentiment::Positive, 3_516),
                (Sentiment::Negative, 6_657),
                (Sentiment::Neutral, 2_537),
            ],
            accuracy: 0.8474,
            weighted_f1: 0.8473,
        }
    }
}
