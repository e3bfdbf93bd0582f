//! Slang dictionary: a fixed mapping from informal Indonesian tokens to
//! their canonical forms, loaded once from a two-column CSV resource.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Immutable mapping from informal token to canonical token.
///
/// Built once at startup and read-only thereafter; substitution is a
/// per-token lookup, so an empty dictionary makes [`apply`](Self::apply)
/// an identity transform.
#[derive(Debug, Clone, Default)]
pub struct SlangDictionary {
    entries: HashMap<String, String>,
}

impl SlangDictionary {
    /// Creates an empty dictionary (slang substitution becomes a no-op).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `(informal, canonical)` pairs.
    ///
    /// Keys and values are lower-cased; later pairs win on duplicate keys.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.as_ref().to_lowercase()))
            .collect();
        Self { entries }
    }

    /// Loads the dictionary from a CSV resource.
    ///
    /// The resource must have a header row and at least two columns: the
    /// first column is the informal term, the second the canonical term.
    /// Extra columns are ignored. Keys and values are lower-cased on load;
    /// duplicate keys are last-write-wins. Values are inserted verbatim
    /// otherwise - no whitespace or punctuation normalization is applied
    /// to them.
    ///
    /// Returns [`Error::Dictionary`] when the file is missing, unreadable,
    /// or has fewer than two columns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|err| Error::Dictionary {
                path: display.clone(),
                message: err.to_string(),
            })?;

        let headers = reader.headers().map_err(|err| Error::Dictionary {
            path: display.clone(),
            message: err.to_string(),
        })?;
        if headers.len() < 2 {
            return Err(Error::Dictionary {
                path: display,
                message: format!("expected at least 2 columns, found {}", headers.len()),
            });
        }

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|err| Error::Dictionary {
                path: display.clone(),
                message: err.to_string(),
            })?;
            if let (Some(informal), Some(canonical)) = (record.get(0), record.get(1)) {
                entries.insert(informal.to_lowercase(), canonical.to_lowercase());
            }
        }

        Ok(Self { entries })
    }

    /// Loads the dictionary, degrading to an empty mapping on failure.
    ///
    /// The error, if any, is returned alongside so the caller can surface
    /// the condition while the pipeline keeps running.
    pub fn load_or_empty(path: impl AsRef<Path>) -> (Self, Option<Error>) {
        match Self::load(path) {
            Ok(dict) => (dict, None),
            Err(err) => (Self::empty(), Some(err)),
        }
    }

    /// Looks up the canonical form for an informal token.
    pub fn get(&self, informal: &str) -> Option<&str> {
        self.entries.get(informal).map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stage 4: Slang substitution.
    ///
    /// Splits on whitespace, replaces each token whose lower-cased form is
    /// a dictionary key with its canonical value, and rejoins with single
    /// spaces. Unknown tokens pass through unchanged. The lookup is on the
    /// lower-cased token even though upstream case folding already lowered
    /// the text, for exact parity with the original system.
    pub fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| match self.entries.get(&word.to_lowercase()) {
                Some(canonical) => canonical.as_str(),
                None => word,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
