//! # Text Normalization Pipeline
//!
//! Deterministic, order-dependent normalization of noisy social-media text
//! into a canonical form for bag-of-features classification.
//!
//! ## Pipeline Stages
//!
//! 1. **Stage 1: Case Folding** - Unicode NFC normalization, lowercase
//! 2. **Stage 2: Noise Stripping** - URLs, mentions, hashtags, digits, punctuation
//! 3. **Stage 3: Elongation Collapse** - character runs of 3+ reduced to 2
//!
//! Slang substitution (stage 4) lives in [`crate::slang`] because it needs
//! the loaded dictionary; [`crate::pipeline::SentimentPipeline`] composes
//! the full sequence. Tokenization between stages is implicit: the canonical
//! representation is a whitespace-joined string.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Normalization configuration options.
///
/// The defaults reproduce the canonical pipeline; individual noise classes
/// can be toggled off for ablation.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Remove `http`/`https`/`www` prefixed tokens.
    pub strip_urls: bool,
    /// Remove @-mentions.
    pub strip_mentions: bool,
    /// Remove #-hashtags.
    pub strip_hashtags: bool,
    /// Remove digit sequences.
    pub strip_digits: bool,
    /// Collapse character runs of 3+ to exactly 2.
    pub collapse_elongation: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_urls: true,
            strip_mentions: true,
            strip_hashtags: true,
            strip_digits: true,
            collapse_elongation: true,
        }
    }
}

impl NormalizeOptions {
    /// Creates options for minimal normalization: case folding and
    /// whitespace/punctuation cleanup only.
    pub fn minimal() -> Self {
        Self {
            strip_urls: false,
            strip_mentions: false,
            strip_hashtags: false,
            strip_digits: false,
            collapse_elongation: false,
        }
    }
}

// ============================================================================
// Stage 1: Case Folding
// ============================================================================

/// Stage 1: Fold the entire string to lowercase.
///
/// Applies Unicode NFC normalization first so that composed and decomposed
/// forms of the same grapheme fold identically.
pub fn case_fold(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

// ============================================================================
// Stage 2: Noise Stripping
// ============================================================================

// Regex patterns (compiled once using LazyLock). `http\S+` also covers
// `https` prefixed tokens.
static RE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+|www\S+").unwrap());

static RE_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

static RE_HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static RE_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Stage 2: Strip noise classes from the text.
///
/// Removal order is significant: URLs, mentions, and hashtags are removed
/// as whole tokens before digit and symbol stripping, so `#tag123` does not
/// leave `tag` behind. Whitespace runs are collapsed to a single space and
/// the ends trimmed.
pub fn strip_noise(input: &str, options: &NormalizeOptions) -> String {
    let mut result = input.to_string();

    if options.strip_urls {
        result = RE_URL.replace_all(&result, "").into_owned();
    }
    if options.strip_mentions {
        result = RE_MENTION.replace_all(&result, "").into_owned();
    }
    if options.strip_hashtags {
        result = RE_HASHTAG.replace_all(&result, "").into_owned();
    }
    if options.strip_digits {
        result = RE_DIGITS.replace_all(&result, "").into_owned();
    }

    // Punctuation and symbols: everything outside letters/digits/underscore
    // and whitespace.
    result = RE_SYMBOL.replace_all(&result, "").into_owned();

    RE_WHITESPACE.replace_all(&result, " ").trim().to_string()
}

// ============================================================================
// Stage 3: Elongation Collapse
// ============================================================================

/// Stage 3: Collapse elongated character runs.
///
/// Any character repeated 3 or more times consecutively is reduced to
/// exactly 2 occurrences ("senangggg" -> "senangg"). Runs of length 2 or
/// less are untouched. Applies to any character, not just letters.
///
/// Implemented as a character-run scan; the `regex` crate does not support
/// backreferences.
pub fn collapse_elongation(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in input.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 {
            result.push(c);
        }
    }

    result
}

// ============================================================================
// Composed Stages
// ============================================================================

/// Runs normalization stages 1-3 in order: case folding, noise stripping,
/// elongation collapse.
///
/// An empty input produces an empty output at every stage; a string
/// consisting only of noise (for example a lone URL) cleans to an empty
/// string without error.
///
/// # Example
///
/// ```
/// use kicau::normalize::{clean, NormalizeOptions};
///
/// let cleaned = clean("Bagusss!! https://t.co/x @user", &NormalizeOptions::default());
/// assert_eq!(cleaned, "baguss");
/// ```
pub fn clean(input: &str, options: &NormalizeOptions) -> String {
    let mut result = case_fold(input);
    result = strip_noise(&result, options);

    if options.collapse_elongation {
        result = collapse_elongation(&result);
    }

    result
}

/// Runs stages 1-3 with default options.
pub fn clean_default(input: &str) -> String {
    clean(input, &NormalizeOptions::default())
}
