//! Rule-based Indonesian stemmer.
//!
//! Reduces words to their roots by stripping affixes per Indonesian
//! morphological rules (Tala / Nazief-Adriani lineage): inflectional
//! particles, possessive pronouns, one derivational prefix with nasal
//! recoding, then one derivational suffix. A plausibility guard (minimum
//! length and vowel count) rejects strips that would leave an implausibly
//! short stem, which keeps the transform deterministic without a
//! root-word dictionary.

/// Inflectional particles, stripped first.
const PARTICLES: &[&str] = &["lah", "kah", "pun"];

/// Possessive pronouns, stripped second.
const POSSESSIVES: &[&str] = &["ku", "mu", "nya"];

fn vowel_count(word: &str) -> usize {
    word.chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// A candidate stem is accepted only if it still looks like a word:
/// at least three characters and two vowels.
fn plausible(stem: &str) -> bool {
    stem.chars().count() >= 3 && vowel_count(stem) >= 2
}

/// Rule-based Indonesian affix-stripping stemmer.
///
/// Deterministic per token; operates on whitespace-tokenized strings and
/// preserves token order.
#[derive(Debug, Clone, Default)]
pub struct IndonesianStemmer;

impl IndonesianStemmer {
    /// Creates a stemmer.
    pub fn new() -> Self {
        Self
    }

    /// Stems every whitespace-separated token, rejoining with single
    /// spaces. An empty input returns an empty string.
    pub fn stem(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.stem_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reduces a single word to its root.
    ///
    /// Stripping order: particle, possessive, derivational prefix,
    /// derivational suffix.
    pub fn stem_word(&self, word: &str) -> String {
        let mut stem = word.to_string();

        stem = strip_trailing(&stem, PARTICLES);
        stem = strip_trailing(&stem, POSSESSIVES);
        if let Some(next) = strip_derivational_prefix(&stem) {
            stem = next;
        }
        stem = strip_derivational_suffix(&stem);

        stem
    }
}

fn strip_trailing(word: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(stripped) = word.strip_suffix(suffix) {
            if plausible(stripped) {
                return stripped.to_string();
            }
        }
    }
    word.to_string()
}

/// Strips one derivational suffix: `-kan`, `-an`, or `-i`.
///
/// `-i` is not stripped after `s`, so loanwords like "aplikasi" keep
/// their final vowel (Tala's rule).
fn strip_derivational_suffix(word: &str) -> String {
    for suffix in ["kan", "an"] {
        if let Some(stripped) = word.strip_suffix(suffix) {
            if plausible(stripped) {
                return stripped.to_string();
            }
        }
    }
    if let Some(stripped) = word.strip_suffix('i') {
        if plausible(stripped) && !stripped.ends_with('s') {
            return stripped.to_string();
        }
    }
    word.to_string()
}

/// Strips one derivational prefix, recoding the nasal where the prefix
/// assimilated the root's initial consonant (meny-apu -> sapu,
/// mem-ilih -> pilih, men-ulis -> tulis; likewise the peN- family).
/// Compound prefixes (memper-, diper-) are handled as a unit.
fn strip_derivational_prefix(word: &str) -> Option<String> {
    let candidate = if let Some(rest) = word
        .strip_prefix("memper")
        .or_else(|| word.strip_prefix("diper"))
    {
        rest.to_string()
    } else if let Some(rest) = word.strip_prefix("meng").or_else(|| word.strip_prefix("peng")) {
        rest.to_string()
    } else if let Some(rest) = word.strip_prefix("meny").or_else(|| word.strip_prefix("peny")) {
        format!("s{rest}")
    } else if let Some(rest) = word.strip_prefix("mem").or_else(|| word.strip_prefix("pem")) {
        if starts_with_vowel(rest) {
            format!("p{rest}")
        } else {
            rest.to_string()
        }
    } else if let Some(rest) = word.strip_prefix("men").or_else(|| word.strip_prefix("pen")) {
        if starts_with_vowel(rest) {
            format!("t{rest}")
        } else {
            rest.to_string()
        }
    } else if let Some(rest) = word
        .strip_prefix("me")
        .or_else(|| word.strip_prefix("per"))
        .or_else(|| word.strip_prefix("pe"))
        .or_else(|| word.strip_prefix("ber"))
        .or_else(|| word.strip_prefix("bel"))
        .or_else(|| word.strip_prefix("be"))
        .or_else(|| word.strip_prefix("ter"))
        .or_else(|| word.strip_prefix("di"))
        .or_else(|| word.strip_prefix("ke"))
        .or_else(|| word.strip_prefix("se"))
    {
        rest.to_string()
    } else {
        return None;
    };

    plausible(&candidate).then_some(candidate)
}
