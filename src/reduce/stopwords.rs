//! Stopword removal for Indonesian text.

use std::collections::HashSet;

/// Default Indonesian stopword list.
///
/// High-frequency, low-information words removed before feature
/// extraction. This is the standard list shipped with Indonesian NLP
/// toolkits (Tala / Sastrawi lineage).
pub const INDONESIAN_STOPWORDS: &[&str] = &[
    "ada", "adalah", "agak", "agar", "akan", "aku", "amat", "anda", "antara", "apa", "apakah",
    "apalagi", "atau", "bagai", "bagaimana", "bagaimanapun", "bagi", "bahwa", "banyak", "begitu",
    "belum", "bisa", "boleh", "dahulu", "dalam", "dan", "dapat", "dari", "daripada", "demi",
    "demikian", "dengan", "di", "dia", "dimana", "dua", "dulu", "guna", "hal", "hanya", "harus",
    "hingga", "ia", "ini", "ingin", "itu", "itulah", "jika", "juga", "kah", "kalian", "kami",
    "kamu", "karena", "ke", "kecuali", "kembali", "kemana", "kenapa", "kepada", "ketika", "kita",
    "lagi", "lain", "maka", "mari", "masih", "melainkan", "mengapa", "menurut", "mereka",
    "namun", "nanti", "oleh", "pada", "para", "pasti", "pula", "pun", "saat", "saja", "sambil",
    "sampai", "sangat", "saya", "sebab", "sebagai", "sebelum", "sebetulnya", "secara",
    "sedangkan", "seharusnya", "sehingga", "sekitar", "selagi", "selain", "sementara", "seolah",
    "seperti", "seraya", "serta", "sesuatu", "sesudah", "setelah", "seterusnya", "setiap",
    "setidaknya", "sudah", "supaya", "tanpa", "tapi", "telah", "tentang", "tentu", "terhadap",
    "tetapi", "tidak", "toh", "untuk", "walau", "ya", "yaitu", "yakni", "yang",
];

/// Removes stopwords from a whitespace-tokenized string.
///
/// Matching is case-insensitive (the set is stored lower-cased); word
/// order and single-space joining of the remaining tokens are preserved.
/// Removal is idempotent: removing stopwords from its own output is the
/// identity.
#[derive(Debug, Clone)]
pub struct StopwordRemover {
    words: HashSet<String>,
}

impl Default for StopwordRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordRemover {
    /// Creates a remover with the default Indonesian stopword list.
    pub fn new() -> Self {
        Self::with_words(INDONESIAN_STOPWORDS.iter().copied())
    }

    /// Creates a remover with a custom stopword set.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Returns true if the token is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Removes stopwords, rejoining the surviving tokens with single
    /// spaces. An empty input returns an empty string.
    pub fn remove(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_default_stopwords() {
        let remover = StopwordRemover::new();
        assert_eq!(remover.remove("saya sangat suka dengan aplikasi ini"), "suka aplikasi");
    }

    #[test]
    fn test_preserves_word_order() {
        let remover = StopwordRemover::new();
        assert_eq!(remover.remove("pajak yang lemot dan error"), "pajak lemot error");
    }

    #[test]
    fn test_case_insensitive() {
        let remover = StopwordRemover::new();
        assert_eq!(remover.remove("SAYA suka Ini"), "suka");
    }

    #[test]
    fn test_idempotent() {
        let remover = StopwordRemover::new();
        let once = remover.remove("saya tidak suka antri lama");
        assert_eq!(remover.remove(&once), once);
    }

    #[test]
    fn test_empty_and_all_stopword_input() {
        let remover = StopwordRemover::new();
        assert_eq!(remover.remove(""), "");
        assert_eq!(remover.remove("yang dan di ke"), "");
    }

    #[test]
    fn test_custom_words() {
        let remover = StopwordRemover::with_words(["foo", "bar"]);
        assert_eq!(remover.remove("foo data bar nilai"), "data nilai");
        // Default words are not included.
        assert_eq!(remover.remove("saya foo"), "saya");
    }
}
