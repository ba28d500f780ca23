// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Converts raw text into a canonical form before comparison so
// that "Can I cancel my booking?" and "can i cancel my booking"
// are scored as identical.
//
// Steps (applied in order):
//   1. Lowercase every character
//   2. Drop every character that is not a word character
//      (letter, digit, underscore) or whitespace
//   3. Split on whitespace and rejoin with single spaces,
//      which also trims the ends
//
// The result is deterministic and idempotent, and every input
// (including "" or "???") gives a valid, possibly empty, string.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalise a string for similarity comparison.
    pub fn normalize(&self, text: &str) -> String {
        // ── Step 1 + 2: lowercase, keep word chars and whitespace ────────────
        // to_lowercase() can expand one char into several (e.g. 'İ'),
        // so filter after lowercasing, not before.
        let kept: String = text
            .to_lowercase()
            .chars()
            .filter(|&c| is_word_char(c) || c.is_whitespace())
            .collect();

        // ── Step 3: collapse whitespace runs ─────────────────────────────────
        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unicode "word" character: alphanumeric or underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
