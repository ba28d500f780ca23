// ============================================================
// Layer 3 — QaCorpus Domain Type
// ============================================================
// The ordered list of question/answer pairs the matcher searches.
//
// Order matters here:
//   - Best-match selection keeps the FIRST pair on an exact tie
//   - Ranked suggestions with equal scores keep corpus order
// so the corpus is a plain Vec and insertion order is never
// changed. Pairs can be appended, never removed or edited.
//
// #[serde(transparent)] makes the corpus serialise as a bare
// JSON array of pairs instead of {"pairs": [...]}.
//
// Reference: Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::domain::qa_pair::QaPair;

/// An append-only, insertion-ordered collection of QaPairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QaCorpus {
    pairs: Vec<QaPair>,
}

impl QaCorpus {
    /// Build a corpus from pairs, keeping their order
    pub fn new(pairs: Vec<QaPair>) -> Self {
        Self { pairs }
    }

    /// Append a pair to the end of the corpus
    pub fn push(&mut self, pair: QaPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, QaPair> {
        self.pairs.iter()
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    /// Look up the first pair whose question text is exactly `question`.
    /// Used to resolve a suggestion picked from a menu back to its answer.
    pub fn find_question(&self, question: &str) -> Option<&QaPair> {
        self.pairs.iter().find(|p| p.question == question)
    }

    /// The answer of the first pair whose question is exactly `question`
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.find_question(question).map(|p| p.answer.as_str())
    }
}

impl From<Vec<QaPair>> for QaCorpus {
    fn from(pairs: Vec<QaPair>) -> Self {
        Self::new(pairs)
    }
}

impl<'a> IntoIterator for &'a QaCorpus {
    type Item     = &'a QaPair;
    type IntoIter = std::slice::Iter<'a, QaPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
