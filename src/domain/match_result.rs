// ============================================================
// Layer 3 — Lookup Results
// ============================================================
// Two shapes come out of a lookup:
//
//   MatchResult      — the single best pair, or nothing when the
//                      best score fell below the threshold. The
//                      score is kept either way so a caller can
//                      report "closest score was 0.52".
//
//   RankedSuggestion — one entry of the top-N list shown when
//                      there was no confident match.
//
// Scores are always in the closed range [0.0, 1.0].

use serde::{Deserialize, Serialize};

/// Outcome of a best-match lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The matched stored question, or None below threshold
    pub question: Option<String>,

    /// The answer of the matched question, or None below threshold
    pub answer: Option<String>,

    /// Best similarity score seen, reported even on failure
    pub score: f64,
}

impl MatchResult {
    /// A confident match against a stored pair
    pub fn matched(question: impl Into<String>, answer: impl Into<String>, score: f64) -> Self {
        Self {
            question: Some(question.into()),
            answer:   Some(answer.into()),
            score,
        }
    }

    /// No pair cleared the threshold; keep the closest score
    pub fn no_match(score: f64) -> Self {
        Self { question: None, answer: None, score }
    }

    pub fn is_match(&self) -> bool {
        self.question.is_some()
    }
}

/// One entry of a ranked suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSuggestion {
    /// The stored question text, exactly as written
    pub question: String,

    /// Similarity of this question to the query
    pub score: f64,
}

impl RankedSuggestion {
    pub fn new(question: impl Into<String>, score: f64) -> Self {
        Self { question: question.into(), score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_keeps_score() {
        let r = MatchResult::no_match(0.42);
        assert!(!r.is_match());
        assert!(r.answer.is_none());
        assert_eq!(r.score, 0.42);
    }

    #[test]
    fn test_matched_is_match() {
        let r = MatchResult::matched("q", "a", 1.0);
        assert!(r.is_match());
        assert_eq!(r.answer.as_deref(), Some("a"));
    }
}
