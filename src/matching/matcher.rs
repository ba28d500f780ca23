// ============================================================
// Layer 5 — Matcher
// ============================================================
// Scores a query against every stored question.
//
// Best match:
//   1. Normalise the query once
//   2. Normalise each stored question and score it
//   3. Keep the pair with the highest score; only a STRICTLY
//      higher score replaces the current best, so on an exact
//      tie the earlier pair in the corpus wins
//   4. Accept it if best score >= threshold (inclusive),
//      otherwise report no match but keep the score
//
// Ranked suggestions:
//   Score every pair, stable-sort descending by score (equal
//   scores keep corpus order), and keep the first n.
//
// The pure functions take the corpus by reference; the Matcher
// struct just bundles a corpus with its config for callers that
// want one object to hold.

use std::cmp::Ordering;

use crate::data::normalizer::Normalizer;
use crate::domain::{
    corpus::QaCorpus,
    match_result::{MatchResult, RankedSuggestion},
    qa_pair::QaPair,
};
use crate::infra::config::MatcherConfig;
use crate::matching::similarity;

/// Find the stored pair most similar to `query`.
///
/// Returns `MatchResult::no_match(0.0)` for an empty corpus.
/// Note that best tracking starts at 0.0, so when every pair
/// scores 0.0 no pair is reported even with a threshold of 0.0.
pub fn find_best_match(query: &str, corpus: &QaCorpus, threshold: f64) -> MatchResult {
    if corpus.is_empty() {
        return MatchResult::no_match(0.0);
    }

    let normalizer = Normalizer::new();
    let query      = normalizer.normalize(query);

    let mut best: Option<&QaPair> = None;
    let mut best_score = 0.0f64;

    for pair in corpus {
        let score = similarity::ratio(&query, &normalizer.normalize(&pair.question));
        if score > best_score {
            best_score = score;
            best       = Some(pair);
        }
    }

    match best {
        Some(pair) if best_score >= threshold => {
            MatchResult::matched(pair.question.as_str(), pair.answer.as_str(), best_score)
        }
        _ => MatchResult::no_match(best_score),
    }
}

/// The `n` stored questions most similar to `query`, best first.
pub fn find_similar_questions(query: &str, corpus: &QaCorpus, n: usize) -> Vec<RankedSuggestion> {
    let normalizer = Normalizer::new();
    let query      = normalizer.normalize(query);

    let mut scored: Vec<RankedSuggestion> = corpus
        .iter()
        .map(|pair| {
            let score = similarity::ratio(&query, &normalizer.normalize(&pair.question));
            RankedSuggestion::new(pair.question.as_str(), score)
        })
        .collect();

    // sort_by is stable, so equal scores keep corpus order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(n);
    scored
}

/// Owns a corpus and the thresholds used to query it.
#[derive(Debug, Clone)]
pub struct Matcher {
    corpus: QaCorpus,
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(corpus: QaCorpus, config: MatcherConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &QaCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Best match using the configured threshold
    pub fn find_best_match(&self, query: &str) -> MatchResult {
        find_best_match(query, &self.corpus, self.config.threshold)
    }

    pub fn find_similar_questions(&self, query: &str, n: usize) -> Vec<RankedSuggestion> {
        find_similar_questions(query, &self.corpus, n)
    }

    /// Ranked suggestions using the configured count (5 by default)
    pub fn suggest(&self, query: &str) -> Vec<RankedSuggestion> {
        self.find_similar_questions(query, self.config.suggestion_count)
    }

    /// Append a pair to the end of the corpus; no validation
    pub fn add_pair(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.corpus.push(QaPair::new(question, answer));
        tracing::debug!("Corpus now holds {} pairs", self.corpus.len());
    }

    /// Resolve a 1-based menu selection against a suggestion list.
    ///
    /// `selection` must be all digits (surrounding whitespace is
    /// ignored) and within 1..=suggestions.len(); anything else
    /// yields None. The chosen question is looked up by exact text,
    /// so with duplicate questions the first pair wins.
    pub fn resolve_selection(
        &self,
        selection:   &str,
        suggestions: &[RankedSuggestion],
    ) -> Option<&QaPair> {
        let index = parse_selection(selection, suggestions.len())?;
        self.corpus.find_question(&suggestions[index].question)
    }
}

/// Parse "1".."n" into a 0-based index.
fn parse_selection(selection: &str, len: usize) -> Option<usize> {
    let s = selection.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n: usize = s.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::komodo_corpus;

    fn corpus(pairs: &[(&str, &str)]) -> QaCorpus {
        pairs.iter().map(|&(q, a)| QaPair::new(q, a)).collect::<Vec<_>>().into()
    }

    fn komodo_matcher() -> Matcher {
        Matcher::new(komodo_corpus(), MatcherConfig::default())
    }

    #[test]
    fn test_empty_corpus_gives_zero_score() {
        let r = find_best_match("anything", &QaCorpus::default(), 0.6);
        assert_eq!(r, MatchResult::no_match(0.0));
        assert!(find_similar_questions("anything", &QaCorpus::default(), 5).is_empty());
    }

    #[test]
    fn test_exact_question_scores_one_at_any_threshold() {
        let c = corpus(&[("Is there a special price for children?", "No.")]);
        for threshold in [0.0, 0.5, 0.75, 1.0] {
            let r = find_best_match("is there a SPECIAL price for children", &c, threshold);
            assert_eq!(r.score, 1.0);
            assert_eq!(r.answer.as_deref(), Some("No."));
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // "abcd" vs "bcde" scores exactly 0.75
        let c = corpus(&[("bcde", "hit")]);
        let r = find_best_match("abcd", &c, 0.75);
        assert!(r.is_match());
        assert_eq!(r.score, 0.75);

        let r = find_best_match("abcd", &c, 0.76);
        assert!(!r.is_match());
        assert_eq!(r.score, 0.75);
    }

    #[test]
    fn test_exact_tie_keeps_first_pair() {
        let c = corpus(&[
            ("Can I cancel?", "first"),
            ("can i cancel", "second"),
        ]);
        let r = find_best_match("Can I cancel", &c, 0.6);
        assert_eq!(r.answer.as_deref(), Some("first"));
        assert_eq!(r.question.as_deref(), Some("Can I cancel?"));
    }

    #[test]
    fn test_duplicate_questions_first_wins() {
        let c = corpus(&[("dup", "one"), ("dup", "two")]);
        assert_eq!(find_best_match("dup", &c, 0.6).answer.as_deref(), Some("one"));
    }

    #[test]
    fn test_all_zero_scores_report_no_pair_even_at_zero_threshold() {
        let c = corpus(&[("abc", "a")]);
        let r = find_best_match("xyz", &c, 0.0);
        assert_eq!(r, MatchResult::no_match(0.0));
    }

    #[test]
    fn test_empty_query_is_no_match() {
        let r = komodo_matcher().find_best_match("");
        assert!(!r.is_match());
        assert_eq!(r.score, 0.0);

        let r = komodo_matcher().find_best_match("?!?");
        assert!(!r.is_match());
    }

    #[test]
    fn test_guided_ticket_scenario() {
        let r = komodo_matcher().find_best_match("Do I need a guided ticket?");
        assert_eq!(r.question.as_deref(), Some("Do I need to book a guided ticket?"));
        assert!(r.score >= 0.6);
        assert!((r.score - 50.0 / 58.0).abs() < 1e-12);
        assert!(r.answer.unwrap().starts_with("It is mandatory"));
    }

    #[test]
    fn test_weather_query_falls_back_to_suggestions() {
        let m = komodo_matcher();
        let r = m.find_best_match("What's the weather like");
        assert!(!r.is_match());
        assert!((r.score - 0.5).abs() < 1e-12);

        let suggestions = m.suggest("What's the weather like");
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions
            .iter()
            .any(|s| s.question == "Is there a risk of bad weather during the tour?"));
    }

    #[test]
    fn test_gibberish_gives_five_sorted_suggestions() {
        let m     = komodo_matcher();
        let query = "asdkfjasldkf completely unrelated gibberish";

        assert!(m.find_best_match(query).question.is_none());

        let suggestions = m.find_similar_questions(query, 5);
        assert_eq!(suggestions.len(), 5);
        for pair in suggestions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(suggestions[0].question, "Do Nusabadjo tour guides speak English?");
    }

    #[test]
    fn test_suggestions_stable_on_equal_scores() {
        // An empty query scores 0.0 against everything,
        // so the output is simply the first n in corpus order
        let m           = komodo_matcher();
        let suggestions = m.find_similar_questions("", 3);
        let questions: Vec<&str> = suggestions.iter().map(|s| s.question.as_str()).collect();
        assert_eq!(
            questions,
            vec![
                "Do I need to book a guided ticket?",
                "Do Nusabadjo tour guides speak English?",
                "Can I book my ticket on the same day?",
            ]
        );

        let c = corpus(&[("zzz", "0"), ("ab", "1"), ("zz", "2"), ("ba", "3")]);
        let s = find_similar_questions("ab", &c, 4);
        // "ab" = 1.0, "ba" = 0.5, then the two zero scores in corpus order
        let questions: Vec<&str> = s.iter().map(|s| s.question.as_str()).collect();
        assert_eq!(questions, vec!["ab", "ba", "zzz", "zz"]);
    }

    #[test]
    fn test_suggestions_truncate_to_n() {
        let m = komodo_matcher();
        assert_eq!(m.find_similar_questions("tour", 0).len(), 0);
        assert_eq!(m.find_similar_questions("tour", 3).len(), 3);
        assert_eq!(m.find_similar_questions("tour", 100).len(), m.corpus().len());
    }

    #[test]
    fn test_add_pair_then_query() {
        let mut m = komodo_matcher();
        m.add_pair("Test question?", "Test answer.");
        assert_eq!(m.corpus().len(), 23);

        let r = m.find_best_match("Test question");
        assert_eq!(r.answer.as_deref(), Some("Test answer."));
        assert!(r.score >= m.config().threshold);
    }

    #[test]
    fn test_resolve_selection() {
        let m           = komodo_matcher();
        let suggestions = m.suggest("Can I cancel my booking?");

        let pair = m.resolve_selection("1", &suggestions).unwrap();
        assert_eq!(pair.answer, "You cannot cancel a paid ticket booking.");

        let pair = m.resolve_selection(" 2 ", &suggestions).unwrap();
        assert_eq!(pair.question, "Can I change my booking date?");
    }

    #[test]
    fn test_invalid_selection_is_none() {
        let m           = komodo_matcher();
        let suggestions = m.suggest("booking");
        for bad in ["", "0", "6", "-1", "+1", "one", "1.5", "99999999999999999999999"] {
            assert!(m.resolve_selection(bad, &suggestions).is_none(), "{bad:?}");
        }
        assert!(m.resolve_selection("1", &[]).is_none());
    }
}
