// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// One lookup at a time over a corpus:
//   1. ask      — best match, or a miss with the closest score
//   2. suggest  — top-N closest stored questions for a miss
//   3. select   — turn a "3" typed at the menu into an answer
//   4. add_pair / export — grow the corpus and write it out

use anyhow::Result;
use std::path::Path;

use crate::domain::{
    corpus::QaCorpus,
    match_result::{MatchResult, RankedSuggestion},
    qa_pair::QaPair,
    traits::{CorpusSource, QuestionAnswerer},
};
use crate::infra::{config::MatcherConfig, corpus_store::export_corpus};
use crate::matching::matcher::Matcher;

pub struct AskUseCase {
    matcher: Matcher,
}

impl AskUseCase {
    /// Build from an in-memory corpus. Fails only on an invalid config.
    pub fn new(corpus: QaCorpus, config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            "Matcher ready: {} pairs, threshold {:.2}, {} suggestions",
            corpus.len(),
            config.threshold,
            config.suggestion_count
        );
        Ok(Self { matcher: Matcher::new(corpus, config) })
    }

    /// Build from any corpus source (built-in table, JSON file, ...)
    pub fn from_source(source: &dyn CorpusSource, config: MatcherConfig) -> Result<Self> {
        Self::new(source.load()?, config)
    }

    pub fn corpus(&self) -> &QaCorpus {
        self.matcher.corpus()
    }

    pub fn config(&self) -> &MatcherConfig {
        self.matcher.config()
    }

    pub fn suggest(&self, query: &str) -> Vec<RankedSuggestion> {
        let suggestions = self.matcher.suggest(query);
        tracing::debug!("{} suggestions for {:?}", suggestions.len(), query);
        suggestions
    }

    pub fn suggest_n(&self, query: &str, n: usize) -> Vec<RankedSuggestion> {
        self.matcher.find_similar_questions(query, n)
    }

    /// Resolve a 1-based menu choice. Invalid input is None, not an error.
    pub fn select(&self, selection: &str, suggestions: &[RankedSuggestion]) -> Option<&QaPair> {
        let pair = self.matcher.resolve_selection(selection, suggestions);
        if pair.is_none() {
            tracing::debug!("Ignoring selection {:?}", selection);
        }
        pair
    }

    pub fn add_pair(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.matcher.add_pair(question, answer);
        tracing::info!("New QA pair added ({} total)", self.corpus().len());
    }

    /// Write the corpus to `path`; see corpus_store::export_corpus
    pub fn export(&self, path: impl AsRef<Path>) -> bool {
        export_corpus(self.corpus(), path)
    }
}

impl QuestionAnswerer for AskUseCase {
    fn ask(&self, query: &str) -> MatchResult {
        let result = self.matcher.find_best_match(query);
        match &result.question {
            Some(q) => tracing::debug!("{:?} matched {:?} ({:.4})", query, q, result.score),
            None    => tracing::debug!("{:?} had no match, closest {:.4}", query, result.score),
        }
        result
    }
}
