// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer does not care where a corpus came from
// or where it is written to:
//   - JsonCorpusLoader implements CorpusSource
//   - The built-in Komodo table is also a CorpusSource
//   - JsonCorpusStore implements CorpusSink
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::{corpus::QaCorpus, match_result::MatchResult};

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce a corpus.
///
/// Implementations:
///   - BuiltinCorpus    → the hardcoded Komodo tour table
///   - JsonCorpusLoader → a JSON array of {question, answer} records
pub trait CorpusSource {
    fn load(&self) -> Result<QaCorpus>;
}

// ─── CorpusSink ───────────────────────────────────────────────────────────────
/// Any component that can persist a corpus.
///
/// Implementations:
///   - JsonCorpusStore → pretty-printed JSON file
pub trait CorpusSink {
    fn save(&self, corpus: &QaCorpus) -> Result<()>;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer a free-form question.
///
/// Implementations:
///   - AskUseCase → string-similarity lookup over a corpus
pub trait QuestionAnswerer {
    /// Look up the best stored answer for `query`.
    /// Never fails: a miss is a MatchResult with no answer.
    fn ask(&self, query: &str) -> MatchResult;
}
