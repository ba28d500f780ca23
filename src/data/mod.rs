// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between raw text / raw files and the matcher:
//
//   built-in table / JSON file
//       │
//       ▼
//   BuiltinCorpus / JsonCorpusLoader → produce a QaCorpus
//       │
//       ▼
//   Normalizer    → canonical lowercase, punctuation-free text
//       │
//       ▼
//   Matcher (Layer 5)
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

/// Loads a corpus from a JSON array on disk
pub mod loader;

/// Lowercases, strips punctuation, and collapses whitespace
pub mod normalizer;

/// The built-in Komodo National Park tour Q&A table
pub mod sample;
