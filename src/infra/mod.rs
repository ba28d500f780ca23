// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one business
// layer:
//
//   config.rs       — Matcher settings (threshold, number of
//                     suggestions), with defaults, optional JSON
//                     file, and validation.
//
//   corpus_store.rs — Corpus export. Writes the QA table as a
//                     pretty-printed JSON array that the data
//                     layer's loader can read back.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Matcher configuration and validation
pub mod config;

/// JSON corpus export
pub mod corpus_store;
