// ============================================================
// Layer 5 — Matching Layer
// ============================================================
// Turns a free-form query into either one confident answer or
// a ranked list of the closest stored questions.
//
//   similarity.rs — longest-matching-block ratio between two
//                   strings (pure function, [0.0, 1.0])
//
//   matcher.rs    — normalises the query and every stored
//                   question, scores them, and applies the
//                   threshold / top-N selection rules
//
// Everything here is synchronous and infallible: any string,
// including "" or "???", produces a valid result.
//
// Reference: Rust Book §10 (Generics and Traits)
//            Rust Book §13 (Iterators)

/// Best-match selection, ranked suggestions, corpus ownership
pub mod matcher;

/// Longest-matching-block string similarity
pub mod similarity;
