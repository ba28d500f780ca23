// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the lookup system.
//
// Rules for this layer:
//   - NO file I/O or terminal printing
//   - NO similarity math (that lives in Layer 5)
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they are matched.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A stored question with its answer
pub mod qa_pair;

// The ordered collection of pairs the matcher searches
pub mod corpus;

// What a lookup returns: a best match or ranked suggestions
pub mod match_result;

// Core abstractions (traits) that other layers implement
pub mod traits;
