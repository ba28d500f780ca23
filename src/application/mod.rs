// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (answering one question, or running a chat).
//
// Rules for this layer:
//   - No similarity math here (that's Layer 5)
//   - No argument parsing here (that's Layer 1)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Single lookups: ask, suggest, select, add, export
pub mod ask_use_case;

// The interactive question/answer loop
pub mod chat_use_case;
