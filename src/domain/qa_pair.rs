// ============================================================
// Layer 3 — QaPair Domain Type
// ============================================================
// A single stored question and the answer given for it.
//
// The matcher never looks at the answer — it only compares the
// user's query against `question`. The answer is simply carried
// along and handed back when its question wins.
//
// Example:
//   question: "Can I cancel my booking?"
//   answer:   "You cannot cancel a paid ticket booking."
//
// The field names are also the JSON keys used by the export
// file, so serde can read and write the corpus without any
// renaming attributes.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// One question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// The stored question text, exactly as written (not normalised)
    pub question: String,

    /// The answer returned when this question is matched
    pub answer: String,
}

impl QaPair {
    /// Create a new QaPair.
    /// Any two strings are accepted — empty text and duplicate
    /// questions are not rejected.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }
}
