// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads a corpus from a JSON file with the same shape the export
// command writes:
//
//   [
//       {
//           "question": "Can I cancel my booking?",
//           "answer": "You cannot cancel a paid ticket booking."
//       },
//       ...
//   ]
//
// Record order in the file becomes corpus order, which decides
// tie-breaks, so nothing is sorted or de-duplicated here.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::corpus::QaCorpus;
use crate::domain::traits::CorpusSource;

/// Reads a QaCorpus from a JSON file.
/// Implements the CorpusSource trait from Layer 3.
pub struct JsonCorpusLoader {
    path: PathBuf,
}

impl JsonCorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for JsonCorpusLoader {
    fn load(&self) -> Result<QaCorpus> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus file '{}'", self.path.display()))?;

        let corpus: QaCorpus = serde_json::from_str(&json)
            .with_context(|| {
                format!(
                    "'{}' is not a JSON array of {{\"question\", \"answer\"}} records",
                    self.path.display()
                )
            })?;

        if corpus.is_empty() {
            tracing::warn!("Corpus file '{}' contains no pairs", self.path.display());
        }

        tracing::info!(
            "Loaded {} QA pairs from '{}'",
            corpus.len(),
            self.path.display()
        );
        Ok(corpus)
    }
}
