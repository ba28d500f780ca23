// ============================================================
// Layer 6 — Corpus Export
// ============================================================
// Writes the corpus to disk as a human-readable JSON array so it
// can be edited by hand and loaded back with --corpus:
//
//   [
//       {
//           "question": "Do I need to book a guided ticket?",
//           "answer": "It is mandatory, ..."
//       }
//   ]
//
// Four-space indentation, UTF-8, pairs in corpus order.
//
// Two entry points:
//   JsonCorpusStore::save — returns a Result like any other sink
//   export_corpus         — never fails: errors (missing directory,
//                           permission denied, disk full) are logged
//                           and printed, and the process carries on
//
// Reference: serde_json::ser::PrettyFormatter documentation
//            Rust Book §9 (Recoverable Errors)

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::corpus::QaCorpus;
use crate::domain::traits::CorpusSink;

/// Writes a corpus to a pretty-printed JSON file.
pub struct JsonCorpusStore {
    path: PathBuf,
}

impl JsonCorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSink for JsonCorpusStore {
    fn save(&self, corpus: &QaCorpus) -> Result<()> {
        let json = to_pretty_json(corpus)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write '{}'", self.path.display()))?;

        tracing::debug!("Wrote {} pairs to '{}'", corpus.len(), self.path.display());
        Ok(())
    }
}

/// Serialise with 4-space indentation.
fn to_pretty_json(corpus: &QaCorpus) -> Result<String> {
    let mut buf = Vec::new();
    let formatter  = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser    = serde_json::Serializer::with_formatter(&mut buf, formatter);
    corpus.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Export the corpus to `path`, reporting instead of propagating errors.
/// Returns true if the file was written.
pub fn export_corpus(corpus: &QaCorpus, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match JsonCorpusStore::new(path).save(corpus) {
        Ok(()) => {
            tracing::info!("Exported {} QA pairs to '{}'", corpus.len(), path.display());
            println!("QA data saved to {}", path.display());
            true
        }
        Err(e) => {
            tracing::error!("Export to '{}' failed: {e:#}", path.display());
            println!("Error saving QA data: {e:#}");
            false
        }
    }
}
