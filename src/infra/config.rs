// ============================================================
// Layer 6 — Matcher Configuration
// ============================================================
// The two knobs that control a lookup:
//
//   threshold        — minimum similarity (inclusive) for a
//                      best match to be returned as THE answer.
//                      Below it, the user gets suggestions.
//                      Default 0.6.
//
//   suggestion_count — how many ranked suggestions to show when
//                      there is no confident match. Default 5.
//
// Values come from, in increasing priority:
//   1. MatcherConfig::default()
//   2. an optional JSON file (--config)
//   3. command line flags (--threshold, --top-n)
//
// Example config file:
//   { "threshold": 0.7, "suggestion_count": 3 }
//
// Missing keys fall back to the defaults via #[serde(default)].
//
// Reference: Rust Book §9 (Error Handling)
//            serde documentation (field defaults)

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum score, in [0.0, 1.0], to accept a best match
    pub threshold: f64,

    /// Number of ranked suggestions to offer on a miss
    pub suggestion_count: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold:        DEFAULT_THRESHOLD,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
        }
    }
}

impl MatcherConfig {
    pub fn new(threshold: f64, suggestion_count: usize) -> Self {
        Self { threshold, suggestion_count }
    }

    /// Read a config from a JSON file. The result is validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;

        cfg.validate()?;
        tracing::debug!("Loaded matcher config from '{}': {:?}", path.display(), cfg);
        Ok(cfg)
    }

    /// Apply command line overrides on top of this config
    pub fn with_overrides(mut self, threshold: Option<f64>, suggestion_count: Option<usize>) -> Self {
        if let Some(t) = threshold {
            self.threshold = t;
        }
        if let Some(n) = suggestion_count {
            self.suggestion_count = n;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.threshold),
            "threshold must be between 0.0 and 1.0, got {}",
            self.threshold
        );
        ensure!(
            self.suggestion_count >= 1,
            "suggestion count must be at least 1"
        );
        Ok(())
    }
}
