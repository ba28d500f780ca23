// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   chat     — interactive question/answer loop (default)
//   ask      — answer one question, or list suggestions
//   suggest  — show the ranked closest questions with scores
//   list     — print every stored question in corpus order
//   add      — append a pair and write the grown corpus to JSON
//   export   — write the corpus to a JSON file
//
// MatcherArgs are shared by every subcommand (global flags).
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::infra::config::MatcherConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive tour-guide chat
    Chat,

    /// Answer a single question
    Ask(AskArgs),

    /// Show the stored questions closest to a query, with scores
    Suggest(SuggestArgs),

    /// List every stored question
    List,

    /// Add a question/answer pair and save the corpus as JSON
    Add(AddArgs),

    /// Save the corpus to a JSON file
    Export(ExportArgs),
}

/// Settings that apply to every subcommand.
#[derive(Args, Debug, Default)]
pub struct MatcherArgs {
    /// JSON corpus file; the built-in Komodo table is used if omitted
    #[arg(long, global = true)]
    pub corpus: Option<String>,

    /// JSON file with matcher settings (threshold, suggestion_count)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Minimum similarity in [0, 1] to accept a match [default: 0.6]
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Number of suggestions shown when there is no match [default: 5]
    #[arg(long, global = true)]
    pub top_n: Option<usize>,
}

/// Convert CLI MatcherArgs into the matcher's config.
/// Defaults, then the --config file, then explicit flags.
impl TryFrom<&MatcherArgs> for MatcherConfig {
    type Error = anyhow::Error;

    fn try_from(a: &MatcherArgs) -> Result<Self> {
        let base = match &a.config {
            Some(path) => MatcherConfig::load(path)?,
            None       => MatcherConfig::default(),
        };
        let cfg = base.with_overrides(a.threshold, a.top_n);
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to look up
    #[arg(long, short)]
    pub question: String,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// The query to rank stored questions against
    #[arg(long, short)]
    pub question: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// The new question
    #[arg(long)]
    pub question: String,

    /// Its answer
    #[arg(long)]
    pub answer: String,

    /// Where to write the grown corpus
    #[arg(long, default_value = "komodo_qa_data.json")]
    pub out: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output JSON file
    #[arg(long, default_value = "komodo_qa_data.json")]
    pub path: String,
}
