// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Uses `clap` to parse
// arguments and delegates all work to Layer 2 (application).
// This is the only layer that prints results for one-shot
// commands; the chat loop writes its own transcript.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;

use commands::{AddArgs, AskArgs, Commands, ExportArgs, MatcherArgs, SuggestArgs};
use crate::application::{ask_use_case::AskUseCase, chat_use_case::ChatUseCase};
use crate::data::{loader::JsonCorpusLoader, sample::BuiltinCorpus};
use crate::domain::traits::{CorpusSource, QuestionAnswerer};
use crate::infra::config::MatcherConfig;

#[derive(Parser, Debug)]
#[command(
    name = "komodo-qa",
    version,
    about = "Answer questions about Komodo National Park tours by matching them against a Q&A table."
)]
pub struct Cli {
    #[command(flatten)]
    pub matcher: MatcherArgs,

    /// The subcommand to run (chat if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the use case once, then route to the subcommand.
    pub fn run(self) -> Result<()> {
        let mut use_case = self.build_use_case()?;

        match self.command {
            None | Some(Commands::Chat)  => run_chat(&use_case),
            Some(Commands::Ask(args))    => run_ask(&use_case, args),
            Some(Commands::Suggest(args)) => run_suggest(&use_case, args),
            Some(Commands::List)         => run_list(&use_case),
            Some(Commands::Add(args))    => run_add(&mut use_case, args),
            Some(Commands::Export(args)) => run_export(&use_case, args),
        }
    }

    fn build_use_case(&self) -> Result<AskUseCase> {
        let config = MatcherConfig::try_from(&self.matcher)?;

        let source: Box<dyn CorpusSource> = match &self.matcher.corpus {
            Some(path) => Box::new(JsonCorpusLoader::new(path)),
            None       => Box::new(BuiltinCorpus),
        };

        AskUseCase::from_source(source.as_ref(), config)
    }
}

fn run_chat(use_case: &AskUseCase) -> Result<()> {
    let stdin = io::stdin();
    ChatUseCase::new(use_case).run(stdin.lock(), io::stdout().lock())
}

fn run_ask(use_case: &AskUseCase, args: AskArgs) -> Result<()> {
    let result = use_case.ask(&args.question);

    if let Some(answer) = result.answer {
        println!("\nAnswer: {answer}");
        return Ok(());
    }

    println!(
        "\nNo confident match (closest score {:.2}). Did you mean one of these?",
        result.score
    );
    for (i, s) in use_case.suggest(&args.question).iter().enumerate() {
        println!("{}. {}", i + 1, s.question);
    }
    Ok(())
}

fn run_suggest(use_case: &AskUseCase, args: SuggestArgs) -> Result<()> {
    for (i, s) in use_case.suggest(&args.question).iter().enumerate() {
        println!("{}. [{:.4}] {}", i + 1, s.score, s.question);
    }
    Ok(())
}

fn run_list(use_case: &AskUseCase) -> Result<()> {
    for (i, pair) in use_case.corpus().iter().enumerate() {
        println!("{}. {}", i + 1, pair.question);
    }
    Ok(())
}

fn run_add(use_case: &mut AskUseCase, args: AddArgs) -> Result<()> {
    use_case.add_pair(args.question, args.answer);
    println!("New QA pair added successfully!");
    use_case.export(&args.out);
    Ok(())
}

fn run_export(use_case: &AskUseCase, args: ExportArgs) -> Result<()> {
    // Export failures are reported by export() and are not fatal
    use_case.export(&args.path);
    Ok(())
}
