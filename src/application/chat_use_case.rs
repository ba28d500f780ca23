// ============================================================
// Layer 2 — Chat Use Case
// ============================================================
// The interactive loop:
//
//   You: <question>
//     ├─ confident match → "Chatbot: <answer>"
//     └─ no match        → numbered list of closest questions,
//                          then "Enter a number or ask a new question:"
//                            ├─ valid number → that answer
//                            └─ anything else → ignored, back to "You:"
//
// The loop ends on exit/quit/bye/goodbye (any case) or end of
// input. Input and output are generic so tests can drive the
// loop with in-memory buffers instead of a real terminal.
//
// Reference: Rust Book §12 (Reading input), std::io::BufRead

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::ask_use_case::AskUseCase;
use crate::domain::traits::QuestionAnswerer;

/// Words that end the conversation (compared lowercase, trimmed)
const EXIT_WORDS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

pub struct ChatUseCase<'a> {
    ask: &'a AskUseCase,
}

impl<'a> ChatUseCase<'a> {
    pub fn new(ask: &'a AskUseCase) -> Self {
        Self { ask }
    }

    /// Run the loop until an exit word or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "\nKomodo National Park Tour Guide Chatbot")?;
        writeln!(out, "======================================")?;
        writeln!(out, "Hi! How can I help you today?")?;
        writeln!(out, "(Type 'exit' or 'quit' to end the conversation)")?;

        let mut turns = 0usize;

        loop {
            let Some(line) = prompt(&mut input, &mut out, "\nYou: ")? else {
                tracing::debug!("Input closed after {} turns", turns);
                writeln!(out)?;
                break;
            };

            if is_exit(&line) {
                break;
            }
            turns += 1;

            let result = self.ask.ask(&line);
            if let Some(answer) = result.answer {
                writeln!(out, "\nChatbot: {answer}")?;
                continue;
            }

            writeln!(
                out,
                "\nChatbot: I'm not sure I understand your question. Did you mean one of these?"
            )?;
            let suggestions = self.ask.suggest(&line);
            for (i, s) in suggestions.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, s.question)?;
            }
            writeln!(
                out,
                "\nPlease try rephrasing your question or select one of the above options (1-{}).",
                suggestions.len()
            )?;

            let Some(selection) = prompt(&mut input, &mut out, "Enter a number or ask a new question: ")? else {
                writeln!(out)?;
                break;
            };

            if let Some(pair) = self.ask.select(&selection, &suggestions) {
                writeln!(out, "\nChatbot: {}", pair.answer)?;
            }
        }

        writeln!(out, "Thank you for chatting with us! Have a great day!")?;
        out.flush()?;
        Ok(())
    }
}

/// Print `text`, then read one trimmed line. None on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_exit(line: &str) -> bool {
    let lower = line.to_lowercase();
    EXIT_WORDS.contains(&lower.as_str())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::komodo_corpus;
    use crate::infra::config::MatcherConfig;

    /// Run a whole chat over scripted input and return the transcript
    fn chat(script: &str) -> String {
        let uc  = AskUseCase::new(komodo_corpus(), MatcherConfig::default()).unwrap();
        let mut out = Vec::new();
        ChatUseCase::new(&uc).run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_answers_confident_match() {
        let t = chat("Can I cancel my booking?\nquit\n");
        assert!(t.contains("Chatbot: You cannot cancel a paid ticket booking."));
        assert!(t.ends_with("Thank you for chatting with us! Have a great day!\n"));
    }

    #[test]
    fn test_exit_words_any_case() {
        for word in ["exit", "QUIT", "  Bye  ", "GoodBye"] {
            let t = chat(&format!("{word}\nCan I cancel my booking?\n"));
            assert!(!t.contains("Chatbot:"), "{word:?} did not end the chat");
            assert!(t.contains("Thank you for chatting"));
        }
    }

    #[test]
    fn test_miss_shows_numbered_menu_and_selection_answers() {
        let t = chat("What's the weather like\n1\nexit\n");
        assert!(t.contains("Did you mean one of these?"));
        assert!(t.contains("1. What is the limit to change the departure date?"));
        assert!(t.contains("5. "));
        assert!(!t.contains("6. "));
        assert!(t.contains("(1-5)"));
        assert!(t.contains("Chatbot: You can only change the departure date once."));
    }

    #[test]
    fn test_invalid_selection_is_silent() {
        let t = chat("What's the weather like\n9\nexit\n");
        let after_menu = t.split("Enter a number or ask a new question: ").nth(1).unwrap();
        assert!(!after_menu.contains("Chatbot:"));
    }

    #[test]
    fn test_end_of_input_ends_gracefully() {
        let t = chat("Do I need a guided ticket?\n");
        assert!(t.contains("Chatbot: It is mandatory"));
        assert!(t.contains("Thank you for chatting"));

        let t = chat("asdkfjasldkf completely unrelated gibberish\n");
        assert!(t.contains("Did you mean one of these?"));
        assert!(t.contains("Thank you for chatting"));
    }
}
