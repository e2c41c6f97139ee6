use std::io::{self, BufRead, Write};

use colored::Colorize;
use needboard_lib::Prompt;
use tracing::warn;

/// Confirmations on stdin, notices on stderr.
#[derive(Debug)]
pub struct TerminalPrompt {
    /// Answer yes to every confirmation without asking
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [s/N] ");
        if let Err(e) = io::stderr().flush() {
            warn!("Failed to flush prompt: {e}");
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}
