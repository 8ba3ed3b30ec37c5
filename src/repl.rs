use logicalc::{Config, Operator, Session};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper, Result as RlResult};
use std::borrow::Cow;

use crate::cli::print_help;
use crate::rcfile::history_path;
use crate::terminal::{execute_line, LineError, Screen};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Words offered by tab completion
fn action_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = Operator::ALL.iter().map(|op| op.name()).collect();
    words.extend(["clear", "delete", "evaluate", ".help", ".state", "exit", "quit"]);
    words
}

/// Byte offset where the word ending at `pos` begins
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

// ============================================
// Line editor helper
// ============================================

struct LogicHelper {
    /// Shares the session's display text for the live hint
    screen: Screen,
    words: Vec<&'static str>,
}

impl Helper for LogicHelper {}

impl Completer for LogicHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let prefix = &line[start..pos];

        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }

        let lower = prefix.to_ascii_lowercase();
        let candidates = self
            .words
            .iter()
            .filter(|w| w.to_ascii_lowercase().starts_with(&lower))
            .map(|w| Pair {
                display: w.to_string(),
                replacement: format!("{} ", w),
            })
            .collect();

        Ok((start, candidates))
    }
}

impl Hinter for LogicHelper {
    type Hint = String;

    fn hint(&self, line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        // Show what the session currently holds while the line is empty
        if !line.is_empty() {
            return None;
        }
        let text = self.screen.text();
        if text.is_empty() {
            None
        } else {
            Some(format!("  [{}]", text))
        }
    }
}

impl Highlighter for LogicHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        // Dim the hint
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for LogicHelper {}

// ============================================
// REPL main loop
// ============================================

pub(crate) fn run_repl(config: &Config) -> RlResult<()> {
    let screen = Screen::default();
    let mut session = Session::with_config(screen.clone(), config);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(LogicHelper {
        screen: screen.clone(),
        words: action_words(),
    }));

    let history = if config.history { history_path() } else { None };
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    if config.banner {
        println!("logicalc {} - propositional logic calculator", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    loop {
        match rl.readline("logicalc> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "exit" | "quit" => break,
                    ".help" | ".h" => {
                        print_help();
                        continue;
                    }
                    ".state" | ".s" => {
                        println!("{:?} {:?}", session.state(), session.expression());
                        continue;
                    }
                    _ => {}
                }

                match execute_line(&mut session, trimmed, false) {
                    Ok(()) => println!("{}", screen.text()),
                    // The display already carries the error message
                    Err(LineError::Evaluation(e)) => {
                        log::debug!("line {:?}: {}", trimmed, e);
                        println!("{}", screen.text());
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - abandon the line, keep the expression
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history {
        let _ = rl.save_history(path);
    }

    Ok(())
}
