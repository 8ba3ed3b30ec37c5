use logicalc::{Action, ActionError, Display, Session, Token};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Display that keeps the last rendered text for the terminal to print.
/// Clones share the same text, so the REPL helper can read it for hints.
#[derive(Clone, Default)]
pub(crate) struct Screen {
    text: Arc<Mutex<String>>,
}

impl Screen {
    pub(crate) fn text(&self) -> String {
        self.text.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Display for Screen {
    fn render(&mut self, text: &str) {
        if let Ok(mut shown) = self.text.lock() {
            shown.clear();
            shown.push_str(text);
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum LineError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("'{token}' cannot follow {expression:?}")]
    Refused { token: Token, expression: String },
    /// The session has already reset and shown its error message
    #[error(transparent)]
    Evaluation(logicalc::Error),
}

/// Run one line of actions against the session.
///
/// In strict mode (scripts and `-c`) a refused token is an error instead of
/// being ignored the way a keypad press would be.
pub(crate) fn execute_line(
    session: &mut Session<Screen>,
    line: &str,
    strict: bool,
) -> Result<(), LineError> {
    let actions = Action::parse_line(line)?;

    for action in actions {
        let before = session.expression().to_string();
        if session.dispatch(action) {
            continue;
        }
        match action {
            Action::Append(token) if strict => {
                return Err(LineError::Refused {
                    token,
                    expression: before,
                });
            }
            Action::Evaluate => {
                if let Some(err) = session.last_error() {
                    return Err(LineError::Evaluation(err.clone()));
                }
            }
            _ => {}
        }
    }

    Ok(())
}
