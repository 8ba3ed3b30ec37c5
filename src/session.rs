//! The calculator session
//!
//! A [`Session`] owns the expression being built and reacts to discrete
//! actions from a presentation layer: append a token, delete the last token,
//! clear, evaluate. After every action that changes what should be on screen
//! it hands the new text to its injected [`Display`].
//!
//! ```text
//!            append (accepted)            evaluate (ok)
//!   Empty ----------------------> Building -------------> Settled
//!     ^                              |  ^                   |
//!     |   clear / delete-to-empty /  |  +-------------------+
//!     +------ evaluate (error) ------+     append (accepted)
//! ```

use crate::config::Config;
use crate::error;
use crate::lexer::{lex, LexError, Operator, Token};
use crate::validate::accepts_token;
use std::str::FromStr;
use thiserror::Error;

/// Surface the session renders to
pub trait Display {
    fn render(&mut self, text: &str);
}

impl<F: FnMut(&str)> Display for F {
    fn render(&mut self, text: &str) {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing entered
    Empty,
    /// A partial or complete expression that has not been evaluated
    Building,
    /// Holds the `0`/`1` result of the last evaluation
    Settled,
}

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Append(Token),
    Delete,
    Clear,
    Evaluate,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    Unknown(String),
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl FromStr for Action {
    type Err = ActionError;

    /// Accepts token spellings (`1`, `->`), connective names (`AND`,
    /// `implies`) and the controls `C`/`clear`, `del`/`delete`,
    /// `=`/`eval`/`evaluate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(token) = Token::from_symbol(s) {
            return Ok(Action::Append(token));
        }
        if let Some(op) = Operator::from_name(s) {
            return Ok(Action::Append(Token::Operator(op)));
        }
        match s.to_ascii_lowercase().as_str() {
            "c" | "clear" => Ok(Action::Clear),
            "del" | "delete" => Ok(Action::Delete),
            "=" | "eval" | "evaluate" => Ok(Action::Evaluate),
            _ => Err(ActionError::Unknown(s.to_string())),
        }
    }
}

impl Action {
    /// Parse a line of whitespace-separated actions. Words that are not
    /// action names are read as runs of tokens, so `(1v0)^0 =` is one line.
    pub fn parse_line(line: &str) -> Result<Vec<Action>, ActionError> {
        let mut actions = Vec::new();

        for word in line.split_whitespace() {
            if let Ok(action) = word.parse::<Action>() {
                actions.push(action);
                continue;
            }

            // Allow a trailing '=' glued to an expression: 1^0=
            let (body, evaluate) = match word.strip_suffix('=') {
                Some(body) => (body, true),
                None => (word, false),
            };

            // Same for a single action: AND= or v=
            if let Ok(action) = body.parse::<Action>() {
                actions.push(action);
                if evaluate {
                    actions.push(Action::Evaluate);
                }
                continue;
            }

            if body.chars().all(char::is_alphabetic) {
                return Err(ActionError::Unknown(word.to_string()));
            }

            actions.extend(lex(body)?.into_iter().map(Action::Append));
            if evaluate {
                actions.push(Action::Evaluate);
            }
        }

        Ok(actions)
    }
}

/// One calculator: the expression under construction plus its display
pub struct Session<D: Display> {
    expression: String,
    state: State,
    display: D,
    placeholder: String,
    error_message: String,
    last_error: Option<error::Error>,
}

impl<D: Display> Session<D> {
    pub fn new(display: D) -> Self {
        Self::with_config(display, &Config::default())
    }

    pub fn with_config(display: D, config: &Config) -> Self {
        Session {
            expression: String::new(),
            state: State::Empty,
            display,
            placeholder: config.placeholder.clone(),
            error_message: config.error_message.clone(),
            last_error: None,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Error from the most recent evaluation, if it failed
    pub fn last_error(&self) -> Option<&error::Error> {
        self.last_error.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Apply one action. Returns false when an append was refused or an
    /// evaluation failed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Append(token) => self.append(token),
            Action::Delete => {
                self.delete();
                true
            }
            Action::Clear => {
                self.clear();
                true
            }
            Action::Evaluate => self.evaluate(),
        }
    }

    /// Append a token if the expression stays on a path to being well-formed.
    /// A refused token changes nothing and renders nothing.
    pub fn append(&mut self, token: Token) -> bool {
        if !accepts_token(&self.expression, &token) {
            log::debug!("rejected '{}' after {:?}", token, self.expression);
            return false;
        }

        self.expression.push_str(token.as_str());
        self.state = State::Building;
        self.last_error = None;
        log::debug!("accepted '{}' -> {:?}", token, self.expression);
        self.show();
        true
    }

    /// Remove the last token; `->` and `<->` go in one step
    pub fn delete(&mut self) {
        let multi = [Operator::Bicond, Operator::Implies]
            .into_iter()
            .map(Operator::symbol)
            .find(|sym| self.expression.ends_with(sym));

        match multi {
            Some(sym) => self.expression.truncate(self.expression.len() - sym.len()),
            None => {
                self.expression.pop();
            }
        }

        self.state = if self.expression.is_empty() {
            State::Empty
        } else {
            State::Building
        };
        self.show();
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.state = State::Empty;
        self.last_error = None;
        self.show();
    }

    /// Evaluate the expression. On success it is replaced by the result; on
    /// any failure it is reset to empty and the error message is shown.
    pub fn evaluate(&mut self) -> bool {
        match crate::evaluate(&self.expression) {
            Ok(result) => {
                log::debug!("{:?} = {}", self.expression, result);
                self.expression = result;
                self.state = State::Settled;
                self.last_error = None;
                self.show();
                true
            }
            Err(err) => {
                log::debug!("evaluating {:?} failed: {}", self.expression, err);
                self.expression.clear();
                self.state = State::Empty;
                self.last_error = Some(err);
                self.display.render(&self.error_message);
                false
            }
        }
    }

    fn show(&mut self) {
        let text = if self.expression.is_empty() {
            &self.placeholder
        } else {
            &self.expression
        };
        self.display.render(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Default)]
    struct Screen {
        frames: Vec<String>,
    }

    impl Display for Screen {
        fn render(&mut self, text: &str) {
            self.frames.push(text.to_string());
        }
    }

    impl Screen {
        fn last(&self) -> &str {
            self.frames.last().map(String::as_str).unwrap_or("")
        }
    }

    fn session() -> Session<Screen> {
        Session::new(Screen::default())
    }

    fn feed(session: &mut Session<Screen>, line: &str) {
        for action in Action::parse_line(line).unwrap() {
            session.dispatch(action);
        }
    }

    #[test]
    fn starts_empty() {
        let s = session();
        assert_eq!(s.state(), State::Empty);
        assert_eq!(s.expression(), "");
        assert!(s.display().frames.is_empty());
    }

    #[test]
    fn append_builds_and_renders() {
        let mut s = session();
        feed(&mut s, "1 AND 0");
        assert_eq!(s.expression(), "1^0");
        assert_eq!(s.state(), State::Building);
        assert_eq!(s.display().frames, vec!["1", "1^", "1^0"]);
    }

    #[test]
    fn rejected_append_is_silent() {
        let mut s = session();
        feed(&mut s, "1");
        assert!(!s.append(Token::Literal(true)));
        assert_eq!(s.expression(), "1");
        assert_eq!(s.display().frames.len(), 1);
    }

    #[test]
    fn evaluate_settles() {
        let mut s = session();
        feed(&mut s, "1 -> 0 =");
        assert_eq!(s.state(), State::Settled);
        assert_eq!(s.expression(), "0");
        assert_eq!(s.display().last(), "0");
    }

    #[test]
    fn evaluate_settled_is_idempotent() {
        let mut s = session();
        feed(&mut s, "1v0 =");
        assert_eq!(s.expression(), "1");
        assert!(s.evaluate());
        assert_eq!(s.expression(), "1");
        assert_eq!(s.state(), State::Settled);
    }

    #[test]
    fn settled_result_continues_building() {
        let mut s = session();
        feed(&mut s, "1^1 = XOR 1");
        assert_eq!(s.expression(), "1⊕1");
        assert_eq!(s.state(), State::Building);
    }

    #[test]
    fn failed_evaluation_resets() {
        let mut s = session();
        feed(&mut s, "( 1 ^ 1");
        assert!(!s.evaluate());
        assert_eq!(s.state(), State::Empty);
        assert_eq!(s.expression(), "");
        assert_eq!(s.display().last(), Config::default().error_message);
        assert_eq!(
            s.last_error().map(error::Error::kind),
            Some(ErrorKind::MalformedExpression)
        );
    }

    #[test]
    fn evaluating_nothing_is_an_error() {
        let mut s = session();
        assert!(!s.evaluate());
        assert_eq!(s.state(), State::Empty);
    }

    #[test]
    fn delete_removes_multi_char_operators_atomically() {
        let mut s = session();
        feed(&mut s, "1 BICOND");
        assert_eq!(s.expression(), "1<->");
        s.delete();
        assert_eq!(s.expression(), "1");

        feed(&mut s, "IMPLIES");
        s.delete();
        assert_eq!(s.expression(), "1");
    }

    #[test]
    fn delete_removes_xor_as_one_char() {
        let mut s = session();
        feed(&mut s, "1 XOR");
        s.delete();
        assert_eq!(s.expression(), "1");
    }

    #[test]
    fn delete_to_empty_shows_placeholder() {
        let mut s = session();
        feed(&mut s, "1");
        s.delete();
        assert_eq!(s.state(), State::Empty);
        assert_eq!(s.display().last(), "0");
        s.delete();
        assert_eq!(s.state(), State::Empty);
    }

    #[test]
    fn clear_from_anywhere() {
        let mut s = session();
        feed(&mut s, "(1 v");
        s.clear();
        assert_eq!(s.state(), State::Empty);
        assert_eq!(s.expression(), "");
        assert_eq!(s.display().last(), "0");
    }

    #[test]
    fn custom_placeholder_and_message() {
        let config = Config {
            placeholder: "-".into(),
            error_message: "nope".into(),
            ..Config::default()
        };
        let mut s = Session::with_config(Screen::default(), &config);
        s.clear();
        assert_eq!(s.display().last(), "-");
        s.evaluate();
        assert_eq!(s.display().last(), "nope");
    }

    #[test]
    fn closures_are_displays() {
        let mut seen = Vec::new();
        {
            let mut s = Session::new(|text: &str| seen.push(text.to_string()));
            s.append(Token::Literal(false));
        }
        assert_eq!(seen, vec!["0"]);
    }

    #[test]
    fn parse_actions() {
        assert_eq!("AND".parse::<Action>(), Ok(Action::Append(Token::Operator(Operator::And))));
        assert_eq!("bicond".parse::<Action>(), Ok(Action::Append(Token::Operator(Operator::Bicond))));
        assert_eq!("->".parse::<Action>(), Ok(Action::Append(Token::Operator(Operator::Implies))));
        assert_eq!("C".parse::<Action>(), Ok(Action::Clear));
        assert_eq!("del".parse::<Action>(), Ok(Action::Delete));
        assert_eq!("=".parse::<Action>(), Ok(Action::Evaluate));
        assert_eq!(
            "nand".parse::<Action>(),
            Err(ActionError::Unknown("nand".into()))
        );
    }

    #[test]
    fn parse_line_mixes_names_and_symbols() {
        let actions = Action::parse_line("(1v0)^0=").unwrap();
        assert_eq!(actions.len(), 8);
        assert_eq!(actions.last(), Some(&Action::Evaluate));

        let actions = Action::parse_line("1 implies 0 evaluate").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Append(Token::Literal(true)),
                Action::Append(Token::Operator(Operator::Implies)),
                Action::Append(Token::Literal(false)),
                Action::Evaluate,
            ]
        );
    }

    #[test]
    fn parse_line_evaluate_glued_to_action() {
        assert_eq!(
            Action::parse_line("1 v=").unwrap(),
            vec![
                Action::Append(Token::Literal(true)),
                Action::Append(Token::Operator(Operator::Or)),
                Action::Evaluate,
            ]
        );
        assert_eq!(
            Action::parse_line("AND=").unwrap(),
            vec![Action::Append(Token::Operator(Operator::And)), Action::Evaluate]
        );
        assert_eq!(
            Action::parse_line("nand="),
            Err(ActionError::Unknown("nand=".into()))
        );
    }

    #[test]
    fn parse_line_reports_bad_tokens() {
        assert!(matches!(
            Action::parse_line("1 ^ 2"),
            Err(ActionError::Lex(LexError::BadToken { ch: '2', .. }))
        ));
        assert_eq!(
            Action::parse_line("1 frobnicate"),
            Err(ActionError::Unknown("frobnicate".into()))
        );
    }
}
