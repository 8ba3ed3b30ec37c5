//! logicalc - an interactive propositional-logic calculator
//!
//! # Overview
//!
//! Expressions are built from the literals `0` and `1`, the connectives
//! below, and parentheses. They are typically built one token at a time
//! through a [`Session`], which refuses any token that could not lead to a
//! well-formed formula, and then evaluated to a single literal.
//!
//! ```text
//! ~    NOT      (binds tightest)
//! ^    AND
//! v    OR
//! ⊕    XOR
//! ->   IMPLIES
//! <->  BICOND   (binds loosest)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "(1v0)^0"  --lex-->  ( 1 v 0 ) ^ 0  --to_postfix-->  1 0 v 0 ^  --eval-->  0
//! ```
//!
//! # Example
//!
//! ```rust
//! use logicalc::{Action, Operator, Session, Token};
//!
//! let mut out = String::new();
//! let mut session = Session::new(|text: &str| out = text.to_string());
//! session.dispatch(Action::Append(Token::Literal(true)));
//! session.dispatch(Action::Append(Token::Operator(Operator::Implies)));
//! session.dispatch(Action::Append(Token::Literal(false)));
//! session.dispatch(Action::Evaluate);
//! assert_eq!(session.expression(), "0");
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod postfix;
pub mod precedence;
pub mod session;
pub mod validate;

// Re-export commonly used items
pub use config::{Config, ConfigError};
pub use error::{Error, ErrorKind};
pub use eval::{eval_postfix, EvalError};
pub use lexer::{lex, LexError, Operator, Token};
pub use postfix::{to_postfix, ConvertError};
pub use session::{Action, ActionError, Display, Session, State};
pub use validate::{accepts, is_complete};

/// Evaluate a complete expression string to `"0"` or `"1"`
pub fn evaluate(expression: &str) -> Result<String, Error> {
    if !is_complete(expression) {
        return Err(Error::Incomplete(expression.to_string()));
    }
    let tokens = lex(expression)?;
    let postfix = to_postfix(&tokens)?;
    let value = eval_postfix(&postfix)?;
    Ok(eval::render(value).to_string())
}
