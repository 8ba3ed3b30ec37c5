//! Postfix evaluator for logicalc
//!
//! A single left-to-right scan over a postfix token sequence:
//! - Literals push their truth value
//! - `~` pops one value and pushes its negation
//! - Binary connectives pop `b` then `a` and push `a <op> b`
//!
//! A well-formed sequence leaves exactly one value on the stack.

use crate::lexer::{Operator, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Insufficient operands for '{0}'")]
    InsufficientOperands(Operator),
    #[error("Unknown operator '{0}'")]
    UnknownOperator(Token),
    #[error("Malformed expression: {0} values left on the stack")]
    MalformedExpression(usize),
}

/// Value stack for a single evaluation
struct ValueStack {
    values: Vec<bool>,
}

impl ValueStack {
    fn with_capacity(n: usize) -> Self {
        ValueStack {
            values: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, v: bool) {
        self.values.push(v);
    }

    fn pop(&mut self, op: Operator) -> Result<bool, EvalError> {
        self.values
            .pop()
            .ok_or(EvalError::InsufficientOperands(op))
    }

    /// Pop the two operands of a binary connective as (a, b)
    fn pop_pair(&mut self, op: Operator) -> Result<(bool, bool), EvalError> {
        if self.values.len() < 2 {
            return Err(EvalError::InsufficientOperands(op));
        }
        let b = self.pop(op)?;
        let a = self.pop(op)?;
        Ok((a, b))
    }

    fn finish(mut self) -> Result<bool, EvalError> {
        match self.values.len() {
            1 => Ok(self.values.pop().unwrap_or_default()),
            n => Err(EvalError::MalformedExpression(n)),
        }
    }
}

/// Truth table of a binary connective. `None` for `~`, which takes one
/// operand.
pub fn apply_binary(op: Operator, a: bool, b: bool) -> Option<bool> {
    match op {
        Operator::And => Some(a && b),
        Operator::Or => Some(a || b),
        Operator::Xor => Some(a != b),
        Operator::Implies => Some(!a || b),
        Operator::Bicond => Some(a == b),
        Operator::Not => None,
    }
}

/// Reduce a postfix token sequence to a single truth value
pub fn eval_postfix(postfix: &[Token]) -> Result<bool, EvalError> {
    let mut stack = ValueStack::with_capacity(postfix.len());

    for &token in postfix {
        match token {
            Token::Literal(v) => stack.push(v),
            Token::Operator(Operator::Not) => {
                let a = stack.pop(Operator::Not)?;
                stack.push(!a);
            }
            Token::Operator(op) => {
                let (a, b) = stack.pop_pair(op)?;
                let value = apply_binary(op, a, b).ok_or(EvalError::UnknownOperator(token))?;
                stack.push(value);
            }
            Token::Open | Token::Close => return Err(EvalError::UnknownOperator(token)),
        }
        log::trace!("eval: {} -> {:?}", token, stack.values);
    }

    stack.finish()
}

/// Render a truth value the way it is written in an expression
pub fn render(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
