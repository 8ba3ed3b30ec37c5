//! Infix to postfix conversion (shunting-yard)
//!
//! Literals go straight to the output, operators wait on a stack until an
//! operator of lower precedence (or a closing group) forces them out. All
//! binary connectives are left-associative. Prefix `~` never pops on arrival,
//! so `~~1` becomes `1 ~ ~` rather than emitting a negation with no operand.

use crate::lexer::Token;
use crate::precedence::precedence;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,
}

/// Convert an infix token sequence to postfix order
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ConvertError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::Open => stack.push(token),
            Token::Close => {
                // Unbalanced closers are rejected before conversion; here the
                // loop simply runs the stack dry.
                while let Some(top) = stack.pop() {
                    if top == Token::Open {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Operator(op) if op.is_unary() => stack.push(token),
            Token::Operator(_) => {
                while let Some(&top) = stack.last() {
                    if top == Token::Open || precedence(&top) < precedence(&token) {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
        }
        log::trace!("postfix: {} -> out={:?} stack={:?}", token, output, stack);
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::Open | Token::Close) {
            return Err(ConvertError::MismatchedParenthesis);
        }
        output.push(top);
    }

    Ok(output)
}
