//! Crate-level error for the evaluation pipeline

use crate::eval::EvalError;
use crate::lexer::LexError;
use crate::postfix::ConvertError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Rejected by the completeness check before evaluation
    #[error("Incomplete expression: {0:?}")]
    Incomplete(String),
}

/// The single kind surfaced to callers for a failed evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadToken,
    MismatchedParenthesis,
    InsufficientOperands,
    UnknownOperator,
    MalformedExpression,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(LexError::BadToken { .. }) => ErrorKind::BadToken,
            Error::Convert(ConvertError::MismatchedParenthesis) => {
                ErrorKind::MismatchedParenthesis
            }
            Error::Eval(EvalError::InsufficientOperands(_)) => ErrorKind::InsufficientOperands,
            Error::Eval(EvalError::UnknownOperator(_)) => ErrorKind::UnknownOperator,
            Error::Eval(EvalError::MalformedExpression(_)) | Error::Incomplete(_) => {
                ErrorKind::MalformedExpression
            }
        }
    }
}
