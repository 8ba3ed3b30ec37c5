//! Binding strength of each connective (higher binds tighter)

use crate::lexer::{Operator, Token};

/// Precedence of a token; grouping marks and literals bind at 0
pub fn precedence(token: &Token) -> u8 {
    match token {
        Token::Operator(op) => operator_precedence(*op),
        _ => 0,
    }
}

pub fn operator_precedence(op: Operator) -> u8 {
    match op {
        Operator::Not => 4,
        Operator::And => 3,
        Operator::Or | Operator::Xor => 2,
        Operator::Implies | Operator::Bicond => 1,
    }
}
