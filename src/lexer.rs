//! Tokenization for logicalc
//!
//! Tokens are the atomic elements of a propositional formula: the literals
//! `0` and `1`, the connectives, and the grouping marks.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::char,
    combinator::value,
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::fmt;
use thiserror::Error;

/// A logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,     // ~
    And,     // ^
    Or,      // v
    Xor,     // ⊕
    Implies, // ->
    Bicond,  // <->
}

impl Operator {
    /// Every connective, in keypad order
    pub const ALL: [Operator; 6] = [
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Not,
        Operator::Implies,
        Operator::Bicond,
    ];

    /// Canonical symbol written into an expression
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "~",
            Operator::And => "^",
            Operator::Or => "v",
            Operator::Xor => "⊕",
            Operator::Implies => "->",
            Operator::Bicond => "<->",
        }
    }

    /// Name of the keypad action that produces this connective
    pub fn name(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Implies => "IMPLIES",
            Operator::Bicond => "BICOND",
        }
    }

    /// Look up a connective by its action name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A truth value: 0 or 1
    Literal(bool),
    /// A connective
    Operator(Operator),
    /// Group start: (
    Open,
    /// Group end: )
    Close,
}

impl Token {
    /// Spelling of the token inside an expression
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Literal(false) => "0",
            Token::Literal(true) => "1",
            Token::Operator(op) => op.symbol(),
            Token::Open => "(",
            Token::Close => ")",
        }
    }

    /// Recognize a single complete token spelling (`"->"`, `"1"`, ...)
    pub fn from_symbol(s: &str) -> Option<Token> {
        match token(s) {
            Ok(("", tok)) => Some(tok),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Bad token '{ch}' at offset {offset}")]
    BadToken { ch: char, offset: usize },
}

/// Parse <-> (must come before ->)
fn bicond_op(input: &str) -> IResult<&str, Token> {
    value(Token::Operator(Operator::Bicond), tag("<->"))(input)
}

/// Parse ->
fn implies_op(input: &str) -> IResult<&str, Token> {
    value(Token::Operator(Operator::Implies), tag("->"))(input)
}

fn connective(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Operator(Operator::Not), char('~')),
        value(Token::Operator(Operator::And), char('^')),
        value(Token::Operator(Operator::Or), char('v')),
        value(Token::Operator(Operator::Xor), char('⊕')),
    ))(input)
}

fn literal(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Literal(false), char('0')),
        value(Token::Literal(true), char('1')),
    ))(input)
}

fn grouping(input: &str) -> IResult<&str, Token> {
    alt((value(Token::Open, char('(')), value(Token::Close, char(')'))))(input)
}

/// Skip whitespace, Unicode included
fn space(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Parse any single token
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        // Multi-char operators first
        bicond_op,
        implies_op,
        connective,
        literal,
        grouping,
    ))(input)
}

/// Tokenize a complete expression string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let (remaining, tokens) = many0(preceded(space, token))(input)
        .map_err(|_| bad_token(input, input))?;

    // Anything left over (after trailing whitespace) is unrecognized
    let rest = remaining.trim_start();
    if !rest.is_empty() {
        return Err(bad_token(input, rest));
    }

    log::trace!("lexed {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

fn bad_token(input: &str, rest: &str) -> LexError {
    LexError::BadToken {
        ch: rest.chars().next().unwrap_or('\0'),
        offset: input.len() - rest.len(),
    }
}
