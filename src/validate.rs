//! Structural checks on expressions
//!
//! Two checks guard the evaluation pipeline:
//! - [`accepts`] decides, before a token is appended, whether the expression
//!   stays on a path to being well-formed. It never errors, it only says no.
//! - [`is_complete`] decides, right before evaluation, whether a finished
//!   expression is balanced and has nothing dangling.

use crate::lexer::Token;

/// Syntactic role of a token for the adjacency rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Literal,
    Unary,
    Binary,
    Open,
    Close,
}

impl Class {
    fn of(token: &Token) -> Class {
        match token {
            Token::Literal(_) => Class::Literal,
            Token::Operator(op) if op.is_unary() => Class::Unary,
            Token::Operator(_) => Class::Binary,
            Token::Open => Class::Open,
            Token::Close => Class::Close,
        }
    }

    /// Classify the final character of an expression. `>` ends both `->`
    /// and `<->`.
    fn of_last_char(c: char) -> Option<Class> {
        match c {
            '0' | '1' => Some(Class::Literal),
            '~' => Some(Class::Unary),
            '^' | 'v' | '⊕' | '>' => Some(Class::Binary),
            '(' => Some(Class::Open),
            ')' => Some(Class::Close),
            _ => None,
        }
    }

    fn is_operator(self) -> bool {
        matches!(self, Class::Unary | Class::Binary)
    }

    /// Tokens that may begin an operand: `0`, `1`, `(`, `~`
    fn starts_operand(self) -> bool {
        matches!(self, Class::Literal | Class::Open | Class::Unary)
    }
}

/// Would appending `candidate` (a whole token spelling such as `"->"`) keep
/// `expression` on a path to a well-formed formula?
pub fn accepts(expression: &str, candidate: &str) -> bool {
    match Token::from_symbol(candidate) {
        Some(token) => accepts_token(expression, &token),
        None => false,
    }
}

pub fn accepts_token(expression: &str, token: &Token) -> bool {
    let next = Class::of(token);

    let last = match expression.chars().last() {
        None => return next.starts_operand(),
        Some(c) => Class::of_last_char(c),
    };

    match last {
        // No two operators in a row
        Some(prev) if prev.is_operator() => !next.is_operator(),
        Some(Class::Literal) => matches!(next, Class::Binary | Class::Close),
        Some(Class::Open) => next.starts_operand(),
        Some(Class::Close) => matches!(next, Class::Binary | Class::Close),
        _ => true,
    }
}

/// Is `expression` balanced, non-empty, free of empty groups, and not ending
/// in an operator or `(`? Whitespace is ignored.
pub fn is_complete(expression: &str) -> bool {
    let mut depth: i64 = 0;
    let mut prev: Option<char> = None;

    for c in expression.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '(' => depth += 1,
            ')' => {
                if prev == Some('(') {
                    return false;
                }
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    if depth != 0 {
        return false;
    }

    match prev {
        None => false,
        Some('(') => false,
        Some(c) => !Class::of_last_char(c).is_some_and(Class::is_operator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: [&str; 10] = ["0", "1", "(", ")", "~", "^", "v", "⊕", "->", "<->"];

    #[test]
    fn empty_expression_start() {
        assert!(accepts("", "0"));
        assert!(accepts("", "1"));
        assert!(accepts("", "("));
        assert!(accepts("", "~"));
        for sym in ["^", "v", "⊕", "->", "<->", ")"] {
            assert!(!accepts("", sym), "should not start with {}", sym);
        }
    }

    #[test]
    fn no_consecutive_literals() {
        assert!(!accepts("1", "1"));
        assert!(!accepts("1", "0"));
    }

    #[test]
    fn no_consecutive_operators() {
        for prev in ["1^", "1v", "1⊕", "1->", "1<->", "~"] {
            for sym in ["^", "v", "⊕", "->", "<->", "~"] {
                assert!(!accepts(prev, sym), "{} then {}", prev, sym);
            }
        }
    }

    #[test]
    fn after_literal() {
        assert!(accepts("1", "^"));
        assert!(accepts("1", "<->"));
        assert!(accepts("(1", ")"));
        assert!(!accepts("1", "("));
        assert!(!accepts("1", "~"));
    }

    #[test]
    fn after_open() {
        for sym in ["0", "1", "(", "~"] {
            assert!(accepts("(", sym));
        }
        for sym in ["^", "->", ")"] {
            assert!(!accepts("(", sym));
        }
    }

    #[test]
    fn after_close() {
        assert!(accepts("((1)", ")"));
        assert!(accepts("(1)", "v"));
        for sym in ["0", "1", "(", "~"] {
            assert!(!accepts("(1)", sym));
        }
    }

    #[test]
    fn after_operator_operands_are_accepted() {
        assert!(accepts("1->", "0"));
        assert!(accepts("1<->", "("));
        assert!(accepts("~", "1"));
    }

    #[test]
    fn unknown_candidate_is_rejected() {
        assert!(!accepts("1^", "x"));
        assert!(!accepts("1", "-"));
        assert!(!accepts("", ""));
    }

    #[test]
    fn complete_expressions() {
        assert!(is_complete("1"));
        assert!(is_complete("1^0"));
        assert!(is_complete("(1v0)^0"));
        assert!(is_complete("~(1<->0)"));
        assert!(is_complete(" 1 -> 0 "));
    }

    #[test]
    fn incomplete_expressions() {
        assert!(!is_complete(""));
        assert!(!is_complete("(1^1"));
        assert!(!is_complete("1^"));
        assert!(!is_complete("1->"));
        assert!(!is_complete("~"));
        assert!(!is_complete("1^("));
        assert!(!is_complete("()"));
        assert!(!is_complete("1^(()v1)"));
        assert!(!is_complete("( )"));
        assert!(!is_complete(")1^0"));
        assert!(!is_complete("1)("));
    }

    /// Every expression reachable through accepted appends that is balanced
    /// and ends in an operand must pass the completeness check.
    #[test]
    fn validator_built_expressions_are_not_falsely_rejected() {
        fn walk(expr: &mut String, depth: usize, checked: &mut usize) {
            let balanced = expr
                .chars()
                .try_fold(0i64, |depth, c| match c {
                    '(' => Some(depth + 1),
                    ')' if depth == 0 => None,
                    ')' => Some(depth - 1),
                    _ => Some(depth),
                })
                == Some(0);
            let ends_in_operand = matches!(expr.chars().last(), Some('0' | '1' | ')'));
            if balanced && ends_in_operand {
                assert!(is_complete(expr), "falsely rejected {:?}", expr);
                *checked += 1;
            }
            if depth == 0 {
                return;
            }
            for sym in SYMBOLS {
                if accepts(expr, sym) {
                    let len = expr.len();
                    expr.push_str(sym);
                    walk(expr, depth - 1, checked);
                    expr.truncate(len);
                }
            }
        }

        let mut checked = 0;
        walk(&mut String::new(), 7, &mut checked);
        assert!(checked > 100);
    }

    #[test]
    fn validator_never_builds_a_leading_operator_or_closer() {
        for sym in SYMBOLS {
            if accepts("", sym) {
                assert!(matches!(sym, "0" | "1" | "(" | "~"));
            }
        }
    }
}
