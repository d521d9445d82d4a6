//! Human-readable rendering of a [`ParseError`] against its source.
//!
//! ```text
//! error: invalid character '#'
//!  --> line 1, column 11
//!   |
//! 1 | a * (b + c#)
//!   |           ^
//!   = while parsing the right-hand side of '*' (` (b + c#)` at 3)
//!   = while parsing parentheses (`b + c#` at 5)
//!   = while parsing the right-hand side of '+' (` c#` at 8)
//!   = help: symbols may only contain ASCII letters, digits and '.'
//! ```

use crate::error::{ErrorKind, ParseError};

/// Render `err` with a caret under its position, the context trail and a
/// hint for the error kind when one applies.
pub fn render(source: &str, err: &ParseError) -> String {
    let (line_no, column, line) = locate(source, err.position);
    let gutter = " ".repeat(line_no.to_string().len());

    let mut out = format!("error: {}\n", err.kind);
    out.push_str(&format!("{gutter}--> line {line_no}, column {}\n", column + 1));
    out.push_str(&format!("{gutter} |\n"));
    out.push_str(&format!("{line_no} | {line}\n"));
    out.push_str(&format!("{gutter} | {}^\n", " ".repeat(column)));

    for crumb in err.breadcrumb() {
        out.push_str(&format!("{gutter} = {crumb}\n"));
    }
    if let Some(help) = help_for(&err.kind) {
        out.push_str(&format!("{gutter} = help: {help}\n"));
    }
    out
}

/// A hint for the user, keyed on what went wrong.
pub fn help_for(kind: &ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::EmptyInput => Some("enter an expression such as 'a + b'"),
        ErrorKind::MissingOperand { .. } => Some("every binary operator needs an operand on both sides"),
        ErrorKind::MissingUnaryOperand => Some("a sign must be followed by an operand, e.g. '-x'"),
        ErrorKind::MissingConjugateTransposeOperand => {
            Some("the conjugate transpose ' follows its operand, e.g. \"a'\"")
        }
        ErrorKind::UnmatchedParenthesis => Some("did you forget a closing ')' or ']'?"),
        ErrorKind::EmptyParentheses => Some("brackets must contain an expression"),
        ErrorKind::InvalidCharacter('^') => Some("'^' does not chain; write a^(b^c)"),
        ErrorKind::InvalidCharacter('\'') => Some("repeat a transpose with parentheses: (a')'"),
        ErrorKind::InvalidCharacter('-' | '+') => {
            Some("a sign cannot start the base of '^'; write -(a^2) or (-a)^2")
        }
        ErrorKind::InvalidCharacter(' ' | '\t' | '\r' | '\n') => {
            Some("two operands need an operator between them")
        }
        ErrorKind::InvalidCharacter(_) => {
            Some("symbols may only contain ASCII letters, digits and '.'")
        }
        ErrorKind::NestingTooDeep { .. } => Some("split the expression into smaller parts"),
    }
}

/// 1-based line number, 0-based column and the text of the line holding
/// character offset `position`. Offsets past the end land after the last
/// character.
fn locate(source: &str, position: usize) -> (usize, usize, &str) {
    let mut line_no = 1;
    let mut line_start = 0;
    let mut column = 0;

    for (index, (byte, ch)) in source.char_indices().enumerate() {
        if index == position {
            break;
        }
        if ch == '\n' {
            line_no += 1;
            line_start = byte + 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    let rest = &source[line_start..];
    let line = rest.split('\n').next().unwrap_or_default();
    (line_no, column, line.trim_end_matches('\r'))
}
