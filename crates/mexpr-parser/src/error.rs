//! Parse errors and the context trail they collect on the way out.

use crate::ast::{BinaryOp, Side, UnaryOp};
use mexpr_scanner::Cursor;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    #[error("empty input")]
    EmptyInput,

    #[error("missing {side} operand for '{operator}'")]
    MissingOperand { side: Side, operator: BinaryOp },

    #[error("missing operand after sign")]
    MissingUnaryOperand,

    #[error("missing operand before conjugate transpose")]
    MissingConjugateTransposeOperand,

    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,

    #[error("empty parentheses")]
    EmptyParentheses,

    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("brackets nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ErrorKind {
    /// True when the text ran out where an operand was still expected.
    ///
    /// A `+`/`-` whose left side fails this way is reread as a sign.
    pub fn awaits_operand(&self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyInput
                | ErrorKind::MissingUnaryOperand
                | ErrorKind::MissingOperand {
                    side: Side::Right,
                    ..
                }
        )
    }
}

/// The construct being parsed when a failure passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Context {
    Operand { operator: BinaryOp, side: Side },
    UnaryOperand(UnaryOp),
    TransposeOperand,
    Parentheses,
    FunctionArgument { name: String },
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Operand { operator, side } => {
                write!(f, "the {side} side of '{operator}'")
            }
            Context::UnaryOperand(op) => write!(f, "the operand of sign '{op}'"),
            Context::TransposeOperand => write!(f, "the operand of conjugate transpose"),
            Context::Parentheses => write!(f, "parentheses"),
            Context::FunctionArgument { name } => write!(f, "the argument of '{name}'"),
        }
    }
}

/// One entry of the context trail: a context and the text it covered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    pub context: Context,
    pub text: String,
    pub start: usize,
}

impl Frame {
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::at(&self.text, self.start)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while parsing {} ({})", self.context, self.cursor())
    }
}

/// Parser error with an absolute position and a context trail, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("Parse error at position {position}: {kind}")]
pub struct ParseError {
    pub position: usize,
    pub kind: ErrorKind,
    pub trail: Vec<Frame>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self {
            position,
            kind,
            trail: Vec::new(),
        }
    }

    /// Replace `EmptyInput` with a kind that names what was missing.
    pub fn or_if_empty(mut self, kind: ErrorKind) -> Self {
        if self.kind == ErrorKind::EmptyInput {
            self.kind = kind;
        }
        self
    }

    /// Record that the failure happened inside `context`, covering `cursor`.
    pub fn within(mut self, context: Context, cursor: Cursor<'_>) -> Self {
        self.trail.insert(
            0,
            Frame {
                context,
                text: cursor.text().to_string(),
                start: cursor.start(),
            },
        );
        self
    }

    /// The trail as readable lines, outermost context first.
    pub fn breadcrumb(&self) -> Vec<String> {
        self.trail.iter().map(Frame::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Messages
    // =========================================================================

    #[test]
    fn test_display() {
        let err = ParseError::new(ErrorKind::InvalidCharacter('#'), 1);
        assert_eq!(err.to_string(), "Parse error at position 1: invalid character '#'");
    }

    #[test]
    fn test_missing_operand_message() {
        let kind = ErrorKind::MissingOperand {
            side: Side::Right,
            operator: BinaryOp::Add,
        };
        assert_eq!(kind.to_string(), "missing right-hand operand for '+'");
    }

    // =========================================================================
    // Enrichment
    // =========================================================================

    #[test]
    fn test_or_if_empty_promotes_only_empty_input() {
        let promoted =
            ParseError::new(ErrorKind::EmptyInput, 4).or_if_empty(ErrorKind::EmptyParentheses);
        assert_eq!(promoted.kind, ErrorKind::EmptyParentheses);
        assert_eq!(promoted.position, 4);

        let kept = ParseError::new(ErrorKind::InvalidCharacter('$'), 2)
            .or_if_empty(ErrorKind::EmptyParentheses);
        assert_eq!(kept.kind, ErrorKind::InvalidCharacter('$'));
    }

    #[test]
    fn test_within_prepends() {
        let err = ParseError::new(ErrorKind::InvalidCharacter('#'), 6)
            .within(Context::Parentheses, Cursor::at("b#c", 5))
            .within(
                Context::Operand {
                    operator: BinaryOp::Add,
                    side: Side::Right,
                },
                Cursor::at(" (b#c)", 3),
            );

        assert_eq!(
            err.breadcrumb(),
            vec![
                "while parsing the right-hand side of '+' (` (b#c)` at 3)".to_string(),
                "while parsing parentheses (`b#c` at 5)".to_string(),
            ]
        );
        assert_eq!(err.trail[1].cursor(), Cursor::at("b#c", 5));
    }

    // =========================================================================
    // Retry signature
    // =========================================================================

    #[test]
    fn test_awaits_operand() {
        assert!(ErrorKind::EmptyInput.awaits_operand());
        assert!(ErrorKind::MissingUnaryOperand.awaits_operand());
        assert!(ErrorKind::MissingOperand {
            side: Side::Right,
            operator: BinaryOp::Multiply
        }
        .awaits_operand());
        assert!(!ErrorKind::MissingOperand {
            side: Side::Left,
            operator: BinaryOp::Multiply
        }
        .awaits_operand());
        assert!(!ErrorKind::EmptyParentheses.awaits_operand());
        assert!(!ErrorKind::InvalidCharacter('x').awaits_operand());
        assert!(!ErrorKind::NestingTooDeep { limit: 1 }.awaits_operand());
    }
}
