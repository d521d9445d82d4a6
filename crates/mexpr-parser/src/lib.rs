//! mexpr Parser
//!
//! Recursive-descent parser for arithmetic expressions over symbolic
//! operands: `+ - * / ^`, prefix signs, the postfix conjugate transpose `'`,
//! parentheses and single-argument function application `name[arg]`.
//!
//! A successful parse yields the expression tree together with every symbol
//! occurrence and its character offset in the input. A failed parse reports
//! the offset, what was wrong, and the trail of constructs it was nested in.
//!
//! # Example
//!
//! ```
//! use mexpr_parser::{parse_expression, BinaryOp, ErrorKind, Expression};
//!
//! let outcome = parse_expression("2 - -6").unwrap();
//! assert_eq!(
//!     outcome.expression,
//!     Expression::binary(
//!         Expression::symbol("2"),
//!         BinaryOp::Subtract,
//!         Expression::unary(mexpr_parser::UnaryOp::Minus, Expression::symbol("6")),
//!     )
//! );
//!
//! let err = parse_expression("a * () + 3").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::EmptyParentheses);
//! assert_eq!(err.position, 5);
//! ```

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod grammar;
pub mod symbols;
pub mod trace;

pub use ast::{BinaryOp, Expression, ParseOutcome, Side, SymbolRef, UnaryOp};
pub use error::{Context, ErrorKind, Frame, ParseError};
pub use grammar::{Parser, MAX_NESTING};
pub use symbols::SymbolTable;
pub use trace::{Level, LogTrace, NoTrace, Trace};

/// Parse a complete expression without tracing.
pub fn parse_expression(input: &str) -> Result<ParseOutcome, ParseError> {
    Parser::parse(input)
}
