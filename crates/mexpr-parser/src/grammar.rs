//! Expression grammar for mexpr.
//!
//! Recursive descent directly over [`Cursor`] slices, one method per
//! precedence level, loosest first:
//!
//! ```text
//! additive        + -        (left-associative)
//! multiplicative  * /        (left-associative)
//! exponential     ^          (single split, no chaining)
//! unary           prefix + -
//! transpose       postfix '
//! primary         ( ... )  name[ ... ]  symbol
//! ```
//!
//! Binary levels locate operators with the bracket-aware [`Scanner`]. Since
//! `+` and `-` are also signs, a candidate whose left side runs out of text
//! right at the operator is reread as a sign and the scan moves on to the
//! next one.
//!
//! Brackets and function arguments nest at most [`MAX_NESTING`] deep.

use crate::ast::{BinaryOp, Expression, ParseOutcome, Side, UnaryOp};
use crate::error::{Context, ErrorKind, ParseError};
use crate::trace::{Level, NoTrace, Trace};
use mexpr_scanner::{Cursor, Scanner, Split};
use std::cell::Cell;

const ADDITIVE: Scanner<'static, BinaryOp> =
    Scanner::new(&[('+', BinaryOp::Add), ('-', BinaryOp::Subtract)]);

const MULTIPLICATIVE: Scanner<'static, BinaryOp> =
    Scanner::new(&[('*', BinaryOp::Multiply), ('/', BinaryOp::Divide)]);

const EXPONENTIAL: Scanner<'static, BinaryOp> = Scanner::new(&[('^', BinaryOp::Exponentiate)]);

const SIGNS: Scanner<'static, UnaryOp> =
    Scanner::new(&[('+', UnaryOp::Plus), ('-', UnaryOp::Minus)]);

const TRANSPOSE: char = '\'';

/// Deepest bracket nesting accepted before parsing gives up.
pub const MAX_NESTING: usize = 64;

type ParseResult = Result<ParseOutcome, ParseError>;

/// The next-tighter level a binary level hands its operands to.
type Operand<'t> = fn(&Parser<'t>, Cursor<'_>) -> ParseResult;

/// mexpr expression parser.
///
/// Holds the trace sink and the current bracket depth, which is back at
/// zero after every parse, so one parser can be reused for any number of
/// inputs.
#[derive(Clone)]
pub struct Parser<'t> {
    trace: &'t dyn Trace,
    depth: Cell<usize>,
}

impl Parser<'static> {
    /// Create a parser without tracing.
    pub fn new() -> Self {
        Self::with_trace(&NoTrace)
    }

    /// Parse a complete expression from a source string.
    pub fn parse(source: &str) -> ParseResult {
        Parser::new().parse_str(source)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Parser<'t> {
    /// Create a parser that reports every level entry to `trace`.
    pub fn with_trace(trace: &'t dyn Trace) -> Self {
        Self {
            trace,
            depth: Cell::new(0),
        }
    }

    /// Parse `source` as a whole expression; offsets are relative to `source`.
    pub fn parse_str(&self, source: &str) -> ParseResult {
        self.additive(Cursor::new(source).trim())
    }

    // =========================================================================
    // Binary levels
    // =========================================================================

    fn additive(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::Additive, cursor)?;
        self.binary_level(cursor, &ADDITIVE, Self::multiplicative)
    }

    fn multiplicative(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::Multiplicative, cursor)?;
        self.binary_level(cursor, &MULTIPLICATIVE, Self::exponential)
    }

    /// Left-associative chain of `operators`, operands parsed by `next`.
    fn binary_level(
        &self,
        cursor: Cursor<'_>,
        operators: &Scanner<'_, BinaryOp>,
        next: Operand<'t>,
    ) -> ParseResult {
        // First operator with a usable left operand.
        let mut skip = 0;
        let (mut acc, mut operator, mut rest) = loop {
            let Some(split) = operators.find_split(cursor, skip) else {
                return next(self, cursor);
            };
            match next(self, split.left) {
                Ok(left) => break (left, split.operator, split.right),
                Err(err) if reads_as_sign(&err, &split) => {
                    log::debug!(
                        "'{}' at {} reads as a sign, rescanning {}",
                        split.operator,
                        split.right.start() - 1,
                        cursor
                    );
                    skip += 1;
                }
                Err(err) => {
                    return Err(missing(err, split.operator, Side::Left, split.left));
                }
            }
        };

        // Fold each following operand into the chain.
        loop {
            let mut skip = 0;
            let (mid, split) = loop {
                let Some(split) = operators.find_split(rest, skip) else {
                    let right = next(self, rest)
                        .map_err(|err| missing(err, operator, Side::Right, rest))?;
                    return Ok(acc.join(operator, right));
                };
                match next(self, split.left) {
                    Ok(mid) => break (mid, split),
                    Err(err) if reads_as_sign(&err, &split) => {
                        log::debug!(
                            "'{}' at {} reads as a sign, rescanning {}",
                            split.operator,
                            split.right.start() - 1,
                            rest
                        );
                        skip += 1;
                    }
                    Err(err) => {
                        return Err(missing(err, operator, Side::Right, split.left));
                    }
                }
            };

            acc = acc.join(operator, mid);
            operator = split.operator;
            rest = split.right;
        }
    }

    /// `left ^ right`. Only the first top-level `^` splits; the right side
    /// is parsed from the unary level, so `a ^ b ^ c` needs parentheses.
    fn exponential(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::Exponential, cursor)?;
        let Some(split) = EXPONENTIAL.find_split(cursor, 0) else {
            return self.unary(cursor);
        };

        let left = self
            .conjugate_transpose(split.left)
            .map_err(|err| missing(err, split.operator, Side::Left, split.left))?;
        let right = self
            .unary(split.right)
            .map_err(|err| missing(err, split.operator, Side::Right, split.right))?;

        Ok(left.join(split.operator, right))
    }

    // =========================================================================
    // Prefix and postfix
    // =========================================================================

    fn unary(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::Unary, cursor)?;
        let Some(op) = cursor.first().and_then(|c| SIGNS.lookup(c)) else {
            return self.conjugate_transpose(cursor);
        };

        let operand = cursor.skip_first().trim();
        self.conjugate_transpose(operand)
            .map(|outcome| outcome.map(|e| Expression::unary(op, e)))
            .map_err(|err| {
                err.or_if_empty(ErrorKind::MissingUnaryOperand)
                    .within(Context::UnaryOperand(op), operand)
            })
    }

    fn conjugate_transpose(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::ConjugateTranspose, cursor)?;
        if cursor.last() != Some(TRANSPOSE) {
            return self.primary(cursor);
        }

        let operand = cursor.drop_last();
        self.primary(operand)
            .map(|outcome| outcome.map(Expression::conjugate_transpose))
            .map_err(|err| {
                err.or_if_empty(ErrorKind::MissingConjugateTransposeOperand)
                    .within(Context::TransposeOperand, operand)
            })
    }

    // =========================================================================
    // Primary: grouping, function application, symbols
    // =========================================================================

    fn primary(&self, cursor: Cursor<'_>) -> ParseResult {
        let cursor = self.enter(Level::Primary, cursor)?;
        if cursor.first() == Some('(') {
            return self.parenthesised(cursor);
        }
        if let Some((name, rest)) = cursor.split_once('[') {
            return self.function(cursor, name, rest);
        }
        symbol(cursor)
    }

    /// `( interior )`
    fn parenthesised(&self, cursor: Cursor<'_>) -> ParseResult {
        let inner = cursor.skip_first();
        if inner.last() != Some(')') {
            return Err(ParseError::new(ErrorKind::UnmatchedParenthesis, cursor.end()));
        }

        let interior = inner.drop_last();
        self.nested(cursor.start(), || self.additive(interior)).map_err(|err| {
            err.or_if_empty(ErrorKind::EmptyParentheses)
                .within(Context::Parentheses, interior)
        })
    }

    /// `name[ argument ]`, where `rest` is everything after the first `[`.
    fn function(&self, cursor: Cursor<'_>, name: Cursor<'_>, rest: Cursor<'_>) -> ParseResult {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::new(
                ErrorKind::InvalidCharacter('['),
                rest.start() - 1,
            ));
        }
        validate_symbol(name)?;

        if rest.last() != Some(']') {
            return Err(ParseError::new(ErrorKind::UnmatchedParenthesis, cursor.end()));
        }

        let argument = rest.drop_last();
        let outcome = self.nested(rest.start() - 1, || self.additive(argument)).map_err(|err| {
            err.or_if_empty(ErrorKind::EmptyParentheses).within(
                Context::FunctionArgument {
                    name: name.text().to_string(),
                },
                argument,
            )
        })?;

        Ok(outcome.map(|e| Expression::function(name.text(), e)))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Run `parse` one bracket level deeper; `at` is the opening bracket.
    fn nested(&self, at: usize, parse: impl FnOnce() -> ParseResult) -> ParseResult {
        let depth = self.depth.get() + 1;
        if depth > MAX_NESTING {
            return Err(ParseError::new(
                ErrorKind::NestingTooDeep { limit: MAX_NESTING },
                at,
            ));
        }
        self.depth.set(depth);
        let result = parse();
        self.depth.set(depth - 1);
        result
    }

    /// Trim, report the entry to the trace sink and reject empty input.
    fn enter<'a>(&self, level: Level, cursor: Cursor<'a>) -> Result<Cursor<'a>, ParseError> {
        let cursor = cursor.trim();
        self.trace.enter(level, cursor);
        if cursor.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyInput, cursor.start()));
        }
        Ok(cursor)
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

/// A leaf symbol; registers its position.
fn symbol(cursor: Cursor<'_>) -> ParseResult {
    validate_symbol(cursor)?;
    Ok(ParseOutcome::symbol(cursor.text(), cursor.start()))
}

/// Symbols are ASCII letters, digits and `.`.
fn validate_symbol(cursor: Cursor<'_>) -> Result<(), ParseError> {
    match cursor.find(|c| !(c.is_ascii_alphanumeric() || c == '.')) {
        Some((position, c)) => Err(ParseError::new(ErrorKind::InvalidCharacter(c), position)),
        None => Ok(()),
    }
}

/// Whether a failed left side means the split operator was really a sign:
/// the operand ran out exactly where the operator stands.
fn reads_as_sign(err: &ParseError, split: &Split<'_, BinaryOp>) -> bool {
    split.operator.as_unary().is_some()
        && err.kind.awaits_operand()
        && err.position + 1 == split.right.start()
}

/// Name a missing operand of `operator` and record the operand's context.
fn missing(err: ParseError, operator: BinaryOp, side: Side, operand: Cursor<'_>) -> ParseError {
    err.or_if_empty(ErrorKind::MissingOperand { side, operator })
        .within(Context::Operand { operator, side }, operand)
}
