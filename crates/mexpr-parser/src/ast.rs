//! Abstract Syntax Tree for mexpr.
//!
//! A closed set of expression variants plus the outcome of a successful
//! parse: the tree and every symbol occurrence with its absolute offset.

/// An expression node. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expression {
    /// Symbol: `x`, `aA0`, `1.5`
    Symbol { name: String },

    /// Prefix sign: `-x`, `+x`
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Binary operation: `a + b`, `a ^ 2`
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },

    /// Postfix conjugate transpose: `a'`
    ConjugateTranspose { operand: Box<Expression> },

    /// Function application: `sin[x]`
    Function {
        name: String,
        argument: Box<Expression>,
    },
}

impl Expression {
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol { name: name.into() }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn conjugate_transpose(operand: Expression) -> Self {
        Expression::ConjugateTranspose {
            operand: Box::new(operand),
        }
    }

    pub fn function(name: impl Into<String>, argument: Expression) -> Self {
        Expression::Function {
            name: name.into(),
            argument: Box::new(argument),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Exponentiate => '^',
        }
    }

    /// The sign this operator character also reads as, if any.
    pub fn as_unary(self) -> Option<UnaryOp> {
        match self {
            BinaryOp::Add => Some(UnaryOp::Plus),
            BinaryOp::Subtract => Some(UnaryOp::Minus),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which operand of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left-hand"),
            Side::Right => write!(f, "right-hand"),
        }
    }
}

/// A symbol occurrence and its absolute offset in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolRef {
    pub name: String,
    pub position: usize,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A parsed expression and its symbols in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseOutcome {
    pub expression: Expression,
    pub symbols: Vec<SymbolRef>,
}

impl ParseOutcome {
    /// A single symbol leaf at `position`.
    pub(crate) fn symbol(name: &str, position: usize) -> Self {
        Self {
            expression: Expression::symbol(name),
            symbols: vec![SymbolRef::new(name, position)],
        }
    }

    /// Wrap the expression, keeping the symbols.
    pub(crate) fn map(self, wrap: impl FnOnce(Expression) -> Expression) -> Self {
        Self {
            expression: wrap(self.expression),
            symbols: self.symbols,
        }
    }

    /// Join two outcomes under a binary operator, left symbols first.
    pub(crate) fn join(self, op: BinaryOp, right: ParseOutcome) -> Self {
        let mut symbols = self.symbols;
        symbols.extend(right.symbols);
        Self {
            expression: Expression::binary(self.expression, op, right.expression),
            symbols,
        }
    }
}
