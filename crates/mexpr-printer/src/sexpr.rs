//! Prefix S-expression form for debugging and test output.

use mexpr_parser::{Expression, UnaryOp};

/// Convert an expression to an S-expression, e.g. `(+ a (* b c))`.
pub fn sexpr(expr: &Expression) -> String {
    match expr {
        Expression::Symbol { name } => name.clone(),
        Expression::Unary { op, operand } => {
            format!("({} {})", unary_op_name(*op), sexpr(operand))
        }
        Expression::Binary { left, op, right } => {
            format!("({op} {} {})", sexpr(left), sexpr(right))
        }
        Expression::ConjugateTranspose { operand } => format!("(ctranspose {})", sexpr(operand)),
        Expression::Function { name, argument } => format!("(call {name} {})", sexpr(argument)),
    }
}

fn unary_op_name(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Plus => "pos",
        UnaryOp::Minus => "neg",
    }
}
