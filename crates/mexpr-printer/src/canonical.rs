//! Fully parenthesised source form.
//!
//! Every composite except function application is wrapped in parentheses,
//! so the output parses back to the same tree regardless of precedence.

use mexpr_parser::Expression;

/// Convert an expression to canonical mexpr source.
pub fn canonical(expr: &Expression) -> String {
    match expr {
        Expression::Symbol { name } => name.clone(),
        Expression::Unary { op, operand } => format!("({op}{})", canonical(operand)),
        Expression::Binary { left, op, right } => {
            format!("({} {op} {})", canonical(left), canonical(right))
        }
        Expression::ConjugateTranspose { operand } => format!("({}')", canonical(operand)),
        Expression::Function { name, argument } => format!("{name}[{}]", canonical(argument)),
    }
}
