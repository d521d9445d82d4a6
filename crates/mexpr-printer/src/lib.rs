//! mexpr Printer
//!
//! Turns an expression tree back into text. Two forms are provided:
//!
//! ```text
//! canonical()  a + b * c  →  (a + (b * c))      parses back to the same tree
//! sexpr()      a + b * c  →  (+ a (* b c))      prefix form for debugging
//! ```

pub mod canonical;
pub mod sexpr;

pub use canonical::canonical;
pub use sexpr::sexpr;

#[cfg(test)]
mod tests {
    use super::*;
    use mexpr_parser::parse_expression;
    use pretty_assertions::assert_eq;

    fn symbol_names(source: &str) -> Vec<String> {
        parse_expression(source)
            .unwrap()
            .symbols
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    /// Expressions that exercise every precedence level, sign handling,
    /// grouping and application.
    const CORPUS: &[&str] = &[
        "x",
        "1.5",
        "a + b",
        "a - b - c",
        "a + b * c",
        "(a + b) * c",
        "a / b * c / d",
        "2 - -6",
        "-a - b",
        "2 * -3",
        "a * -b + c",
        "x ^ -1",
        "a ^ (b ^ c)",
        "(a ^ b) ^ c",
        "-(a ^ 2)",
        "(-a) ^ 2",
        "a'",
        "a'^2",
        "-a'",
        "(a')'",
        "(a * b)'",
        "-(-x)",
        "+x - +y",
        "sin[x]",
        "f[g[x]]",
        "log[a + b] * 2",
        "f[-x]'",
        "f[x] ^ g[y]",
        "  (( p ))  ",
        "aA0 - bB1 * (c.d + e)' / f[g ^ 2]",
    ];

    // =========================================================================
    // Round trip
    // =========================================================================

    #[test]
    fn test_canonical_round_trip() {
        for source in CORPUS {
            let tree = parse_expression(source).unwrap().expression;
            let printed = canonical(&tree);
            let reparsed = parse_expression(&printed)
                .unwrap_or_else(|e| panic!("{printed:?} from {source:?} failed: {e}"))
                .expression;
            assert_eq!(reparsed, tree, "round trip of {source:?} via {printed:?}");
        }
    }

    #[test]
    fn test_canonical_is_fixed_point() {
        for source in CORPUS {
            let once = canonical(&parse_expression(source).unwrap().expression);
            let twice = canonical(&parse_expression(&once).unwrap().expression);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_round_trip_keeps_symbol_order() {
        for source in CORPUS {
            let printed = canonical(&parse_expression(source).unwrap().expression);
            assert_eq!(symbol_names(&printed), symbol_names(source));
        }
    }

    // =========================================================================
    // Forms side by side
    // =========================================================================

    #[test]
    fn test_forms_agree() {
        let tree = parse_expression("-a' * f[b]").unwrap().expression;
        assert_eq!(canonical(&tree), "((-(a')) * f[b])");
        assert_eq!(sexpr(&tree), "(* (neg (ctranspose a)) (call f b))");
    }
}
