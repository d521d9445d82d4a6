//! WASM bindings for the mexpr parser.
//!
//! Exposes `parse()`, `tree()`, `diagnose()`, `check()` and `version()` to
//! JavaScript via wasm-bindgen. Failed parses throw a JS error carrying the
//! rendered diagnostic.

use mexpr_parser::{diagnostic, Parser, SymbolRef};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Everything `parse()` hands back to JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub canonical: String,
    pub sexpr: String,
    pub symbols: Vec<SymbolRef>,
}

/// Parse and print natively; the error is the rendered diagnostic.
pub fn analyze(source: &str) -> Result<Analysis, String> {
    let outcome = Parser::parse(source).map_err(|e| diagnostic::render(source, &e))?;
    Ok(Analysis {
        canonical: mexpr_printer::canonical(&outcome.expression),
        sexpr: mexpr_printer::sexpr(&outcome.expression),
        symbols: outcome.symbols,
    })
}

/// Parse an expression.
///
/// Returns `{ canonical: string, sexpr: string, symbols: [{ name, position }] }`.
/// Throws a JS error with the rendered diagnostic if parsing fails.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let analysis = analyze(source).map_err(|e| JsError::new(&e))?;
    serde_wasm_bindgen::to_value(&analysis).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse an expression and return the tree itself as a plain JS object.
#[wasm_bindgen]
pub fn tree(source: &str) -> Result<JsValue, JsError> {
    let outcome =
        Parser::parse(source).map_err(|e| JsError::new(&diagnostic::render(source, &e)))?;
    serde_wasm_bindgen::to_value(&outcome.expression).map_err(|e| JsError::new(&e.to_string()))
}

/// `null` for valid input, otherwise `{ position, message, trail }`.
#[wasm_bindgen]
pub fn diagnose(source: &str) -> Result<JsValue, JsError> {
    let Err(err) = Parser::parse(source) else {
        return Ok(JsValue::NULL);
    };

    let trail = js_sys::Array::new();
    for crumb in err.breadcrumb() {
        trail.push(&crumb.into());
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"position".into(), &(err.position as u32).into())
        .map_err(|_| JsError::new("Failed to set position property"))?;
    js_sys::Reflect::set(&js_obj, &"message".into(), &err.kind.to_string().into())
        .map_err(|_| JsError::new("Failed to set message property"))?;
    js_sys::Reflect::set(&js_obj, &"trail".into(), &trail)
        .map_err(|_| JsError::new("Failed to set trail property"))?;

    Ok(js_obj.into())
}

/// Whether `source` is a valid expression.
#[wasm_bindgen]
pub fn check(source: &str) -> bool {
    Parser::parse(source).is_ok()
}

/// Get the parser version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): the pipeline behind the bindings
    // =========================================================================

    #[test]
    fn test_analyze() {
        let analysis = analyze("x * y + x").unwrap();
        assert_eq!(analysis.canonical, "((x * y) + x)");
        assert_eq!(analysis.sexpr, "(+ (* x y) x)");
        assert_eq!(
            analysis.symbols,
            vec![
                SymbolRef::new("x", 0),
                SymbolRef::new("y", 4),
                SymbolRef::new("x", 8),
            ]
        );
    }

    #[test]
    fn test_analyze_error_is_rendered() {
        let err = analyze("sin[x").unwrap_err();
        assert!(err.starts_with("error: unmatched parenthesis\n"));
        assert!(err.contains("1 | sin[x\n"));
    }

    #[test]
    fn test_check() {
        assert!(check("a'^2"));
        assert!(!check("a^b^c"));
        assert!(!check(""));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_repeated_calls_independent() {
        let first = analyze("p").unwrap();
        let second = analyze("q - r").unwrap();
        assert_eq!(first.symbols, vec![SymbolRef::new("p", 0)]);
        assert_eq!(second.symbols.len(), 2);
    }
}
