//! mexpr Scanner
//!
//! Offset-tracking cursors over an expression string and the bracket-aware
//! search used to locate binary operators. There is no token stream: the
//! parser works directly on [`Cursor`] slices and asks the [`Scanner`] where
//! to split them.
//!
//! # Example
//!
//! ```
//! use mexpr_scanner::{Cursor, Scanner};
//!
//! let additive = Scanner::new(&[('+', '+'), ('-', '-')]);
//! let split = additive.find_split(Cursor::new("(a - b) + c"), 0).unwrap();
//! assert_eq!(split.operator, '+');
//! assert_eq!(split.left.text(), "(a - b) ");
//! assert_eq!(split.right.start(), 9);
//! ```

pub mod cursor;
pub mod scanner;

pub use cursor::{Cursor, WHITESPACE};
pub use scanner::{Scanner, Split};
