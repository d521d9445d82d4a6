//! Observation hook for grammar level entries.
//!
//! A [`Trace`] sink is handed to the parser explicitly; it sees every level
//! the parser enters together with the (trimmed) cursor it was given. Sinks
//! only observe and cannot change the parse.

use mexpr_scanner::Cursor;

/// Grammar levels, loosest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Additive,
    Multiplicative,
    Exponential,
    Unary,
    ConjugateTranspose,
    Primary,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Additive => "additive",
            Level::Multiplicative => "multiplicative",
            Level::Exponential => "exponential",
            Level::Unary => "unary",
            Level::ConjugateTranspose => "conjugate-transpose",
            Level::Primary => "primary",
        };
        f.write_str(name)
    }
}

pub trait Trace {
    fn enter(&self, level: Level, cursor: Cursor<'_>);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn enter(&self, _level: Level, _cursor: Cursor<'_>) {}
}

/// Forwards level entries to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn enter(&self, level: Level, cursor: Cursor<'_>) {
        log::trace!(target: "mexpr_parser::grammar", "{level}: {cursor}");
    }
}

impl<F> Trace for F
where
    F: Fn(Level, Cursor<'_>),
{
    fn enter(&self, level: Level, cursor: Cursor<'_>) {
        self(level, cursor)
    }
}
