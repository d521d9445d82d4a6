//! Symbol table built from a parse outcome.
//!
//! Groups symbol occurrences by name and supports rewriting a source string
//! by absolute position, e.g. renaming a variable without touching function
//! names or other symbols that merely contain it.

use crate::ast::ParseOutcome;

/// Occurrences of each distinct symbol, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, Vec<usize>)>,
}

impl SymbolTable {
    pub fn from_outcome(outcome: &ParseOutcome) -> Self {
        let mut table = Self::default();
        for symbol in &outcome.symbols {
            match table.entries.iter_mut().find(|(name, _)| *name == symbol.name) {
                Some((_, positions)) => positions.push(symbol.position),
                None => table
                    .entries
                    .push((symbol.name.clone(), vec![symbol.position])),
            }
        }
        table
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Absolute offsets of `name`, ascending. Empty for unknown names.
    pub fn occurrences(&self, name: &str) -> &[usize] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, positions)| positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(name, positions)| (name.as_str(), positions.as_slice()))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite every occurrence of the named symbols in `source`.
    ///
    /// `source` must be the text this table was built from. Occurrences whose
    /// text no longer matches the symbol name are left alone.
    pub fn substitute(&self, source: &str, replacements: &[(&str, &str)]) -> String {
        let mut edits: Vec<(usize, &str, &str)> = Vec::new();
        for &(name, replacement) in replacements {
            for &position in self.occurrences(name) {
                edits.push((position, name, replacement));
            }
        }
        // right to left so earlier offsets stay valid
        edits.sort_by(|a, b| b.0.cmp(&a.0));

        let mut chars: Vec<char> = source.chars().collect();
        for (position, name, replacement) in edits {
            let range = position..position + name.chars().count();
            match chars.get(range.clone()) {
                Some(found) if found.iter().copied().eq(name.chars()) => {
                    chars.splice(range, replacement.chars());
                }
                _ => {}
            }
        }
        chars.into_iter().collect()
    }
}
