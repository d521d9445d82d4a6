use crate::cursor::Cursor;

/// A cursor divided around one operator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a, T> {
    /// Text before the operator, same `start` as the scanned cursor.
    pub left: Cursor<'a>,
    pub operator: T,
    /// Text after the operator.
    pub right: Cursor<'a>,
}

/// Bracket-aware operator search.
///
/// Finds operator characters that sit at nesting depth zero with respect to
/// both `()` and `[]`. This is the only place nesting is interpreted: the
/// scanner does not check that brackets balance, it just never accepts an
/// operator while either depth is non-zero.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'s, T> {
    operators: &'s [(char, T)],
}

impl<'s, T: Copy> Scanner<'s, T> {
    /// Create a scanner recognising the given `(character, tag)` pairs.
    pub const fn new(operators: &'s [(char, T)]) -> Self {
        Self { operators }
    }

    /// Tag for `ch` if it is one of this scanner's operators.
    pub fn lookup(&self, ch: char) -> Option<T> {
        self.operators
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, tag)| *tag)
    }

    /// Split `cursor` at the first top-level operator after passing over
    /// `skip` earlier top-level operators.
    ///
    /// Returns `None` when fewer than `skip + 1` candidates exist. Input whose
    /// brackets never close (or close more often than they open) yields no
    /// candidates past the imbalance and so also reads as "not found".
    pub fn find_split<'a>(&self, cursor: Cursor<'a>, skip: usize) -> Option<Split<'a, T>> {
        let mut depth = Depth::default();
        let mut remaining = skip;

        for (index, (byte, ch)) in cursor.text().char_indices().enumerate() {
            depth.track(ch);
            if !depth.is_top_level() {
                continue;
            }
            let Some(operator) = self.lookup(ch) else {
                continue;
            };
            if remaining > 0 {
                remaining -= 1;
                continue;
            }

            let (left, right) = cursor.split_at(index, byte, ch.len_utf8());
            return Some(Split {
                left,
                operator,
                right,
            });
        }

        None
    }
}

/// Nesting depth for round and square brackets.
#[derive(Debug, Default)]
struct Depth {
    round: isize,
    square: isize,
}

impl Depth {
    fn track(&mut self, ch: char) {
        match ch {
            '(' => self.round += 1,
            ')' => self.round -= 1,
            '[' => self.square += 1,
            ']' => self.square -= 1,
            _ => {}
        }
    }

    fn is_top_level(&self) -> bool {
        self.round == 0 && self.square == 0
    }
}
