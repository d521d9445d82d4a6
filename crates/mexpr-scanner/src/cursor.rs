/// Characters stripped by [`Cursor::trim`].
pub const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// A view over part of the original input plus its absolute offset.
///
/// `start` is the number of characters that precede `text` in the original
/// string. Cursors are never mutated; every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over a whole input (offset 0).
    pub fn new(text: &'a str) -> Self {
        Self::at(text, 0)
    }

    /// Create a cursor over `text`, which begins `start` characters into the input.
    pub fn at(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Absolute offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    pub fn first(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn last(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Strip [`WHITESPACE`] from both ends. Only leading removal moves `start`.
    pub fn trim(self) -> Self {
        let front = self.text.trim_start_matches(WHITESPACE);
        // every stripped character is ASCII, so bytes == characters here
        let removed = self.text.len() - front.len();
        Self {
            text: front.trim_end_matches(WHITESPACE),
            start: self.start + removed,
        }
    }

    /// Drop the first character.
    pub fn skip_first(self) -> Self {
        match self.first() {
            Some(c) => Self {
                text: &self.text[c.len_utf8()..],
                start: self.start + 1,
            },
            None => self,
        }
    }

    /// Drop the last character.
    pub fn drop_last(self) -> Self {
        match self.last() {
            Some(c) => Self {
                text: &self.text[..self.text.len() - c.len_utf8()],
                start: self.start,
            },
            None => self,
        }
    }

    /// Split around the first occurrence of `delimiter`, which belongs to neither half.
    pub fn split_once(self, delimiter: char) -> Option<(Self, Self)> {
        let (index, byte) = self
            .text
            .char_indices()
            .enumerate()
            .find(|(_, (_, c))| *c == delimiter)
            .map(|(index, (byte, _))| (index, byte))?;

        Some(self.split_at(index, byte, delimiter.len_utf8()))
    }

    /// Find the first character matching `pred`, returning its absolute offset.
    pub fn find(&self, pred: impl Fn(char) -> bool) -> Option<(usize, char)> {
        self.text
            .chars()
            .enumerate()
            .find(|(_, c)| pred(*c))
            .map(|(index, c)| (self.start + index, c))
    }

    /// Split into the text before and after a delimiter located at character
    /// `index` / byte `byte`, `width` bytes long.
    pub(crate) fn split_at(self, index: usize, byte: usize, width: usize) -> (Self, Self) {
        let left = Self {
            text: &self.text[..byte],
            start: self.start,
        };
        let right = Self {
            text: &self.text[byte + width..],
            start: self.start + index + 1,
        };
        (left, right)
    }
}

impl std::fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` at {}", self.text, self.start)
    }
}
