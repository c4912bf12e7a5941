use crate::error::ParseError;

/// An immutable view over an input string, indexed by character.
///
/// The stream snapshots its input at construction and never changes
/// afterwards, so any number of parsers can read the same stream
/// concurrently with no coordination. Lookup is 1-based: position 1 is
/// the first character, `len()` the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    text: String,
    chars: Vec<char>,
}

impl Stream {
    pub fn new(input: &str) -> Self {
        Stream {
            text: input.to_string(),
            chars: input.chars().collect(),
        }
    }

    /// The original backing text.
    pub fn str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the stream.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Bounds-checked 1-based lookup. `None` when `index` is zero or
    /// past the end.
    pub fn get(&self, index: usize) -> Option<char> {
        if index == 0 {
            return None;
        }
        self.chars.get(index - 1).copied()
    }

    /// Fallible lookup used by the primitive parsers.
    ///
    /// A cursor past the end is `EndOfInput`; a position within
    /// professed bounds that still yields no character is
    /// `InvalidState` (unreachable for a well-formed stream).
    pub fn value(&self, cursor: usize) -> Result<char, ParseError> {
        if cursor > self.chars.len() {
            return Err(ParseError::EndOfInput { position: cursor });
        }
        self.get(cursor)
            .ok_or(ParseError::InvalidState { position: cursor })
    }
}
