use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::stream::Stream;

/// Core parser trait for parser combinators
///
/// A parser is a single-step transition over `(stream, cursor)`: it
/// either makes progress (possibly zero-width) and returns the matched
/// value with the advanced cursor, or fails without consuming
/// anything. Parsers are immutable after construction; combinators
/// wrap existing parsers by value and return new ones, so any parser
/// can be reused across any number of independent `parse` calls.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// Returns the parsed value and updated cursor on success. On
    /// failure the caller's cursor is untouched; errors carry the
    /// failure position in their message only.
    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError>;

    /// Run this parser against a whole input string.
    ///
    /// Seeds a fresh stream and cursor 1, invokes the parser once, and
    /// returns its result directly. This is the only place a stream is
    /// constructed; everything below operates on `(stream, cursor)`
    /// pairs handed to it.
    fn parse(&self, input: &str) -> Result<Parsed<Self::Output>, ParseError> {
        let stream = Stream::new(input);
        self.apply(&stream, 1)
    }
}
