use crate::error::ParseError;
use crate::null::Null;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that succeeds only at the end of the input
///
/// Matches zero-width: the cursor is returned unchanged and the value
/// is [`Null`].
pub struct EolParser;

impl EolParser {
    pub fn new() -> Self {
        EolParser
    }
}

impl Parser for EolParser {
    type Output = Null;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        match stream.get(cursor) {
            None => Ok(Parsed::new(Null, cursor)),
            Some(found) => Err(ParseError::ExpectedEndOfInput {
                found,
                position: cursor,
            }),
        }
    }
}

/// Convenience function to create an EolParser
pub fn eol() -> EolParser {
    EolParser::new()
}
