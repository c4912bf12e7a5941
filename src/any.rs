use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that consumes and returns the next character, whatever it is
pub struct AnyParser;

impl AnyParser {
    pub fn new() -> Self {
        AnyParser
    }
}

impl Parser for AnyParser {
    type Output = char;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let found = stream.value(cursor)?;
        Ok(Parsed::new(found, cursor + 1))
    }
}

/// Convenience function to create an AnyParser
pub fn any() -> AnyParser {
    AnyParser::new()
}
