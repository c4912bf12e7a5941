use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that matches the next character against a predicate
pub struct IsAParser<F> {
    predicate: F,
}

impl<F> IsAParser<F> {
    pub fn new(predicate: F) -> Self {
        IsAParser { predicate }
    }
}

impl<F> Parser for IsAParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let found = stream.value(cursor)?;
        if (self.predicate)(found) {
            Ok(Parsed::new(found, cursor + 1))
        } else {
            Err(ParseError::Rejected {
                found,
                position: cursor,
            })
        }
    }
}

/// Convenience function to create an IsAParser
pub fn is_a<F>(predicate: F) -> IsAParser<F>
where
    F: Fn(char) -> bool,
{
    IsAParser::new(predicate)
}
