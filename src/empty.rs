use crate::error::ParseError;
use crate::null::Null;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that always succeeds without consuming input
///
/// The value is [`Null`] and the cursor comes back unchanged. Cannot
/// fail, on any input, at any position.
pub struct EmptyParser;

impl EmptyParser {
    pub fn new() -> Self {
        EmptyParser
    }
}

impl Parser for EmptyParser {
    type Output = Null;

    fn apply(&self, _stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        Ok(Parsed::new(Null, cursor))
    }
}

/// Convenience function to create an EmptyParser
pub fn empty() -> EmptyParser {
    EmptyParser::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_succeeds_on_empty_input() {
        let parsed = empty().parse("").unwrap();
        assert_eq!(parsed.value, Null);
        assert_eq!(parsed.cursor, 1);
    }

    #[test]
    fn test_empty_consumes_nothing() {
        let parsed = empty().parse("abc").unwrap();
        assert_eq!(parsed.value, Null);
        assert_eq!(parsed.cursor, 1);
    }

    #[test]
    fn test_empty_at_any_position() {
        let stream = Stream::new("ab");
        for cursor in 1..=3 {
            let parsed = empty().apply(&stream, cursor).unwrap();
            assert_eq!(parsed.cursor, cursor);
        }
    }
}
