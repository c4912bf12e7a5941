use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that matches one character out of a set
///
/// The argument is a character class, not a literal: `char("abc")`
/// matches a single `a`, `b`, or `c`. For multi-character literals use
/// [`lit`](crate::lit::lit).
pub struct CharParser {
    charset: String,
}

impl CharParser {
    pub fn new(charset: impl Into<String>) -> Self {
        CharParser {
            charset: charset.into(),
        }
    }
}

impl Parser for CharParser {
    type Output = char;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let found = stream.value(cursor)?;
        if self.charset.contains(found) {
            Ok(Parsed::new(found, cursor + 1))
        } else {
            Err(ParseError::NotInCharset {
                charset: self.charset.clone(),
                found,
                position: cursor,
            })
        }
    }
}

/// Convenience function to create a CharParser
pub fn char(charset: impl Into<String>) -> CharParser {
    CharParser::new(charset)
}
