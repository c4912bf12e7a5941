use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that matches a multi-character literal, position by position
pub struct LitParser {
    literal: String,
}

impl LitParser {
    pub fn new(literal: impl Into<String>) -> Self {
        LitParser {
            literal: literal.into(),
        }
    }
}

impl Parser for LitParser {
    type Output = String;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let mut position = cursor;
        for expected in self.literal.chars() {
            let found = match stream.value(position) {
                Ok(found) => found,
                Err(ParseError::EndOfInput { .. }) => {
                    return Err(ParseError::LiteralTruncated {
                        literal: self.literal.clone(),
                        position,
                    });
                }
                Err(error) => return Err(error),
            };
            if found != expected {
                return Err(ParseError::LiteralMismatch {
                    literal: self.literal.clone(),
                    expected,
                    found,
                    position,
                });
            }
            position += 1;
        }
        Ok(Parsed::new(self.literal.clone(), position))
    }
}

/// Convenience function to create a LitParser
pub fn lit(literal: impl Into<String>) -> LitParser {
    LitParser::new(literal)
}
