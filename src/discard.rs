use crate::error::ParseError;
use crate::null::Null;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that matches a sub-pattern but drops its value
///
/// Useful for whitespace, delimiters, and other matches that must
/// consume input without contributing a capture. Failures propagate
/// verbatim; on success the advanced cursor is kept and the value is
/// replaced with [`Null`].
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<P> Parser for Discard<P>
where
    P: Parser,
{
    type Output = Null;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let parsed = self.parser.apply(stream, cursor)?;
        Ok(Parsed::new(Null, parsed.cursor))
    }
}

/// Extension trait to add .discard() method support for parsers
pub trait DiscardExt: Parser + Sized {
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }
}

/// Implement DiscardExt for all parsers
impl<P> DiscardExt for P where P: Parser {}

/// Convenience function to create a Discard parser
pub fn discard<P>(parser: P) -> Discard<P>
where
    P: Parser,
{
    Discard::new(parser)
}
