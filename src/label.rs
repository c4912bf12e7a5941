use crate::error::ParseError;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that names the thing being parsed
///
/// On failure the underlying error is wrapped so the message leads
/// with the human-readable name ("expected version number") while the
/// original failure stays reachable through `Error::source`. Success
/// passes through untouched.
pub struct Label<P> {
    parser: P,
    label: String,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: impl Into<String>) -> Self {
        Label {
            parser,
            label: label.into(),
        }
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        self.parser
            .apply(stream, cursor)
            .map_err(|source| ParseError::Labeled {
                label: self.label.clone(),
                source: Box::new(source),
            })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, label: impl Into<String>) -> Label<Self> {
        Label::new(self, label)
    }
}

/// Implement LabelExt for all parsers
impl<P> LabelExt for P where P: Parser {}

/// Convenience function to create a Label parser
pub fn label<P>(parser: P, name: impl Into<String>) -> Label<P>
where
    P: Parser,
{
    Label::new(parser, name)
}
