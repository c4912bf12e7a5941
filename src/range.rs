use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::parsed::Parsed;
use crate::parser::Parser;
use crate::stream::Stream;

/// Repetition bounds: a required minimum and an optional maximum,
/// both measured in accumulated characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: Option<usize>,
}

impl Bounds {
    /// At least `min` characters, no upper bound.
    pub fn at_least(min: usize) -> Self {
        Bounds { min, max: None }
    }

    /// Between `min` and `max` characters. `max` must exceed `min`.
    pub fn between(min: usize, max: usize) -> Self {
        assert!(max > min, "max ({max}) must be greater than min ({min})");
        Bounds {
            min,
            max: Some(max),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    fn admits(&self, matched: usize) -> bool {
        match self.max {
            Some(max) => matched <= max,
            None => true,
        }
    }
}

/// Parser combinator for greedy bounded repetition
///
/// Repeatedly applies the inner parser, concatenating each match into
/// a single buffer, until the inner parser fails or another match
/// would push the accumulated length past the upper bound. The inner
/// parser's failure is never propagated; only an accumulated length
/// below the minimum is an error.
pub struct Range<P> {
    parser: P,
    bounds: Bounds,
}

impl<P> Range<P> {
    pub fn new(parser: P, bounds: Bounds) -> Self {
        Range { parser, bounds }
    }
}

impl<P> Parser for Range<P>
where
    P: Parser,
    P::Output: Fragment,
{
    type Output = String;

    fn apply(&self, stream: &Stream, cursor: usize) -> Result<Parsed<Self::Output>, ParseError> {
        let mut buffer = String::new();
        let mut matched = 0;
        let mut position = cursor;

        loop {
            match self.parser.apply(stream, position) {
                Ok(parsed) => {
                    let (value, next) = parsed.unpack();
                    let width = value.width();
                    if !self.bounds.admits(matched + width) {
                        break;
                    }
                    value.append_to(&mut buffer);
                    matched += width;
                    // A zero-width match can make no further progress;
                    // stop so the scan stays bounded by the input.
                    let stalled = next == position;
                    position = next;
                    if stalled {
                        break;
                    }
                }
                // Reaching a non-matching character ends the repetition
                Err(_) => break,
            }
        }

        if matched < self.bounds.min {
            return Err(ParseError::TooFew {
                required: self.bounds.min,
                matched,
                position: cursor,
            });
        }

        Ok(Parsed::new(buffer, position))
    }
}

/// Extension trait to add .range() method support for parsers
pub trait RangeExt: Parser + Sized {
    fn range(self, bounds: Bounds) -> Range<Self> {
        Range::new(self, bounds)
    }
}

/// Implement RangeExt for all parsers
impl<P> RangeExt for P where P: Parser {}

/// Convenience function to create a Range parser
pub fn range<P>(parser: P, bounds: Bounds) -> Range<P>
where
    P: Parser,
    P::Output: Fragment,
{
    Range::new(parser, bounds)
}
