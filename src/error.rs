use thiserror::Error;

/// Error type shared by every parser in the crate.
///
/// Each variant carries the 1-based cursor position the failure was
/// observed at. Failures never carry an advanced cursor: from the
/// caller's perspective a failed parser has consumed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character was required but the cursor is past the end of the
    /// stream.
    #[error("end of input at position {position}")]
    EndOfInput { position: usize },

    /// A position professed to be in bounds yielded no character.
    /// Invariant violation in the stream, not a normal parse failure.
    #[error("invalid state: no character at position {position}")]
    InvalidState { position: usize },

    /// The character at the cursor is not a member of the expected set.
    #[error("expected one of the chars {charset:?}, found {found:?} at position {position}")]
    NotInCharset {
        charset: String,
        found: char,
        position: usize,
    },

    /// A multi-character literal stopped matching at `position`.
    #[error("expected {expected:?}, found {found:?} at position {position} while matching {literal:?}")]
    LiteralMismatch {
        literal: String,
        expected: char,
        found: char,
        position: usize,
    },

    /// The stream ended partway through a multi-character literal.
    #[error("end of input at position {position} while matching {literal:?}")]
    LiteralTruncated { literal: String, position: usize },

    /// A predicate rejected the character at the cursor.
    #[error("{found:?} is not valid at position {position}")]
    Rejected { found: char, position: usize },

    /// A bounded repetition accumulated fewer characters than its
    /// declared minimum.
    #[error("expected at least {required} characters, matched {matched} at position {position}")]
    TooFew {
        required: usize,
        matched: usize,
        position: usize,
    },

    /// A character exists where end of input was required.
    #[error("expected end of input, found {found:?} at position {position}")]
    ExpectedEndOfInput { found: char, position: usize },

    /// A labeled parser failed; the underlying failure is preserved as
    /// the error source.
    #[error("expected {label}")]
    Labeled {
        label: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the 1-based position where this error occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::EndOfInput { position }
            | ParseError::InvalidState { position }
            | ParseError::NotInCharset { position, .. }
            | ParseError::LiteralMismatch { position, .. }
            | ParseError::LiteralTruncated { position, .. }
            | ParseError::Rejected { position, .. }
            | ParseError::TooFew { position, .. }
            | ParseError::ExpectedEndOfInput { position, .. } => *position,
            ParseError::Labeled { source, .. } => source.position(),
        }
    }
}
