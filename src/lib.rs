//! # CharComb - Parser Combinator Core
//!
//! A small algebra of composable parsers over character streams.
//!
//! CharComb provides type-safe parsers that read a [`Stream`] from a
//! 1-based cursor position and return either a matched value with the
//! advanced cursor, or a descriptive failure. The library emphasizes:
//!
//! - **Zero panics**: all parse failures are handled through `Result`
//! - **Descriptive errors**: every failure reports what was expected,
//!   what was found, and at which position
//! - **Composability**: leaf parsers combine through `optional`,
//!   `discard`, bounded `range` repetition, and `label`
//! - **Purity**: streams and parsers are immutable after construction
//!   and freely reusable across independent `parse` calls
//!
//! ```
//! use charcomb::{Bounds, LabelExt, Parser, RangeExt, char};
//!
//! let digits = char("0123456789")
//!     .range(Bounds::at_least(1))
//!     .label("number");
//!
//! let parsed = digits.parse("42x").unwrap();
//! assert_eq!(parsed.value, "42");
//! assert_eq!(parsed.cursor, 3);
//! ```

pub mod any;
pub mod char;
pub mod discard;
pub mod empty;
pub mod eol;
pub mod error;
pub mod fragment;
pub mod is_a;
pub mod label;
pub mod lit;
pub mod null;
pub mod optional;
pub mod parsed;
pub mod parser;
pub mod range;
pub mod stream;

pub use crate::any::{AnyParser, any};
pub use crate::char::{CharParser, char};
pub use crate::discard::{Discard, DiscardExt, discard};
pub use crate::empty::{EmptyParser, empty};
pub use crate::eol::{EolParser, eol};
pub use crate::error::ParseError;
pub use crate::fragment::Fragment;
pub use crate::is_a::{IsAParser, is_a};
pub use crate::label::{Label, LabelExt, label};
pub use crate::lit::{LitParser, lit};
pub use crate::null::Null;
pub use crate::optional::{Optional, OptionalExt, optional};
pub use crate::parsed::Parsed;
pub use crate::parser::Parser;
pub use crate::range::{Bounds, Range, RangeExt, range};
pub use crate::stream::Stream;
