/// The unit value standing in for a discarded or absent match.
///
/// `Null` is the success value of parsers whose match is semantically
/// empty: `empty()`, `eol()`, and anything wrapped in `discard()`. It
/// is zero-sized, and its identity is structural: every `Null` equals
/// every other `Null`, and equals `()`, the language's own void value.
/// Comparing it against any other type does not compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl PartialEq<()> for Null {
    fn eq(&self, _: &()) -> bool {
        true
    }
}

impl PartialEq<Null> for () {
    fn eq(&self, _: &Null) -> bool {
        true
    }
}
