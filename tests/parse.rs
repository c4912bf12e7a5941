//! End-to-end tests composing primitives and combinators through the
//! public API.

use charcomb::{
    Bounds, DiscardExt, LabelExt, Null, OptionalExt, ParseError, Parser, RangeExt, Stream, any,
    char, empty, eol, is_a, lit,
};

#[test]
fn test_literal_then_remainder() {
    let parsed = lit("abc").parse("abcd").unwrap();
    assert_eq!(parsed.value, "abc");
    assert_eq!(parsed.cursor, 4);
}

#[test]
fn test_literal_mismatch_names_the_char() {
    let error = lit("abc").parse("abd").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("'d'"), "unexpected message: {message}");
}

#[test]
fn test_signed_number() {
    // Threads (stream, cursor) through a sign, digits, and eol by hand;
    // each stage resumes at the previous stage's cursor.
    let stream = Stream::new("-204");
    let sign = char("+-").optional();
    let digits = char("0123456789").range(Bounds::at_least(1));

    let (sign, cursor) = sign.apply(&stream, 1).unwrap().unpack();
    let (digits, cursor) = digits.apply(&stream, cursor).unwrap().unpack();
    let (_, cursor) = eol().apply(&stream, cursor).unwrap().unpack();

    assert_eq!(sign, Some('-'));
    assert_eq!(digits, "204");
    assert_eq!(cursor, 5);
}

#[test]
fn test_unsigned_number_skips_the_sign() {
    let stream = Stream::new("37");
    let sign = char("+-").optional();
    let digits = char("0123456789").range(Bounds::at_least(1));

    let (sign, cursor) = sign.apply(&stream, 1).unwrap().unpack();
    let (digits, _) = digits.apply(&stream, cursor).unwrap().unpack();

    assert_eq!(sign, None);
    assert_eq!(digits, "37");
}

#[test]
fn test_discarded_whitespace_between_words() {
    let stream = Stream::new("foo   bar");
    let word = is_a(|c| c.is_alphabetic()).range(Bounds::at_least(1));
    let spaces = char(" \t").range(Bounds::at_least(1)).discard();

    let (first, cursor) = word.apply(&stream, 1).unwrap().unpack();
    let (gap, cursor) = spaces.apply(&stream, cursor).unwrap().unpack();
    let (second, cursor) = word.apply(&stream, cursor).unwrap().unpack();

    assert_eq!(first, "foo");
    assert_eq!(gap, Null);
    assert_eq!(second, "bar");
    assert_eq!(cursor, 10);
    assert!(eol().apply(&stream, cursor).is_ok());
}

#[test]
fn test_labeled_composite_failure() {
    let version = lit("v")
        .range(Bounds::between(0, 2))
        .label("version prefix");

    // min 0 means the prefix is optional; this cannot fail.
    let parsed = version.parse("x1").unwrap();
    assert_eq!(parsed.value, "");

    let strict = lit("v1.").label("version number");
    let error = strict.parse("v2.0").unwrap_err();
    assert_eq!(error.to_string(), "expected version number");
    assert_eq!(error.position(), 2);
}

#[test]
fn test_bounded_identifier_length() {
    let ident = is_a(|c| c.is_ascii_lowercase()).range(Bounds::between(1, 8));

    let parsed = ident.parse("abcdefghijkl").unwrap();
    assert_eq!(parsed.value, "abcdefgh");
    assert_eq!(parsed.cursor, 9);
}

#[test]
fn test_empty_is_a_neutral_step() {
    let stream = Stream::new("ab");
    let (value, cursor) = empty().apply(&stream, 2).unwrap().unpack();
    assert_eq!(value, Null);
    assert_eq!(cursor, 2);
}

#[test]
fn test_any_then_eol() {
    let stream = Stream::new("q");
    let (value, cursor) = any().apply(&stream, 1).unwrap().unpack();
    assert_eq!(value, 'q');
    let (end, cursor) = eol().apply(&stream, cursor).unwrap().unpack();
    assert_eq!(end, Null);
    assert_eq!(cursor, 2);
}

#[test]
fn test_eol_on_empty_and_remaining_input() {
    let parsed = eol().parse("").unwrap();
    assert_eq!(parsed.value, Null);
    assert_eq!(parsed.cursor, 1);

    assert!(eol().parse("x").is_err());
}

#[test]
fn test_any_on_empty_and_single_char_input() {
    assert_eq!(
        any().parse("").unwrap_err(),
        ParseError::EndOfInput { position: 1 }
    );

    let parsed = any().parse("z").unwrap();
    assert_eq!(parsed.value, 'z');
    assert_eq!(parsed.cursor, 2);
}

#[test]
fn test_char_member_and_non_member() {
    let parsed = char("abc").parse("b").unwrap();
    assert_eq!(parsed.value, 'b');
    assert_eq!(parsed.cursor, 2);

    assert!(char("abc").parse("z").is_err());
}

#[test]
fn test_parsers_are_shareable() {
    // One parser value, many independent runs.
    let digits = char("0123456789").range(Bounds::at_least(1));
    assert_eq!(digits.parse("12").unwrap().value, "12");
    assert_eq!(digits.parse("999x").unwrap().value, "999");
    assert!(digits.parse("x").is_err());
    assert_eq!(digits.parse("12").unwrap().value, "12");
}
