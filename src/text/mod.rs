//! Character-level helpers built entirely on the public combinator API.
//!
//! Nothing here touches stream or engine internals: character classes are
//! `satisfy` specializations, and the conversions are `map`/custom parsers
//! over already-collected output.

use crate::map::Map;
use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::satisfy::Satisfy;
use crate::stream::Stream;
use crate::tail::Tail;

fn is_ascii_digit(ch: &char) -> bool {
    ch.is_ascii_digit()
}

fn is_letter(ch: &char) -> bool {
    ch.is_alphabetic()
}

fn is_whitespace(ch: &char) -> bool {
    ch.is_whitespace()
}

/// Parser for a single ASCII digit.
pub fn digit() -> Satisfy<fn(&char) -> bool> {
    Satisfy::new(is_ascii_digit)
}

/// Parser for a single alphabetic character.
pub fn letter() -> Satisfy<fn(&char) -> bool> {
    Satisfy::new(is_letter)
}

/// Parser for a single whitespace character.
pub fn whitespace() -> Satisfy<fn(&char) -> bool> {
    Satisfy::new(is_whitespace)
}

fn join_chars(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

/// Extension trait turning collected characters into a `String`.
pub trait ToStrExt<'src, S: Stream + 'src>:
    Parser<'src, S, Output = Vec<char>> + Sized
{
    fn to_str(self) -> Map<Self, fn(Vec<char>) -> String> {
        Map::new(self, join_chars)
    }
}

impl<'src, S, P> ToStrExt<'src, S> for P
where
    S: Stream + 'src,
    P: Parser<'src, S, Output = Vec<char>>,
{
}

/// Parser that reinterprets a parsed string as a decimal `i64`.
///
/// Fails (recoverably, at the state after the string) when the text is not a
/// valid integer, overflow included.
pub struct ToI64<P> {
    parser: P,
}

impl<'src, S, P> Parser<'src, S> for ToI64<P>
where
    S: Stream + 'src,
    P: Parser<'src, S, Output = String>,
{
    type Output = i64;

    fn step(&self, state: S) -> Tail<'src, S, i64> {
        Tail::Done(match self.parser.parse(state) {
            Reply::Success(text, next) => match text.parse::<i64>() {
                Ok(value) => Reply::Success(value, next),
                Err(_) => Reply::Failure(Failure::new(
                    format!("expected an integer but was {text:?}"),
                    next,
                )),
            },
            Reply::Failure(failure) => Reply::Failure(failure),
            Reply::Fatal(fatal) => Reply::Fatal(fatal),
        })
    }
}

/// Extension trait turning a parsed string into an `i64`.
pub trait ToIntExt<'src, S: Stream + 'src>: Parser<'src, S, Output = String> + Sized {
    fn to_i64(self) -> ToI64<Self> {
        ToI64 { parser: self }
    }
}

impl<'src, S, P> ToIntExt<'src, S> for P
where
    S: Stream + 'src,
    P: Parser<'src, S, Output = String>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many1;
    use crate::streams::TextStream;

    #[test]
    fn test_digit_class() {
        assert!(digit().parse(TextStream::new("7")).is_success());
        assert!(!digit().parse(TextStream::new("x")).is_success());
    }

    #[test]
    fn test_letter_class() {
        assert!(letter().parse(TextStream::new("ñ")).is_success());
        assert!(!letter().parse(TextStream::new("1")).is_success());
    }

    #[test]
    fn test_whitespace_class() {
        assert!(whitespace().parse(TextStream::new("\t")).is_success());
        assert!(!whitespace().parse(TextStream::new("x")).is_success());
    }

    #[test]
    fn test_to_str_joins_characters() {
        let parser = many1(letter()).to_str();
        match parser.parse(TextStream::new("word!")) {
            Reply::Success(value, rest) => {
                assert_eq!(value, "word");
                assert_eq!(rest.current(), Some('!'));
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_to_i64_parses_digits() {
        let parser = many1(digit()).to_str().to_i64();
        match parser.parse(TextStream::new("123abc")) {
            Reply::Success(value, rest) => {
                assert_eq!(value, 123);
                assert_eq!(rest.current(), Some('a'));
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_to_i64_rejects_overflow() {
        let parser = many1(digit()).to_str().to_i64();
        let huge = "9".repeat(40);
        match parser.parse(TextStream::new(&huge)) {
            Reply::Failure(failure) => {
                assert!(failure.message.contains("expected an integer"));
            }
            _ => panic!("expected failure"),
        }
    }
}
