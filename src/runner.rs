use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use crate::error::Abort;
use crate::parser::Parser;
use crate::position::{LinearPosition, TextPosition};
use crate::reply::Reply;
use crate::stream::Stream;
use crate::streams::{ByteStream, IterStream, SliceStream, TextStream, byte_stream, iter_stream};

/// User-facing outcome of a parse run.
///
/// Unlike [`Reply`], an outcome no longer holds stream states: only the
/// produced value (or diagnostic) and the position it ended at.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<O, P> {
    Success { value: O, position: P },
    Failure { message: Cow<'static, str>, position: P },
    Fatal { abort: Abort, position: P },
}

impl<O, P> Outcome<O, P> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<O> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn position(&self) -> &P {
        match self {
            Outcome::Success { position, .. }
            | Outcome::Failure { position, .. }
            | Outcome::Fatal { position, .. } => position,
        }
    }
}

impl<O, P: fmt::Display> fmt::Display for Outcome<O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { position, .. } => write!(f, "success at {position}"),
            Outcome::Failure { message, position } => write!(f, "{message} at {position}"),
            Outcome::Fatal { abort, position } => write!(f, "fatal: {abort} at {position}"),
        }
    }
}

/// Releases the run's source exactly once, on every exit path.
///
/// Dropped on normal completion and during unwinding alike; release itself
/// is idempotent, so an early release on a buffering fault is fine.
struct ReleaseGuard<S: Stream>(S);

impl<S: Stream> Drop for ReleaseGuard<S> {
    fn drop(&mut self) {
        self.0.release();
    }
}

/// Run a parser against an already-constructed stream state and classify the
/// terminal reply.
pub fn run<'src, S, P>(parser: &P, state: S) -> Outcome<P::Output, S::Pos>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    let _guard = ReleaseGuard(state.clone());
    let outcome = match parser.parse(state) {
        Reply::Success(value, rest) => Outcome::Success {
            position: rest.position(),
            value,
        },
        Reply::Failure(failure) => Outcome::Failure {
            position: failure.state.position(),
            message: failure.message,
        },
        Reply::Fatal(fatal) => Outcome::Fatal {
            position: fatal.state.position(),
            abort: fatal.abort,
        },
    };
    let kind = match &outcome {
        Outcome::Success { .. } => "success",
        Outcome::Failure { .. } => "failure",
        Outcome::Fatal { .. } => "fatal",
    };
    tracing::trace!(kind, "parse finished");
    outcome
}

/// Parse an in-memory slice of tokens.
pub fn parse_slice<'src, T, P>(parser: &P, input: &'src [T]) -> Outcome<P::Output, LinearPosition>
where
    T: Clone + fmt::Debug,
    P: Parser<'src, SliceStream<'src, T>>,
{
    run(parser, SliceStream::new(input))
}

/// Parse the characters of a string.
pub fn parse_text<'src, P>(parser: &P, input: &'src str) -> Outcome<P::Output, TextPosition>
where
    P: Parser<'src, TextStream<'src>>,
{
    run(parser, TextStream::new(input))
}

/// Parse the bytes of a reader, buffering lazily.
pub fn parse_reader<'src, R, P>(parser: &P, reader: R) -> Outcome<P::Output, LinearPosition>
where
    R: Read + 'src,
    P: Parser<'src, ByteStream<R>>,
{
    match byte_stream(reader) {
        Ok(state) => run(parser, state),
        Err(fault) => Outcome::Fatal {
            abort: Abort::Fault(fault),
            position: LinearPosition::INITIAL,
        },
    }
}

/// Parse the elements of an iterator, buffering lazily.
pub fn parse_iter<'src, I, P>(parser: &P, source: I) -> Outcome<P::Output, LinearPosition>
where
    I: IntoIterator,
    I::IntoIter: 'src,
    I::Item: Clone + fmt::Debug + 'src,
    P: Parser<'src, IterStream<I::IntoIter>>,
{
    match iter_stream(source) {
        Ok(state) => run(parser, state),
        Err(fault) => Outcome::Fatal {
            abort: Abort::Fault(fault),
            position: LinearPosition::INITIAL,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fail::{AbortParser, abort};
    use crate::many::many;
    use crate::satisfy::any;
    use crate::token::token;

    #[test]
    fn test_success_outcome_carries_final_position() {
        let parser = many(token('a'));
        match parse_text(&parser, "aab") {
            Outcome::Success { value, position } => {
                assert_eq!(value, vec!['a', 'a']);
                assert_eq!(position, TextPosition { line: 1, column: 3 });
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_failure_outcome_carries_message_and_position() {
        let parser = token('b');
        match parse_text(&parser, "a") {
            Outcome::Failure { message, position } => {
                assert!(message.contains("'a'"));
                assert_eq!(position, TextPosition::INITIAL);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_fatal_outcome() {
        let parser: AbortParser<char> = abort("unsupported construct");
        match parse_text(&parser, "a") {
            Outcome::Fatal { abort, .. } => {
                assert_eq!(abort, Abort::Message("unsupported construct".into()));
            }
            _ => panic!("expected fatal"),
        }
    }

    #[test]
    fn test_parse_iter_entry_point() {
        let parser = many(any());
        match parse_iter(&parser, 0..5u32) {
            Outcome::Success { value, position } => {
                assert_eq!(value, vec![0, 1, 2, 3, 4]);
                assert_eq!(position.offset, 5);
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_parse_reader_entry_point() {
        let parser = many(token(b'z'));
        let outcome = parse_reader(&parser, std::io::Cursor::new(b"zz!".to_vec()));
        assert_eq!(outcome.value(), Some(&vec![b'z', b'z']));
    }

    #[test]
    fn test_outcome_display() {
        let parser = token('b');
        let outcome = parse_text(&parser, "a");
        assert!(outcome.to_string().contains("line 1, column 1"));
    }
}
