use std::borrow::Cow;
use std::marker::PhantomData;

use crate::error::Abort;
use crate::parser::Parser;
use crate::reply::{Failure, Fatal, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that always fails recoverably with the given message.
pub struct Fail<O> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> O>,
}

impl<O> Fail<O> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<'src, S, O> Parser<'src, S> for Fail<O>
where
    S: Stream + 'src,
    O: 'src,
{
    type Output = O;

    fn step(&self, state: S) -> Tail<'src, S, O> {
        Tail::Done(Reply::Failure(Failure::new(self.message.clone(), state)))
    }
}

pub fn fail<O>(message: impl Into<Cow<'static, str>>) -> Fail<O> {
    Fail::new(message)
}

/// Parser that aborts the whole parse with the given message.
///
/// The resulting fatal reply is not intercepted by `or` or failure handlers;
/// see `recover` for the one way back.
pub struct AbortParser<O> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> O>,
}

impl<O> AbortParser<O> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        AbortParser {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<'src, S, O> Parser<'src, S> for AbortParser<O>
where
    S: Stream + 'src,
    O: 'src,
{
    type Output = O;

    fn step(&self, state: S) -> Tail<'src, S, O> {
        Tail::Done(Reply::Fatal(Fatal::new(
            Abort::Message(self.message.clone()),
            state,
        )))
    }
}

pub fn abort<O>(message: impl Into<Cow<'static, str>>) -> AbortParser<O> {
    AbortParser::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SliceStream;

    #[test]
    fn test_fail_is_recoverable() {
        let data = b"abc";
        let parser: Fail<u8> = fail("wrong branch");

        match parser.parse(SliceStream::new(data)) {
            Reply::Failure(failure) => {
                assert_eq!(failure.message, "wrong branch");
                assert_eq!(failure.state.position().offset, 0);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_abort_is_fatal() {
        let data = b"abc";
        let parser: AbortParser<u8> = abort("bad semantics");

        match parser.parse(SliceStream::new(data)) {
            Reply::Fatal(fatal) => {
                assert_eq!(fatal.abort, Abort::Message("bad semantics".into()));
            }
            _ => panic!("expected fatal"),
        }
    }
}
