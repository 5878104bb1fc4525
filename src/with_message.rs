use std::borrow::Cow;

use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that replaces the message of a recoverable failure.
///
/// Success and fatal replies pass through untouched. Useful for naming what
/// a composed parser expected instead of surfacing the innermost mismatch.
pub struct WithMessage<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> WithMessage<P> {
    pub fn new(parser: P, message: Cow<'static, str>) -> Self {
        WithMessage { parser, message }
    }
}

impl<'src, S, P> Parser<'src, S> for WithMessage<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        Tail::Done(match self.parser.parse(state) {
            Reply::Failure(failure) => {
                Reply::Failure(Failure::new(self.message.clone(), failure.state))
            }
            reply => reply,
        })
    }
}

/// Extension trait to add .with_message() method support for parsers
pub trait WithMessageExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message.into())
    }
}

impl<'src, S: Stream + 'src, P: Parser<'src, S>> WithMessageExt<'src, S> for P {}
