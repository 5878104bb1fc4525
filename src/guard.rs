use std::borrow::Cow;

use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that rejects a successful result when the predicate
/// does not hold.
///
/// Rejection happens after consumption: the failure is reported at the state
/// the inner parser ended on. Compose with `or` to backtrack instead.
pub struct Guard<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Guard<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Guard {
            parser,
            predicate,
            message,
        }
    }
}

impl<'src, S, P, F> Parser<'src, S> for Guard<P, F>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        Tail::Done(match self.parser.parse(state) {
            Reply::Success(value, next) => {
                if (self.predicate)(&value) {
                    Reply::Success(value, next)
                } else {
                    Reply::Failure(Failure::new(self.message.clone(), next))
                }
            }
            other => other,
        })
    }
}

/// Extension trait to add .guard() method support for parsers
pub trait GuardExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn guard<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Guard<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Guard::new(self, predicate, message.into())
    }
}

impl<'src, S: Stream + 'src, P: Parser<'src, S>> GuardExt<'src, S> for P {}

/// Convenience function to create a Guard parser
pub fn guard<P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Guard<P, F> {
    Guard::new(parser, predicate, message.into())
}
