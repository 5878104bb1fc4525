use crate::error::Abort;
use crate::parser::Parser;
use crate::reply::{Failure, Fatal, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that consumes one token iff it satisfies the predicate.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'src, S, F> Parser<'src, S> for Satisfy<F>
where
    S: Stream + 'src,
    S::Token: 'src,
    F: Fn(&S::Token) -> bool,
{
    type Output = S::Token;

    fn step(&self, state: S) -> Tail<'src, S, S::Token> {
        Tail::Done(match state.current() {
            Some(token) if (self.predicate)(&token) => match state.next() {
                Ok(next) => Reply::Success(token, next),
                Err(fault) => Reply::Fatal(Fatal::new(Abort::Fault(fault), state)),
            },
            Some(token) => Reply::Failure(Failure::new(
                format!("unexpected token {token:?}"),
                state,
            )),
            None => Reply::Failure(Failure::new("unexpected <end of stream>", state)),
        })
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F> {
    Satisfy::new(predicate)
}

/// Parser that consumes any one token.
pub struct Any;

impl<'src, S> Parser<'src, S> for Any
where
    S: Stream + 'src,
    S::Token: 'src,
{
    type Output = S::Token;

    fn step(&self, state: S) -> Tail<'src, S, S::Token> {
        Tail::Done(match state.current() {
            Some(token) => match state.next() {
                Ok(next) => Reply::Success(token, next),
                Err(fault) => Reply::Fatal(Fatal::new(Abort::Fault(fault), state)),
            },
            None => Reply::Failure(Failure::new("unexpected <end of stream>", state)),
        })
    }
}

pub fn any() -> Any {
    Any
}
