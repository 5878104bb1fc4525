use crate::error::Abort;
use crate::parser::Parser;
use crate::reply::{Failure, Fatal, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that consumes exactly `count` tokens and collects them.
///
/// Fails at the starting state if the input runs out first.
pub struct Take {
    count: usize,
}

impl<'src, S> Parser<'src, S> for Take
where
    S: Stream + 'src,
    S::Token: 'src,
{
    type Output = Vec<S::Token>;

    fn step(&self, state: S) -> Tail<'src, S, Vec<S::Token>> {
        let origin = state.clone();
        let mut state = state;
        let mut taken = Vec::with_capacity(self.count.min(1024));
        for _ in 0..self.count {
            match state.current() {
                Some(token) => {
                    taken.push(token);
                    state = match state.next() {
                        Ok(next) => next,
                        Err(fault) => {
                            return Tail::Done(Reply::Fatal(Fatal::new(
                                Abort::Fault(fault),
                                state,
                            )));
                        }
                    };
                }
                None => {
                    return Tail::Done(Reply::Failure(Failure::new(
                        "input does not have enough length",
                        origin,
                    )));
                }
            }
        }
        Tail::Done(Reply::Success(taken, state))
    }
}

pub fn take(count: usize) -> Take {
    Take { count }
}

/// Parser that consumes exactly `count` tokens and discards them.
pub struct Skip {
    count: usize,
}

impl<'src, S> Parser<'src, S> for Skip
where
    S: Stream + 'src,
{
    type Output = ();

    fn step(&self, state: S) -> Tail<'src, S, ()> {
        let origin = state.clone();
        let mut state = state;
        for _ in 0..self.count {
            if !state.has_value() {
                return Tail::Done(Reply::Failure(Failure::new(
                    "input does not have enough length",
                    origin,
                )));
            }
            state = match state.next() {
                Ok(next) => next,
                Err(fault) => {
                    return Tail::Done(Reply::Fatal(Fatal::new(Abort::Fault(fault), state)));
                }
            };
        }
        Tail::Done(Reply::Success((), state))
    }
}

pub fn skip(count: usize) -> Skip {
    Skip { count }
}
