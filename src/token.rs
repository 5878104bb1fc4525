use std::fmt;

use crate::error::Abort;
use crate::parser::Parser;
use crate::reply::{Failure, Fatal, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

fn advance<S: Stream, T>(token: T, state: S) -> Reply<S, T> {
    match state.next() {
        Ok(next) => Reply::Success(token, next),
        Err(fault) => Reply::Fatal(Fatal::new(Abort::Fault(fault), state)),
    }
}

/// Parser that consumes one token equal to the expected one.
pub struct Token<T> {
    expected: T,
}

impl<T> Token<T> {
    pub fn new(expected: T) -> Self {
        Token { expected }
    }
}

impl<'src, S, T> Parser<'src, S> for Token<T>
where
    S: Stream<Token = T> + 'src,
    T: Clone + fmt::Debug + PartialEq + 'src,
{
    type Output = T;

    fn step(&self, state: S) -> Tail<'src, S, T> {
        Tail::Done(match state.current() {
            Some(token) if token == self.expected => advance(token, state),
            Some(token) => Reply::Failure(Failure::new(
                format!("expected {:?} but was {:?}", self.expected, token),
                state,
            )),
            None => Reply::Failure(Failure::new(
                format!("expected {:?} but was <end of stream>", self.expected),
                state,
            )),
        })
    }
}

pub fn token<T>(expected: T) -> Token<T> {
    Token::new(expected)
}

/// Parser that consumes one token contained in the candidate set.
pub struct OneOf<T> {
    candidates: Vec<T>,
}

impl<'src, S, T> Parser<'src, S> for OneOf<T>
where
    S: Stream<Token = T> + 'src,
    T: Clone + fmt::Debug + PartialEq + 'src,
{
    type Output = T;

    fn step(&self, state: S) -> Tail<'src, S, T> {
        Tail::Done(match state.current() {
            Some(token) if self.candidates.contains(&token) => advance(token, state),
            Some(token) => Reply::Failure(Failure::new(
                format!("expected one of {:?} but was {:?}", self.candidates, token),
                state,
            )),
            None => Reply::Failure(Failure::new(
                format!(
                    "expected one of {:?} but was <end of stream>",
                    self.candidates
                ),
                state,
            )),
        })
    }
}

pub fn one_of<T>(candidates: impl Into<Vec<T>>) -> OneOf<T> {
    OneOf {
        candidates: candidates.into(),
    }
}

/// Parser that consumes one token not contained in the candidate set.
pub struct NoneOf<T> {
    candidates: Vec<T>,
}

impl<'src, S, T> Parser<'src, S> for NoneOf<T>
where
    S: Stream<Token = T> + 'src,
    T: Clone + fmt::Debug + PartialEq + 'src,
{
    type Output = T;

    fn step(&self, state: S) -> Tail<'src, S, T> {
        Tail::Done(match state.current() {
            Some(token) if !self.candidates.contains(&token) => advance(token, state),
            Some(token) => Reply::Failure(Failure::new(
                format!("unexpected token {token:?}"),
                state,
            )),
            None => Reply::Failure(Failure::new("unexpected <end of stream>", state)),
        })
    }
}

pub fn none_of<T>(candidates: impl Into<Vec<T>>) -> NoneOf<T> {
    NoneOf {
        candidates: candidates.into(),
    }
}
