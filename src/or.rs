use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that tries the first parser, and if it fails
/// recoverably, tries the second parser from the same starting state.
///
/// Backtracking is full: tokens the first parser consumed before failing are
/// not seen by the second. A fatal reply from the first parser is returned
/// unchanged, never intercepted.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, S, P1, P2> Parser<'src, S> for Or<P1, P2>
where
    S: Stream + 'src,
    P1: Parser<'src, S>,
    P2: Parser<'src, S, Output = P1::Output>,
{
    type Output = P1::Output;

    fn step(&self, state: S) -> Tail<'src, S, P1::Output> {
        match self.first.parse(state.clone()) {
            Reply::Failure(_) => self.second.step(state),
            reply => Tail::Done(reply),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, S, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, S: Stream + 'src, P: Parser<'src, S>> OrExt<'src, S> for P {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or::new(first, second)
}
