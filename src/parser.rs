use std::rc::Rc;

use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Core parser trait.
///
/// A parser is a stateless computation from a stream state to a [`Reply`],
/// generic over the stream (and thereby the token type) and the produced
/// value. The same parser value can be run any number of times against any
/// number of states.
///
/// `'src` is the lifetime of the input the stream borrows from (`'static`
/// for owned sources). Implementations provide `step`, which either finishes
/// immediately or hands the rest of the work back as a [`Tail::Next`] thunk;
/// `parse` drives the steps from one loop.
pub trait Parser<'src, S: Stream + 'src> {
    type Output: 'src;

    /// Produce the next step of this parser at `state`.
    fn step(&self, state: S) -> Tail<'src, S, Self::Output>;

    /// Drive this parser to a terminal reply.
    fn parse(&self, state: S) -> Reply<S, Self::Output> {
        self.step(state).run()
    }
}

impl<'src, S, P> Parser<'src, S> for Box<P>
where
    S: Stream + 'src,
    P: Parser<'src, S> + ?Sized,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        (**self).step(state)
    }
}

impl<'src, S, P> Parser<'src, S> for Rc<P>
where
    S: Stream + 'src,
    P: Parser<'src, S> + ?Sized,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        (**self).step(state)
    }
}

impl<'src, S, P> Parser<'src, S> for &P
where
    S: Stream + 'src,
    P: Parser<'src, S> + ?Sized,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        (**self).step(state)
    }
}
