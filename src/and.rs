use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that runs two parsers in sequence and pairs their
/// results.
pub struct And<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        And { first, second }
    }
}

impl<'src, S, P1, P2> Parser<'src, S> for And<P1, P2>
where
    S: Stream + 'src,
    P1: Parser<'src, S>,
    P2: Parser<'src, S>,
{
    type Output = (P1::Output, P2::Output);

    fn step(&self, state: S) -> Tail<'src, S, (P1::Output, P2::Output)> {
        Tail::Done(match self.first.parse(state) {
            Reply::Success(first, next) => match self.second.parse(next) {
                Reply::Success(second, rest) => Reply::Success((first, second), rest),
                Reply::Failure(failure) => Reply::Failure(failure),
                Reply::Fatal(fatal) => Reply::Fatal(fatal),
            },
            Reply::Failure(failure) => Reply::Failure(failure),
            Reply::Fatal(fatal) => Reply::Fatal(fatal),
        })
    }
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src, S>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'src, S: Stream + 'src, P: Parser<'src, S>> AndExt<'src, S> for P {}

/// Convenience function to create an And parser
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And::new(first, second)
}
