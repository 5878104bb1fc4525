use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that performs negative lookahead.
///
/// Succeeds with () if the given parser fails at the current position, and
/// fails if it succeeds. Never consumes input either way. A fatal reply from
/// the inner parser is returned unchanged.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for Not<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = ();

    fn step(&self, state: S) -> Tail<'src, S, ()> {
        Tail::Done(match self.parser.parse(state.clone()) {
            Reply::Success(..) => Reply::Failure(Failure::new(
                "negative lookahead failed: unexpected match",
                state,
            )),
            Reply::Failure(_) => Reply::Success((), state),
            Reply::Fatal(fatal) => Reply::Fatal(fatal),
        })
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P> {
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<'src, S: Stream + 'src, P: Parser<'src, S>> NotExt<'src, S> for P {}
