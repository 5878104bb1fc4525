use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that converts a fatal reply back into a recoverable
/// failure.
///
/// This is the only interception point for fatals: `or`, `bind_or` and every
/// other combinator pass them through untouched. The resulting failure
/// carries the abort's description and the state the abort was raised at, so
/// an enclosing `or` can take over from there.
pub struct Recover<P> {
    parser: P,
}

impl<P> Recover<P> {
    pub fn new(parser: P) -> Self {
        Recover { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for Recover<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        Tail::Done(match self.parser.parse(state) {
            Reply::Fatal(fatal) => {
                let message = fatal.abort.to_string();
                Reply::Failure(Failure::new(message, fatal.state))
            }
            reply => reply,
        })
    }
}

/// Convenience function to create a Recover parser
pub fn recover<P>(parser: P) -> Recover<P> {
    Recover::new(parser)
}

/// Extension trait to add .recover() method support for parsers
pub trait RecoverExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn recover(self) -> Recover<Self> {
        Recover::new(self)
    }
}

impl<'src, S: Stream + 'src, P: Parser<'src, S>> RecoverExt<'src, S> for P {}
