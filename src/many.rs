use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that matches zero or more occurrences of the given
/// parser, collecting the results in order.
///
/// Each attempt is driven to completion from an explicit loop, so native
/// stack depth stays constant no matter how many tokens are consumed. The
/// attempt that finally fails consumes nothing: the collected results end at
/// the state before it. A child that succeeds without consuming will loop
/// forever; repetition only makes sense over consuming parsers.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for Many<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = Vec<P::Output>;

    fn step(&self, state: S) -> Tail<'src, S, Vec<P::Output>> {
        let mut results = Vec::new();
        let mut state = state;

        loop {
            match self.parser.parse(state.clone()) {
                Reply::Success(value, next) => {
                    results.push(value);
                    state = next;
                }
                Reply::Failure(_) => return Tail::Done(Reply::Success(results, state)),
                Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
            }
        }
    }
}

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// The first attempt must succeed; its failure is propagated as-is.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for Many1<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = Vec<P::Output>;

    fn step(&self, state: S) -> Tail<'src, S, Vec<P::Output>> {
        let (first, mut state) = match self.parser.parse(state) {
            Reply::Success(value, next) => (value, next),
            Reply::Failure(failure) => return Tail::Done(Reply::Failure(failure)),
            Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
        };
        let mut results = vec![first];

        loop {
            match self.parser.parse(state.clone()) {
                Reply::Success(value, next) => {
                    results.push(value);
                    state = next;
                }
                Reply::Failure(_) => return Tail::Done(Reply::Success(results, state)),
                Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
            }
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P> {
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P> {
    Many1::new(parser)
}
