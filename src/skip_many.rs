use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that matches zero or more occurrences of the given
/// parser, discarding the results.
///
/// Pure control-flow repetition: nothing is collected, and like `many` it
/// runs from an explicit loop with constant native stack depth.
pub struct SkipMany<P> {
    parser: P,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P) -> Self {
        SkipMany { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for SkipMany<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = ();

    fn step(&self, state: S) -> Tail<'src, S, ()> {
        let mut state = state;
        loop {
            match self.parser.parse(state.clone()) {
                Reply::Success(_, next) => state = next,
                Reply::Failure(_) => return Tail::Done(Reply::Success((), state)),
                Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
            }
        }
    }
}

/// Parser combinator that matches one or more occurrences of the given
/// parser, discarding the results.
pub struct SkipMany1<P> {
    parser: P,
}

impl<P> SkipMany1<P> {
    pub fn new(parser: P) -> Self {
        SkipMany1 { parser }
    }
}

impl<'src, S, P> Parser<'src, S> for SkipMany1<P>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
{
    type Output = ();

    fn step(&self, state: S) -> Tail<'src, S, ()> {
        let mut state = match self.parser.parse(state) {
            Reply::Success(_, next) => next,
            Reply::Failure(failure) => return Tail::Done(Reply::Failure(failure)),
            Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
        };
        loop {
            match self.parser.parse(state.clone()) {
                Reply::Success(_, next) => state = next,
                Reply::Failure(_) => return Tail::Done(Reply::Success((), state)),
                Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
            }
        }
    }
}

/// Convenience function to create a SkipMany parser
pub fn skip_many<P>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser)
}

/// Convenience function to create a SkipMany1 parser
pub fn skip_many1<P>(parser: P) -> SkipMany1<P> {
    SkipMany1::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SliceStream;
    use crate::token::token;

    #[test]
    fn test_skip_many_zero_matches() {
        let data = b"xyz";
        let parser = skip_many(token(b'a'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success((), rest) => assert_eq!(rest.current(), Some(b'x')),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_skip_many_consumes_matches() {
        let data = b"aaab";
        let parser = skip_many(token(b'a'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success((), rest) => {
                assert_eq!(rest.current(), Some(b'b'));
                assert_eq!(rest.position().offset, 3);
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_skip_many1_requires_first_match() {
        let data = b"xyz";
        let parser = skip_many1(token(b'a'));
        assert!(!parser.parse(SliceStream::new(data)).is_success());
    }

    #[test]
    fn test_skip_many1_consumes_matches() {
        let data = b"aab";
        let parser = skip_many1(token(b'a'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success((), rest) => assert_eq!(rest.current(), Some(b'b')),
            _ => panic!("expected success"),
        }
    }
}
