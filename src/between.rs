use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that runs open, body and close in sequence, keeping
/// only the body's result.
pub struct Between<O, P, C> {
    open: O,
    body: P,
    close: C,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, body: P, close: C) -> Self {
        Between { open, body, close }
    }
}

impl<'src, S, O, P, C> Parser<'src, S> for Between<O, P, C>
where
    S: Stream + 'src,
    O: Parser<'src, S>,
    P: Parser<'src, S>,
    C: Parser<'src, S>,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        let next = match self.open.parse(state) {
            Reply::Success(_, next) => next,
            Reply::Failure(failure) => return Tail::Done(Reply::Failure(failure)),
            Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
        };
        let (body, next) = match self.body.parse(next) {
            Reply::Success(value, next) => (value, next),
            Reply::Failure(failure) => return Tail::Done(Reply::Failure(failure)),
            Reply::Fatal(fatal) => return Tail::Done(Reply::Fatal(fatal)),
        };
        Tail::Done(match self.close.parse(next) {
            Reply::Success(_, rest) => Reply::Success(body, rest),
            Reply::Failure(failure) => Reply::Failure(failure),
            Reply::Fatal(fatal) => Reply::Fatal(fatal),
        })
    }
}

/// Convenience function to create a Between parser
pub fn between<O, P, C>(open: O, body: P, close: C) -> Between<O, P, C> {
    Between::new(open, body, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many1;
    use crate::streams::SliceStream;
    use crate::token::token;

    #[test]
    fn test_between_keeps_body() {
        let data = b"[x]";
        let parser = between(token(b'['), token(b'x'), token(b']'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success(value, rest) => {
                assert_eq!(value, b'x');
                assert!(!rest.has_value());
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_between_missing_close() {
        let data = b"[x";
        let parser = between(token(b'['), token(b'x'), token(b']'));
        assert!(!parser.parse(SliceStream::new(data)).is_success());
    }

    #[test]
    fn test_between_missing_open() {
        let data = b"x]";
        let parser = between(token(b'['), token(b'x'), token(b']'));
        assert!(!parser.parse(SliceStream::new(data)).is_success());
    }

    #[test]
    fn test_between_with_repetition_body() {
        let data = b"(aaa)";
        let parser = between(token(b'('), many1(token(b'a')), token(b')'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success(value, _) => assert_eq!(value, vec![b'a'; 3]),
            _ => panic!("expected success"),
        }
    }
}
