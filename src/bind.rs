use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Monadic sequencing: run a parser, then run the parser produced from its
/// value.
///
/// The success continuation is returned to the driving loop as a deferred
/// step rather than invoked as a nested call, so long sequenced chains do
/// not stack native frames per element. Failures and fatals short-circuit.
pub struct Bind<P, F> {
    parser: P,
    function: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        Bind { parser, function }
    }
}

impl<'src, S, P, F, Q> Parser<'src, S> for Bind<P, F>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src, S> + 'src,
{
    type Output = Q::Output;

    fn step(&self, state: S) -> Tail<'src, S, Q::Output> {
        match self.parser.parse(state) {
            Reply::Success(value, next) => {
                let continuation = (self.function)(value);
                Tail::Next(Box::new(move || continuation.step(next)))
            }
            Reply::Failure(failure) => Tail::Done(Reply::Failure(failure)),
            Reply::Fatal(fatal) => Tail::Done(Reply::Fatal(fatal)),
        }
    }
}

/// Sequencing with a failure handler.
///
/// On failure (not fatal) of the first parser, the handler chooses a parser
/// that is run from the state the whole composition started at, tokens
/// consumed by the failed attempt included. This is the primitive that
/// backtracking recovery is built from.
pub struct BindOr<P, F, G> {
    parser: P,
    on_success: F,
    on_failure: G,
}

impl<P, F, G> BindOr<P, F, G> {
    pub fn new(parser: P, on_success: F, on_failure: G) -> Self {
        BindOr {
            parser,
            on_success,
            on_failure,
        }
    }
}

impl<'src, S, P, F, G, Q, R> Parser<'src, S> for BindOr<P, F, G>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
    F: Fn(P::Output) -> Q,
    G: Fn() -> R,
    Q: Parser<'src, S> + 'src,
    R: Parser<'src, S, Output = Q::Output> + 'src,
{
    type Output = Q::Output;

    fn step(&self, state: S) -> Tail<'src, S, Q::Output> {
        match self.parser.parse(state.clone()) {
            Reply::Success(value, next) => {
                let continuation = (self.on_success)(value);
                Tail::Next(Box::new(move || continuation.step(next)))
            }
            Reply::Failure(_) => {
                let recovery = (self.on_failure)();
                Tail::Next(Box::new(move || recovery.step(state)))
            }
            Reply::Fatal(fatal) => Tail::Done(Reply::Fatal(fatal)),
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P, F>(parser: P, function: F) -> Bind<P, F> {
    Bind::new(parser, function)
}

/// Extension trait to add .bind() and .bind_or() method support for parsers
pub trait BindExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn bind<F, Q>(self, function: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'src, S>,
    {
        Bind::new(self, function)
    }

    fn bind_or<F, G, Q, R>(self, on_success: F, on_failure: G) -> BindOr<Self, F, G>
    where
        F: Fn(Self::Output) -> Q,
        G: Fn() -> R,
        Q: Parser<'src, S>,
        R: Parser<'src, S, Output = Q::Output>,
    {
        BindOr::new(self, on_success, on_failure)
    }
}

impl<'src, S: Stream + 'src, P: Parser<'src, S>> BindExt<'src, S> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fail::abort;
    use crate::pure::pure;
    use crate::streams::SliceStream;
    use crate::token::token;

    #[test]
    fn test_bind_threads_state() {
        let data = b"ab";
        let parser = token(b'a').bind(|_| token(b'b'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success(value, rest) => {
                assert_eq!(value, b'b');
                assert!(!rest.has_value());
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_bind_uses_parsed_value() {
        let data = b"aa";
        // The second token must equal the first.
        let parser = token(b'a').bind(|first| token(first));
        assert!(parser.parse(SliceStream::new(data)).is_success());

        let data = b"ab";
        assert!(!parser.parse(SliceStream::new(data)).is_success());
    }

    #[test]
    fn test_bind_short_circuits_on_failure() {
        let data = b"xb";
        let parser = token(b'a').bind(|_| token(b'b'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Failure(failure) => assert_eq!(failure.state.position().offset, 0),
            _ => panic!("expected failure"),
        }
    }

    fn poison(_: u8) -> crate::fail::AbortParser<u8> {
        abort("stop")
    }

    #[test]
    fn test_bind_passes_fatal_through() {
        let data = b"ab";
        let parser = token(b'a').bind(poison);

        assert!(matches!(
            parser.parse(SliceStream::new(data)),
            Reply::Fatal(_)
        ));
    }

    #[test]
    fn test_bind_or_recovers_from_original_state() {
        let data = b"ab";
        // First branch consumes 'a' then fails on 'x'; the handler runs from
        // the start, so it sees 'a' again.
        let parser = token(b'a')
            .bind(|_| token(b'x'))
            .bind_or(pure, || token(b'a'));

        match parser.parse(SliceStream::new(data)) {
            Reply::Success(value, rest) => {
                assert_eq!(value, b'a');
                assert_eq!(rest.current(), Some(b'b'));
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_bind_or_does_not_intercept_fatal() {
        let data = b"ab";
        let parser = abort("stop").bind_or(pure, || token(b'a'));

        assert!(matches!(
            parser.parse(SliceStream::new(data)),
            Reply::Fatal(_)
        ));
    }

    #[test]
    fn test_long_bind_chain_runs_in_bounded_stack() {
        let data = vec![b'a'; 50_000];
        // Build a right-nested chain one bind at a time via recursion through
        // the driving loop: each element consumes one 'a'.
        fn rest<'src>(
            remaining: usize,
        ) -> Box<dyn Parser<'src, SliceStream<'src, u8>, Output = usize> + 'src> {
            if remaining == 0 {
                Box::new(pure(0usize))
            } else {
                Box::new(token(b'a').bind(move |_| rest(remaining - 1)))
            }
        }

        match rest(50_000).parse(SliceStream::new(&data)) {
            Reply::Success(_, rest) => assert!(!rest.has_value()),
            _ => panic!("expected success"),
        }
    }
}
