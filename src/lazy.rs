use crate::parser::Parser;
use crate::stream::Stream;
use crate::tail::Tail;

/// A lazy parser that defers the construction of the actual parser until
/// parse time. This is what breaks the cycle in recursive grammars.
///
/// Construction happens once per attempt, as a deferred step, so recursive
/// grammars unwind through the driving loop instead of building one native
/// frame per construction.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'src, S, F, P> Parser<'src, S> for Lazy<F>
where
    S: Stream + 'src,
    F: Fn() -> P,
    P: Parser<'src, S> + 'src,
{
    type Output = P::Output;

    fn step(&self, state: S) -> Tail<'src, S, P::Output> {
        let parser = (self.factory)();
        Tail::Next(Box::new(move || parser.step(state)))
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::pure::pure;
    use crate::reply::Reply;
    use crate::streams::TextStream;
    use crate::token::token;

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| token('a'));
        match parser.parse(TextStream::new("ab")) {
            Reply::Success(value, rest) => {
                assert_eq!(value, 'a');
                assert_eq!(rest.current(), Some('b'));
            }
            _ => panic!("expected success"),
        }
    }

    fn nesting<'src>() -> Box<dyn Parser<'src, TextStream<'src>, Output = usize> + 'src> {
        Box::new(
            between(token('('), lazy(nesting), token(')'))
                .map(|depth| depth + 1)
                .or(pure(0usize)),
        )
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        match nesting().parse(TextStream::new("(((")) {
            // Unbalanced input: the innermost alternative settles for depth 0
            // at the first position where no '(' remains... which backtracks
            // all the way out because the ')' side never matches.
            Reply::Success(depth, rest) => {
                assert_eq!(depth, 0);
                assert_eq!(rest.current(), Some('('));
            }
            _ => panic!("expected success"),
        }

        match nesting().parse(TextStream::new("((()))")) {
            Reply::Success(depth, rest) => {
                assert_eq!(depth, 3);
                assert!(!rest.has_value());
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_lazy_deep_recursion() {
        let depth = 300;
        let mut input = String::new();
        input.push_str(&"(".repeat(depth));
        input.push_str(&")".repeat(depth));

        match nesting().parse(TextStream::new(&input)) {
            Reply::Success(parsed, rest) => {
                assert_eq!(parsed, depth);
                assert!(!rest.has_value());
            }
            _ => panic!("expected success"),
        }
    }
}
