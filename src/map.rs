use crate::parser::Parser;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, S, P, F, U> Parser<'src, S> for Map<P, F>
where
    S: Stream + 'src,
    P: Parser<'src, S>,
    F: Fn(P::Output) -> U,
    U: 'src,
{
    type Output = U;

    fn step(&self, state: S) -> Tail<'src, S, U> {
        Tail::Done(self.parser.parse(state).map(|value| (self.mapper)(value)))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F>(parser: P, mapper: F) -> Map<P, F> {
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src, S: Stream + 'src>: Parser<'src, S> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, S: Stream + 'src, P: Parser<'src, S>> MapExt<'src, S> for P {}
