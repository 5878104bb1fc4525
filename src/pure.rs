use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that succeeds with a fixed value without consuming input.
pub struct Pure<O> {
    value: O,
}

impl<O> Pure<O> {
    pub fn new(value: O) -> Self {
        Pure { value }
    }
}

impl<'src, S, O> Parser<'src, S> for Pure<O>
where
    S: Stream + 'src,
    O: Clone + 'src,
{
    type Output = O;

    fn step(&self, state: S) -> Tail<'src, S, O> {
        Tail::Done(Reply::Success(self.value.clone(), state))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<O: Clone>(value: O) -> Pure<O> {
    Pure::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SliceStream;

    #[test]
    fn test_pure_consumes_nothing() {
        let data = b"abc";
        let stream = SliceStream::new(data);
        let parser = pure(42);

        match parser.parse(stream) {
            Reply::Success(value, rest) => {
                assert_eq!(value, 42);
                assert_eq!(rest.position().offset, 0);
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_pure_on_empty_input() {
        let data: &[u8] = b"";
        let parser = pure("ready");

        assert!(parser.parse(SliceStream::new(data)).is_success());
    }
}
