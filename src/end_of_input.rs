use crate::parser::Parser;
use crate::reply::{Failure, Reply};
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that succeeds only at the end of the input, consuming nothing.
///
/// The failure message names the token actually found.
pub struct EndOfInput;

impl<'src, S> Parser<'src, S> for EndOfInput
where
    S: Stream + 'src,
{
    type Output = ();

    fn step(&self, state: S) -> Tail<'src, S, ()> {
        Tail::Done(match state.current() {
            None => Reply::Success((), state),
            Some(token) => Reply::Failure(Failure::new(
                format!("expected <end of stream> but was {token:?}"),
                state,
            )),
        })
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
