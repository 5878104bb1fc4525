use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::tail::Tail;

/// Parser that succeeds with the current position, consuming nothing.
pub struct GetPosition;

impl<'src, S> Parser<'src, S> for GetPosition
where
    S: Stream + 'src,
    S::Pos: 'src,
{
    type Output = S::Pos;

    fn step(&self, state: S) -> Tail<'src, S, S::Pos> {
        let position = state.position();
        Tail::Done(Reply::Success(position, state))
    }
}

pub fn get_position() -> GetPosition {
    GetPosition
}
