use crate::reply::Reply;

/// A deferred parsing step: either a terminal reply or a thunk producing the
/// next step.
///
/// Success continuations are returned as `Next` values instead of being
/// invoked as nested native calls; [`Tail::run`] executes them one at a time
/// from a single loop. This is what keeps native stack depth independent of
/// how many tokens a repetition consumes or how long a sequenced chain runs.
pub enum Tail<'src, S, O> {
    Done(Reply<S, O>),
    Next(Box<dyn FnOnce() -> Tail<'src, S, O> + 'src>),
}

impl<'src, S, O> Tail<'src, S, O> {
    /// Drive deferred steps until a terminal reply is reached.
    pub fn run(self) -> Reply<S, O> {
        let mut tail = self;
        loop {
            match tail {
                Tail::Done(reply) => return reply,
                Tail::Next(resume) => tail = resume(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SliceStream;

    #[test]
    fn test_run_unwinds_deferred_chain() {
        let data = b"x";
        let state = SliceStream::new(data);

        // A chain of 100_000 deferred steps must run in constant stack.
        let mut tail: Tail<'_, _, u32> = Tail::Done(Reply::Success(0, state));
        for _ in 0..100_000 {
            let inner = tail;
            tail = Tail::Next(Box::new(move || inner));
        }
        match tail.run() {
            Reply::Success(value, _) => assert_eq!(value, 0),
            _ => panic!("expected success"),
        }
    }
}
