use std::borrow::Cow;

use crate::error::Abort;

/// Recoverable mismatch: a message plus the state at which it occurred.
///
/// Failures drive `or` backtracking and never stop a parse run on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<S> {
    pub message: Cow<'static, str>,
    pub state: S,
}

impl<S> Failure<S> {
    pub fn new(message: impl Into<Cow<'static, str>>, state: S) -> Self {
        Failure {
            message: message.into(),
            state,
        }
    }
}

/// Unrecoverable abort: an [`Abort`] payload plus the state it was raised at.
///
/// Bypasses every `or` branch and failure handler; only the `recover`
/// combinator converts it back into a recoverable failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Fatal<S> {
    pub abort: Abort,
    pub state: S,
}

impl<S> Fatal<S> {
    pub fn new(abort: Abort, state: S) -> Self {
        Fatal { abort, state }
    }
}

/// Outcome of running a parser at a given stream state.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<S, O> {
    /// Parsed value plus the state after the consumed tokens.
    Success(O, S),
    Failure(Failure<S>),
    Fatal(Fatal<S>),
}

impl<S, O> Reply<S, O> {
    /// Apply `f` to a success value; failures and fatals pass through.
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Reply<S, U> {
        match self {
            Reply::Success(value, state) => Reply::Success(f(value), state),
            Reply::Failure(failure) => Reply::Failure(failure),
            Reply::Fatal(fatal) => Reply::Fatal(fatal),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SliceStream;

    #[test]
    fn test_map_transforms_success() {
        let data = b"x";
        let reply: Reply<_, u8> = Reply::Success(2, SliceStream::new(data));
        match reply.map(|n| n * 10) {
            Reply::Success(value, _) => assert_eq!(value, 20),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_map_passes_failure_through() {
        let data = b"x";
        let reply: Reply<_, u8> = Reply::Failure(Failure::new("nope", SliceStream::new(data)));
        match reply.map(|n| n * 10) {
            Reply::Failure(failure) => assert_eq!(failure.message, "nope"),
            _ => panic!("expected failure"),
        }
    }
}
