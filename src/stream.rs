use std::fmt;

use crate::error::StreamFault;

/// Immutable cursor over a token source.
///
/// A stream value pins one location in the input; `next` produces a new value
/// one token further along and never invalidates the value it was called on,
/// so any number of saved states can be resumed later (this is what full
/// backtracking is built from). Implementations backed by a non-seekable
/// source buffer lazily and share that buffer between all derived states, so
/// each source location is read at most once.
///
/// `next` at the end of the input is sticky: it returns an equivalent
/// end-of-input state. `next` is the only operation that can touch the
/// underlying source, and the only one that can fault.
pub trait Stream: Clone {
    /// One atomic element of the input.
    type Token: Clone + fmt::Debug;

    /// Location marker reported in diagnostics.
    type Pos: Copy + Ord + fmt::Debug + fmt::Display;

    /// The token at the cursor, or `None` at end of input.
    fn current(&self) -> Option<Self::Token>;

    /// True iff a token exists at the cursor.
    fn has_value(&self) -> bool {
        self.current().is_some()
    }

    /// The state advanced by exactly one token.
    fn next(&self) -> Result<Self, StreamFault>;

    /// The current location.
    fn position(&self) -> Self::Pos;

    /// Release the underlying source.
    ///
    /// Idempotent. Only the runner calls this; streams without an owned
    /// source keep the default no-op.
    fn release(&self) {}
}
