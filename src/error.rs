use std::borrow::Cow;
use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Fault raised by the underlying source while a chunk was being generated.
///
/// Faults are never recoverable: the combinator that observes one promotes it
/// to a fatal reply, and the source has already been released by the time the
/// fault becomes visible.
#[derive(Debug, Clone, Error)]
pub enum StreamFault {
    #[error("source read failed: {0}")]
    Read(Arc<io::Error>),
    #[error("source was already released")]
    Released,
}

impl StreamFault {
    pub fn read(error: io::Error) -> Self {
        StreamFault::Read(Arc::new(error))
    }
}

impl PartialEq for StreamFault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamFault::Read(a), StreamFault::Read(b)) => a.kind() == b.kind(),
            (StreamFault::Released, StreamFault::Released) => true,
            _ => false,
        }
    }
}

/// Payload of a fatal reply.
///
/// `Message` is raised explicitly by grammar logic via [`abort`]; `Fault`
/// wraps a failure of the underlying source. Both unwind past every `or`
/// branch and failure handler until [`recover`] or the runner sees them.
///
/// [`abort`]: crate::fail::abort
/// [`recover`]: crate::recover::recover
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Abort {
    #[error("{0}")]
    Message(Cow<'static, str>),
    #[error(transparent)]
    Fault(#[from] StreamFault),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fault_display() {
        let fault = StreamFault::read(io::Error::other("disk on fire"));
        assert!(fault.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_abort_wraps_fault() {
        let abort = Abort::from(StreamFault::Released);
        assert_eq!(abort.to_string(), "source was already released");
    }

    #[test]
    fn test_abort_message_display() {
        let abort = Abort::Message("duplicate key".into());
        assert_eq!(abort.to_string(), "duplicate key");
    }
}
