use std::fmt;

use crate::error::StreamFault;
use crate::position::LinearPosition;
use crate::stream::Stream;

/// Stream over an already-materialized slice.
///
/// No buffering and no source to release; end of input is a length check.
#[derive(Debug)]
pub struct SliceStream<'src, T> {
    items: &'src [T],
    position: LinearPosition,
}

impl<'src, T> SliceStream<'src, T> {
    pub fn new(items: &'src [T]) -> Self {
        SliceStream {
            items,
            position: LinearPosition::INITIAL,
        }
    }
}

impl<T> Clone for SliceStream<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceStream<'_, T> {}

impl<T: Clone + fmt::Debug> Stream for SliceStream<'_, T> {
    type Token = T;
    type Pos = LinearPosition;

    fn current(&self) -> Option<T> {
        self.items.get(self.position.offset).cloned()
    }

    fn has_value(&self) -> bool {
        self.position.offset < self.items.len()
    }

    fn next(&self) -> Result<Self, StreamFault> {
        if self.has_value() {
            Ok(SliceStream {
                items: self.items,
                position: self.position.next(),
            })
        } else {
            Ok(*self)
        }
    }

    fn position(&self) -> LinearPosition {
        self.position
    }
}
