use std::fmt;
use std::io::Read;
use std::rc::Rc;

use crate::buffer::{CHUNK_SIZE, Chunk, ChunkSource, IterSource, ReadSource, SourceHandle};
use crate::error::StreamFault;
use crate::position::LinearPosition;
use crate::stream::Stream;

/// Stream over a pull-based source, buffered in shared memoized chunks.
///
/// Cloning (and advancing) a state is a handful of reference-count bumps; the
/// source itself is read forward-only, one chunk at a time, by whichever
/// state first crosses each chunk boundary. All states derived from one
/// construction share the same source handle, which the runner releases once
/// the parse run is over.
pub struct BufferedStream<C: ChunkSource> {
    handle: Rc<SourceHandle<C>>,
    chunk: Rc<Chunk<C::Item>>,
    index: usize,
    position: LinearPosition,
}

/// Byte stream over any [`Read`] implementation.
pub type ByteStream<R> = BufferedStream<ReadSource<R>>;

/// Stream over the elements of any iterator.
pub type IterStream<I> = BufferedStream<IterSource<I>>;

pub fn byte_stream<R: Read>(reader: R) -> Result<ByteStream<R>, StreamFault> {
    BufferedStream::new(ReadSource::new(reader))
}

pub fn iter_stream<I: IntoIterator>(source: I) -> Result<IterStream<I::IntoIter>, StreamFault> {
    BufferedStream::new(IterSource::new(source.into_iter()))
}

impl<C: ChunkSource> BufferedStream<C> {
    pub fn new(source: C) -> Result<Self, StreamFault> {
        let handle = SourceHandle::new(source);
        let chunk = Chunk::generate(&handle)?;
        Ok(BufferedStream {
            handle,
            chunk,
            index: 0,
            position: LinearPosition::INITIAL,
        })
    }
}

impl<C: ChunkSource> Clone for BufferedStream<C> {
    fn clone(&self) -> Self {
        BufferedStream {
            handle: Rc::clone(&self.handle),
            chunk: Rc::clone(&self.chunk),
            index: self.index,
            position: self.position,
        }
    }
}

impl<C: ChunkSource> fmt::Debug for BufferedStream<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedStream")
            .field("position", &self.position)
            .field("index", &self.index)
            .finish()
    }
}

impl<C> Stream for BufferedStream<C>
where
    C: ChunkSource,
    C::Item: Clone + fmt::Debug,
{
    type Token = C::Item;
    type Pos = LinearPosition;

    fn current(&self) -> Option<C::Item> {
        self.chunk.get(self.index).cloned()
    }

    fn has_value(&self) -> bool {
        self.index < self.chunk.len()
    }

    fn next(&self) -> Result<Self, StreamFault> {
        if !self.has_value() {
            return Ok(self.clone());
        }
        let (chunk, index) = if self.index + 1 >= CHUNK_SIZE {
            (self.chunk.next(&self.handle)?, 0)
        } else {
            (Rc::clone(&self.chunk), self.index + 1)
        };
        Ok(BufferedStream {
            handle: Rc::clone(&self.handle),
            chunk,
            index,
            position: self.position.next(),
        })
    }

    fn position(&self) -> LinearPosition {
        self.position
    }

    fn release(&self) {
        self.handle.release();
    }
}
