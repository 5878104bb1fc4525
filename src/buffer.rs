use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::io::{self, Read};
use std::rc::Rc;

use crate::error::StreamFault;

/// Number of elements materialized per chunk.
pub const CHUNK_SIZE: usize = 1024;

/// A pull-based token source that can be drained one chunk at a time.
///
/// Sources are read forward-only; the buffering layer above guarantees each
/// chunk is requested at most once no matter how many cursors revisit it.
pub trait ChunkSource {
    type Item;

    /// Read up to `capacity` elements. A short (or empty) chunk means the
    /// source is exhausted.
    fn read_chunk(&mut self, capacity: usize) -> Result<Vec<Self::Item>, StreamFault>;
}

/// Byte source backed by any [`io::Read`].
pub struct ReadSource<R> {
    reader: R,
}

impl<R> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        ReadSource { reader }
    }
}

impl<R: Read> ChunkSource for ReadSource<R> {
    type Item = u8;

    fn read_chunk(&mut self, capacity: usize) -> Result<Vec<u8>, StreamFault> {
        let mut chunk = vec![0u8; capacity];
        let mut filled = 0;
        while filled < capacity {
            match self.reader.read(&mut chunk[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamFault::read(e)),
            }
        }
        chunk.truncate(filled);
        Ok(chunk)
    }
}

/// Generic source backed by any iterator.
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I> {
    pub fn new(iter: I) -> Self {
        IterSource { iter }
    }
}

impl<I: Iterator> ChunkSource for IterSource<I> {
    type Item = I::Item;

    fn read_chunk(&mut self, capacity: usize) -> Result<Vec<I::Item>, StreamFault> {
        Ok(self.iter.by_ref().take(capacity).collect())
    }
}

/// The one shared handle to a parse run's underlying source.
///
/// Every stream state derived from the same construction holds an `Rc` to the
/// same handle. `release` takes the source out of the cell and drops it;
/// calling it again is a no-op, so release happens exactly once no matter how
/// many states are still alive.
pub struct SourceHandle<C> {
    cell: RefCell<Option<C>>,
}

impl<C: ChunkSource> SourceHandle<C> {
    pub fn new(source: C) -> Rc<Self> {
        Rc::new(SourceHandle {
            cell: RefCell::new(Some(source)),
        })
    }

    pub fn release(&self) {
        self.cell.borrow_mut().take();
    }

    pub fn is_released(&self) -> bool {
        self.cell.borrow().is_none()
    }

    fn read_chunk(&self, capacity: usize) -> Result<Vec<C::Item>, StreamFault> {
        match self.cell.borrow_mut().as_mut() {
            Some(source) => source.read_chunk(capacity),
            None => Err(StreamFault::Released),
        }
    }
}

impl<C> fmt::Debug for SourceHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceHandle")
            .field("released", &self.cell.borrow().is_none())
            .finish()
    }
}

/// A materialized slice of the source plus the memoized link to its successor.
///
/// The `next` cell is computed on first access and shared by every cursor
/// that crosses the chunk boundary afterwards, including cursors belonging to
/// abandoned backtracking branches. A fault is cached the same way a chunk
/// is, and generating a faulting chunk releases the source before the fault
/// is stored.
#[derive(Debug)]
pub struct Chunk<T> {
    items: Box<[T]>,
    next: OnceCell<Result<Rc<Chunk<T>>, StreamFault>>,
}

impl<T> Chunk<T> {
    pub fn generate<C>(handle: &Rc<SourceHandle<C>>) -> Result<Rc<Self>, StreamFault>
    where
        C: ChunkSource<Item = T>,
    {
        match handle.read_chunk(CHUNK_SIZE) {
            Ok(items) => {
                tracing::trace!(len = items.len(), "chunk generated");
                Ok(Rc::new(Chunk {
                    items: items.into_boxed_slice(),
                    next: OnceCell::new(),
                }))
            }
            Err(fault) => {
                handle.release();
                Err(fault)
            }
        }
    }

    pub fn next<C>(&self, handle: &Rc<SourceHandle<C>>) -> Result<Rc<Self>, StreamFault>
    where
        C: ChunkSource<Item = T>,
    {
        self.next.get_or_init(|| Self::generate(handle)).clone()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
