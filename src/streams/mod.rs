pub mod buffered;
pub mod slice;
pub mod text;

pub use buffered::{BufferedStream, ByteStream, IterStream, byte_stream, iter_stream};
pub use slice::SliceStream;
pub use text::TextStream;
