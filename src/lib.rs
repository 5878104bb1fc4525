//! # StreamComb - Buffered Parser Combinators
//!
//! A parser combinator library for arbitrary token streams: characters,
//! bytes, or any element type pulled from a slice, a reader, or an iterator.
//!
//! StreamComb provides composable, type-safe parsers that combine into
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: every outcome flows through the reply types; mismatch,
//!   abort and source faults are all data
//! - **Full backtracking over single-read sources**: non-seekable sources are
//!   buffered in lazily generated, memoized chunks, so alternative branches
//!   can re-read freely while each source position is read exactly once
//! - **Bounded stack**: repetition and sequencing run through an iterative
//!   driving loop, so million-token inputs parse without deep native
//!   recursion
//! - **Composability**: small parsers combine into larger ones using
//!   combinators

pub mod and;
pub mod between;
pub mod bind;
pub mod buffer;
pub mod end_of_input;
pub mod error;
pub mod fail;
pub mod get_position;
pub mod guard;
pub mod lazy;
pub mod many;
pub mod map;
pub mod not;
pub mod or;
pub mod parser;
pub mod position;
pub mod pure;
pub mod recover;
pub mod reply;
pub mod runner;
pub mod satisfy;
pub mod skip_many;
pub mod stream;
pub mod streams;
pub mod tail;
pub mod take;
pub mod text;
pub mod token;
pub mod with_message;

pub use and::{And, AndExt, and};
pub use between::{Between, between};
pub use bind::{Bind, BindExt, BindOr, bind};
pub use buffer::{CHUNK_SIZE, Chunk, ChunkSource, IterSource, ReadSource, SourceHandle};
pub use end_of_input::{EndOfInput, end_of_input};
pub use error::{Abort, StreamFault};
pub use fail::{AbortParser, Fail, abort, fail};
pub use get_position::{GetPosition, get_position};
pub use guard::{Guard, GuardExt, guard};
pub use lazy::{Lazy, lazy};
pub use many::{Many, Many1, many, many1};
pub use map::{Map, MapExt, map};
pub use not::{Not, NotExt, not};
pub use or::{Or, OrExt, or};
pub use parser::Parser;
pub use position::{LinearPosition, TextPosition};
pub use pure::{Pure, pure};
pub use recover::{Recover, RecoverExt, recover};
pub use reply::{Failure, Fatal, Reply};
pub use runner::{Outcome, parse_iter, parse_reader, parse_slice, parse_text, run};
pub use satisfy::{Any, Satisfy, any, satisfy};
pub use skip_many::{SkipMany, SkipMany1, skip_many, skip_many1};
pub use stream::Stream;
pub use streams::{
    BufferedStream, ByteStream, IterStream, SliceStream, TextStream, byte_stream, iter_stream,
};
pub use tail::Tail;
pub use take::{Skip, Take, skip, take};
pub use token::{NoneOf, OneOf, Token, none_of, one_of, token};
pub use with_message::{WithMessage, WithMessageExt};
