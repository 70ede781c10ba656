//! Streaming engine (C6) — incremental LZ77 encode/decode over arbitrarily
//! large inputs in bounded memory: a sliding window, lookahead reservation
//! across chunk boundaries, cross-chunk back-references, and hash-table
//! aging.
//!
//! [`compress::StreamCompressor`] and [`decompress::StreamDecompressor`] are
//! not safe for concurrent use — each session carries its own state with no
//! shared mutable state between sessions (§5).

pub mod compress;
pub mod decompress;
mod sink;

pub use compress::StreamCompressor;
pub use decompress::StreamDecompressor;
pub use sink::{TokenSink, WriteSink};
