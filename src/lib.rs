//! `zpak` — a general-purpose lossless compression library.
//!
//! Four tightly coupled subsystems do the real work: the LZ77 match-finding
//! and token-encoding engine ([`lz77`]), a run-length coder sharing the same
//! container format ([`rle`]), a streaming engine that compresses or
//! decompresses arbitrarily large inputs in bounded memory ([`stream`]), and
//! a versioned, checksummed container format binding a compressed payload
//! back to its original bytes ([`container`], [`file`]).
//!
//! Everything else — quality presets, adaptive codec selection, delta
//! patches, decompression-bomb guarding — is a thin layer on top of those
//! four, in [`optional`].
//!
//! ```
//! use zpak::{compress_file, decompress_file, config::Level, container::Algorithm};
//!
//! let original = b"hello, hello, hello, world";
//! let framed = compress_file(original, Algorithm::Lz77, Level::Balanced).unwrap();
//! let restored = decompress_file(&framed).unwrap();
//! assert_eq!(restored, original);
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod file;
pub mod hash;
pub mod lz77;
pub mod optional;
pub mod rle;
pub mod stream;

pub use config::{EncoderConfig, Level};
pub use container::Algorithm;
pub use error::ZpakError;
pub use file::{compress_file, decompress_file};
pub use lz77::{compress, decompress};
pub use rle::{compress as compress_rle, decompress as decompress_rle};
pub use stream::{StreamCompressor, StreamDecompressor, TokenSink, WriteSink};
