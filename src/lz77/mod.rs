//! LZ77 one-shot codec (C4) — the dictionary-based match-finding encoder and
//! its decoder, operating on a whole buffer at a time.
//!
//! See [`compress::compress`] and [`decompress::decompress`] for the public
//! entry points; [`crate::stream`] builds the incremental, bounded-memory
//! variant of the same token format on top of the same primitives.

pub mod compress;
pub mod decompress;

pub use compress::compress;
pub use decompress::decompress;
