//! Crate-wide error taxonomy.
//!
//! Every fallible public operation in this crate returns `Result<T, ZpakError>`.
//! The variants map 1:1 onto the error classes a caller is expected to branch
//! on (see the error-handling design notes in the container and streaming
//! modules); they are deliberately flat rather than nested per-subsystem enums
//! so that a single `match` at the call site covers the whole library.

use thiserror::Error;

/// The single error type returned by every fallible operation in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZpakError {
    /// Token stream ends mid-token, or contains an unrecognized token tag.
    #[error("invalid data: truncated or malformed token stream")]
    InvalidData,

    /// A token is well-formed but semantically invalid (e.g. a back-reference
    /// offset that points before the start of the output produced so far).
    #[error("corrupted data: token referenced bytes outside the valid window")]
    CorruptedData,

    /// Container version byte is not one this build understands.
    #[error("unsupported container version")]
    UnsupportedVersion,

    /// The CRC32 recorded in the container header does not match the
    /// decompressed payload.
    #[error("checksum mismatch: decompressed data does not match stored CRC32")]
    ChecksumMismatch,

    /// The container header is too short, has the wrong magic, or its
    /// recorded sizes are inconsistent with the bytes that follow it.
    #[error("invalid container header")]
    InvalidHeader,

    /// A fixed-size destination buffer was too small to hold the result.
    /// Only raised by façades that accept a caller-supplied buffer; the
    /// owned-`Vec` API surface never raises this.
    #[error("destination buffer too small")]
    BufferTooSmall,

    /// `EncoderConfig` violates one of its documented invariants.
    #[error("invalid encoder configuration")]
    InvalidConfiguration,

    /// Allocation was refused (bomb guard, or a `try_reserve` failure).
    #[error("out of memory")]
    OutOfMemory,

    /// A delta patch's embedded base hash does not match the supplied base.
    #[error("delta version mismatch: base hash does not match")]
    VersionMismatch,

    /// Bomb guard: declared uncompressed/compressed ratio exceeds the caller's limit.
    #[error("declared compression ratio exceeds the configured maximum")]
    RatioExceeded,

    /// Bomb guard: declared uncompressed size exceeds the caller's limit.
    #[error("declared uncompressed size exceeds the configured maximum")]
    OutputTooLarge,

    /// The underlying `std::io::Read`/`std::io::Write` sink or source failed.
    /// Not part of the wire-format error taxonomy (§6.5) — an ambient
    /// addition for the streaming sinks/sources that wrap file descriptors,
    /// mirroring the `IoRead`/`IoWrite` variants this crate's prior
    /// frame-streaming layer used for the same purpose.
    #[error("I/O error")]
    Io,
}
