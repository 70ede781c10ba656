//! File façade (C7) — wraps the one-shot codecs with the container header
//! and runs the full validation pipeline on decode.
//!
//! The façade owns framing and integrity; the codec underneath only ever
//! sees (or produces) a flat byte buffer.

use crate::config::Level;
use crate::container::{self, Algorithm, HEADER_SIZE};
use crate::error::ZpakError;
use crate::lz77;
use crate::rle;

/// Frame `bytes` with a container header and compress them with `algo` at
/// `level`. The header's checksum covers the *uncompressed* input.
pub fn compress_file(bytes: &[u8], algo: Algorithm, level: Level) -> Result<Vec<u8>, ZpakError> {
    let payload = match algo {
        Algorithm::Lz77 => lz77::compress(bytes, &level.config())?,
        Algorithm::Rle => rle::compress(bytes),
        Algorithm::Store => bytes.to_vec(),
    };

    let crc = container::crc32(bytes);
    let header = container::encode_header(
        algo,
        level as u8,
        bytes.len() as u64,
        payload.len() as u64,
        crc,
    );

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Run the full validation pipeline (§4.2, steps 1–7) and return the
/// original bytes.
pub fn decompress_file(bytes: &[u8]) -> Result<Vec<u8>, ZpakError> {
    let (header, payload) = container::decode_and_validate(bytes)?;

    let decompressed = match header.algorithm {
        Algorithm::Lz77 => lz77::decompress(payload)?,
        Algorithm::Rle => rle::decompress(payload)?,
        Algorithm::Store => payload.to_vec(),
    };

    if decompressed.len() as u64 != header.uncompressed_size {
        return Err(ZpakError::CorruptedData);
    }
    if container::crc32(&decompressed) != header.checksum {
        return Err(ZpakError::ChecksumMismatch);
    }

    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;

    #[test]
    fn lz77_round_trips_through_file_facade() {
        let data = b"the quick brown fox jumps over the lazy dog, the quick brown fox";
        let framed = compress_file(data, Algorithm::Lz77, Level::Balanced).unwrap();
        assert_eq!(decompress_file(&framed).unwrap(), data);
    }

    #[test]
    fn rle_round_trips_through_file_facade() {
        let data = b"aaaaaaaaaabbbbbbbbbbcccccccccc";
        let framed = compress_file(data, Algorithm::Rle, Level::Fast).unwrap();
        assert_eq!(decompress_file(&framed).unwrap(), data);
    }

    #[test]
    fn store_round_trips_through_file_facade() {
        let data = b"passthrough bytes, stored verbatim";
        let framed = compress_file(data, Algorithm::Store, Level::Fast).unwrap();
        assert_eq!(decompress_file(&framed).unwrap(), data);
    }

    #[test]
    fn empty_input_round_trips() {
        let framed = compress_file(b"", Algorithm::Lz77, Level::Fast).unwrap();
        assert_eq!(decompress_file(&framed).unwrap(), b"");
    }

    #[test]
    fn tampered_payload_is_checksum_mismatch() {
        let data = b"consistent data for checksum verification purposes";
        let mut framed = compress_file(data, Algorithm::Lz77, Level::Balanced).unwrap();
        let last = framed.len() - 1;
        framed[last] ^= 0xFF;
        assert_eq!(decompress_file(&framed), Err(ZpakError::ChecksumMismatch));
    }

    #[test]
    fn truncated_container_is_invalid_header() {
        let data = b"some data";
        let framed = compress_file(data, Algorithm::Lz77, Level::Balanced).unwrap();
        assert_eq!(
            decompress_file(&framed[..HEADER_SIZE - 1]),
            Err(ZpakError::InvalidHeader)
        );
    }

    #[test]
    fn declared_size_mismatch_after_decode_is_corrupted_data() {
        // A header declaring an uncompressed_size that the payload, once
        // decompressed, does not actually produce.
        let data = b"abcdefgh";
        let mut framed = compress_file(data, Algorithm::Lz77, Level::Balanced).unwrap();
        framed[8] = 99; // corrupt the low byte of uncompressed_size
        assert_eq!(decompress_file(&framed), Err(ZpakError::CorruptedData));
    }
}
