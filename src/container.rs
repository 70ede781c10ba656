//! Container format (C2) — the 32-byte framed header, its CRC32, and the
//! cheap-checks-first validation pipeline used by [`crate::file::decompress_file`].
//!
//! # On-disk layout (32 bytes, all multi-byte fields little-endian)
//!
//! ```text
//! Offset  Size  Field
//!    0      4   magic              = "ZPAK" (4 ASCII bytes, not LE)
//!    4      1   version            = 1
//!    5      1   algorithm          0 = LZ77, 1 = RLE, 2 = Store (adaptive passthrough)
//!    6      1   level              1/2/3 (fast/balanced/best); informational otherwise
//!    7      1   flags              reserved, MUST be 0
//!    8      8   uncompressed_size  LE u64
//!   16      8   compressed_size    LE u64
//!   24      4   checksum           CRC32 (IEEE 802.3) of the uncompressed bytes, LE
//!   28      4   reserved           MUST be 0 on write; ignored on read
//!   32      …   payload            exactly `compressed_size` bytes
//! ```

use crate::error::ZpakError;

pub const MAGIC: &[u8; 4] = b"ZPAK";
pub const VERSION: u8 = 1;
pub const HEADER_SIZE: usize = 32;

/// The container's algorithm tag (byte offset 5).
///
/// `Store` (ADDED) is the adaptive selector's passthrough route (§4.8): the
/// payload is the uncompressed bytes verbatim. It shares the container and
/// CRC machinery with `Lz77`/`Rle` rather than being a separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Lz77 = 0,
    Rle = 1,
    Store = 2,
}

impl Algorithm {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Algorithm::Lz77),
            1 => Some(Algorithm::Rle),
            2 => Some(Algorithm::Store),
            _ => None,
        }
    }
}

/// A parsed, validated container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub algorithm: Algorithm,
    /// Raw level byte (§6.1: non-1/2/3 values are accepted as "informational").
    pub level: u8,
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub checksum: u32,
}

/// CRC32 of `bytes` using the IEEE 802.3 polynomial (`0xEDB88320`), standard
/// init/xor-out (`0xFFFFFFFF` / `!`). Thin wrapper around `crc32fast`.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Build a 32-byte container header record.
///
/// `compressed_len` must equal the byte length of the payload that follows
/// the header — this is an invariant of the format, not re-checked here;
/// callers (see [`crate::file::compress_file`]) always pass the true payload length.
pub fn encode_header(
    algo: Algorithm,
    level: u8,
    uncompressed_len: u64,
    compressed_len: u64,
    crc: u32,
) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    out[0..4].copy_from_slice(MAGIC);
    out[4] = VERSION;
    out[5] = algo as u8;
    out[6] = level;
    out[7] = 0; // flags, reserved
    out[8..16].copy_from_slice(&uncompressed_len.to_le_bytes());
    out[16..24].copy_from_slice(&compressed_len.to_le_bytes());
    out[24..28].copy_from_slice(&crc.to_le_bytes());
    out[28..32].copy_from_slice(&0u32.to_le_bytes()); // reserved
    out
}

/// Run steps 1–5 of the validation pipeline (§4.2): everything that can be
/// checked without touching the payload.
///
/// Returns the parsed header and the payload slice on success.
pub fn decode_and_validate<'a>(bytes: &'a [u8]) -> Result<(Header, &'a [u8]), ZpakError> {
    if bytes.len() < HEADER_SIZE {
        return Err(ZpakError::InvalidHeader);
    }
    if &bytes[0..4] != MAGIC {
        return Err(ZpakError::InvalidHeader);
    }
    if bytes[4] != VERSION {
        return Err(ZpakError::UnsupportedVersion);
    }
    let algorithm = Algorithm::from_byte(bytes[5]).ok_or(ZpakError::InvalidData)?;
    let level = bytes[6];
    // bytes[7] (flags) and bytes[28..32] (reserved) are accepted unconditionally.
    let uncompressed_size = u64::from_le_bytes(bytes[8..16].try_into().unwrap());
    let compressed_size = u64::from_le_bytes(bytes[16..24].try_into().unwrap());
    let checksum = u32::from_le_bytes(bytes[24..28].try_into().unwrap());

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() as u64 != compressed_size {
        return Err(ZpakError::CorruptedData);
    }

    Ok((
        Header {
            algorithm,
            level,
            uncompressed_size,
            compressed_size,
            checksum,
        },
        payload,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let header = encode_header(Algorithm::Lz77, 2, 47, 10, 0xDEAD_BEEF);
        let (parsed, payload) = decode_and_validate(&[&header[..], &[0u8; 10]].concat()).unwrap();
        assert_eq!(parsed.algorithm, Algorithm::Lz77);
        assert_eq!(parsed.level, 2);
        assert_eq!(parsed.uncompressed_size, 47);
        assert_eq!(parsed.compressed_size, 10);
        assert_eq!(parsed.checksum, 0xDEAD_BEEF);
        assert_eq!(payload.len(), 10);
    }

    #[test]
    fn too_short_is_invalid_header() {
        assert_eq!(decode_and_validate(&[0u8; 31]), Err(ZpakError::InvalidHeader));
    }

    #[test]
    fn bad_magic_is_invalid_header() {
        let mut header = encode_header(Algorithm::Lz77, 1, 0, 0, 0);
        header[0] = b'X';
        assert_eq!(decode_and_validate(&header), Err(ZpakError::InvalidHeader));
    }

    #[test]
    fn unsupported_version_is_reported() {
        let mut header = encode_header(Algorithm::Lz77, 1, 0, 0, 0);
        header[4] = 2;
        assert_eq!(
            decode_and_validate(&header),
            Err(ZpakError::UnsupportedVersion)
        );
    }

    #[test]
    fn unknown_algorithm_is_invalid_data() {
        let mut header = encode_header(Algorithm::Lz77, 1, 0, 0, 0);
        header[5] = 255;
        assert_eq!(decode_and_validate(&header), Err(ZpakError::InvalidData));
    }

    #[test]
    fn mismatched_payload_length_is_corrupted_data() {
        let header = encode_header(Algorithm::Lz77, 1, 5, 10, 0);
        // Only 3 payload bytes follow, not the declared 10.
        let bytes = [&header[..], &[0u8; 3]].concat();
        assert_eq!(
            decode_and_validate(&bytes),
            Err(ZpakError::CorruptedData)
        );
    }

    #[test]
    fn crc32_matches_known_vector() {
        // Standard CRC32 (IEEE 802.3) check value for the ASCII string "123456789".
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn crc32_of_empty_is_zero() {
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn reserved_bytes_are_dont_care_on_read() {
        let mut header = encode_header(Algorithm::Lz77, 1, 0, 0, 0);
        header[7] = 0xFF; // flags
        header[28..32].copy_from_slice(&[0xFF; 4]); // reserved
        assert!(decode_and_validate(&header).is_ok());
    }
}
