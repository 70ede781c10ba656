//! LZ77 decoder (C4 decode contract).
//!
//! Reconstructs the original buffer from a token stream. Each appended byte
//! during a back-reference is immediately visible to subsequent iterations
//! of the same back-reference, so overlapping runs (offset < length) are
//! handled for free by indexing into `out` as it grows.

use crate::error::ZpakError;

/// Decompress a byte-aligned LZ77 token stream produced by
/// [`crate::lz77::compress::compress`].
///
/// Any truncation mid-token is [`ZpakError::InvalidData`]. A back-reference
/// with a zero or out-of-range offset is [`ZpakError::CorruptedData`]; bytes
/// already emitted by that back-reference are discarded before the error is
/// returned.
pub fn decompress(tokens: &[u8]) -> Result<Vec<u8>, ZpakError> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut i = 0usize;

    while i < tokens.len() {
        let tag = tokens[i];
        i += 1;

        if tag == 0 {
            let byte = *tokens.get(i).ok_or(ZpakError::InvalidData)?;
            i += 1;
            out.push(byte);
        } else {
            let length = tag as usize;
            let hi = *tokens.get(i).ok_or(ZpakError::InvalidData)?;
            let lo = *tokens.get(i + 1).ok_or(ZpakError::InvalidData)?;
            i += 2;
            let offset = ((hi as usize) << 8) | lo as usize;

            if offset == 0 || offset > out.len() {
                return Err(ZpakError::CorruptedData);
            }

            let start = out.len() - offset;
            for k in 0..length {
                let byte = out[start + k];
                out.push(byte);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stream_decodes_to_empty() {
        assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_literal_decodes() {
        assert_eq!(decompress(&[0x00, b'a']).unwrap(), b"a");
    }

    #[test]
    fn back_reference_copies_preceding_bytes() {
        // "ab" + back-reference(length=4, offset=2) -> "ababab"... wait: "abab"
        let tokens = [0x00, b'a', 0x00, b'b', 0x04, 0x00, 0x02];
        assert_eq!(decompress(&tokens).unwrap(), b"ababab");
    }

    #[test]
    fn overlapping_back_reference_repeats_single_byte() {
        // "A" followed by back-reference(length=9, offset=1) -> "A" * 10
        let tokens = [0x00, b'A', 0x09, 0x00, 0x01];
        assert_eq!(decompress(&tokens).unwrap(), vec![b'A'; 10]);
    }

    #[test]
    fn zero_offset_is_corrupted_data() {
        let tokens = [0x00, b'a', 0x03, 0x00, 0x00];
        assert_eq!(decompress(&tokens), Err(ZpakError::CorruptedData));
    }

    #[test]
    fn offset_beyond_output_is_corrupted_data() {
        let tokens = [0x00, b'a', 0x03, 0x00, 0x05];
        assert_eq!(decompress(&tokens), Err(ZpakError::CorruptedData));
    }

    #[test]
    fn truncated_literal_is_invalid_data() {
        assert_eq!(decompress(&[0x00]), Err(ZpakError::InvalidData));
    }

    #[test]
    fn truncated_back_reference_is_invalid_data() {
        assert_eq!(decompress(&[0x05, 0x00]), Err(ZpakError::InvalidData));
    }

    #[test]
    fn truncation_at_every_byte_boundary_is_rejected() {
        let tokens = [0x00, b'a', 0x04, 0x00, 0x01];
        for cut in 1..tokens.len() {
            if cut == tokens.len() {
                continue;
            }
            let result = decompress(&tokens[..cut]);
            assert!(result.is_err(), "expected error when truncated at {cut}");
        }
    }
}
