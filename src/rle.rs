//! RLE one-shot codec (C5) — an alternate codec for highly repetitive data,
//! sharing the container format with the LZ77 codec (C2, C7).
//!
//! Encoding scans maximal runs of identical bytes:
//! - A run of length `r >= 3` is emitted as `(0x01, byte, min(r, 255))`; runs
//!   longer than 255 are split into successive 255-length records plus a
//!   final remainder record.
//! - Shorter stretches are emitted as a literal-group record
//!   `(0x00, count, b0, .., b{count-1})` with `count < 256`. Literal groups
//!   are not coalesced across run boundaries.

use crate::error::ZpakError;

const TAG_LITERALS: u8 = 0x00;
const TAG_RUN: u8 = 0x01;

/// Compress `src` using run-length encoding.
pub fn compress(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    let mut i = 0usize;

    while i < src.len() {
        let byte = src[i];
        let mut run_len = 1usize;
        while i + run_len < src.len() && src[i + run_len] == byte {
            run_len += 1;
        }

        if run_len >= 3 {
            let mut remaining = run_len;
            while remaining > 0 {
                let chunk = remaining.min(255);
                out.push(TAG_RUN);
                out.push(byte);
                out.push(chunk as u8);
                remaining -= chunk;
            }
            i += run_len;
        } else {
            // Collect a literal group: bytes that don't start a run of >= 3,
            // up to 255 bytes per record.
            let group_start = i;
            let mut group_len = 0usize;
            while i < src.len() && group_len < 255 {
                let b = src[i];
                let mut peek = 1usize;
                while i + peek < src.len() && src[i + peek] == b {
                    peek += 1;
                }
                if peek >= 3 {
                    break; // a run starts here; stop the literal group
                }
                i += 1;
                group_len += 1;
            }
            out.push(TAG_LITERALS);
            out.push(group_len as u8);
            out.extend_from_slice(&src[group_start..group_start + group_len]);
        }
    }

    out
}

/// Decompress an RLE payload produced by [`compress`].
pub fn decompress(tokens: &[u8]) -> Result<Vec<u8>, ZpakError> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut i = 0usize;

    while i < tokens.len() {
        let tag = tokens[i];
        i += 1;
        match tag {
            TAG_LITERALS => {
                let count = *tokens.get(i).ok_or(ZpakError::InvalidData)? as usize;
                i += 1;
                let end = i + count;
                if end > tokens.len() {
                    return Err(ZpakError::InvalidData);
                }
                out.extend_from_slice(&tokens[i..end]);
                i = end;
            }
            TAG_RUN => {
                let byte = *tokens.get(i).ok_or(ZpakError::InvalidData)?;
                let count = *tokens.get(i + 1).ok_or(ZpakError::InvalidData)?;
                i += 2;
                out.resize(out.len() + count as usize, byte);
            }
            _ => return Err(ZpakError::InvalidData),
        }
    }

    Ok(out)
}
