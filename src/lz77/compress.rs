//! LZ77 encoder (C4 encode contract).
//!
//! Walks the input left to right with a cursor `i`. At every position with at
//! least `min_match` bytes remaining, the encoder hashes the next 4 bytes
//! (zero-padded past the end of input), looks up the single candidate the
//! hash table holds for that bucket, and — before deciding whether to use it
//! — immediately overwrites the bucket with the current position. This
//! update-before-decide ordering means the current position can never match
//! itself, and a miss still advances the bucket for the next lookup; it is
//! preserved deliberately for token-level determinism rather than changed to
//! update-after-decide (see the encoder's design notes).
//!
//! Only one candidate is consulted per position — lazy matching and
//! multi-slot chains are not implemented here; `max_chain_length` exists on
//! [`EncoderConfig`] for alternative encoders that do walk chains.

use crate::config::EncoderConfig;
use crate::error::ZpakError;
use crate::hash::HashIndex;

/// Largest offset encodable in the 2-byte big-endian offset field.
const MAX_OFFSET: usize = 0xFFFF;

/// Compress `src` into a byte-aligned LZ77 token stream.
///
/// `config` is validated first; an invalid configuration is reported as
/// [`ZpakError::InvalidConfiguration`] before any encoding work begins.
pub fn compress(src: &[u8], config: &EncoderConfig) -> Result<Vec<u8>, ZpakError> {
    config.validate()?;

    let mut out = Vec::with_capacity(src.len() + src.len() / 8 + 16);
    let mut table = HashIndex::new(config.hash_bits);
    let max_offset = config.window_size.min(MAX_OFFSET);

    let min_match = config.min_match as usize;
    let max_match = config.max_match as usize;

    let mut i = 0usize;
    while src.len().saturating_sub(i) >= min_match {
        let h_bytes = &src[i..];
        let candidate = table.get(h_bytes);
        table.insert(h_bytes, i as u32);

        let mut matched = 0usize;
        let mut match_pos = 0usize;
        if let Some(j) = candidate {
            let j = j as usize;
            let distance = i - j; // candidate positions are always < i
            if j < i && distance <= max_offset {
                let limit = (src.len() - i).min(max_match);
                let mut k = 0;
                while k < limit && src[j + k] == src[i + k] {
                    k += 1;
                }
                matched = k;
                match_pos = j;
            }
        }

        if matched >= min_match {
            emit_back_reference(&mut out, matched as u8, (i - match_pos) as u16);
            i += matched;
        } else {
            emit_literal(&mut out, src[i]);
            i += 1;
        }
    }

    // Tail: fewer than min_match bytes remain — emit as literals.
    while i < src.len() {
        emit_literal(&mut out, src[i]);
        i += 1;
    }

    Ok(out)
}

#[inline]
fn emit_literal(out: &mut Vec<u8>, byte: u8) {
    out.push(0x00);
    out.push(byte);
}

#[inline]
fn emit_back_reference(out: &mut Vec<u8>, length: u8, offset: u16) {
    out.push(length);
    out.push((offset >> 8) as u8);
    out.push((offset & 0xFF) as u8);
}
