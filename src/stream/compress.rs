//! Streaming LZ77 compressor.
//!
//! State: `{ config, hash_index, buffer, base_pos, cursor }` (§3). `buffer`
//! holds input bytes in the range `[base_pos, base_pos + buffer.len())`;
//! `cursor` is the next absolute position a token will be emitted for.
//!
//! `write` advances `cursor` through the buffered bytes using the same
//! greedy match-or-literal decision as the one-shot encoder ([`crate::lz77`]),
//! but stops `lookahead = min_match - 1` bytes short of the buffer's end so
//! that a match spanning a future chunk boundary is never truncated
//! mid-token. `finish` drains that reserved tail as literals.
//!
//! After every `write`, if the buffered span exceeds `window_size` the window
//! slides: `base_pos` advances, the buffer's stale prefix is dropped, and the
//! hash index is aged so no entry can reference a position below the new
//! `base_pos`.

use crate::config::EncoderConfig;
use crate::error::ZpakError;
use crate::hash::HashIndex;
use crate::stream::sink::TokenSink;

const MAX_OFFSET: usize = 0xFFFF;

/// A streaming LZ77 encoding session.
///
/// Not `Sync`; a session must not be driven from multiple threads
/// concurrently (§5). Distinct sessions share no state.
pub struct StreamCompressor {
    config: EncoderConfig,
    table: HashIndex,
    buffer: Vec<u8>,
    /// Absolute position of `buffer[0]`.
    base_pos: u64,
    /// Absolute position of the next byte to encode.
    cursor: u64,
    finished: bool,
}

impl StreamCompressor {
    /// Start a new streaming session. Validates `config` up front, matching
    /// the one-shot codec.
    pub fn new(config: EncoderConfig) -> Result<Self, ZpakError> {
        config.validate()?;
        Ok(StreamCompressor {
            table: HashIndex::new(config.hash_bits),
            config,
            buffer: Vec::new(),
            base_pos: 0,
            cursor: 0,
            finished: false,
        })
    }

    fn lookahead(&self) -> u64 {
        (self.config.min_match as u64).saturating_sub(1)
    }

    fn buffer_end(&self) -> u64 {
        self.base_pos + self.buffer.len() as u64
    }

    /// Feed the next chunk of input. Emits every token that becomes
    /// determined by the bytes seen so far (i.e. everything except the
    /// trailing `lookahead` bytes, which may still extend a match with data
    /// from a future chunk).
    pub fn write(&mut self, chunk: &[u8], sink: &mut impl TokenSink) -> Result<(), ZpakError> {
        self.buffer.extend_from_slice(chunk);
        self.drain(sink, false)
    }

    /// Flush the remaining reserved lookahead as literals. Idempotent once
    /// fully drained.
    pub fn finish(&mut self, sink: &mut impl TokenSink) -> Result<(), ZpakError> {
        if self.finished {
            return Ok(());
        }
        self.drain(sink, true)?;
        self.finished = true;
        Ok(())
    }

    fn drain(&mut self, sink: &mut impl TokenSink, force: bool) -> Result<(), ZpakError> {
        let min_match = self.config.min_match as u64;
        let max_match = self.config.max_match as usize;
        let max_offset = self.config.window_size.min(MAX_OFFSET);
        let lookahead = self.lookahead();

        let mut out = Vec::new();

        loop {
            let remaining = self.buffer_end() - self.cursor;
            if !force && remaining <= lookahead {
                break;
            }
            if force && remaining == 0 {
                break;
            }

            let rel = (self.cursor - self.base_pos) as usize;

            if remaining >= min_match {
                let slice = &self.buffer[rel..];
                let candidate = self.table.get(slice);
                self.table.insert(slice, self.cursor as u32);

                let mut matched = 0usize;
                let mut match_rel = 0usize;
                if let Some(j) = candidate {
                    let j = j as u64;
                    if j >= self.base_pos && j < self.cursor {
                        let distance = (self.cursor - j) as usize;
                        if distance <= max_offset {
                            let jrel = (j - self.base_pos) as usize;
                            let limit = (self.buffer.len() - rel).min(max_match);
                            let mut k = 0;
                            while k < limit && self.buffer[jrel + k] == self.buffer[rel + k] {
                                k += 1;
                            }
                            matched = k;
                            match_rel = jrel;
                        }
                    }
                }

                if matched >= min_match as usize {
                    let offset = (self.cursor - (self.base_pos + match_rel as u64)) as u16;
                    out.push(matched as u8);
                    out.push((offset >> 8) as u8);
                    out.push((offset & 0xFF) as u8);
                    self.cursor += matched as u64;
                } else {
                    out.push(0x00);
                    out.push(self.buffer[rel]);
                    self.cursor += 1;
                }
            } else {
                // Forced drain with fewer than min_match bytes left: literal only.
                out.push(0x00);
                out.push(self.buffer[rel]);
                self.cursor += 1;
            }

            self.slide_window();
        }

        sink.push_tokens(&out)
    }

    fn slide_window(&mut self) {
        let window_size = self.config.window_size as u64;
        if self.cursor - self.base_pos > window_size {
            let new_base = self.cursor - window_size;
            let drop = (new_base - self.base_pos) as usize;
            self.buffer.drain(0..drop);
            self.base_pos = new_base;
            self.table.age(new_base as u32);
        }
    }
}
