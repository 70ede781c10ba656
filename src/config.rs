//! Encoder configuration (C1) — tunable LZ77 parameters and the canonical
//! speed/ratio presets.
//!
//! `EncoderConfig` is validated once, at construction, via [`EncoderConfig::validate`].
//! Decoders never consult it: the compressed stream is self-describing enough
//! that a mis-specified decoder window only bounds memory, never correctness.

use crate::error::ZpakError;

/// Maximum allowed window size (1 MiB), per the data-model invariant
/// `1 ≤ window_size ≤ 2^20`.
pub const MAX_WINDOW_SIZE: usize = 1 << 20;

/// Tunable parameters for the LZ77 encoder.
///
/// Invariant (checked by [`EncoderConfig::validate`]):
/// `min_match >= 3 && min_match <= max_match <= 255 && 1 <= window_size <= 2^20
/// && 8 <= hash_bits <= 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Size, in bytes, of the sliding window back-references may address.
    pub window_size: usize,
    /// Shortest match length the encoder will emit as a back-reference.
    pub min_match: u8,
    /// Longest match length a single back-reference token can encode.
    pub max_match: u8,
    /// `log2` of the hash-table size (number of buckets = `2^hash_bits`).
    pub hash_bits: u8,
    /// Upper bound on chain-walk depth for implementations that walk
    /// multi-slot chains. The reference encoder only inspects one candidate
    /// per bucket; this field is honored only by alternative table
    /// implementations (see [`crate::hash`]).
    pub max_chain_length: u32,
}

impl EncoderConfig {
    /// Validate the invariant documented on [`EncoderConfig`].
    pub fn validate(&self) -> Result<(), ZpakError> {
        if self.min_match < 3
            || self.min_match > self.max_match
            || self.max_match > 255
            || self.window_size == 0
            || self.window_size > MAX_WINDOW_SIZE
            || self.hash_bits < 8
            || self.hash_bits > 20
            || self.max_chain_length == 0
        {
            return Err(ZpakError::InvalidConfiguration);
        }
        Ok(())
    }

    /// *fast* preset: 32 KiB window, chain length 16. Favors speed.
    pub const fn fast() -> Self {
        EncoderConfig {
            window_size: 32 * 1024,
            min_match: 4,
            max_match: 255,
            hash_bits: 14,
            max_chain_length: 16,
        }
    }

    /// *balanced* preset: 64 KiB window, chain length 32. The default.
    pub const fn balanced() -> Self {
        EncoderConfig {
            window_size: 64 * 1024,
            min_match: 4,
            max_match: 255,
            hash_bits: 15,
            max_chain_length: 32,
        }
    }

    /// *best* preset: 256 KiB window, chain length 128. Favors ratio.
    pub const fn best() -> Self {
        EncoderConfig {
            window_size: 256 * 1024,
            min_match: 4,
            max_match: 255,
            hash_bits: 16,
            max_chain_length: 128,
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

/// The three canonical container-level presets (§6.1 `level` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Fast = 1,
    Balanced = 2,
    Best = 3,
}

impl Level {
    /// Resolve this preset's `EncoderConfig`.
    pub const fn config(self) -> EncoderConfig {
        match self {
            Level::Fast => EncoderConfig::fast(),
            Level::Balanced => EncoderConfig::balanced(),
            Level::Best => EncoderConfig::best(),
        }
    }

    /// Map a raw container-header level byte back to a `Level`.
    ///
    /// Any value other than 1/2/3 is accepted by the validator (§6.1: "other
    /// values permitted only as informational") but has no corresponding
    /// `EncoderConfig`, so this returns `None` rather than guessing.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            1 => Some(Level::Fast),
            2 => Some(Level::Balanced),
            3 => Some(Level::Best),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(EncoderConfig::fast().validate().is_ok());
        assert!(EncoderConfig::balanced().validate().is_ok());
        assert!(EncoderConfig::best().validate().is_ok());
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(EncoderConfig::default(), EncoderConfig::balanced());
    }

    #[test]
    fn min_match_below_three_is_invalid() {
        let mut c = EncoderConfig::balanced();
        c.min_match = 2;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
    }

    #[test]
    fn min_match_above_max_match_is_invalid() {
        let mut c = EncoderConfig::balanced();
        c.min_match = 10;
        c.max_match = 9;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
    }

    #[test]
    fn window_size_zero_is_invalid() {
        let mut c = EncoderConfig::balanced();
        c.window_size = 0;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
    }

    #[test]
    fn window_size_above_one_mib_is_invalid() {
        let mut c = EncoderConfig::balanced();
        c.window_size = MAX_WINDOW_SIZE + 1;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
    }

    #[test]
    fn hash_bits_out_of_range_is_invalid() {
        let mut c = EncoderConfig::balanced();
        c.hash_bits = 7;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
        c.hash_bits = 21;
        assert_eq!(c.validate(), Err(ZpakError::InvalidConfiguration));
    }

    #[test]
    fn level_round_trips_through_byte() {
        assert_eq!(Level::from_byte(1), Some(Level::Fast));
        assert_eq!(Level::from_byte(2), Some(Level::Balanced));
        assert_eq!(Level::from_byte(3), Some(Level::Best));
        assert_eq!(Level::from_byte(0), None);
        assert_eq!(Level::from_byte(42), None);
    }

    #[test]
    fn level_config_matches_named_preset() {
        assert_eq!(Level::Fast.config(), EncoderConfig::fast());
        assert_eq!(Level::Balanced.config(), EncoderConfig::balanced());
        assert_eq!(Level::Best.config(), EncoderConfig::best());
    }
}
