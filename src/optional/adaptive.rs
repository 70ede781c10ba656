//! Adaptive algorithm selection (C8) — a cheap, sampled heuristic that picks
//! the codec most likely to compress a given input well, without actually
//! running either codec first.
//!
//! The sample is bounded to the first `min(len, 65536)` bytes, matching the
//! bounded-memory discipline the rest of this crate holds to (no component
//! scans an unbounded amount of input just to make a decision).

use crate::container::Algorithm;

const SAMPLE_CAP: usize = 65_536;
const RUN_RATIO_THRESHOLD: f64 = 0.5;
const ENTROPY_THRESHOLD_BITS: f64 = 7.5;

/// Pick an [`Algorithm`] for `bytes` by sampling its leading bytes.
///
/// - Run ratio ≥ [`RUN_RATIO_THRESHOLD`]: data is dominated by repeated runs
///   → [`Algorithm::Rle`].
/// - Otherwise, Shannon entropy above [`ENTROPY_THRESHOLD_BITS`] bits/byte:
///   data looks incompressible (already-compressed, encrypted, random)
///   → [`Algorithm::Store`].
/// - Otherwise: structured or mixed data → [`Algorithm::Lz77`].
pub fn choose_algorithm(bytes: &[u8]) -> Algorithm {
    if bytes.is_empty() {
        return Algorithm::Store;
    }

    let sample = &bytes[..bytes.len().min(SAMPLE_CAP)];

    if run_ratio(sample) >= RUN_RATIO_THRESHOLD {
        return Algorithm::Rle;
    }
    if shannon_entropy(sample) > ENTROPY_THRESHOLD_BITS {
        return Algorithm::Store;
    }
    Algorithm::Lz77
}

/// Fraction of `sample` covered by maximal runs of length ≥ 3.
fn run_ratio(sample: &[u8]) -> f64 {
    let mut run_bytes = 0usize;
    let mut i = 0usize;
    while i < sample.len() {
        let byte = sample[i];
        let mut len = 1usize;
        while i + len < sample.len() && sample[i + len] == byte {
            len += 1;
        }
        if len >= 3 {
            run_bytes += len;
        }
        i += len;
    }
    run_bytes as f64 / sample.len() as f64
}

/// Shannon entropy of `sample`, in bits per byte (0.0..=8.0).
fn shannon_entropy(sample: &[u8]) -> f64 {
    let mut counts = [0u64; 256];
    for &b in sample {
        counts[b as usize] += 1;
    }
    let total = sample.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}
