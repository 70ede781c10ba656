//! Quality scale (C8) — a 1–9 knob mapped deterministically onto
//! [`EncoderConfig`], geometrically interpolated between the three named
//! presets so that 1, 5, and 9 reproduce `fast`, `balanced`, and `best`
//! exactly and everything between is a smooth trade-off.

use crate::config::EncoderConfig;

/// Map a quality level (clamped to `1..=9`) to an `EncoderConfig`.
///
/// `window_size` and `max_chain_length` are interpolated geometrically in
/// two segments (1→5 against `fast`/`balanced`, 5→9 against
/// `balanced`/`best`); `hash_bits` is the smallest value in `8..=20` with
/// `2^hash_bits >= window_size / 4`, the same ratio the named presets use.
pub fn quality_to_config(level: u8) -> EncoderConfig {
    let level = level.clamp(1, 9);

    match level {
        1 => return EncoderConfig::fast(),
        5 => return EncoderConfig::balanced(),
        9 => return EncoderConfig::best(),
        _ => {}
    }

    let (window, chain) = if level < 5 {
        let t = (level - 1) as f64 / 4.0;
        (geometric(32_768.0, 65_536.0, t), geometric(16.0, 32.0, t))
    } else {
        let t = (level - 5) as f64 / 4.0;
        (
            geometric(65_536.0, 262_144.0, t),
            geometric(32.0, 128.0, t),
        )
    };

    let window_size = window.round() as usize;
    EncoderConfig {
        window_size,
        min_match: 4,
        max_match: 255,
        hash_bits: smallest_hash_bits(window_size),
        max_chain_length: chain.round() as u32,
    }
}

fn geometric(a: f64, b: f64, t: f64) -> f64 {
    a * (b / a).powf(t)
}

fn smallest_hash_bits(window_size: usize) -> u8 {
    let target = (window_size / 4).max(1);
    let mut bits = 8u8;
    while bits < 20 && (1usize << bits) < target {
        bits += 1;
    }
    bits
}
