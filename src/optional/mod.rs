//! Optional layers (C8) — thin, stateless conveniences built on top of the
//! core codecs: a 1–9 quality scale, adaptive algorithm selection, a delta
//! encoder, and decompression-bomb guarding.
//!
//! None of these carry session state; each is a pure function (or a small
//! value type) over the core types in [`crate::config`], [`crate::lz77`],
//! and [`crate::container`].

pub mod adaptive;
pub mod delta;
pub mod guard;
pub mod quality;

pub use adaptive::choose_algorithm;
pub use delta::{delta_apply, delta_encode};
pub use guard::BombGuard;
pub use quality::quality_to_config;
