//! Concrete [`AudioSource`](crate::source::AudioSource) implementations.
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`SineOscillator`] | Phase-accumulator sine wave |
//!
//! # Feature gate
//!
//! This module is available when the `dsp` feature is enabled (on by default).

mod sine;

pub use sine::SineOscillator;
