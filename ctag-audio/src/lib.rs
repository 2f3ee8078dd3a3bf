//! # ctag-audio
//!
//! A `no_std`, allocation-free audio output stack for small audio boards:
//! a TLV320AIC3254 codec driver, a pluggable [`AudioSource`](source::AudioSource)
//! capability, and an engine that streams a source into a blocking hardware
//! sink one fixed-size block at a time.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Trait | [`source`] / [`control`] | `AudioSource` and `AudioControl` traits |
//! | Engine | [`engine`] | Shared source binding + block streaming loop |
//! | I/O | [`io`] | `AudioSink` trait, `embedded-io` adapter |
//! | Codec | [`codec`] | TLV320AIC3254 driver (feature-gated) |
//! | Sources | [`sources`] | Sine oscillator (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use ctag_audio::codec::Tlv320aic3254;
//! use ctag_audio::constants::SAMPLE_RATE_F32;
//! use ctag_audio::engine::AudioEngine;
//! use ctag_audio::io::IoSink;
//! use ctag_audio::sources::SineOscillator;
//!
//! static ENGINE: AudioEngine<'static, SineOscillator> = AudioEngine::new();
//!
//! let mut codec = Tlv320aic3254::new(i2c, delay);
//! codec.configure()?;
//! codec.set_headphone_volume(60)?;
//!
//! ENGINE.set_source(osc); // osc: &'static mut SineOscillator
//!
//! // On the audio core:
//! ENGINE.run(&mut IoSink::new(i2s_tx));
//!
//! // On the control core, e.g. from a MIDI note-on handler:
//! ENGINE.with_source(|osc| osc.set_frequency(261.63));
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `dsp` | yes | Sine oscillator (requires `libm`) |
//! | `tlv320aic3254` | yes | TLV320AIC3254 codec driver (requires `embedded-hal`) |
//!
//! ## Audio parameters
//!
//! - **Block size:** 256 stereo frames ([`constants::BLOCK_FRAMES`])
//! - **Sample rate:** 44 100 Hz ([`constants::SAMPLE_RATE`])
//! - **Sample format:** `i16` (signed 16-bit), interleaved L/R

#![no_std]

pub mod constants;
pub mod source;
pub mod control;
pub mod io;
pub mod engine;

#[cfg(feature = "tlv320aic3254")]
pub mod codec;

#[cfg(feature = "dsp")]
pub mod sources;
