//! # ctag-midi
//!
//! A `no_std`, allocation-free MIDI 1.0 stack for serial MIDI ports:
//! a byte-at-a-time parser with running status, a callback table for
//! channel-voice events, and a transmitter, all bound to any
//! [`embedded_io`] transport.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`message`] | `MidiMessage` model, wire encoding, pitch bend conversion |
//! | [`parser`] | Running-status stream parser |
//! | [`handlers`] | Optional per-event callbacks |
//! | [`port`] | `Midi<T>`: parser + handlers + transport |
//! | [`note`] | Note numbers to names (`60` → `C4`) |
//!
//! ## Quick start
//!
//! ```ignore
//! use ctag_midi::Midi;
//!
//! fn note_on(channel: u8, note: u8, velocity: u8) {
//!     log::info!("ch{} {} vel {}", channel, ctag_midi::note_name(note), velocity);
//! }
//!
//! let mut midi = Midi::new(uart); // 31 250 baud, 8N1
//! midi.set_handle_note_on(Some(note_on));
//!
//! loop {
//!     midi.read()?;
//! }
//! ```
//!
//! Handlers run synchronously inside [`Midi::read`], on the caller's
//! context. Channels are 1–16 in every callback and `send_*` call.

#![no_std]

pub mod message;
pub mod parser;
pub mod handlers;
pub mod port;
pub mod note;

pub use handlers::{
    ControlChangeHandler, Handlers, NoteOffHandler, NoteOnHandler, PitchBendHandler,
    ProgramChangeHandler,
};
pub use message::{MidiMessage, RealTime};
pub use note::{note_name, NoteName};
pub use parser::Parser;
pub use port::Midi;

#[cfg(test)]
mod integration_tests;
