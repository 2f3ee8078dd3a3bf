//! MIDI port bound to a byte-stream transport.
//!
//! [`Midi`] pairs a [`Parser`] and a [`Handlers`] table with any
//! [`embedded_io`] transport (typically a 31 250 baud UART). Receiving needs
//! [`Read`] + [`ReadReady`]; sending needs [`Write`]. A port that only
//! receives or only sends only needs the matching traits.
//!
//! ## Usage
//!
//! ```ignore
//! fn note_on(channel: u8, note: u8, velocity: u8) { /* ... */ }
//!
//! let mut midi = Midi::new(uart);
//! midi.set_handle_note_on(Some(note_on));
//!
//! loop {
//!     midi.read()?;                    // dispatch everything received
//!     midi.send_note_on(60, 100, 1)?;  // C4 on channel 1
//! }
//! ```

use embedded_io::{Read, ReadReady, Write};

use crate::handlers::{
    ControlChangeHandler, Handlers, NoteOffHandler, NoteOnHandler, PitchBendHandler,
    ProgramChangeHandler,
};
use crate::message::MidiMessage;
use crate::parser::Parser;

/// Bytes pulled from the transport per `read` call.
const READ_CHUNK: usize = 16;

/// Callback-dispatching MIDI port.
pub struct Midi<T> {
    port: T,
    parser: Parser,
    handlers: Handlers,
}

impl<T> Midi<T> {
    /// Wrap `port` with an empty handler table and no running status.
    pub fn new(port: T) -> Self {
        Midi {
            port,
            parser: Parser::new(),
            handlers: Handlers::new(),
        }
    }

    /// Parse one incoming byte and dispatch the message it completes, if any.
    pub fn feed(&mut self, byte: u8) {
        if let Some(msg) = self.parser.feed(byte) {
            if !self.handlers.dispatch(&msg) {
                log::trace!("no handler for {:?}", msg);
            }
        }
    }

    // ── Callback registration ──────────────────────────────────────────

    pub fn set_handle_note_on(&mut self, handler: Option<NoteOnHandler>) {
        self.handlers.note_on = handler;
    }

    pub fn set_handle_note_off(&mut self, handler: Option<NoteOffHandler>) {
        self.handlers.note_off = handler;
    }

    pub fn set_handle_control_change(&mut self, handler: Option<ControlChangeHandler>) {
        self.handlers.control_change = handler;
    }

    pub fn set_handle_program_change(&mut self, handler: Option<ProgramChangeHandler>) {
        self.handlers.program_change = handler;
    }

    pub fn set_handle_pitch_bend(&mut self, handler: Option<PitchBendHandler>) {
        self.handlers.pitch_bend = handler;
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Release the transport.
    pub fn release(self) -> T {
        self.port
    }
}

impl<T: Read + ReadReady> Midi<T> {
    /// Drain every byte the transport has ready, dispatching each completed
    /// message synchronously. Returns the number of bytes consumed.
    ///
    /// Call from the main loop as often as possible. Never blocks waiting
    /// for data.
    pub fn read(&mut self) -> Result<usize, T::Error> {
        let mut buf = [0u8; READ_CHUNK];
        let mut total = 0;
        while self.port.read_ready()? {
            let n = self.port.read(&mut buf)?;
            if n == 0 {
                break;
            }
            for &byte in &buf[..n] {
                self.feed(byte);
            }
            total += n;
        }
        Ok(total)
    }
}

impl<T: Write> Midi<T> {
    /// Write one complete message with its status byte.
    pub fn send(&mut self, msg: &MidiMessage) -> Result<(), T::Error> {
        let mut buf = [0u8; 3];
        self.port.write_all(msg.encode(&mut buf))
    }

    /// Note On, channel 1–16.
    pub fn send_note_on(&mut self, note: u8, velocity: u8, channel: u8) -> Result<(), T::Error> {
        self.send(&MidiMessage::NoteOn { channel, note, velocity })
    }

    /// Note Off, channel 1–16.
    pub fn send_note_off(&mut self, note: u8, velocity: u8, channel: u8) -> Result<(), T::Error> {
        self.send(&MidiMessage::NoteOff { channel, note, velocity })
    }

    /// Control Change, channel 1–16.
    pub fn send_control_change(
        &mut self,
        controller: u8,
        value: u8,
        channel: u8,
    ) -> Result<(), T::Error> {
        self.send(&MidiMessage::ControlChange { channel, controller, value })
    }

    /// Program Change, channel 1–16.
    pub fn send_program_change(&mut self, program: u8, channel: u8) -> Result<(), T::Error> {
        self.send(&MidiMessage::ProgramChange { channel, program })
    }

    /// Pitch Bend, `-8192` (full down) to `8191` (full up), 0 = center.
    /// Channel 1–16.
    pub fn send_pitch_bend(&mut self, value: i16, channel: u8) -> Result<(), T::Error> {
        self.send(&MidiMessage::PitchBend { channel, value })
    }
}
