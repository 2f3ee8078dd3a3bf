//! Callback table for incoming channel-voice messages.
//!
//! One slot per event kind; setting a slot replaces the previous handler.
//! Messages whose slot is empty, and message kinds without a slot (key and
//! channel pressure, System Real-Time), are dropped.

use crate::message::MidiMessage;

/// `(channel, note, velocity)`, channel 1–16.
pub type NoteOnHandler = fn(channel: u8, note: u8, velocity: u8);

/// `(channel, note, velocity)`, channel 1–16.
pub type NoteOffHandler = fn(channel: u8, note: u8, velocity: u8);

/// `(channel, controller, value)`, channel 1–16.
pub type ControlChangeHandler = fn(channel: u8, controller: u8, value: u8);

/// `(channel, program)`, channel 1–16.
pub type ProgramChangeHandler = fn(channel: u8, program: u8);

/// `(channel, bend)`, channel 1–16, bend `-8192..=8191`.
pub type PitchBendHandler = fn(channel: u8, value: i16);

/// Five independent, optional handler slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct Handlers {
    pub note_on: Option<NoteOnHandler>,
    pub note_off: Option<NoteOffHandler>,
    pub control_change: Option<ControlChangeHandler>,
    pub program_change: Option<ProgramChangeHandler>,
    pub pitch_bend: Option<PitchBendHandler>,
}

impl Handlers {
    /// Empty table: every message is dropped.
    pub const fn new() -> Self {
        Handlers {
            note_on: None,
            note_off: None,
            control_change: None,
            program_change: None,
            pitch_bend: None,
        }
    }

    /// Invoke the handler registered for `msg`, if any.
    ///
    /// Returns whether a handler ran.
    pub fn dispatch(&self, msg: &MidiMessage) -> bool {
        match *msg {
            MidiMessage::NoteOn { channel, note, velocity } => match self.note_on {
                Some(f) => f(channel, note, velocity),
                None => return false,
            },
            MidiMessage::NoteOff { channel, note, velocity } => match self.note_off {
                Some(f) => f(channel, note, velocity),
                None => return false,
            },
            MidiMessage::ControlChange { channel, controller, value } => match self.control_change {
                Some(f) => f(channel, controller, value),
                None => return false,
            },
            MidiMessage::ProgramChange { channel, program } => match self.program_change {
                Some(f) => f(channel, program),
                None => return false,
            },
            MidiMessage::PitchBend { channel, value } => match self.pitch_bend {
                Some(f) => f(channel, value),
                None => return false,
            },
            MidiMessage::PolyPressure { .. }
            | MidiMessage::ChannelPressure { .. }
            | MidiMessage::RealTime(_) => return false,
        }
        true
    }
}
