//! MIDI 1.0 message model and wire encoding.
//!
//! Channels are 1–16 everywhere in this crate's API and 0–15 on the wire.
//!
//! ## Wire format
//!
//! | Message | Status | Data bytes |
//! |---------|--------|------------|
//! | Note Off | `0x8n` | note, velocity |
//! | Note On | `0x9n` | note, velocity |
//! | Polyphonic Key Pressure | `0xAn` | note, pressure |
//! | Control Change | `0xBn` | controller, value |
//! | Program Change | `0xCn` | program |
//! | Channel Pressure | `0xDn` | pressure |
//! | Pitch Bend | `0xEn` | LSB, MSB |
//! | System Real-Time | `0xF8`–`0xFF` | none |

// ── Status bytes ───────────────────────────────────────────────────────────

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_PRESSURE: u8 = 0xA0;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const CHANNEL_PRESSURE: u8 = 0xD0;
pub const PITCH_BEND: u8 = 0xE0;

/// First System Common status byte. `0xF0`–`0xF7` cancel running status.
pub const SYSTEM_COMMON: u8 = 0xF0;

/// First System Real-Time status byte. `0xF8`–`0xFF` are single-byte
/// messages that may appear between the bytes of any other message.
pub const SYSTEM_REAL_TIME: u8 = 0xF8;

/// Pitch bend wire value for "no bend".
pub const PITCH_BEND_CENTER: i16 = 8192;

/// Lowest signed pitch bend value.
pub const PITCH_BEND_MIN: i16 = -8192;

/// Highest signed pitch bend value.
pub const PITCH_BEND_MAX: i16 = 8191;

/// Whether `byte` is a status byte (high bit set).
#[inline]
pub const fn is_status(byte: u8) -> bool {
    byte & 0x80 != 0
}

/// Number of data bytes following a channel-voice status byte.
#[inline]
pub const fn data_len(status: u8) -> usize {
    match status & 0xF0 {
        PROGRAM_CHANGE | CHANNEL_PRESSURE => 1,
        _ => 2,
    }
}

/// Combine a 7-bit LSB/MSB pair into a signed bend, `-8192..=8191`.
#[inline]
pub const fn pitch_bend_from_wire(lsb: u8, msb: u8) -> i16 {
    let raw = (((msb & 0x7F) as u16) << 7) | (lsb & 0x7F) as u16;
    raw as i16 - PITCH_BEND_CENTER
}

/// Split a signed bend into its 7-bit `(lsb, msb)` wire pair.
///
/// Values outside `-8192..=8191` are clamped.
#[inline]
pub fn pitch_bend_to_wire(value: i16) -> (u8, u8) {
    let raw = (value.clamp(PITCH_BEND_MIN, PITCH_BEND_MAX) + PITCH_BEND_CENTER) as u16;
    ((raw & 0x7F) as u8, ((raw >> 7) & 0x7F) as u8)
}

/// User-facing channel (1–16) from a status byte's low nibble.
#[inline]
const fn channel_of(status: u8) -> u8 {
    (status & 0x0F) + 1
}

/// Status byte from a message type and a user-facing channel (1–16).
#[inline]
const fn status_byte(kind: u8, channel: u8) -> u8 {
    kind | (channel.wrapping_sub(1) & 0x0F)
}

// ── System Real-Time ───────────────────────────────────────────────────────

/// Single-byte System Real-Time messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealTime {
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
    /// `0xF9` or `0xFD`, reserved in MIDI 1.0.
    Undefined(u8),
}

impl RealTime {
    /// Decode a byte in `0xF8..=0xFF`.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0xF8 => RealTime::TimingClock,
            0xFA => RealTime::Start,
            0xFB => RealTime::Continue,
            0xFC => RealTime::Stop,
            0xFE => RealTime::ActiveSensing,
            0xFF => RealTime::SystemReset,
            other => RealTime::Undefined(other),
        }
    }

    pub const fn to_byte(self) -> u8 {
        match self {
            RealTime::TimingClock => 0xF8,
            RealTime::Start => 0xFA,
            RealTime::Continue => 0xFB,
            RealTime::Stop => 0xFC,
            RealTime::ActiveSensing => 0xFE,
            RealTime::SystemReset => 0xFF,
            RealTime::Undefined(byte) => byte,
        }
    }
}

// ── Messages ───────────────────────────────────────────────────────────────

/// A complete MIDI message.
///
/// `channel` is 1–16. Note On with velocity 0 stays a `NoteOn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOff { channel: u8, note: u8, velocity: u8 },
    NoteOn { channel: u8, note: u8, velocity: u8 },
    PolyPressure { channel: u8, note: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    /// Signed bend, `-8192..=8191`, 0 = center.
    PitchBend { channel: u8, value: i16 },
    RealTime(RealTime),
}

impl MidiMessage {
    /// Build a channel-voice message from its status byte and data bytes.
    ///
    /// `data2` is ignored for one-data-byte messages. `status` must be in
    /// `0x80..=0xEF`.
    pub(crate) fn from_channel_voice(status: u8, data1: u8, data2: u8) -> Self {
        let channel = channel_of(status);
        match status & 0xF0 {
            NOTE_OFF => MidiMessage::NoteOff { channel, note: data1, velocity: data2 },
            NOTE_ON => MidiMessage::NoteOn { channel, note: data1, velocity: data2 },
            POLY_PRESSURE => MidiMessage::PolyPressure { channel, note: data1, pressure: data2 },
            CONTROL_CHANGE => MidiMessage::ControlChange { channel, controller: data1, value: data2 },
            PROGRAM_CHANGE => MidiMessage::ProgramChange { channel, program: data1 },
            CHANNEL_PRESSURE => MidiMessage::ChannelPressure { channel, pressure: data1 },
            _ => MidiMessage::PitchBend { channel, value: pitch_bend_from_wire(data1, data2) },
        }
    }

    /// The message's channel (1–16), or `None` for System Real-Time.
    pub fn channel(&self) -> Option<u8> {
        match *self {
            MidiMessage::NoteOff { channel, .. }
            | MidiMessage::NoteOn { channel, .. }
            | MidiMessage::PolyPressure { channel, .. }
            | MidiMessage::ControlChange { channel, .. }
            | MidiMessage::ProgramChange { channel, .. }
            | MidiMessage::ChannelPressure { channel, .. }
            | MidiMessage::PitchBend { channel, .. } => Some(channel),
            MidiMessage::RealTime(_) => None,
        }
    }

    /// Serialise into `buf`, returning the 1–3 bytes that make up the message.
    ///
    /// Channels are masked to 4 bits after subtracting 1, data bytes to 7 bits.
    pub fn encode<'b>(&self, buf: &'b mut [u8; 3]) -> &'b [u8] {
        let len = match *self {
            MidiMessage::NoteOff { channel, note, velocity } => {
                *buf = [status_byte(NOTE_OFF, channel), note & 0x7F, velocity & 0x7F];
                3
            }
            MidiMessage::NoteOn { channel, note, velocity } => {
                *buf = [status_byte(NOTE_ON, channel), note & 0x7F, velocity & 0x7F];
                3
            }
            MidiMessage::PolyPressure { channel, note, pressure } => {
                *buf = [status_byte(POLY_PRESSURE, channel), note & 0x7F, pressure & 0x7F];
                3
            }
            MidiMessage::ControlChange { channel, controller, value } => {
                *buf = [status_byte(CONTROL_CHANGE, channel), controller & 0x7F, value & 0x7F];
                3
            }
            MidiMessage::ProgramChange { channel, program } => {
                buf[0] = status_byte(PROGRAM_CHANGE, channel);
                buf[1] = program & 0x7F;
                2
            }
            MidiMessage::ChannelPressure { channel, pressure } => {
                buf[0] = status_byte(CHANNEL_PRESSURE, channel);
                buf[1] = pressure & 0x7F;
                2
            }
            MidiMessage::PitchBend { channel, value } => {
                let (lsb, msb) = pitch_bend_to_wire(value);
                *buf = [status_byte(PITCH_BEND, channel), lsb, msb];
                3
            }
            MidiMessage::RealTime(rt) => {
                buf[0] = rt.to_byte();
                1
            }
        };
        &buf[..len]
    }
}
