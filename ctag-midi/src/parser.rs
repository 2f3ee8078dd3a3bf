//! Byte-at-a-time MIDI 1.0 stream parser with running status.
//!
//! [`Parser::feed`] never fails. Bytes that cannot form a message are
//! dropped and the parser picks up again at the next status byte, so a
//! corrupted serial link cannot wedge it.
//!
//! | Byte | Effect |
//! |------|--------|
//! | `0x80`–`0xEF` | New running status, data count reset |
//! | `0xF0`–`0xF7` | Running status cancelled (System Common / SysEx) |
//! | `0xF8`–`0xFF` | Real-Time message returned, state untouched |
//! | `0x00`–`0x7F` | Data byte for the running status, dropped if there is none |

use crate::message::{self, MidiMessage, RealTime};

/// MIDI byte-stream parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    /// Running status, kept across messages until another status byte arrives.
    status: Option<u8>,
    /// First data byte of a two-byte message in progress.
    data1: u8,
    /// Data bytes received for the current message (0 or 1).
    received: u8,
}

impl Parser {
    pub const fn new() -> Self {
        Parser {
            status: None,
            data1: 0,
            received: 0,
        }
    }

    /// Advance by one byte, returning a message when one completes.
    pub fn feed(&mut self, byte: u8) -> Option<MidiMessage> {
        if byte >= message::SYSTEM_REAL_TIME {
            return Some(MidiMessage::RealTime(RealTime::from_byte(byte)));
        }

        if byte >= message::SYSTEM_COMMON {
            self.status = None;
            self.received = 0;
            return None;
        }

        if message::is_status(byte) {
            self.status = Some(byte);
            self.received = 0;
            return None;
        }

        let Some(status) = self.status else {
            log::trace!("dropping data byte {:#04x} without running status", byte);
            return None;
        };

        if self.received == 0 && message::data_len(status) == 2 {
            self.data1 = byte;
            self.received = 1;
            return None;
        }

        let msg = if self.received == 0 {
            MidiMessage::from_channel_voice(status, byte, 0)
        } else {
            MidiMessage::from_channel_voice(status, self.data1, byte)
        };
        self.received = 0;
        Some(msg)
    }

    /// Current running status byte, if any.
    pub fn running_status(&self) -> Option<u8> {
        self.status
    }

    /// Whether a message is partially received.
    pub fn in_message(&self) -> bool {
        self.received != 0
    }

    /// Forget running status and any partial message.
    pub fn reset(&mut self) {
        *self = Parser::new();
    }
}
