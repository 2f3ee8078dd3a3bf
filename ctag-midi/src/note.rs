//! Human-readable note names.

use core::fmt;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Name of a MIDI note number, displayed with sharps and scientific octave
/// (note 60 = `C4`, note 0 = `C-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName {
    note: u8,
}

/// Name of MIDI note `note` (0–127).
///
/// ```
/// assert_eq!(ctag_midi::note_name(61).to_string(), "C#4");
/// ```
pub const fn note_name(note: u8) -> NoteName {
    NoteName { note }
}

impl NoteName {
    pub const fn note(&self) -> u8 {
        self.note
    }

    /// Pitch class with sharps, e.g. `"F#"`.
    pub const fn pitch_class(&self) -> &'static str {
        SHARP_NAMES[(self.note % 12) as usize]
    }

    pub const fn octave(&self) -> i8 {
        (self.note / 12) as i8 - 1
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}
