//! Two ports wired back to back through an in-memory cable:
//!
//! ```text
//! Midi::send_*() → [cable bytes] → Midi::read() → Parser → Handlers
//! ```

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::{Midi, MidiMessage, RealTime};
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_io::{ErrorType, Read, ReadReady, Write};
    use std::vec::Vec;

    /// Byte FIFO standing in for a UART link.
    #[derive(Default)]
    struct Cable {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Cable {
        fn from_bytes(bytes: &[u8]) -> Self {
            Cable { bytes: bytes.to_vec(), pos: 0 }
        }
    }

    impl ErrorType for Cable {
        type Error = Infallible;
    }

    impl Write for Cable {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl Read for Cable {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.bytes.len() - self.pos);
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl ReadReady for Cable {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.pos < self.bytes.len())
        }
    }

    std::thread_local! {
        static EVENTS: RefCell<Vec<MidiMessage>> = const { RefCell::new(Vec::new()) };
    }

    fn on(channel: u8, note: u8, velocity: u8) {
        EVENTS.with(|e| e.borrow_mut().push(MidiMessage::NoteOn { channel, note, velocity }));
    }
    fn off(channel: u8, note: u8, velocity: u8) {
        EVENTS.with(|e| e.borrow_mut().push(MidiMessage::NoteOff { channel, note, velocity }));
    }
    fn cc(channel: u8, controller: u8, value: u8) {
        EVENTS.with(|e| {
            e.borrow_mut().push(MidiMessage::ControlChange { channel, controller, value })
        });
    }
    fn pc(channel: u8, program: u8) {
        EVENTS.with(|e| e.borrow_mut().push(MidiMessage::ProgramChange { channel, program }));
    }
    fn bend(channel: u8, value: i16) {
        EVENTS.with(|e| e.borrow_mut().push(MidiMessage::PitchBend { channel, value }));
    }

    fn events() -> Vec<MidiMessage> {
        EVENTS.with(|e| e.borrow().clone())
    }

    fn listening(cable: Cable) -> Midi<Cable> {
        let mut midi = Midi::new(cable);
        midi.set_handle_note_on(Some(on));
        midi.set_handle_note_off(Some(off));
        midi.set_handle_control_change(Some(cc));
        midi.set_handle_program_change(Some(pc));
        midi.set_handle_pitch_bend(Some(bend));
        midi
    }

    #[test]
    fn everything_sent_is_received() {
        let mut tx = Midi::new(Cable::default());
        tx.send_note_on(60, 100, 1).unwrap();
        tx.send_control_change(74, 33, 2).unwrap();
        tx.send_program_change(5, 16).unwrap();
        tx.send_pitch_bend(0, 3).unwrap();
        tx.send_pitch_bend(-8192, 3).unwrap();
        tx.send_pitch_bend(8191, 3).unwrap();
        tx.send_note_off(60, 0, 1).unwrap();

        let mut rx = listening(tx.release());
        assert_eq!(rx.read().unwrap(), 3 + 3 + 2 + 3 * 3 + 3);

        assert_eq!(
            events(),
            [
                MidiMessage::NoteOn { channel: 1, note: 60, velocity: 100 },
                MidiMessage::ControlChange { channel: 2, controller: 74, value: 33 },
                MidiMessage::ProgramChange { channel: 16, program: 5 },
                MidiMessage::PitchBend { channel: 3, value: 0 },
                MidiMessage::PitchBend { channel: 3, value: -8192 },
                MidiMessage::PitchBend { channel: 3, value: 8191 },
                MidiMessage::NoteOff { channel: 1, note: 60, velocity: 0 },
            ]
        );
    }

    #[test]
    fn keyboard_stream_with_running_status_and_clock() {
        // Chord using running status, clock ticks interleaved mid-message
        let stream = [
            0x90, 0x3C, 0x64, 0x40, 0xF8, 0x64, 0x43, 0x64, //
            0xF8, 0x80, 0x3C, 0x00, 0x40, 0x00, 0xF8, 0x43, 0x00,
        ];
        let mut rx = listening(Cable::from_bytes(&stream));
        rx.read().unwrap();

        assert_eq!(
            events(),
            [
                MidiMessage::NoteOn { channel: 1, note: 60, velocity: 100 },
                MidiMessage::NoteOn { channel: 1, note: 64, velocity: 100 },
                MidiMessage::NoteOn { channel: 1, note: 67, velocity: 100 },
                MidiMessage::NoteOff { channel: 1, note: 60, velocity: 0 },
                MidiMessage::NoteOff { channel: 1, note: 64, velocity: 0 },
                MidiMessage::NoteOff { channel: 1, note: 67, velocity: 0 },
            ]
        );
    }

    #[test]
    fn mid_stream_join_resynchronises() {
        // Receiver powered up halfway through a message
        let stream = [0x64, 0x40, 0x50, 0xB0, 0x07, 0x64];
        let mut rx = listening(Cable::from_bytes(&stream));
        rx.read().unwrap();
        assert_eq!(events(), [MidiMessage::ControlChange { channel: 1, controller: 7, value: 100 }]);
    }

    #[test]
    fn sysex_is_skipped() {
        let stream = [0xF0, 0x43, 0x12, 0x00, 0xF7, 0xC2, 0x09];
        let mut rx = listening(Cable::from_bytes(&stream));
        rx.read().unwrap();
        assert_eq!(events(), [MidiMessage::ProgramChange { channel: 3, program: 9 }]);
    }

    #[test]
    fn unhandled_kinds_do_not_disturb_handled_ones() {
        let mut tx = Midi::new(Cable::default());
        tx.send(&MidiMessage::ChannelPressure { channel: 1, pressure: 10 }).unwrap();
        tx.send(&MidiMessage::RealTime(RealTime::Start)).unwrap();
        tx.send(&MidiMessage::PolyPressure { channel: 1, note: 60, pressure: 10 }).unwrap();
        tx.send_note_on(62, 90, 1).unwrap();

        let mut rx = listening(tx.release());
        rx.read().unwrap();
        assert_eq!(events(), [MidiMessage::NoteOn { channel: 1, note: 62, velocity: 90 }]);
    }

    #[test]
    fn handlers_registered_between_reads() {
        let mut tx = Midi::new(Cable::default());
        tx.send_note_on(60, 1, 1).unwrap();
        let mut rx = Midi::new(tx.release());

        rx.read().unwrap();
        assert!(events().is_empty());

        let mut cable = rx.release();
        cable.write_all(&[0x91, 0x3D, 0x02]).unwrap();
        let mut rx = Midi::new(cable);
        rx.set_handle_note_on(Some(on));
        rx.read().unwrap();
        assert_eq!(events(), [MidiMessage::NoteOn { channel: 2, note: 61, velocity: 2 }]);
    }
}
