//! Hardware audio output abstraction.
//!
//! An [`AudioSink`] accepts one interleaved stereo block at a time and blocks
//! until the hardware has taken all of it. [`IoSink`] adapts any
//! [`embedded_io::Write`] byte stream (an I2S driver's TX channel, a UART, a
//! file on the host) into a sink.
//!
//! ## Block layout
//!
//! `[L0, R0, L1, R1, ...]`, [`BLOCK_FRAMES`](crate::constants::BLOCK_FRAMES)
//! frames of signed 16-bit samples. [`IoSink`] serialises each sample
//! little-endian, which is the I2S DMA layout on ESP32 and Cortex-M parts.

use crate::constants::BLOCK_SAMPLES;

/// Blocking consumer of interleaved stereo blocks.
pub trait AudioSink {
    /// Error reported by the underlying peripheral.
    type Error: core::fmt::Debug;

    /// Write one full block, blocking until the hardware accepts it.
    fn write_block(&mut self, block: &[i16; BLOCK_SAMPLES]) -> Result<(), Self::Error>;
}

impl<K: AudioSink + ?Sized> AudioSink for &mut K {
    type Error = K::Error;

    #[inline]
    fn write_block(&mut self, block: &[i16; BLOCK_SAMPLES]) -> Result<(), Self::Error> {
        (**self).write_block(block)
    }
}

/// [`AudioSink`] over a blocking byte stream.
pub struct IoSink<W> {
    writer: W,
}

impl<W: embedded_io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer }
    }

    /// Release the wrapped writer.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> AudioSink for IoSink<W> {
    type Error = W::Error;

    fn write_block(&mut self, block: &[i16; BLOCK_SAMPLES]) -> Result<(), Self::Error> {
        let mut bytes = [0u8; BLOCK_SAMPLES * 2];
        for (dst, sample) in bytes.chunks_exact_mut(2).zip(block.iter()) {
            dst.copy_from_slice(&sample.to_le_bytes());
        }
        self.writer.write_all(&bytes)
    }
}
