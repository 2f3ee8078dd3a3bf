//! Block-streaming audio engine.
//!
//! [`AudioEngine`] is the single context object shared between the audio
//! context, which runs [`run()`](AudioEngine::run) forever, and the control
//! context, which rebinds or tweaks the active [`AudioSource`].
//!
//! ```text
//!  control context                       audio context
//! ┌───────────────┐  set_source()   ┌───────────────────────┐  write_block()  ┌──────┐
//! │ main loop     ├────────────────►│ AudioEngine           ├────────────────►│ sink │
//! │ MIDI handlers │  with_source()  │ 256 frames × (L, R)   │   (blocking)    └──────┘
//! └───────────────┘                 └───────────────────────┘
//! ```
//!
//! The binding lives in a [`critical_section::Mutex`]. Every sample pull and
//! every binding change takes the critical section, so a new binding is
//! picked up from the very next sample.
//!
//! ## Usage
//!
//! ```ignore
//! static ENGINE: AudioEngine<'static, SineOscillator> = AudioEngine::new();
//!
//! // Audio task / second core:
//! ENGINE.run(&mut IoSink::new(i2s_tx));
//!
//! // Control context:
//! ENGINE.set_source(osc);
//! ENGINE.with_source(|osc| osc.set_frequency(220.0));
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::constants::{BLOCK_SAMPLES, CHANNELS};
use crate::io::AudioSink;
use crate::source::AudioSource;

/// Streams samples from the bound [`AudioSource`] into an [`AudioSink`].
///
/// `S` defaults to a type-erased `dyn AudioSource + Send`; use a concrete
/// source type to keep access to its setters through
/// [`with_source()`](Self::with_source).
///
/// The engine never owns the source: it holds the caller's `&'a mut S` and
/// hands it back from [`set_source()`](Self::set_source) and
/// [`clear_source()`](Self::clear_source).
pub struct AudioEngine<'a, S: ?Sized + 'a = dyn AudioSource + Send + 'a> {
    source: Mutex<RefCell<Option<&'a mut S>>>,
}

impl<'a, S: ?Sized + 'a> AudioEngine<'a, S> {
    /// Create an engine with no source bound (emits silence).
    pub const fn new() -> Self {
        AudioEngine {
            source: Mutex::new(RefCell::new(None)),
        }
    }

    /// Bind `source`, returning the previously bound one.
    ///
    /// Takes effect from the next sample the audio context pulls.
    pub fn set_source(&self, source: &'a mut S) -> Option<&'a mut S> {
        critical_section::with(|cs| self.source.borrow_ref_mut(cs).replace(source))
    }

    /// Unbind the current source, returning it. The engine emits silence
    /// until a new source is bound.
    pub fn clear_source(&self) -> Option<&'a mut S> {
        critical_section::with(|cs| self.source.borrow_ref_mut(cs).take())
    }

    /// Whether a source is currently bound.
    pub fn has_source(&self) -> bool {
        critical_section::with(|cs| self.source.borrow_ref(cs).is_some())
    }

    /// Run `f` against the bound source inside the critical section.
    ///
    /// Returns `None` without calling `f` when nothing is bound.
    ///
    /// `f` must not call back into this engine. The binding stays mutably
    /// borrowed while `f` runs and critical sections nest, so a nested
    /// `has_source`, `set_source` or `render_block` panics.
    pub fn with_source<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        critical_section::with(|cs| self.source.borrow_ref_mut(cs).as_deref_mut().map(f))
    }
}

impl<'a, S: AudioSource + ?Sized + 'a> AudioEngine<'a, S> {
    /// Pull one sample from the bound source, or 0 if unbound.
    fn pull_sample(&self) -> i16 {
        critical_section::with(|cs| match self.source.borrow_ref_mut(cs).as_deref_mut() {
            Some(source) => source.next_sample(),
            None => 0,
        })
    }

    /// Fill `block` with interleaved stereo frames.
    ///
    /// Each frame pulls one mono sample and writes it to both channels.
    pub fn render_block(&self, block: &mut [i16; BLOCK_SAMPLES]) {
        for frame in block.chunks_exact_mut(CHANNELS) {
            frame.fill(self.pull_sample());
        }
    }

    /// Render one block into `block` and hand it to `sink`.
    pub fn stream_once<K: AudioSink + ?Sized>(
        &self,
        sink: &mut K,
        block: &mut [i16; BLOCK_SAMPLES],
    ) -> Result<(), K::Error> {
        self.render_block(block);
        sink.write_block(block)
    }

    /// Stream forever.
    ///
    /// Call from the dedicated audio task. There is no stop path; a sink
    /// that never drains stalls this context. Sink errors are logged and the
    /// next block is rendered as usual.
    pub fn run<K: AudioSink + ?Sized>(&self, sink: &mut K) -> ! {
        let mut block = [0i16; BLOCK_SAMPLES];
        log::debug!("audio engine streaming, {} samples per block", BLOCK_SAMPLES);
        loop {
            if let Err(e) = self.stream_once(sink, &mut block) {
                log::warn!("audio sink write failed: {:?}", e);
            }
        }
    }
}

impl<'a, S: ?Sized + 'a> Default for AudioEngine<'a, S> {
    fn default() -> Self {
        Self::new()
    }
}
