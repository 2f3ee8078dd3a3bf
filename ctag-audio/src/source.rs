/// Anything that can produce a mono stream of 16-bit samples.
///
/// The [`AudioEngine`](crate::engine::AudioEngine) calls
/// [`next_sample()`](Self::next_sample) once per output frame and duplicates
/// the result into both stereo channels.
///
/// Implementations are driven from the audio context. They carry no internal
/// synchronisation of their own, so parameter changes from another context
/// must go through [`AudioEngine::with_source`](crate::engine::AudioEngine::with_source).
pub trait AudioSource {
    /// Produce the next signed 16-bit sample (-32768 to 32767).
    fn next_sample(&mut self) -> i16;
}

impl<S: AudioSource + ?Sized> AudioSource for &mut S {
    #[inline]
    fn next_sample(&mut self) -> i16 {
        (**self).next_sample()
    }
}
