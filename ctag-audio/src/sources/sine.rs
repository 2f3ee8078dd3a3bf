//! Sine wave oscillator using a double-precision phase accumulator.

use core::f64::consts::TAU;

use crate::source::AudioSource;

/// Full-scale magnitude of a 16-bit sample.
const FULL_SCALE: f64 = 32767.0;

/// Sine wave oscillator.
///
/// Tracks phase in radians within `[0, 2π)` and advances it by a fixed
/// increment per sample. The wrap is a single conditional subtraction, which
/// holds as long as the increment stays within `[0, 2π]`, i.e. for
/// frequencies from 0 up to the sample rate. Negative frequencies are outside
/// the contract: the phase would run below 0 without ever being wrapped.
///
/// Phase is accumulated in `f64`, which keeps every sample within ±1 LSB of
/// the ideal sine over at least one second of output.
///
/// # Example
/// ```ignore
/// let mut sine = SineOscillator::new(44_100.0);
/// sine.set_frequency(440.0);
/// sine.set_amplitude(0.8);
/// ```
#[derive(Debug, Clone)]
pub struct SineOscillator {
    sample_rate: f32,
    frequency: f32,
    /// Linear gain, 0.0–1.0.
    amplitude: f32,
    /// Current phase in radians, `[0, 2π)`.
    phase: f64,
    /// Phase step per sample: `2π * frequency / sample_rate`.
    phase_increment: f64,
}

impl SineOscillator {
    /// Frequency of a freshly constructed oscillator, in Hz.
    pub const DEFAULT_FREQUENCY: f32 = 440.0;

    /// Amplitude of a freshly constructed oscillator.
    pub const DEFAULT_AMPLITUDE: f32 = 0.5;

    /// Create an oscillator for the given sample rate, at 440 Hz and half
    /// amplitude, starting from phase 0.
    pub fn new(sample_rate: f32) -> Self {
        let mut osc = SineOscillator {
            sample_rate,
            frequency: 0.0,
            amplitude: Self::DEFAULT_AMPLITUDE,
            phase: 0.0,
            phase_increment: 0.0,
        };
        osc.set_frequency(Self::DEFAULT_FREQUENCY);
        osc
    }

    /// Set the oscillator frequency in Hz and recompute the phase increment.
    ///
    /// `hz` must lie in `0.0..=sample_rate`.
    pub fn set_frequency(&mut self, hz: f32) {
        self.frequency = hz;
        self.phase_increment = TAU * hz as f64 / self.sample_rate as f64;
    }

    /// Set the output amplitude, clamped to 0.0–1.0.
    pub fn set_amplitude(&mut self, level: f32) {
        self.amplitude = if !(level >= 0.0) {
            0.0
        } else if level > 1.0 {
            1.0
        } else {
            level
        };
    }

    /// Set the current phase in radians. Any value is wrapped into `[0, 2π)`.
    pub fn set_phase(&mut self, radians: f64) {
        let wrapped = libm::fmod(radians, TAU);
        self.phase = if wrapped < 0.0 { wrapped + TAU } else { wrapped };
        if self.phase >= TAU {
            self.phase = 0.0;
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn phase_increment(&self) -> f64 {
        self.phase_increment
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

impl AudioSource for SineOscillator {
    fn next_sample(&mut self) -> i16 {
        let sample = libm::round(self.amplitude as f64 * FULL_SCALE * libm::sin(self.phase)) as i16;
        self.phase += self.phase_increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_RATE_F32;

    /// `round(32767 * sin(2π f n / r))` computed in double precision.
    fn ideal_sample(freq: f64, n: usize, rate: f64) -> i16 {
        let phase = TAU * freq * n as f64 / rate;
        libm::round(32767.0 * libm::sin(phase)) as i16
    }

    #[test]
    fn defaults() {
        let sine = SineOscillator::new(SAMPLE_RATE_F32);
        assert_eq!(sine.frequency(), 440.0);
        assert_eq!(sine.amplitude(), 0.5);
        assert_eq!(sine.phase(), 0.0);
        assert_eq!(sine.sample_rate(), 44_100.0);
        let expected = TAU * 440.0 / 44_100.0;
        assert!(libm::fabs(sine.phase_increment() - expected) < 1e-12);
    }

    #[test]
    fn first_sample_is_zero() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_amplitude(1.0);
        assert_eq!(sine.next_sample(), 0);
    }

    #[test]
    fn tracks_ideal_sine_for_one_second() {
        for freq in [1.0f32, 440.0, 1000.0, 5000.0, 15_000.0] {
            let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
            sine.set_frequency(freq);
            sine.set_amplitude(1.0);

            for n in 0..44_100 {
                let got = sine.next_sample() as i32;
                let want = ideal_sample(freq as f64, n, 44_100.0) as i32;
                assert!(
                    (got - want).abs() <= 1,
                    "{} Hz sample {}: got {}, want {}",
                    freq, n, got, want
                );
            }
        }
    }

    #[test]
    fn quarter_rate_hits_peaks() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_frequency(SAMPLE_RATE_F32 / 4.0);
        sine.set_amplitude(1.0);

        let expected = [0i32, 32767, 0, -32767, 0, 32767];
        for (n, &want) in expected.iter().enumerate() {
            let got = sine.next_sample() as i32;
            assert!((got - want).abs() <= 1, "sample {}: got {}", n, got);
        }
    }

    #[test]
    fn one_period_returns_to_zero_phase() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_frequency(1.0);
        for _ in 0..44_100 {
            sine.next_sample();
        }
        let phase = sine.phase();
        let distance = if phase > TAU / 2.0 { TAU - phase } else { phase };
        // 1e-6 rad is well under one LSB at full scale
        assert!(distance < 1e-6, "phase after one period = {}", phase);
    }

    #[test]
    fn phase_stays_wrapped() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_frequency(15_000.0);
        for _ in 0..10_000 {
            sine.next_sample();
            let phase = sine.phase();
            assert!((0.0..TAU).contains(&phase), "phase out of range: {}", phase);
        }
    }

    #[test]
    fn increment_of_full_turn_still_wraps() {
        // Upper end of the frequency contract: one full turn per sample
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_frequency(SAMPLE_RATE_F32);
        for _ in 0..1_000 {
            sine.next_sample();
            assert!((0.0..TAU).contains(&sine.phase()), "phase = {}", sine.phase());
        }
    }

    #[test]
    fn amplitude_clamps_high() {
        let mut clamped = SineOscillator::new(SAMPLE_RATE_F32);
        clamped.set_amplitude(1.5);
        let mut full = SineOscillator::new(SAMPLE_RATE_F32);
        full.set_amplitude(1.0);

        assert_eq!(clamped.amplitude(), 1.0);
        for _ in 0..256 {
            assert_eq!(clamped.next_sample(), full.next_sample());
        }
    }

    #[test]
    fn amplitude_clamps_low_to_silence() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_amplitude(-0.5);
        assert_eq!(sine.amplitude(), 0.0);
        for _ in 0..256 {
            assert_eq!(sine.next_sample(), 0);
        }

        sine.set_amplitude(f32::NAN);
        assert_eq!(sine.amplitude(), 0.0);
    }

    #[test]
    fn half_amplitude_scales_output() {
        let mut full = SineOscillator::new(SAMPLE_RATE_F32);
        full.set_frequency(1000.0);
        full.set_amplitude(1.0);

        let mut half = SineOscillator::new(SAMPLE_RATE_F32);
        half.set_frequency(1000.0);
        half.set_amplitude(0.5);

        for i in 0..64 {
            let f = full.next_sample() as i32;
            let h = half.next_sample() as i32;
            assert!((f / 2 - h).abs() <= 1, "sample {}: full={}, half={}", i, f, h);
        }
    }

    #[test]
    fn frequency_change_keeps_phase() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        for _ in 0..10 {
            sine.next_sample();
        }
        let before = sine.phase();
        sine.set_frequency(880.0);
        assert_eq!(sine.phase(), before);
        assert!(libm::fabs(sine.phase_increment() - TAU * 880.0 / 44_100.0) < 1e-12);
    }

    #[test]
    fn zero_frequency_holds_phase() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_frequency(0.0);
        sine.set_amplitude(1.0);
        sine.set_phase(TAU / 4.0);
        for _ in 0..16 {
            assert_eq!(sine.next_sample(), 32767);
        }
    }

    #[test]
    fn set_phase_wraps() {
        let mut sine = SineOscillator::new(SAMPLE_RATE_F32);
        sine.set_phase(TAU + 1.0);
        assert!(libm::fabs(sine.phase() - 1.0) < 1e-9);

        sine.set_phase(-1.0);
        assert!(libm::fabs(sine.phase() - (TAU - 1.0)) < 1e-9);

        sine.set_phase(TAU);
        assert!((0.0..TAU).contains(&sine.phase()));
    }
}
