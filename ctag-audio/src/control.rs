//! Runtime control of output hardware.
//!
//! Codecs expose their own integer volume scales; [`AudioControl`] gives
//! firmware one float-level interface over all of them.

/// Power and output-level control for a codec or amplifier.
pub trait AudioControl {
    /// Bus or peripheral error.
    type Error;

    /// Bring the device up into its streaming configuration.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Take the device out of service. May be a no-op.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Set the main output level, `0.0` (quietest) to `1.0` (loudest).
    fn volume(&mut self, level: f32) -> Result<(), Self::Error>;
}

/// Convert a `0.0..=1.0` level to the `0..=100` percent scale the codec
/// drivers take, rounding to nearest. NaN and negative levels map to 0.
pub fn level_to_percent(level: f32) -> u8 {
    let v = level * 100.0 + 0.5;
    if !(v >= 0.0) {
        0
    } else if v >= 100.0 {
        100
    } else {
        v as u8
    }
}
