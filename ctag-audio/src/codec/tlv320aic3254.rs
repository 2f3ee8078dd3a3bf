//! TLV320AIC3254 audio codec driver.
//!
//! Brings the codec up as an I2S slave at 44.1 kHz with the DAC routed to
//! both the headphone and line outputs, and exposes the two output volume
//! controls.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`] implementation.
//!
//! # Example
//!
//! ```ignore
//! let mut codec = Tlv320aic3254::new(i2c, delay);
//! codec.configure()?;              // Reset + full init table
//! codec.set_headphone_volume(70)?;
//! codec.set_line_out_volume(100)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::registers as reg;
use crate::control::{level_to_percent, AudioControl};

// ── Init table ─────────────────────────────────────────────────────────────

/// One step of the codec initialisation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// Write `value` to `register` on `page`.
    Write { page: u8, register: u8, value: u8 },
    /// Wait for the given number of milliseconds.
    DelayMs(u32),
}

const fn w(page: u8, register: u8, value: u8) -> InitStep {
    InitStep::Write { page, register, value }
}

/// Power-on sequence issued by [`Tlv320aic3254::configure`].
///
/// Software reset, then clocking and serial interface, dividers, output
/// routing, DAC unmute, driver gains, input routing, ADC power.
pub const INIT_SEQUENCE: &[InitStep] = &[
    w(reg::PAGE_0, reg::P0_SOFTWARE_RESET, 0x01),
    InitStep::DelayMs(10),
    // AVDD from internal LDO, analog blocks on, common mode 0.9 V
    w(reg::PAGE_1, reg::P1_POWER_CONFIG_1, 0x08),
    w(reg::PAGE_1, reg::P1_POWER_CONFIG_2, 0x01),
    w(reg::PAGE_1, reg::P1_COMMON_MODE, 0x08),
    // I2S, 20-bit word, BCLK and WCLK are inputs
    w(reg::PAGE_0, reg::P0_AUDIO_IF_1, 0x10),
    w(reg::PAGE_0, reg::P0_DATA_SLOT_OFFSET, 0x00),
    // CODEC_CLKIN = MCLK, PLL off
    w(reg::PAGE_0, reg::P0_CLOCK_MUX, 0x00),
    w(reg::PAGE_0, reg::P0_PLL_P_R, 0x00),
    // DOSR = 128, AOSR = 128
    w(reg::PAGE_0, reg::P0_DOSR_MSB, 0x00),
    w(reg::PAGE_0, reg::P0_DOSR_LSB, 0x80),
    w(reg::PAGE_0, reg::P0_AOSR, 0x80),
    // NDAC = 1, MDAC = 2, NADC = 1, MADC = 2 (all powered)
    w(reg::PAGE_0, reg::P0_NDAC, 0x81),
    w(reg::PAGE_0, reg::P0_MDAC, 0x82),
    w(reg::PAGE_0, reg::P0_NADC, 0x81),
    w(reg::PAGE_0, reg::P0_MADC, 0x82),
    // DAC → LOL/LOR/HPL/HPR
    w(reg::PAGE_1, reg::P1_LOL_ROUTING, 0x08),
    w(reg::PAGE_1, reg::P1_LOR_ROUTING, 0x08),
    w(reg::PAGE_1, reg::P1_HPL_ROUTING, 0x08),
    w(reg::PAGE_1, reg::P1_HPR_ROUTING, 0x08),
    // Unmute DACs at 0 dB digital volume
    w(reg::PAGE_0, reg::P0_DAC_SETUP_2, 0x00),
    w(reg::PAGE_0, reg::P0_LEFT_DAC_VOLUME, 0x00),
    w(reg::PAGE_0, reg::P0_RIGHT_DAC_VOLUME, 0x00),
    // Power both DAC channels, left data → left DAC, right data → right DAC
    w(reg::PAGE_0, reg::P0_DAC_SETUP_1, 0xD4),
    // Power HPL, HPR, LOL, LOR
    w(reg::PAGE_1, reg::P1_OUTPUT_POWER, 0x3C),
    w(reg::PAGE_1, reg::P1_HPL_GAIN, 0x00),
    w(reg::PAGE_1, reg::P1_HPR_GAIN, 0x00),
    w(reg::PAGE_1, reg::P1_LOL_GAIN, 0x06),
    w(reg::PAGE_1, reg::P1_LOR_GAIN, 0x06),
    // IN1 → MICPGA, CM → negative terminals
    w(reg::PAGE_1, reg::P1_LEFT_MICPGA_POS, 0x40),
    w(reg::PAGE_1, reg::P1_RIGHT_MICPGA_POS, 0x40),
    w(reg::PAGE_1, reg::P1_LEFT_MICPGA_NEG, 0x40),
    w(reg::PAGE_1, reg::P1_RIGHT_MICPGA_NEG, 0x40),
    w(reg::PAGE_1, reg::P1_LEFT_MICPGA_VOLUME, 0x00),
    w(reg::PAGE_1, reg::P1_RIGHT_MICPGA_VOLUME, 0x00),
    // Power and unmute both ADC channels
    w(reg::PAGE_0, reg::P0_ADC_SETUP, 0xC0),
    w(reg::PAGE_0, reg::P0_ADC_FINE_GAIN, 0x00),
    InitStep::DelayMs(10),
];

// ── Driver struct ──────────────────────────────────────────────────────────

/// TLV320AIC3254 audio codec driver.
///
/// Generic over I2C bus and delay provider. The delay is used only for the
/// two settling waits in [`configure()`](Self::configure).
pub struct Tlv320aic3254<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Tlv320aic3254<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Default I2C address.
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR;

    /// Create a new driver with the default I2C address (0x18).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::new_with_address(i2c, delay, Self::DEFAULT_ADDRESS)
    }

    /// Create a new driver with a specific I2C address.
    pub fn new_with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    // ── Low-level I2C helpers ──────────────────────────────────────────

    /// Select `page`, then write `value` to `register`.
    ///
    /// Issues two bus transactions: `[PAGE_SELECT, page]` and `[register, value]`.
    pub fn write_register(&mut self, page: u8, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.select_page(page)?;
        self.i2c.write(self.address, &[register, value])
    }

    /// Select `page`, then read back `register`.
    pub fn read_register(&mut self, page: u8, register: u8) -> Result<u8, I2C::Error> {
        self.select_page(page)?;
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn select_page(&mut self, page: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[reg::PAGE_SELECT, page])
    }

    // ── Power-on sequence ──────────────────────────────────────────────

    /// Run [`INIT_SEQUENCE`]: software reset, clocking, routing, power-up.
    ///
    /// Leaves the codec as an I2S slave with the DAC driving the headphone
    /// and line outputs at their default gains. Takes ~20 ms.
    ///
    /// A failed write does not abort the sequence: every step still runs and
    /// the first bus error is returned at the end.
    pub fn configure(&mut self) -> Result<(), I2C::Error> {
        log::debug!("tlv320aic3254@{:#04x}: configuring", self.address);
        let mut first_error = None;
        for step in INIT_SEQUENCE {
            match *step {
                InitStep::Write { page, register, value } => {
                    if let Err(e) = self.write_register(page, register, value) {
                        log::warn!(
                            "tlv320aic3254@{:#04x}: write p{} r{} failed",
                            self.address, page, register
                        );
                        first_error.get_or_insert(e);
                    }
                }
                InitStep::DelayMs(ms) => self.delay.delay_ms(ms),
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                log::debug!("tlv320aic3254@{:#04x}: ready", self.address);
                Ok(())
            }
        }
    }

    // ── Output volume ──────────────────────────────────────────────────

    /// Set headphone volume for both channels (0 = quietest, 100 = loudest).
    ///
    /// Values above 100 are treated as 100.
    pub fn set_headphone_volume(&mut self, volume: u8) -> Result<(), I2C::Error> {
        let gain = Self::volume_to_gain(volume, reg::HP_GAIN_MIN_VOLUME, reg::HP_GAIN_MAX_VOLUME);
        log::debug!("headphone volume {} -> gain {:#04x}", volume.min(100), gain);
        self.write_register(reg::PAGE_1, reg::P1_HPL_GAIN, gain)?;
        self.write_register(reg::PAGE_1, reg::P1_HPR_GAIN, gain)
    }

    /// Set line-out volume for both channels (0 = quietest, 100 = loudest).
    ///
    /// Values above 100 are treated as 100.
    pub fn set_line_out_volume(&mut self, volume: u8) -> Result<(), I2C::Error> {
        let gain = Self::volume_to_gain(volume, reg::LO_GAIN_MIN_VOLUME, reg::LO_GAIN_MAX_VOLUME);
        log::debug!("line-out volume {} -> gain {:#04x}", volume.min(100), gain);
        self.write_register(reg::PAGE_1, reg::P1_LOL_GAIN, gain)?;
        self.write_register(reg::PAGE_1, reg::P1_LOR_GAIN, gain)
    }

    /// Release the I2C bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // ── Private helpers ────────────────────────────────────────────────

    /// Linearly map a 0–100 volume onto `[at_min, at_max]`.
    ///
    /// Integer arithmetic, truncating toward zero. The gain range is inverted
    /// (`at_min > at_max`) for both drivers.
    fn volume_to_gain(volume: u8, at_min: u8, at_max: u8) -> u8 {
        let v = volume.min(100) as i32;
        let span = at_max as i32 - at_min as i32;
        (v * span / 100 + at_min as i32) as u8
    }
}

// ── AudioControl trait implementation ──────────────────────────────────────

impl<I2C, D> AudioControl for Tlv320aic3254<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.configure()
    }

    /// No power-down sequence; the codec keeps running.
    fn disable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drives the headphone amplifier only.
    fn volume(&mut self, level: f32) -> Result<(), Self::Error> {
        self.set_headphone_volume(level_to_percent(level))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
