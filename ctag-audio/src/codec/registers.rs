//! TLV320AIC3254 register addresses and bitfield notes.
//!
//! Registers are 8-bit and live behind an 8-bit page-select register at
//! address 0 of every page. Only the pages and registers touched by the
//! driver are listed here.

// A few registers are named for completeness of the init table but are only
// referenced from tests.
#![allow(dead_code)]

// ── I2C addresses ──────────────────────────────────────────────────────────

/// Fixed 7-bit I2C address of the TLV320AIC3254.
pub const I2C_ADDR: u8 = 0x18;

// ── Paging ─────────────────────────────────────────────────────────────────

/// Page-select register, present at address 0 on every page.
pub const PAGE_SELECT: u8 = 0x00;

/// Page 0: clocks, serial interface, digital processing blocks.
pub const PAGE_0: u8 = 0;

/// Page 1: analog power, routing, output driver gains.
pub const PAGE_1: u8 = 1;

// ── Page 0 ─────────────────────────────────────────────────────────────────

/// Software reset. Writing 1 resets all registers; needs ~1 ms to settle.
pub const P0_SOFTWARE_RESET: u8 = 1;

/// Clock setting 1: CODEC_CLKIN multiplexer.
pub const P0_CLOCK_MUX: u8 = 4;

/// Clock setting 2: PLL P and R values, PLL power.
pub const P0_PLL_P_R: u8 = 5;

/// NDAC divider. Bit 7 powers the divider.
pub const P0_NDAC: u8 = 11;

/// MDAC divider. Bit 7 powers the divider.
pub const P0_MDAC: u8 = 12;

/// DAC oversampling ratio, MSB.
pub const P0_DOSR_MSB: u8 = 13;

/// DAC oversampling ratio, LSB.
pub const P0_DOSR_LSB: u8 = 14;

/// NADC divider. Bit 7 powers the divider.
pub const P0_NADC: u8 = 18;

/// MADC divider. Bit 7 powers the divider.
pub const P0_MADC: u8 = 19;

/// ADC oversampling ratio.
pub const P0_AOSR: u8 = 20;

/// Audio interface setting 1.
/// - Bits 7:6: interface (0 = I2S)
/// - Bits 5:4: word length (1 = 20 bit, 0 = 16 bit)
/// - Bit 3: BCLK direction
/// - Bit 2: WCLK direction
pub const P0_AUDIO_IF_1: u8 = 27;

/// Audio interface data slot offset.
pub const P0_DATA_SLOT_OFFSET: u8 = 28;

/// DAC channel setup 1: channel power and data path.
pub const P0_DAC_SETUP_1: u8 = 63;

/// DAC channel setup 2: mute and volume control coupling.
pub const P0_DAC_SETUP_2: u8 = 64;

/// Left DAC digital volume (two's complement, 0.5 dB steps).
pub const P0_LEFT_DAC_VOLUME: u8 = 65;

/// Right DAC digital volume (two's complement, 0.5 dB steps).
pub const P0_RIGHT_DAC_VOLUME: u8 = 66;

/// ADC channel setup: channel power.
pub const P0_ADC_SETUP: u8 = 81;

/// ADC fine gain: mute bits.
pub const P0_ADC_FINE_GAIN: u8 = 82;

// ── Page 1 ─────────────────────────────────────────────────────────────────

/// Power configuration 1: AVDD/DVDD weak connection.
pub const P1_POWER_CONFIG_1: u8 = 1;

/// Power configuration 2: analog block and LDO power.
pub const P1_POWER_CONFIG_2: u8 = 2;

/// Output driver power control (HPL, HPR, LOL, LOR, MAL, MAR).
pub const P1_OUTPUT_POWER: u8 = 9;

/// Common mode control.
pub const P1_COMMON_MODE: u8 = 10;

/// HPL routing selection.
pub const P1_HPL_ROUTING: u8 = 12;

/// HPR routing selection.
pub const P1_HPR_ROUTING: u8 = 13;

/// LOL routing selection.
pub const P1_LOL_ROUTING: u8 = 14;

/// LOR routing selection.
pub const P1_LOR_ROUTING: u8 = 15;

/// HPL driver gain.
pub const P1_HPL_GAIN: u8 = 16;

/// HPR driver gain.
pub const P1_HPR_GAIN: u8 = 17;

/// LOL driver gain.
pub const P1_LOL_GAIN: u8 = 18;

/// LOR driver gain.
pub const P1_LOR_GAIN: u8 = 19;

/// Left MICPGA positive terminal input routing.
pub const P1_LEFT_MICPGA_POS: u8 = 52;

/// Left MICPGA negative terminal input routing.
pub const P1_LEFT_MICPGA_NEG: u8 = 54;

/// Right MICPGA positive terminal input routing.
pub const P1_RIGHT_MICPGA_POS: u8 = 55;

/// Right MICPGA negative terminal input routing.
pub const P1_RIGHT_MICPGA_NEG: u8 = 57;

/// Left MICPGA volume.
pub const P1_LEFT_MICPGA_VOLUME: u8 = 59;

/// Right MICPGA volume.
pub const P1_RIGHT_MICPGA_VOLUME: u8 = 60;

// ── Volume ranges ──────────────────────────────────────────────────────────

/// Headphone driver gain written for volume 0.
pub const HP_GAIN_MIN_VOLUME: u8 = 0x3B;

/// Headphone driver gain written for volume 100.
pub const HP_GAIN_MAX_VOLUME: u8 = 0x14;

/// Line-out driver gain written for volume 0.
pub const LO_GAIN_MIN_VOLUME: u8 = 0x3A;

/// Line-out driver gain written for volume 100.
pub const LO_GAIN_MAX_VOLUME: u8 = 0x1D;
