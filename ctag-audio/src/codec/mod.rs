//! TLV320AIC3254 audio codec driver module.
//!
//! Brings up the TI TLV320AIC3254 stereo codec over I2C and controls its
//! headphone and line output gains.
//!
//! # Feature gate
//!
//! This module is available when the `tlv320aic3254` feature is enabled (on by default).

pub(crate) mod registers;
mod tlv320aic3254;

pub use tlv320aic3254::{InitStep, Tlv320aic3254, INIT_SEQUENCE};
