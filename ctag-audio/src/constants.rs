/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Sample rate as `f32`, for oscillator phase math.
pub const SAMPLE_RATE_F32: f32 = SAMPLE_RATE as f32;

/// Stereo frames rendered per engine iteration.
pub const BLOCK_FRAMES: usize = 256;

/// Interleaved output channels (left, right).
pub const CHANNELS: usize = 2;

/// Number of `i16` values in one interleaved output block.
pub const BLOCK_SAMPLES: usize = BLOCK_FRAMES * CHANNELS;
