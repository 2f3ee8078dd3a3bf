//! Output side of the audio path.
//!
//! ## Components
//!
//! | Item | Description |
//! |------|-------------|
//! | [`AudioSink`] | Blocking consumer of interleaved stereo blocks |
//! | [`IoSink`] | `AudioSink` over any `embedded_io::Write` byte stream |

pub mod sink;

pub use sink::{AudioSink, IoSink};
