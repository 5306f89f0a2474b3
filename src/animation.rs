//! Easing, arc-length sampling, and the playback state machine.

pub mod driver;
pub mod ease;
pub mod sampler;
