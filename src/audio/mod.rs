//! Per-track gain envelopes (fades and BGM ducking) evaluated against a compiled timeline.

pub mod envelope;

pub use envelope::{AudioEnvelope, DUCK_RAMP_SECS};
