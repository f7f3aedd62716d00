//! Timeline compilation: frozen containers in, one absolute-time [`CompiledTimeline`] out.
//!
//! [`CompiledTimeline`]: crate::CompiledTimeline

pub mod compiler;
pub mod fingerprint;
pub mod transitions;

pub use compiler::{DefaultTransition, FrozenScene, TimelineParts, compile};
pub use transitions::TransitionTable;
