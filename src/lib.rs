//! Reeltime is a declarative authoring layer for timed audiovisual compositions.
//!
//! Authors assemble scenes, captions ("telops"), transitions and audio with a [`Movie`] builder
//! (or a JSON [`MovieScript`]); [`Movie::build`] resolves every relative timing into one
//! absolute, frame-accurate [`CompiledTimeline`] that a renderer consumes frame by frame.
//!
//! - Build containers with [`Movie::scene`], [`Movie::opening`] and [`Movie::ending`]
//! - Compile once with [`Movie::build`]
//! - Evaluate per-frame helpers: [`AudioEnvelope`], [`resolve_display`], [`stack_offset`],
//!   [`EffectRegistry`]
#![forbid(unsafe_code)]

mod foundation;

pub mod audio;
pub mod compile;
pub mod composition;
pub mod effects;
pub mod layout;
pub mod subtitle;

pub use crate::foundation::core::{
    Canvas, Fps, FrameIndex, Point, Rect, Seconds, Size, VideoSize,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::audio::AudioEnvelope;
pub use crate::compile::TransitionTable;
pub use crate::composition::dsl::{
    BgmOptions, DefaultTransitionOptions, Movie, MovieOptions, SceneSource,
};
pub use crate::composition::estimate::{estimate_duration, estimate_duration_paced};
pub use crate::composition::model::{
    AudioData, CompiledTimeline, FixedContent, FixedElement, MediaRef, OpeningEndingData,
    Overlay, OverlayKind, ResolvedTransition, SceneData, SceneEffect, Sfx, SfxOption,
    TelopColor, TelopData, TelopEffects, WipeData,
};
pub use crate::composition::opening::{OpeningEndingBuilder, OpeningEndingOptions};
pub use crate::composition::scene::{
    AudioOptions, ChromaKeyOption, ChromaKeyOptions, FixedImageOptions, FixedTextOptions,
    SceneBuilder, SceneOptions, TransitionOptions, WipeOptions,
};
pub use crate::composition::script::MovieScript;
pub use crate::composition::telop::{TelopDefaults, TelopOptions};
pub use crate::effects::registry::{EffectCategory, EffectParams, EffectRegistry, StyleDelta};
pub use crate::effects::transitions::{Direction, TransitionKind};
pub use crate::layout::display::{DisplayGeometry, DisplayMode, resolve_display};
pub use crate::layout::position::{FixedPosition, TelopPosition, WipeCorner};
pub use crate::layout::stack::{estimate_telop_height, stack_offset};
pub use crate::subtitle::{
    Caption, CaptionLoader, FsCaptionLoader, SubtitleData, SubtitleOptions, SubtitleSource,
};
