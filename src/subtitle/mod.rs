//! Movie-wide subtitle track: SRT import, speaker styling and per-frame caption lookup.

pub mod loader;
pub mod speaker;
pub mod srt;

use std::collections::BTreeMap;

use crate::{
    composition::model::{Overlay, TelopColor, TelopEffects},
    foundation::{core::Fps, math::interpolate_clamped},
    layout::position::TelopPosition,
};

pub use loader::{CaptionLoader, FsCaptionLoader};
pub use speaker::{SpeakerLine, fill_speaker, parse_speaker};
pub use srt::{Caption, parse_srt};

const DEFAULT_SUBTITLE_FONT_SIZE: f64 = 42.0;
const CAPTION_FADE_SECS: f64 = 0.2;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Style overrides for one speaker id.
pub struct SpeakerStyle {
    /// Display name replacing the raw id (`SPEAKER_00` -> `Tanaka`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TelopColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TelopPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubtitleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<TelopEffects>,
    /// Defaults to `bottom 10%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TelopPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TelopColor>,
    /// Defaults to 42.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub speakers: BTreeMap<String, SpeakerStyle>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_speaker_name: bool,
    /// Text placed before each caption; `{{$speaker}}` expands to the speaker name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
/// A caption ready to draw.
pub struct CaptionView {
    pub text: String,
    pub speaker: Option<String>,
    pub color: Option<TelopColor>,
    pub position: TelopPosition,
    pub font_size: f64,
}

impl SubtitleOptions {
    /// Apply speaker parsing, speaker styles and prefix/suffix templates to `raw` caption text.
    pub fn present(&self, raw: &str) -> CaptionView {
        let line = parse_speaker(raw);
        let style = line.speaker.and_then(|id| self.speakers.get(id));
        let speaker = style
            .and_then(|s| s.name.as_deref())
            .or(line.speaker)
            .map(str::to_owned);

        let prefix = self.prefix.as_deref().filter(|s| !s.is_empty());
        let suffix = self.suffix.as_deref().filter(|s| !s.is_empty());
        let text = if prefix.is_some() || suffix.is_some() {
            format!(
                "{}{}{}",
                prefix.map(|p| fill_speaker(p, speaker.as_deref())).unwrap_or_default(),
                line.content,
                suffix.map(|s| fill_speaker(s, speaker.as_deref())).unwrap_or_default(),
            )
        } else if let (true, Some(name)) = (self.show_speaker_name, speaker.as_deref()) {
            format!("{name}: {}", line.content)
        } else {
            line.content.to_owned()
        };

        CaptionView {
            text,
            color: style
                .and_then(|s| s.color.clone())
                .or_else(|| self.color.clone()),
            position: style
                .and_then(|s| s.position)
                .or(self.position)
                .unwrap_or_else(|| TelopPosition::parse("bottom 10%")),
            font_size: style
                .and_then(|s| s.font_size)
                .or(self.font_size)
                .unwrap_or(DEFAULT_SUBTITLE_FONT_SIZE),
            speaker,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubtitleSource {
    /// Captions parsed at build time.
    #[serde(rename = "captions")]
    Inline(Vec<Caption>),
    /// An `.srt` path resolved later through a [`CaptionLoader`].
    File(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleData {
    pub source: SubtitleSource,
    #[serde(default)]
    pub options: SubtitleOptions,
}

impl SubtitleData {
    /// Inputs ending in `.srt` are file references; anything else is parsed as SRT text now.
    pub fn from_input(input: &str, options: SubtitleOptions) -> Self {
        let source = if input.trim().ends_with(".srt") {
            SubtitleSource::File(input.trim().to_owned())
        } else {
            SubtitleSource::Inline(parse_srt(input))
        };
        Self { source, options }
    }

    /// Captions for rendering. Loader failures are logged and yield no captions.
    pub fn resolve_captions(&self, loader: &dyn CaptionLoader) -> Vec<Caption> {
        match &self.source {
            SubtitleSource::Inline(caps) => caps.clone(),
            SubtitleSource::File(path) => match loader.load(path) {
                Ok(caps) => caps,
                Err(err) => {
                    tracing::error!(path = %path, error = %err, "failed to load caption file");
                    Vec::new()
                }
            },
        }
    }
}

/// First caption active at `ms`.
pub fn caption_at(captions: &[Caption], ms: f64) -> Option<&Caption> {
    captions.iter().find(|c| c.contains(ms))
}

/// Caption opacity at `frame`: 0.2 s fade in after the start and fade out before the end.
pub fn caption_opacity(caption: &Caption, frame: f64, fps: Fps) -> f64 {
    let rate = fps.as_f64();
    let start = (caption.start_ms as f64 / 1000.0 * rate).round();
    let end = (caption.end_ms as f64 / 1000.0 * rate).round();
    let fade = (rate * CAPTION_FADE_SECS).round();
    let fade_in = interpolate_clamped(frame, (start, start + fade), (0.0, 1.0));
    let fade_out = interpolate_clamped(frame, (end - fade, end), (1.0, 0.0));
    fade_in.min(fade_out)
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/mod.rs"]
mod tests;
