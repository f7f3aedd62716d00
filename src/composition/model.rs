use crate::{
    effects::transitions::TransitionKind,
    foundation::core::{Fps, Seconds},
    layout::{
        display::DisplayMode,
        position::{FixedPosition, TelopPosition, WipeCorner},
    },
    subtitle::SubtitleData,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Names of the per-character effects applied to a telop.
///
/// Names are looked up in an [`EffectRegistry`](crate::EffectRegistry) at render time; unknown
/// names are kept verbatim and ignored by the renderer.
pub struct TelopEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
}

impl TelopEffects {
    pub fn new(enter: Option<&str>, exit: Option<&str>, emphasis: Option<&str>) -> Self {
        Self {
            enter: enter.map(str::to_owned),
            exit: exit.map(str::to_owned),
            emphasis: emphasis.map(str::to_owned),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    #[default]
    Gradient,
    Box,
    Shadow,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Backdrop drawn behind a telop. Unset fields take renderer defaults (see [`Overlay::resolved`]).
pub struct Overlay {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OverlayKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Gradient height such as `"50%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Box padding, or blur radius for shadows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Overlay {
    pub fn gradient() -> Self {
        Self {
            kind: Some(OverlayKind::Gradient),
            ..Self::default()
        }
    }

    pub fn boxed() -> Self {
        Self {
            kind: Some(OverlayKind::Box),
            ..Self::default()
        }
    }

    pub fn shadow() -> Self {
        Self {
            kind: Some(OverlayKind::Shadow),
            ..Self::default()
        }
    }

    /// Fill every unset field with its default.
    pub fn resolved(&self) -> Self {
        Self {
            kind: Some(self.kind.unwrap_or_default()),
            color: Some(self.color.clone().unwrap_or_else(|| "#000000".to_owned())),
            height: Some(self.height.clone().unwrap_or_else(|| "50%".to_owned())),
            padding: Some(self.padding.unwrap_or(16.0)),
            border_radius: Some(self.border_radius.unwrap_or(8.0)),
            opacity: Some(self.opacity.unwrap_or(0.7)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Text coloring for a telop. Unset fields use renderer defaults (white text, dark shadow).
pub struct TelopColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_stroke_width: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Sound effect played when a telop appears.
pub struct Sfx {
    pub file: String,
    pub volume: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Authored sound effect: a bare file name or `{file, volume}`.
pub enum SfxOption {
    File(String),
    Detailed {
        file: String,
        #[serde(default)]
        volume: Option<f64>,
    },
}

impl SfxOption {
    pub fn normalize(&self) -> Sfx {
        match self {
            Self::File(file) => Sfx {
                file: file.clone(),
                volume: 1.0,
            },
            Self::Detailed { file, volume } => Sfx {
                file: file.clone(),
                volume: volume.unwrap_or(1.0),
            },
        }
    }
}

impl From<&str> for SfxOption {
    fn from(value: &str) -> Self {
        Self::File(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One caption event with a resolved start and duration.
///
/// `start_time` is relative to its container; the compiler only ever shifts it by a constant.
pub struct TelopData {
    pub text: String,
    pub start_time: Seconds,
    pub duration: Seconds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<TelopEffects>,
    #[serde(default)]
    pub position: TelopPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TelopColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfx: Option<Sfx>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl TelopData {
    pub fn end_time(&self) -> Seconds {
        self.start_time + self.duration
    }

    /// `true` while `t` (same time base as `start_time`) lies in `[start, end)`.
    pub fn is_visible_at(&self, t: Seconds) -> bool {
        t >= self.start_time && t < self.end_time()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Whole-container opacity ramp.
pub enum SceneEffect {
    FadeIn,
    FadeOut,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Resolved chroma key for a wipe.
pub struct ChromaKey {
    /// Hex color, `green`/`blue` already expanded.
    pub color: String,
    pub similarity: f64,
    pub smoothness: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Picture-in-picture video inside a scene.
pub struct WipeData {
    pub file: String,
    pub position: WipeCorner,
    /// Fraction of the frame (0..1).
    pub size: f64,
    pub volume: f64,
    pub trim_before: Seconds,
    pub border_radius: f64,
    pub margin: f64,
    /// Scene-relative appearance time.
    pub start_time: Seconds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chroma_key: Option<ChromaKey>,
}

impl WipeData {
    /// Explicit duration, or the remainder of a container lasting `container_duration`.
    pub fn effective_duration(&self, container_duration: Seconds) -> Seconds {
        self.duration
            .unwrap_or_else(|| (container_duration - self.start_time).max(0.0))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An audio track. `start_time` is container-relative until compiled, absolute afterwards.
pub struct AudioData {
    pub file: String,
    pub start_time: Seconds,
    /// `None` plays to the end of the movie (or loops).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    pub volume: f64,
    pub fade_in: Seconds,
    pub fade_out: Seconds,
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Volume while scene content is playing (BGM only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ducking: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    tag = "type",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum FixedContent {
    Image {
        /// Image path.
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
    Text {
        content: String,
        font_size: f64,
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        padding: f64,
        border_radius: f64,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Always-visible logo or label, scoped to a scene or to the whole movie.
pub struct FixedElement {
    #[serde(flatten)]
    pub content: FixedContent,
    pub position: FixedPosition,
    pub margin: f64,
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaRef {
    Video(String),
    Image(String),
}

impl MediaRef {
    const IMAGE_EXTENSIONS: [&'static str; 7] =
        [".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp", ".svg"];

    /// Classify `path` by its final extension (case-insensitive). Anything that is not a known
    /// image extension is treated as video.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        let ext = lower.rfind('.').map(|i| &lower[i..]).unwrap_or("");
        if Self::IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image(path.to_owned())
        } else {
            Self::Video(path.to_owned())
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Video(p) | Self::Image(p) => p,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A frozen scene. `start_time` is absolute and `duration` includes any incoming transition
/// padding once compiled.
pub struct SceneData {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub duration: Seconds,
    pub start_time: Seconds,
    pub trim_before: Seconds,
    pub effects: Vec<SceneEffect>,
    pub telops: Vec<TelopData>,
    pub wipes: Vec<WipeData>,
    pub audios: Vec<AudioData>,
    pub fixed_elements: Vec<FixedElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgm_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(rename = "loop")]
    pub looped: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl SceneData {
    pub fn end_time(&self) -> Seconds {
        self.start_time + self.duration
    }

    /// Media seek-out point.
    pub fn trim_end(&self) -> Seconds {
        self.trim_before + self.duration
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A frozen opening or ending card. Telop times stay container-relative.
pub struct OpeningEndingData {
    pub start_time: Seconds,
    pub duration: Seconds,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<SceneEffect>,
    pub telops: Vec<TelopData>,
    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl OpeningEndingData {
    pub fn end_time(&self) -> Seconds {
        self.start_time + self.duration
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the flat transition list handed to the renderer.
pub struct ResolvedTransition {
    pub from: String,
    pub to: String,
    pub duration: Seconds,
    #[serde(rename = "transition")]
    pub kind: TransitionKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The flattened, absolute-time schedule produced by [`Movie::build`](crate::Movie::build).
pub struct CompiledTimeline {
    pub fps: Fps,
    pub width: u32,
    pub height: u32,
    pub duration_in_frames: u64,
    pub total_duration: Seconds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<OpeningEndingData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<OpeningEndingData>,
    pub scenes: Vec<SceneData>,
    pub transitions: Vec<ResolvedTransition>,
    pub audios: Vec<AudioData>,
    pub fixed_elements: Vec<FixedElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitles: Option<SubtitleData>,
    /// Non-fatal findings from compilation (dangling or non-adjacent transitions).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
