use crate::{
    compile::transitions::{TransitionTable, transition},
    composition::{
        model::{
            AudioData, ChromaKey, FixedContent, FixedElement, MediaRef, SceneData, SceneEffect,
            WipeData,
        },
        telop::{TelopDefaults, TelopOptions, TelopSequencer},
    },
    effects::transitions::TransitionKind,
    foundation::core::Seconds,
    layout::{
        display::DisplayMode,
        position::{FixedPosition, WipeCorner},
    },
};

/// Transition length used when a declaration does not give one.
pub const DEFAULT_TRANSITION_SECS: Seconds = 3.0;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneOptions {
    /// Scene key; derived from the media name and index when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Fixed length; otherwise the latest telop end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(rename = "effect", skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<SceneEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_before: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgm_volume: Option<f64>,
    /// Defaults to looping unless `trim_before` is set.
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    pub telop: TelopDefaults,
}

impl SceneOptions {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn duration(mut self, secs: Seconds) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn effect(mut self, effect: SceneEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn trim_before(mut self, secs: Seconds) -> Self {
        self.trim_before = Some(secs);
        self
    }

    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = Some(looped);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn display_mode(mut self, mode: impl Into<DisplayMode>) -> Self {
        self.display_mode = Some(mode.into());
        self
    }

    pub fn telop(mut self, defaults: TelopDefaults) -> Self {
        self.telop = defaults;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChromaKeyOptions {
    /// `green`, `blue` or a hex color. Defaults to green.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// `true` for the default green key, or explicit settings.
pub enum ChromaKeyOption {
    Enabled(bool),
    Custom(ChromaKeyOptions),
}

impl ChromaKeyOption {
    fn resolve(&self) -> Option<ChromaKey> {
        let opts = match self {
            Self::Enabled(false) => return None,
            Self::Enabled(true) => ChromaKeyOptions::default(),
            Self::Custom(opts) => opts.clone(),
        };
        let color = match opts.color.as_deref().unwrap_or("green") {
            "green" => "#00ff00".to_owned(),
            "blue" => "#0000ff".to_owned(),
            other => other.to_owned(),
        };
        Some(ChromaKey {
            color,
            similarity: opts.similarity.unwrap_or(0.4),
            smoothness: opts.smoothness.unwrap_or(0.1),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WipeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<WipeCorner>,
    /// Fraction of the frame, default 0.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_before: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    /// Scene-relative appearance time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroma_key: Option<ChromaKeyOption>,
}

impl WipeOptions {
    fn into_wipe(self, file: &str) -> WipeData {
        WipeData {
            file: file.to_owned(),
            position: self.position.unwrap_or_default(),
            size: self.size.unwrap_or(0.3),
            volume: self.volume.unwrap_or(1.0),
            trim_before: self.trim_before.unwrap_or(0.0),
            border_radius: self.border_radius.unwrap_or(12.0),
            margin: self.margin.unwrap_or(20.0),
            start_time: self.before.unwrap_or(0.0),
            duration: self.duration,
            chroma_key: self.chroma_key.as_ref().and_then(ChromaKeyOption::resolve),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<Seconds>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
}

impl AudioOptions {
    /// Track starting at 0 (container-relative) with no fixed duration.
    pub(crate) fn into_audio(self, file: &str) -> AudioData {
        AudioData {
            file: file.to_owned(),
            start_time: 0.0,
            duration: None,
            volume: self.volume.unwrap_or(1.0),
            fade_in: self.fade_in.unwrap_or(0.0),
            fade_out: self.fade_out.unwrap_or(0.0),
            looped: self.looped.unwrap_or(false),
            ducking: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionOptions {
    /// Defaults to three seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    /// Defaults to `fade`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionKind>,
}

impl TransitionOptions {
    pub fn new(duration: Seconds, kind: TransitionKind) -> Self {
        Self {
            duration: Some(duration),
            transition: Some(kind),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FixedImageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<FixedPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl FixedImageOptions {
    pub(crate) fn into_element(self, file: &str) -> FixedElement {
        FixedElement {
            content: FixedContent::Image {
                content: file.to_owned(),
                width: self.width,
                height: self.height,
            },
            position: self.position.unwrap_or_default(),
            margin: self.margin.unwrap_or(20.0),
            opacity: self.opacity.unwrap_or(1.0),
            scale: self.scale.unwrap_or(1.0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixedTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<FixedPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

impl FixedTextOptions {
    pub(crate) fn into_element(self, text: &str) -> FixedElement {
        FixedElement {
            content: FixedContent::Text {
                content: text.to_owned(),
                font_size: self.font_size.unwrap_or(24.0),
                color: self.color.unwrap_or_else(|| "#ffffff".to_owned()),
                background_color: self.background_color,
                padding: self.padding.unwrap_or(8.0),
                border_radius: self.border_radius.unwrap_or(4.0),
            },
            position: self.position.unwrap_or_default(),
            margin: self.margin.unwrap_or(20.0),
            opacity: self.opacity.unwrap_or(1.0),
            scale: self.scale.unwrap_or(1.0),
        }
    }
}

/// Open scene under construction. Frozen into a [`SceneData`] by [`Movie::build`](crate::Movie::build).
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    key: String,
    media: Option<MediaRef>,
    explicit_duration: Option<Seconds>,
    trim_before: Seconds,
    effects: Vec<SceneEffect>,
    background_color: Option<String>,
    volume: Option<f64>,
    bgm_volume: Option<f64>,
    looped: bool,
    display_mode: DisplayMode,
    telops: TelopSequencer,
    wipes: Vec<WipeData>,
    audios: Vec<AudioData>,
    fixed_elements: Vec<FixedElement>,
    transitions: TransitionTable,
}

impl SceneBuilder {
    /// `options.telop` must already carry any inherited movie defaults. Scene telops do not
    /// inherit a default color; only opening and ending cards do.
    pub fn new(key: impl Into<String>, media: Option<MediaRef>, options: SceneOptions) -> Self {
        let trim_before = options.trim_before.unwrap_or(0.0);
        let telop_defaults = TelopDefaults {
            color: None,
            ..options.telop
        };
        Self {
            key: key.into(),
            media,
            explicit_duration: options.duration,
            trim_before,
            effects: options.effects,
            background_color: options.background_color,
            volume: options.volume,
            bgm_volume: options.bgm_volume,
            looped: options.looped.unwrap_or(trim_before == 0.0),
            display_mode: options.display_mode.unwrap_or_default(),
            telops: TelopSequencer::new(telop_defaults),
            wipes: Vec::new(),
            audios: Vec::new(),
            fixed_elements: Vec::new(),
            transitions: TransitionTable::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    /// Explicit duration, else the latest telop end (0 without telops).
    ///
    /// Recomputed on every call since telops may still be added.
    pub fn duration(&self) -> Seconds {
        self.explicit_duration
            .unwrap_or_else(|| self.telops.content_duration())
    }

    pub fn telop(&mut self, text: &str, options: TelopOptions) -> &mut Self {
        self.telops.add(text, &options);
        self
    }

    /// Batch form: `starts[i]` is the scene-relative start of `texts[i]`.
    pub fn telops<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        starts: &[Seconds],
        options: TelopOptions,
    ) -> &mut Self {
        self.telops.add_batch(texts, starts, &options);
        self
    }

    pub fn wipe(&mut self, file: &str, options: WipeOptions) -> &mut Self {
        self.wipes.push(options.into_wipe(file));
        self
    }

    /// Scene-scoped audio. Non-looping tracks last as long as the scene, resolved at build time.
    pub fn audio(&mut self, file: &str, options: AudioOptions) -> &mut Self {
        self.audios.push(options.into_audio(file));
        self
    }

    /// Declare the transition into the scene keyed `to`. A later call for the same target replaces
    /// this one.
    pub fn transition_to(&mut self, to: &str, options: TransitionOptions) -> &mut Self {
        self.transitions.upsert(transition(
            self.key.clone(),
            to,
            options.duration.unwrap_or(DEFAULT_TRANSITION_SECS),
            options.transition.unwrap_or_default(),
        ));
        self
    }

    pub fn fixed_image(&mut self, file: &str, options: FixedImageOptions) -> &mut Self {
        self.fixed_elements.push(options.into_element(file));
        self
    }

    pub fn fixed_text(&mut self, text: &str, options: FixedTextOptions) -> &mut Self {
        self.fixed_elements.push(options.into_element(text));
        self
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Snapshot as a plain record with scene-relative times and `start_time` 0.
    pub fn freeze(&self) -> SceneData {
        let duration = self.duration();
        let audios = self
            .audios
            .iter()
            .map(|a| AudioData {
                duration: if a.looped { None } else { Some(duration) },
                ..a.clone()
            })
            .collect();

        SceneData {
            key: self.key.clone(),
            media: self.media.clone(),
            background_color: self.background_color.clone(),
            duration,
            start_time: 0.0,
            trim_before: self.trim_before,
            effects: self.effects.clone(),
            telops: self.telops.telops().to_vec(),
            wipes: self.wipes.clone(),
            audios,
            fixed_elements: self.fixed_elements.clone(),
            bgm_volume: self.bgm_volume,
            volume: self.volume,
            looped: self.looped,
            display_mode: self.display_mode,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/scene.rs"]
mod tests;
