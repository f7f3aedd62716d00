use crate::{
    compile::{
        DefaultTransition, FrozenScene, TimelineParts, TransitionTable, compile,
        transitions::transition,
    },
    composition::{
        model::{AudioData, CompiledTimeline, FixedElement, MediaRef},
        opening::{OpeningEndingBuilder, OpeningEndingOptions},
        scene::{
            AudioOptions, DEFAULT_TRANSITION_SECS, FixedImageOptions, FixedTextOptions,
            SceneBuilder, SceneOptions,
        },
        telop::TelopDefaults,
    },
    effects::transitions::TransitionKind,
    foundation::core::{Canvas, Fps, Seconds, VideoSize},
    subtitle::{SubtitleData, SubtitleOptions},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Movie-wide transition applied between adjacent scenes that declare none.
pub struct DefaultTransitionOptions {
    /// No default transition unless a kind is given.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransitionKind>,
    /// Defaults to three seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieOptions {
    /// Defaults to 30/1. Accepts a number or `{num, den}` in JSON.
    #[serde(
        deserialize_with = "fps_serde::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub fps: Option<Fps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Preset canvas; overrides `width`/`height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<VideoSize>,
    /// Telop defaults inherited by every container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telop: Option<TelopDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<DefaultTransitionOptions>,
}

impl MovieOptions {
    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn size(mut self, size: VideoSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn telop(mut self, defaults: TelopDefaults) -> Self {
        self.telop = Some(defaults);
        self
    }

    pub fn default_transition(mut self, kind: TransitionKind, duration: Option<Seconds>) -> Self {
        self.transition = Some(DefaultTransitionOptions {
            kind: Some(kind),
            duration,
        });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BgmOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Defaults to two seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<Seconds>,
    /// Defaults to two seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<Seconds>,
    /// Volume while scenes play. Defaults to 30% of `volume`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ducking: Option<f64>,
}

/// What a scene shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SceneSource {
    /// Video or image path, classified by extension.
    Media(String),
    /// No media; telops over the background color.
    #[default]
    Blank,
}

impl From<&str> for SceneSource {
    fn from(value: &str) -> Self {
        Self::Media(value.to_owned())
    }
}

impl From<String> for SceneSource {
    fn from(value: String) -> Self {
        Self::Media(value)
    }
}

impl From<Option<&str>> for SceneSource {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Blank, Self::from)
    }
}

/// Top-level builder: collects containers and tracks, then compiles them with [`Movie::build`].
#[derive(Clone, Debug)]
pub struct Movie {
    fps: Fps,
    canvas: Canvas,
    telop_defaults: TelopDefaults,
    default_transition: Option<DefaultTransition>,
    opening: Option<OpeningEndingBuilder>,
    ending: Option<OpeningEndingBuilder>,
    scenes: Vec<SceneBuilder>,
    legacy_transitions: TransitionTable,
    audios: Vec<AudioData>,
    fixed_elements: Vec<FixedElement>,
    subtitles: Option<SubtitleData>,
}

impl Default for Movie {
    fn default() -> Self {
        Self::new(MovieOptions::default())
    }
}

impl Movie {
    pub fn new(options: MovieOptions) -> Self {
        let canvas = match options.size {
            Some(preset) => preset.canvas(),
            None => {
                let base = Canvas::default();
                Canvas {
                    width: options.width.unwrap_or(base.width),
                    height: options.height.unwrap_or(base.height),
                }
            }
        };
        let default_transition = options.transition.and_then(|t| {
            t.kind.map(|kind| DefaultTransition {
                kind,
                duration: t.duration.unwrap_or(DEFAULT_TRANSITION_SECS),
            })
        });

        Self {
            fps: options.fps.unwrap_or_default(),
            canvas,
            telop_defaults: options.telop.unwrap_or_default(),
            default_transition,
            opening: None,
            ending: None,
            scenes: Vec::new(),
            legacy_transitions: TransitionTable::new(),
            audios: Vec::new(),
            fixed_elements: Vec::new(),
            subtitles: None,
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Set the opening card, replacing any previous one. Without `duration` it lasts as long as
    /// its telops.
    pub fn opening(
        &mut self,
        duration: Option<Seconds>,
        mut options: OpeningEndingOptions,
    ) -> &mut OpeningEndingBuilder {
        options.telop = self.telop_defaults.overridden_by(&options.telop);
        self.opening.insert(OpeningEndingBuilder::new(duration, options))
    }

    /// Set the ending card, replacing any previous one.
    pub fn ending(
        &mut self,
        duration: Option<Seconds>,
        mut options: OpeningEndingOptions,
    ) -> &mut OpeningEndingBuilder {
        options.telop = self.telop_defaults.overridden_by(&options.telop);
        self.ending.insert(OpeningEndingBuilder::new(duration, options))
    }

    /// Append a scene. Without `options.key` its key is the media path without its extension
    /// (or `scene`), suffixed with the scene's index: `intro.mp4` as the first scene becomes
    /// `intro_0`.
    pub fn scene(
        &mut self,
        source: impl Into<SceneSource>,
        mut options: SceneOptions,
    ) -> &mut SceneBuilder {
        let media = match source.into() {
            SceneSource::Media(path) => Some(MediaRef::from_path(&path)),
            SceneSource::Blank => None,
        };
        let key = options
            .key
            .take()
            .unwrap_or_else(|| scene_key(media.as_ref(), self.scenes.len()));
        options.telop = self.telop_defaults.overridden_by(&options.telop);

        tracing::debug!(key = %key, "add scene");
        self.scenes.push(SceneBuilder::new(key, media, options));
        let last = self.scenes.len() - 1;
        &mut self.scenes[last]
    }

    pub fn scene_mut(&mut self, key: &str) -> Option<&mut SceneBuilder> {
        self.scenes.iter_mut().find(|s| s.key() == key)
    }

    pub fn scenes(&self) -> &[SceneBuilder] {
        &self.scenes
    }

    /// Movie-wide audio from the start to the end of the movie.
    pub fn audio(&mut self, file: &str, options: AudioOptions) -> &mut Self {
        self.audios.push(options.into_audio(file));
        self
    }

    /// Looping background music that ducks while scenes play.
    pub fn bgm(&mut self, file: &str, options: BgmOptions) -> &mut Self {
        let volume = options.volume.unwrap_or(1.0);
        self.audios.push(AudioData {
            file: file.to_owned(),
            start_time: 0.0,
            duration: None,
            volume,
            fade_in: options.fade_in.unwrap_or(2.0),
            fade_out: options.fade_out.unwrap_or(2.0),
            looped: true,
            ducking: Some(options.ducking.unwrap_or(volume * 0.3)),
        });
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

    /// Attach a subtitle track. Input ending in `.srt` is a file reference; anything else is
    /// parsed as SRT text right away.
    pub fn subtitle(&mut self, input: &str, options: SubtitleOptions) -> &mut Self {
        self.subtitles = Some(SubtitleData::from_input(input, options));
        self
    }

    #[deprecated(note = "use SceneBuilder::transition_to")]
    pub fn cross_fade(
        &mut self,
        from: &str,
        to: &str,
        duration: Option<Seconds>,
        kind: Option<TransitionKind>,
    ) -> &mut Self {
        tracing::warn!(
            from,
            to,
            "Movie::cross_fade is deprecated; use SceneBuilder::transition_to"
        );
        self.register_transition(from, to, duration, kind)
    }

    #[deprecated(note = "use SceneBuilder::transition_to")]
    pub fn transition(
        &mut self,
        from: &str,
        to: &str,
        kind: TransitionKind,
        duration: Option<Seconds>,
    ) -> &mut Self {
        tracing::warn!(
            from,
            to,
            "Movie::transition is deprecated; use SceneBuilder::transition_to"
        );
        self.register_transition(from, to, duration, Some(kind))
    }

    /// Movie-level registry shared by the deprecated methods and scripts. First declaration of a
    /// pair wins.
    pub(crate) fn register_transition(
        &mut self,
        from: &str,
        to: &str,
        duration: Option<Seconds>,
        kind: Option<TransitionKind>,
    ) -> &mut Self {
        self.legacy_transitions.insert_if_absent(transition(
            from,
            to,
            duration.unwrap_or(DEFAULT_TRANSITION_SECS),
            kind.unwrap_or_default(),
        ));
        self
    }

    /// Freeze every builder and compile the absolute timeline. The movie stays usable, so
    /// repeated builds of the same movie are identical.
    #[tracing::instrument(skip(self), fields(scenes = self.scenes.len()))]
    pub fn build(&self) -> CompiledTimeline {
        let scenes = self
            .scenes
            .iter()
            .map(|s| FrozenScene {
                data: s.freeze(),
                outgoing: s.transitions().clone(),
            })
            .collect();

        compile(TimelineParts {
            fps: self.fps,
            canvas: self.canvas,
            opening: self.opening.as_ref().map(|o| o.freeze(0.0)),
            // Placed by the compiler once the scenes are laid out.
            ending: self.ending.as_ref().map(|e| e.freeze(0.0)),
            scenes,
            legacy_transitions: self.legacy_transitions.clone(),
            default_transition: self.default_transition,
            audios: self.audios.clone(),
            fixed_elements: self.fixed_elements.clone(),
            subtitles: self.subtitles.clone(),
        })
    }
}

fn scene_key(media: Option<&MediaRef>, index: usize) -> String {
    let base = match media.map(MediaRef::path) {
        Some(path) => path.rfind('.').map_or(path, |dot| &path[..dot]),
        None => "scene",
    };
    format!("{base}_{index}")
}

mod fps_serde {
    use serde::Deserialize;

    use crate::foundation::core::Fps;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FpsRepr {
        Number(f64),
        Ratio { num: u32, den: u32 },
    }

    /// `30`, `29.97` or `{"num": 30000, "den": 1001}`.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Fps>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let Some(repr) = Option::<FpsRepr>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let fps = match repr {
            FpsRepr::Ratio { num, den } => Fps::new(num, den),
            FpsRepr::Number(n) if n.fract() == 0.0 && n > 0.0 && n <= f64::from(u32::MAX) => {
                Fps::new(n as u32, 1)
            }
            FpsRepr::Number(n) if n > 0.0 && (n * 1000.0) <= f64::from(u32::MAX) => {
                Fps::new((n * 1000.0).round() as u32, 1000)
            }
            FpsRepr::Number(n) => {
                return Err(serde::de::Error::custom(format!("invalid fps {n}")));
            }
        };
        fps.map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
