//! JSON movie scripts. A script mirrors the builder calls one to one and is replayed through
//! [`Movie`], so a script and the equivalent Rust code compile to the same timeline.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    composition::{
        dsl::{BgmOptions, Movie, MovieOptions, SceneSource},
        opening::{OpeningEndingBuilder, OpeningEndingOptions},
        scene::{
            AudioOptions, FixedImageOptions, FixedTextOptions, SceneBuilder, SceneOptions,
            TransitionOptions, WipeOptions,
        },
        telop::TelopOptions,
    },
    effects::transitions::TransitionKind,
    foundation::{
        core::Seconds,
        error::{ReelError, ReelResult},
    },
    subtitle::SubtitleOptions,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// One `telop` call: a single line, or the batch form with explicit starts.
pub enum TelopEntry {
    Single {
        text: String,
        #[serde(flatten)]
        options: TelopOptions,
    },
    Batch {
        texts: Vec<String>,
        #[serde(default)]
        starts: Vec<Seconds>,
        #[serde(flatten)]
        options: TelopOptions,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A file-backed attachment (wipe, audio, image) with its options inline.
pub struct FileEntry<O> {
    pub file: String,
    #[serde(flatten)]
    pub options: O,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextEntry<O> {
    pub text: String,
    #[serde(flatten)]
    pub options: O,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionToEntry {
    /// Key of the target scene.
    pub to: String,
    #[serde(flatten)]
    pub options: TransitionOptions,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Movie-level pair transition (the deprecated registry; first declaration wins).
pub struct PairTransitionEntry {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionKind>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningEndingScript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(flatten)]
    pub options: OpeningEndingOptions,
    pub telops: Vec<TelopEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneScript {
    /// Video or image path; omitted for a blank scene.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(flatten)]
    pub options: SceneOptions,
    pub telops: Vec<TelopEntry>,
    pub wipes: Vec<FileEntry<WipeOptions>>,
    pub audios: Vec<FileEntry<AudioOptions>>,
    pub fixed_images: Vec<FileEntry<FixedImageOptions>>,
    pub fixed_texts: Vec<TextEntry<FixedTextOptions>>,
    pub transition_to: Vec<TransitionToEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleScript {
    /// SRT text, or a path ending in `.srt`.
    pub input: String,
    #[serde(default)]
    pub options: SubtitleOptions,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A whole movie as data.
pub struct MovieScript {
    pub movie: MovieOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<OpeningEndingScript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending: Option<OpeningEndingScript>,
    pub scenes: Vec<SceneScript>,
    pub transitions: Vec<PairTransitionEntry>,
    pub audios: Vec<FileEntry<AudioOptions>>,
    pub bgm: Vec<FileEntry<BgmOptions>>,
    pub fixed_images: Vec<FileEntry<FixedImageOptions>>,
    pub fixed_texts: Vec<TextEntry<FixedTextOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<SubtitleScript>,
}

impl MovieScript {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::parse(format!("movie script: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open movie script '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ReelError::parse(format!("movie script '{}': {e}", path.display()))
        })
    }

    /// Replay the script through the builder API.
    pub fn to_movie(&self) -> Movie {
        let mut movie = Movie::new(self.movie.clone());

        if let Some(op) = &self.opening {
            replay_card(movie.opening(op.duration, op.options.clone()), &op.telops);
        }
        for scene in &self.scenes {
            let source = SceneSource::from(scene.media.as_deref());
            replay_scene(movie.scene(source, scene.options.clone()), scene);
        }
        if let Some(ed) = &self.ending {
            replay_card(movie.ending(ed.duration, ed.options.clone()), &ed.telops);
        }

        for t in &self.transitions {
            movie.register_transition(&t.from, &t.to, t.duration, t.transition);
        }
        for a in &self.audios {
            movie.audio(&a.file, a.options.clone());
        }
        for b in &self.bgm {
            movie.bgm(&b.file, b.options.clone());
        }
        for img in &self.fixed_images {
            movie.fixed_image(&img.file, img.options.clone());
        }
        for txt in &self.fixed_texts {
            movie.fixed_text(&txt.text, txt.options.clone());
        }
        if let Some(sub) = &self.subtitle {
            movie.subtitle(&sub.input, sub.options.clone());
        }

        movie
    }
}

fn replay_card(card: &mut OpeningEndingBuilder, telops: &[TelopEntry]) {
    for entry in telops {
        match entry {
            TelopEntry::Single { text, options } => card.telop(text, options.clone()),
            TelopEntry::Batch {
                texts,
                starts,
                options,
            } => card.telops(texts, starts, options.clone()),
        };
    }
}

fn replay_scene(builder: &mut SceneBuilder, script: &SceneScript) {
    for entry in &script.telops {
        match entry {
            TelopEntry::Single { text, options } => builder.telop(text, options.clone()),
            TelopEntry::Batch {
                texts,
                starts,
                options,
            } => builder.telops(texts, starts, options.clone()),
        };
    }
    for w in &script.wipes {
        builder.wipe(&w.file, w.options.clone());
    }
    for a in &script.audios {
        builder.audio(&a.file, a.options.clone());
    }
    for img in &script.fixed_images {
        builder.fixed_image(&img.file, img.options.clone());
    }
    for txt in &script.fixed_texts {
        builder.fixed_text(&txt.text, txt.options.clone());
    }
    for t in &script.transition_to {
        builder.transition_to(&t.to, t.options);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/script.rs"]
mod tests;
