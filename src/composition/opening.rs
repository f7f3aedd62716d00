use crate::{
    composition::{
        model::{OpeningEndingData, SceneEffect},
        telop::{TelopDefaults, TelopOptions, TelopSequencer},
    },
    foundation::core::Seconds,
    layout::display::DisplayMode,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningEndingOptions {
    /// Background image.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<SceneEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    pub telop: TelopDefaults,
}

impl OpeningEndingOptions {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn effect(mut self, effect: SceneEffect) -> Self {
        self.effect = Some(effect);
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

/// Title card shown before the first scene or after the last one.
#[derive(Clone, Debug)]
pub struct OpeningEndingBuilder {
    explicit_duration: Option<Seconds>,
    image: String,
    effect: Option<SceneEffect>,
    display_mode: DisplayMode,
    telops: TelopSequencer,
}

impl OpeningEndingBuilder {
    pub fn new(duration: Option<Seconds>, options: OpeningEndingOptions) -> Self {
        Self {
            explicit_duration: duration,
            image: options.image,
            effect: options.effect,
            display_mode: options.display_mode.unwrap_or_default(),
            telops: TelopSequencer::new(options.telop),
        }
    }

    /// Explicit duration, else the latest telop end.
    pub fn duration(&self) -> Seconds {
        self.explicit_duration
            .unwrap_or_else(|| self.telops.content_duration())
    }

    pub fn telop(&mut self, text: &str, options: TelopOptions) -> &mut Self {
        self.telops.add(text, &options);
        self
    }

    pub fn telops<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        starts: &[Seconds],
        options: TelopOptions,
    ) -> &mut Self {
        self.telops.add_batch(texts, starts, &options);
        self
    }

    pub fn freeze(&self, start_time: Seconds) -> OpeningEndingData {
        OpeningEndingData {
            start_time,
            duration: self.duration(),
            image: self.image.clone(),
            effect: self.effect,
            telops: self.telops.telops().to_vec(),
            display_mode: self.display_mode,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/opening.rs"]
mod tests;
