use crate::{
    composition::{
        estimate::{estimate_duration, estimate_duration_paced},
        model::{Overlay, SfxOption, TelopColor, TelopData, TelopEffects},
    },
    foundation::core::Seconds,
    layout::position::TelopPosition,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Telop styling inherited by a container's telops unless a telop overrides it.
pub struct TelopDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TelopPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<TelopEffects>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_duration: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Applied to opening and ending telops only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TelopColor>,
}

impl TelopDefaults {
    /// Field-wise merge where every field set on `local` wins over `self`.
    ///
    /// Nested values (effects, overlay, color) are replaced whole, not merged.
    pub fn overridden_by(&self, local: &TelopDefaults) -> TelopDefaults {
        TelopDefaults {
            position: local.position.or(self.position),
            overlay: local.overlay.clone().or_else(|| self.overlay.clone()),
            effects: local.effects.clone().or_else(|| self.effects.clone()),
            char_duration: local.char_duration.or(self.char_duration),
            font_size: local.font_size.or(self.font_size),
            color: local.color.clone().or_else(|| self.color.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Per-telop options. Unset fields fall back to the container's [`TelopDefaults`].
pub struct TelopOptions {
    /// Explicit display time; estimated from the text when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    /// Start at this container-relative time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Seconds>,
    /// Start this long after the previous telop ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<TelopEffects>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TelopPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TelopColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfx: Option<SfxOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_duration: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl TelopOptions {
    pub fn duration(mut self, secs: Seconds) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn before(mut self, secs: Seconds) -> Self {
        self.before = Some(secs);
        self
    }

    pub fn after(mut self, secs: Seconds) -> Self {
        self.after = Some(secs);
        self
    }

    pub fn effects(mut self, effects: TelopEffects) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn position(mut self, position: impl Into<TelopPosition>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn color(mut self, color: TelopColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn sfx(mut self, sfx: impl Into<SfxOption>) -> Self {
        self.sfx = Some(sfx.into());
        self
    }

    pub fn char_duration(mut self, secs: Seconds) -> Self {
        self.char_duration = Some(secs);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered caption list of one container plus the cursor that chains telops back to back.
pub struct TelopSequencer {
    defaults: TelopDefaults,
    telops: Vec<TelopData>,
    cursor: Seconds,
}

impl TelopSequencer {
    pub fn new(defaults: TelopDefaults) -> Self {
        Self {
            defaults,
            telops: Vec::new(),
            cursor: 0.0,
        }
    }

    pub fn defaults(&self) -> &TelopDefaults {
        &self.defaults
    }

    /// Append one telop.
    ///
    /// The start is `before` when set, else the cursor plus `after`, else the cursor.
    pub fn add(&mut self, text: &str, options: &TelopOptions) {
        let start = match (options.before, options.after) {
            (Some(before), _) => before,
            (None, Some(after)) => self.cursor + after,
            (None, None) => self.cursor,
        };
        self.push(text, start, options);
    }

    /// Append several telops sharing `options`; `starts[i]` positions text `i`, and texts without
    /// a start chain from the cursor. `before`/`after` in `options` are ignored.
    pub fn add_batch<S: AsRef<str>>(&mut self, texts: &[S], starts: &[Seconds], options: &TelopOptions) {
        for (i, text) in texts.iter().enumerate() {
            let start = starts.get(i).copied().unwrap_or(self.cursor);
            self.push(text.as_ref(), start, options);
        }
    }

    fn push(&mut self, text: &str, start: Seconds, options: &TelopOptions) {
        let d = &self.defaults;
        let duration = options.duration.unwrap_or_else(|| {
            match options.char_duration.or(d.char_duration) {
                Some(pace) => estimate_duration_paced(text, pace),
                None => estimate_duration(text),
            }
        });

        self.telops.push(TelopData {
            text: text.to_owned(),
            start_time: start,
            duration,
            effects: options.effects.clone().or_else(|| d.effects.clone()),
            position: options
                .position
                .or(d.position)
                .unwrap_or_else(TelopPosition::bottom),
            overlay: options.overlay.clone().or_else(|| d.overlay.clone()),
            emoji: options.emoji.clone(),
            color: options.color.clone().or_else(|| d.color.clone()),
            sfx: options.sfx.as_ref().map(SfxOption::normalize),
            font_size: options.font_size.or(d.font_size),
        });
        self.cursor = start + duration;
    }

    pub fn telops(&self) -> &[TelopData] {
        &self.telops
    }

    /// End of the most recently added telop.
    pub fn cursor(&self) -> Seconds {
        self.cursor
    }

    /// Latest telop end, or 0 without telops.
    pub fn content_duration(&self) -> Seconds {
        self.telops
            .iter()
            .map(TelopData::end_time)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/telop.rs"]
mod tests;
