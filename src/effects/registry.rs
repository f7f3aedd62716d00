use std::collections::BTreeMap;

use crate::{composition::model::TelopEffects, foundation::math::interpolate_clamped};

/// Frames each successive character waits before its own animation starts.
const STAGGER_FRAMES: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectCategory {
    Enter,
    Exit,
    Emphasis,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Inputs of a per-character effect function.
pub struct EffectParams {
    /// Frame relative to the start of the phase (enter, exit or emphasis).
    pub frame: f64,
    pub fps: f64,
    pub char_index: usize,
    pub total_chars: usize,
    /// Length of the exit phase; unused by enter and emphasis functions.
    pub duration_frames: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Px,
    Percent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Style contribution of one effect for one character.
pub struct StyleDelta {
    /// `None` leaves opacity untouched (emphasis effects).
    pub opacity: Option<f64>,
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_unit: LengthUnit,
    pub scale: f64,
    pub rotate_deg: f64,
    pub blur_px: f64,
    pub color: Option<String>,
    pub shadow: Option<String>,
}

impl Default for StyleDelta {
    fn default() -> Self {
        Self {
            opacity: None,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_unit: LengthUnit::Px,
            scale: 1.0,
            rotate_deg: 0.0,
            blur_px: 0.0,
            color: None,
            shadow: None,
        }
    }
}

impl StyleDelta {
    /// Fold `other` on top of `self`: opacities and scales multiply, offsets add, and later
    /// colors and shadows replace earlier ones.
    pub fn then(mut self, other: &StyleDelta) -> Self {
        self.opacity = match (self.opacity, other.opacity) {
            (Some(a), Some(b)) => Some(a * b),
            (a, b) => a.or(b),
        };
        if other.translate_x != 0.0 || other.translate_y != 0.0 {
            self.translate_unit = other.translate_unit;
        }
        self.translate_x += other.translate_x;
        self.translate_y += other.translate_y;
        self.scale *= other.scale;
        self.rotate_deg += other.rotate_deg;
        self.blur_px += other.blur_px;
        if other.color.is_some() {
            self.color.clone_from(&other.color);
        }
        if other.shadow.is_some() {
            self.shadow.clone_from(&other.shadow);
        }
        self
    }
}

pub type EffectFn = fn(&EffectParams) -> StyleDelta;

#[derive(Clone, Debug, Default)]
/// Name to function tables for the three effect categories.
pub struct EffectRegistry {
    enter: BTreeMap<String, EffectFn>,
    exit: BTreeMap<String, EffectFn>,
    emphasis: BTreeMap<String, EffectFn>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the reference implementations.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(EffectCategory::Enter, "fadeIn", fade_in);
        reg.register(EffectCategory::Enter, "rise", rise);
        reg.register(EffectCategory::Exit, "fadeOut", fade_out);
        reg.register(EffectCategory::Exit, "riseOut", rise_out);
        reg.register(EffectCategory::Emphasis, "pulse", pulse);
        reg.register(EffectCategory::Emphasis, "float", float);
        reg.register(EffectCategory::Emphasis, "shake", shake);
        reg
    }

    fn table(&self, category: EffectCategory) -> &BTreeMap<String, EffectFn> {
        match category {
            EffectCategory::Enter => &self.enter,
            EffectCategory::Exit => &self.exit,
            EffectCategory::Emphasis => &self.emphasis,
        }
    }

    /// Register `f` under `name`, replacing any previous entry.
    pub fn register(&mut self, category: EffectCategory, name: impl Into<String>, f: EffectFn) {
        let table = match category {
            EffectCategory::Enter => &mut self.enter,
            EffectCategory::Exit => &mut self.exit,
            EffectCategory::Emphasis => &mut self.emphasis,
        };
        table.insert(name.into(), f);
    }

    pub fn get(&self, category: EffectCategory, name: &str) -> Option<EffectFn> {
        self.table(category).get(name).copied()
    }

    pub fn names(&self, category: EffectCategory) -> impl Iterator<Item = &str> {
        self.table(category).keys().map(String::as_str)
    }

    /// Evaluate `name`; unknown names yield `None` and are ignored by callers.
    pub fn apply(
        &self,
        category: EffectCategory,
        name: &str,
        params: &EffectParams,
    ) -> Option<StyleDelta> {
        self.get(category, name).map(|f| f(params))
    }

    /// Combined style of a telop's effect set for one character.
    ///
    /// `enter` and `exit` carry phase-relative params; the exit phase is only evaluated when
    /// `exit` is `Some`. Emphasis runs off the enter clock.
    pub fn style_for(
        &self,
        effects: &TelopEffects,
        enter: &EffectParams,
        exit: Option<&EffectParams>,
    ) -> StyleDelta {
        let mut out = StyleDelta::default();
        if let Some(d) = effects
            .enter
            .as_deref()
            .and_then(|n| self.apply(EffectCategory::Enter, n, enter))
        {
            out = out.then(&d);
        }
        if let Some(d) = effects
            .emphasis
            .as_deref()
            .and_then(|n| self.apply(EffectCategory::Emphasis, n, enter))
        {
            out = out.then(&d);
        }
        if let (Some(name), Some(params)) = (effects.exit.as_deref(), exit)
            && let Some(d) = self.apply(EffectCategory::Exit, name, params)
        {
            out = out.then(&d);
        }
        out
    }
}

fn fade_in(p: &EffectParams) -> StyleDelta {
    let local = p.frame - p.char_index as f64 * STAGGER_FRAMES;
    StyleDelta {
        opacity: Some(interpolate_clamped(local, (0.0, p.fps * 0.4), (0.0, 1.0))),
        ..StyleDelta::default()
    }
}

fn fade_out(p: &EffectParams) -> StyleDelta {
    let local = p.frame - p.char_index as f64 * STAGGER_FRAMES * 0.5;
    StyleDelta {
        opacity: Some(interpolate_clamped(local, (0.0, p.duration_frames), (1.0, 0.0))),
        ..StyleDelta::default()
    }
}

/// Damped spring from 0 to 1 (mass 1, stiffness 120, damping 20).
fn spring_progress(frame: f64, fps: f64) -> f64 {
    const STIFFNESS: f64 = 120.0;
    const DAMPING: f64 = 20.0;
    if frame <= 0.0 || fps <= 0.0 {
        return 0.0;
    }
    let t = frame / fps;
    let omega = STIFFNESS.sqrt();
    let zeta = DAMPING / (2.0 * omega);
    let decay = (-zeta * omega * t).exp();
    if zeta < 1.0 {
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        1.0 - decay * ((wd * t).cos() + (zeta * omega / wd) * (wd * t).sin())
    } else {
        1.0 - decay * (1.0 + omega * t)
    }
}

fn rise(p: &EffectParams) -> StyleDelta {
    let local = (p.frame - p.char_index as f64 * STAGGER_FRAMES).max(0.0);
    let progress = spring_progress(local, p.fps);
    StyleDelta {
        opacity: Some(interpolate_clamped(local, (0.0, 8.0), (0.0, 1.0))),
        translate_y: 100.0 * (1.0 - progress).max(0.0),
        translate_unit: LengthUnit::Percent,
        ..StyleDelta::default()
    }
}

fn rise_out(p: &EffectParams) -> StyleDelta {
    let local = p.frame - p.char_index as f64 * STAGGER_FRAMES;
    let d = p.duration_frames;
    let opacity = if local <= d * 0.5 {
        interpolate_clamped(local, (0.0, d * 0.5), (1.0, 0.8))
    } else {
        interpolate_clamped(local, (d * 0.5, d), (0.8, 0.0))
    };
    StyleDelta {
        opacity: Some(opacity),
        translate_y: interpolate_clamped(local, (0.0, d), (0.0, -100.0)),
        scale: interpolate_clamped(local, (0.0, d), (1.0, 0.7)),
        ..StyleDelta::default()
    }
}

fn cycle_progress(frame: f64, cycle: f64) -> f64 {
    if cycle <= 0.0 {
        return 0.0;
    }
    frame.rem_euclid(cycle) / cycle
}

fn pulse(p: &EffectParams) -> StyleDelta {
    let progress = cycle_progress(p.frame, p.fps * 0.8);
    let scale = if progress <= 0.5 {
        interpolate_clamped(progress, (0.0, 0.5), (1.0, 1.2))
    } else {
        interpolate_clamped(progress, (0.5, 1.0), (1.2, 1.0))
    };
    StyleDelta {
        scale,
        ..StyleDelta::default()
    }
}

fn float(p: &EffectParams) -> StyleDelta {
    const SPEED: f64 = 0.8;
    const AMPLITUDE: f64 = 5.0;
    let phase = p.char_index as f64 * 0.3;
    let secs = if p.fps > 0.0 { p.frame / p.fps } else { 0.0 };
    StyleDelta {
        translate_y: (secs * std::f64::consts::TAU * SPEED + phase).sin() * AMPLITUDE,
        ..StyleDelta::default()
    }
}

fn shake(p: &EffectParams) -> StyleDelta {
    const KEYS: [(f64, f64); 6] = [
        (0.0, 0.0),
        (0.2, 5.0),
        (0.4, -5.0),
        (0.6, 5.0),
        (0.8, -5.0),
        (1.0, 0.0),
    ];
    let progress = cycle_progress(p.frame, p.fps * 0.1);
    let translate_x = KEYS
        .windows(2)
        .find(|w| progress <= w[1].0)
        .map(|w| interpolate_clamped(progress, (w[0].0, w[1].0), (w[0].1, w[1].1)))
        .unwrap_or(0.0);
    StyleDelta {
        translate_x,
        ..StyleDelta::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
