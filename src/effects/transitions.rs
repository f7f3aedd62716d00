use std::{fmt, str::FromStr};

use crate::{
    composition::model::SceneEffect,
    foundation::{
        error::{ReelError, ReelResult},
        math::interpolate_clamped,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "Left" => Some(Self::Left),
            "Right" => Some(Self::Right),
            "Up" => Some(Self::Up),
            "Down" => Some(Self::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Visual treatment of the overlap between two adjacent scenes.
///
/// Serialized as its camelCase name (`"fade"`, `"slideLeft"`, `"gridRandom"`, ...).
/// Deserialization is lenient: unknown names fall back to [`TransitionKind::Fade`].
pub enum TransitionKind {
    #[default]
    Fade,
    Wipe(Direction),
    Slide(Direction),
    Flip(Direction),
    ClockWipe,
    ZoomIn,
    ZoomOut,
    Blur,
    GridFlip(Direction),
    GridShrink,
    GridRandom,
}

impl TransitionKind {
    /// Panel-grid transitions, which the renderer draws with a dedicated tile compositor.
    pub fn is_grid(self) -> bool {
        matches!(
            self,
            Self::GridFlip(_) | Self::GridShrink | Self::GridRandom
        )
    }
}

/// Parse a transition name strictly.
pub fn parse_transition(name: &str) -> ReelResult<TransitionKind> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ReelError::validation("transition kind must be non-empty"));
    }

    let simple = match name {
        "fade" => Some(TransitionKind::Fade),
        "clockWipe" => Some(TransitionKind::ClockWipe),
        "zoomIn" => Some(TransitionKind::ZoomIn),
        "zoomOut" => Some(TransitionKind::ZoomOut),
        "blur" => Some(TransitionKind::Blur),
        "gridShrink" => Some(TransitionKind::GridShrink),
        "gridRandom" => Some(TransitionKind::GridRandom),
        _ => None,
    };
    if let Some(kind) = simple {
        return Ok(kind);
    }

    let directional: [(&str, fn(Direction) -> TransitionKind); 4] = [
        ("gridFlip", TransitionKind::GridFlip),
        ("wipe", TransitionKind::Wipe),
        ("slide", TransitionKind::Slide),
        ("flip", TransitionKind::Flip),
    ];
    for (prefix, make) in directional {
        if let Some(dir) = name.strip_prefix(prefix).and_then(Direction::from_suffix) {
            return Ok(make(dir));
        }
    }

    Err(ReelError::validation(format!(
        "unknown transition kind '{name}'"
    )))
}

impl FromStr for TransitionKind {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_transition(s)
    }
}

impl From<String> for TransitionKind {
    fn from(value: String) -> Self {
        parse_transition(&value).unwrap_or_else(|_| {
            tracing::warn!(kind = %value, "unknown transition kind, using fade");
            Self::Fade
        })
    }
}

impl From<TransitionKind> for String {
    fn from(value: TransitionKind) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fade => f.write_str("fade"),
            Self::Wipe(d) => write!(f, "wipe{}", d.suffix()),
            Self::Slide(d) => write!(f, "slide{}", d.suffix()),
            Self::Flip(d) => write!(f, "flip{}", d.suffix()),
            Self::ClockWipe => f.write_str("clockWipe"),
            Self::ZoomIn => f.write_str("zoomIn"),
            Self::ZoomOut => f.write_str("zoomOut"),
            Self::Blur => f.write_str("blur"),
            Self::GridFlip(d) => write!(f, "gridFlip{}", d.suffix()),
            Self::GridShrink => f.write_str("gridShrink"),
            Self::GridRandom => f.write_str("gridRandom"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Percent insets of a clip rectangle (`inset(top right bottom left)`).
pub struct ClipInset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Style of the incoming scene at one point of a transition.
pub struct TransitionStyle {
    pub opacity: f64,
    /// Percent of the frame width.
    pub translate_x: f64,
    /// Percent of the frame height.
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub blur_px: f64,
    pub clip: Option<ClipInset>,
    /// Transform origin for flips, in CSS keyword form.
    pub origin: Option<&'static str>,
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            blur_px: 0.0,
            clip: None,
            origin: None,
        }
    }
}

/// Style of the incoming scene at `progress` (0..1, clamped) through a transition.
///
/// Clock wipes and grid transitions are drawn by dedicated compositors; this returns a plain
/// cross-fade for them.
pub fn transition_style(progress: f64, kind: TransitionKind) -> TransitionStyle {
    let p = progress.clamp(0.0, 1.0);
    let rest = 1.0 - p;
    let base = TransitionStyle::default();
    let flip_opacity = if p > 0.5 { 1.0 } else { p * 2.0 };
    let inset = |top, right, bottom, left| {
        Some(ClipInset {
            top,
            right,
            bottom,
            left,
        })
    };

    match kind {
        TransitionKind::Wipe(Direction::Left) => TransitionStyle {
            clip: inset(0.0, rest * 100.0, 0.0, 0.0),
            ..base
        },
        TransitionKind::Wipe(Direction::Right) => TransitionStyle {
            clip: inset(0.0, 0.0, 0.0, rest * 100.0),
            ..base
        },
        TransitionKind::Wipe(Direction::Up) => TransitionStyle {
            clip: inset(0.0, 0.0, rest * 100.0, 0.0),
            ..base
        },
        TransitionKind::Wipe(Direction::Down) => TransitionStyle {
            clip: inset(rest * 100.0, 0.0, 0.0, 0.0),
            ..base
        },
        TransitionKind::Slide(Direction::Left) => TransitionStyle {
            translate_x: rest * 100.0,
            ..base
        },
        TransitionKind::Slide(Direction::Right) => TransitionStyle {
            translate_x: rest * -100.0,
            ..base
        },
        TransitionKind::Slide(Direction::Up) => TransitionStyle {
            translate_y: rest * 100.0,
            ..base
        },
        TransitionKind::Slide(Direction::Down) => TransitionStyle {
            translate_y: rest * -100.0,
            ..base
        },
        TransitionKind::ZoomIn => TransitionStyle {
            scale: p,
            opacity: p,
            ..base
        },
        TransitionKind::ZoomOut => TransitionStyle {
            scale: 1.0 + rest * 0.5,
            opacity: p,
            ..base
        },
        TransitionKind::Blur => TransitionStyle {
            blur_px: rest * 20.0,
            opacity: p,
            ..base
        },
        TransitionKind::Flip(Direction::Left) => TransitionStyle {
            rotate_y_deg: rest * -90.0,
            origin: Some("left center"),
            opacity: flip_opacity,
            ..base
        },
        TransitionKind::Flip(Direction::Right) => TransitionStyle {
            rotate_y_deg: rest * 90.0,
            origin: Some("right center"),
            opacity: flip_opacity,
            ..base
        },
        TransitionKind::Flip(Direction::Up) => TransitionStyle {
            rotate_x_deg: rest * 90.0,
            origin: Some("center top"),
            opacity: flip_opacity,
            ..base
        },
        TransitionKind::Flip(Direction::Down) => TransitionStyle {
            rotate_x_deg: rest * -90.0,
            origin: Some("center bottom"),
            opacity: flip_opacity,
            ..base
        },
        TransitionKind::Fade
        | TransitionKind::ClockWipe
        | TransitionKind::GridFlip(_)
        | TransitionKind::GridShrink
        | TransitionKind::GridRandom => TransitionStyle {
            opacity: p,
            ..base
        },
    }
}

const SCENE_FADE_SECS: f64 = 0.5;

/// Opacity of a container at `frame` given its `fadeIn`/`fadeOut` effects.
///
/// Both ramps last half a second; when they overlap the lower value wins.
pub fn scene_effect_opacity(
    frame: f64,
    fps: f64,
    start_frame: f64,
    duration_frames: f64,
    effects: &[SceneEffect],
) -> f64 {
    let fade_frames = fps * SCENE_FADE_SECS;
    let mut opacity: f64 = 1.0;
    if effects.contains(&SceneEffect::FadeIn) {
        opacity = opacity.min(interpolate_clamped(
            frame,
            (start_frame, start_frame + fade_frames),
            (0.0, 1.0),
        ));
    }
    if effects.contains(&SceneEffect::FadeOut) {
        let end_frame = start_frame + duration_frames;
        opacity = opacity.min(interpolate_clamped(
            frame,
            (end_frame - fade_frames, end_frame),
            (1.0, 0.0),
        ));
    }
    opacity
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
