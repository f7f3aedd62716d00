//! Display modes: how a container's media is sized inside the frame.
//!
//! Authored strings (`"cover"`, `"cinemascope"`, `"2/3 top"`, `"1/3 80%"`) and objects are parsed
//! once into [`DisplayMode`]; [`resolve_display`] turns a mode into concrete geometry.

use std::{fmt, sync::LazyLock};

use kurbo::Rect;
use regex::Regex;

use crate::foundation::core::Canvas;

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("fraction regex must compile"));
static PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)%$").expect("percent regex must compile")
});
static ASPECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?):(\d+(?:\.\d+)?)$").expect("aspect regex must compile")
});

/// Reference screen the cinematic presets are framed against.
const REFERENCE_SCREEN_RATIO: f64 = 16.0 / 9.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// How media fills its box.
pub enum MediaFit {
    /// Fill the box, cropping overflow.
    #[default]
    Cover,
    /// Show everything, letterboxing as needed.
    Contain,
    /// Match the box width; height follows the media aspect.
    FitWidth,
    /// Match the box height; width follows the media aspect.
    FitHeight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Film aspect presets.
pub enum CinematicPreset {
    /// 1.85:1
    Vista,
    /// 2.35:1
    Cinemascope,
    /// 1.66:1
    European,
    /// 1.43:1
    Imax,
}

impl CinematicPreset {
    pub fn ratio(self) -> f64 {
        match self {
            Self::Vista => 1.85,
            Self::Cinemascope => 2.35,
            Self::European => 1.66,
            Self::Imax => 1.43,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Vista => "vista",
            Self::Cinemascope => "cinemascope",
            Self::European => "european",
            Self::Imax => "imax",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "vista" => Some(Self::Vista),
            "cinemascope" => Some(Self::Cinemascope),
            "european" => Some(Self::European),
            "imax" => Some(Self::Imax),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Vertical alignment of a reduced media box.
pub enum BoxAnchor {
    #[default]
    Center,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "DisplayModeRepr", into = "DisplayModeRepr")]
/// Sizing policy for a container's media.
pub enum DisplayMode {
    /// Full-frame media with the given fit.
    Basic(MediaFit),
    /// Letterboxed or pillarboxed film aspect.
    Cinematic(CinematicPreset),
    /// Media confined to a fraction of the frame.
    Split {
        height_ratio: f64,
        width_ratio: f64,
        anchor: BoxAnchor,
        aspect_ratio: Option<f64>,
    },
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Basic(MediaFit::Cover)
    }
}

impl DisplayMode {
    /// Parse the string form. Unrecognized strings become a full-frame split.
    pub fn parse(input: &str) -> Self {
        let mode = input.trim();
        match mode {
            "cover" => return Self::Basic(MediaFit::Cover),
            "contain" => return Self::Basic(MediaFit::Contain),
            "fitWidth" => return Self::Basic(MediaFit::FitWidth),
            "fitHeight" => return Self::Basic(MediaFit::FitHeight),
            _ => {}
        }
        if let Some(preset) = CinematicPreset::from_name(mode) {
            return Self::Cinematic(preset);
        }

        let mut height_ratio = 1.0;
        let mut width_ratio = 1.0;
        let mut anchor = BoxAnchor::Center;
        for part in mode.split_whitespace() {
            match part {
                "top" => anchor = BoxAnchor::Top,
                "bottom" => anchor = BoxAnchor::Bottom,
                "center" => anchor = BoxAnchor::Center,
                _ => {
                    // First ratio is the height, any later one the width.
                    if let Some(ratio) = parse_fraction(part) {
                        if height_ratio == 1.0 {
                            height_ratio = ratio;
                        } else {
                            width_ratio = ratio;
                        }
                    }
                }
            }
        }
        Self::Split {
            height_ratio,
            width_ratio,
            anchor,
            aspect_ratio: None,
        }
    }

    /// Build from the object form (`{height, width, position, aspectRatio}`).
    pub fn from_object(obj: &DisplayModeObject) -> Self {
        let ratio = |v: &Option<RatioValue>| match v {
            None => 1.0,
            Some(RatioValue::Number(n)) => *n,
            Some(RatioValue::Text(s)) => parse_fraction(s).unwrap_or(1.0),
        };
        let aspect_ratio = obj.aspect_ratio.as_ref().and_then(|v| match v {
            RatioValue::Number(n) => Some(*n),
            RatioValue::Text(s) => parse_aspect(s),
        });
        Self::Split {
            height_ratio: ratio(&obj.height),
            width_ratio: ratio(&obj.width),
            anchor: obj.position.unwrap_or_default(),
            aspect_ratio,
        }
    }
}

/// Parse `"2/3"` or `"50%"` into a ratio.
pub fn parse_fraction(s: &str) -> Option<f64> {
    if let Some(caps) = FRACTION.captures(s) {
        let num = caps[1].parse::<f64>().ok()?;
        let den = caps[2].parse::<f64>().ok()?;
        return Some(num / den);
    }
    if let Some(caps) = PERCENT.captures(s) {
        return caps[1].parse::<f64>().ok().map(|p| p / 100.0);
    }
    None
}

fn parse_aspect(s: &str) -> Option<f64> {
    if let Some(caps) = ASPECT.captures(s) {
        let w = caps[1].parse::<f64>().ok()?;
        let h = caps[2].parse::<f64>().ok()?;
        return Some(w / h);
    }
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A ratio written either as a number or as `"2/3"` / `"80%"` text.
pub enum RatioValue {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Object form of a display mode.
pub struct DisplayModeObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<RatioValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<RatioValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BoxAnchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<RatioValue>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum DisplayModeRepr {
    Text(String),
    Object(DisplayModeObject),
}

impl From<DisplayModeRepr> for DisplayMode {
    fn from(value: DisplayModeRepr) -> Self {
        match value {
            DisplayModeRepr::Text(s) => Self::parse(&s),
            DisplayModeRepr::Object(o) => Self::from_object(&o),
        }
    }
}

impl From<DisplayMode> for DisplayModeRepr {
    fn from(value: DisplayMode) -> Self {
        match value {
            DisplayMode::Basic(_) | DisplayMode::Cinematic(_) => Self::Text(value.to_string()),
            DisplayMode::Split {
                height_ratio,
                width_ratio,
                anchor,
                aspect_ratio,
            } => Self::Object(DisplayModeObject {
                height: Some(RatioValue::Number(height_ratio)),
                width: Some(RatioValue::Number(width_ratio)),
                position: Some(anchor),
                aspect_ratio: aspect_ratio.map(RatioValue::Number),
            }),
        }
    }
}

impl From<&str> for DisplayMode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(MediaFit::Cover) => f.write_str("cover"),
            Self::Basic(MediaFit::Contain) => f.write_str("contain"),
            Self::Basic(MediaFit::FitWidth) => f.write_str("fitWidth"),
            Self::Basic(MediaFit::FitHeight) => f.write_str("fitHeight"),
            Self::Cinematic(p) => f.write_str(p.name()),
            Self::Split {
                height_ratio,
                width_ratio,
                anchor,
                ..
            } => {
                let anchor = match anchor {
                    BoxAnchor::Center => "center",
                    BoxAnchor::Top => "top",
                    BoxAnchor::Bottom => "bottom",
                };
                write!(
                    f,
                    "{}% {}% {anchor}",
                    height_ratio * 100.0,
                    width_ratio * 100.0
                )
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Concrete placement of a container's media for one canvas.
pub struct DisplayGeometry {
    /// How the media fills `media_rect`.
    pub fit: MediaFit,
    /// Media box in canvas pixels.
    pub media_rect: Rect,
    /// `true` when the area outside `media_rect` is painted with the background color.
    pub letterbox: bool,
}

/// Resolve a display mode against a canvas. Pure and time-independent.
pub fn resolve_display(mode: &DisplayMode, canvas: Canvas) -> DisplayGeometry {
    let full = Rect::from_origin_size((0.0, 0.0), canvas.size());
    match *mode {
        DisplayMode::Basic(fit) => DisplayGeometry {
            fit,
            media_rect: full,
            letterbox: false,
        },
        DisplayMode::Cinematic(preset) => {
            let target = preset.ratio();
            let (h, w) = if target > REFERENCE_SCREEN_RATIO {
                (REFERENCE_SCREEN_RATIO / target, 1.0)
            } else {
                (1.0, target / REFERENCE_SCREEN_RATIO)
            };
            DisplayGeometry {
                fit: MediaFit::Cover,
                media_rect: fractional_box(canvas, h, w, BoxAnchor::Center),
                letterbox: true,
            }
        }
        DisplayMode::Split {
            height_ratio,
            width_ratio,
            anchor,
            ..
        } => DisplayGeometry {
            fit: MediaFit::Cover,
            media_rect: fractional_box(canvas, height_ratio, width_ratio, anchor),
            letterbox: true,
        },
    }
}

fn fractional_box(canvas: Canvas, height_ratio: f64, width_ratio: f64, anchor: BoxAnchor) -> Rect {
    let size = canvas.size();
    let w = size.width * width_ratio;
    let h = size.height * height_ratio;
    let x = (size.width - w) * 0.5;
    let y = match anchor {
        BoxAnchor::Top => 0.0,
        BoxAnchor::Center => (size.height - h) * 0.5,
        BoxAnchor::Bottom => size.height - h,
    };
    Rect::new(x, y, x + w, y + h)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/display.rs"]
mod tests;
