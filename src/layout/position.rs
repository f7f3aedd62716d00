use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

static OFFSET_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)(%|px)$").expect("offset token regex must compile")
});

const DEFAULT_EDGE_OFFSET_PX: f64 = 120.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Vertical anchor a telop is measured from.
pub enum Anchor {
    /// Offset measured upward from the bottom edge.
    #[default]
    Bottom,
    /// Offset measured downward from the top edge.
    Top,
    /// Vertically centered; offset is ignored by the preset but kept when authored.
    Center,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Center => "center",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Distance from the anchor edge.
pub enum Offset {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the frame height.
    Percent(f64),
}

impl Offset {
    /// Resolve to pixels for a frame of `frame_height`.
    pub fn to_px(self, frame_height: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => frame_height * p / 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Parsed telop placement such as `"bottom"`, `"top 15%"` or `"80px"`.
///
/// Parsing is lenient: unknown tokens are ignored, so any string yields a position
/// (bottom anchored, 120 px, when nothing is recognized).
pub struct TelopPosition {
    pub anchor: Anchor,
    pub offset: Offset,
}

impl Default for TelopPosition {
    fn default() -> Self {
        Self::bottom()
    }
}

impl TelopPosition {
    pub fn bottom() -> Self {
        Self {
            anchor: Anchor::Bottom,
            offset: Offset::Px(DEFAULT_EDGE_OFFSET_PX),
        }
    }

    pub fn top() -> Self {
        Self {
            anchor: Anchor::Top,
            offset: Offset::Px(DEFAULT_EDGE_OFFSET_PX),
        }
    }

    pub fn center() -> Self {
        Self {
            anchor: Anchor::Center,
            offset: Offset::Px(0.0),
        }
    }

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "bottom" => return Self::bottom(),
            "top" => return Self::top(),
            "center" => return Self::center(),
            _ => {}
        }

        let mut pos = Self::bottom();
        for part in input.split_whitespace() {
            match part {
                "bottom" => pos.anchor = Anchor::Bottom,
                "top" => pos.anchor = Anchor::Top,
                "center" => pos.anchor = Anchor::Center,
                _ => {
                    if let Some(caps) = OFFSET_TOKEN.captures(part) {
                        let Ok(v) = caps[1].parse::<f64>() else {
                            continue;
                        };
                        pos.offset = if &caps[2] == "%" {
                            Offset::Percent(v)
                        } else {
                            Offset::Px(v)
                        };
                    }
                }
            }
        }
        pos
    }

    /// Top edge (in pixels) of a telop box of `box_height`, pushed away from its anchor by
    /// `stack_offset` pixels.
    pub fn box_top(&self, frame_height: f64, box_height: f64, stack_offset: f64) -> f64 {
        match self.anchor {
            Anchor::Top => self.offset.to_px(frame_height) + stack_offset,
            Anchor::Center => frame_height * 0.5 - box_height * 0.5 + stack_offset,
            Anchor::Bottom => {
                frame_height - self.offset.to_px(frame_height) - stack_offset - box_height
            }
        }
    }
}

impl FromStr for TelopPosition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for TelopPosition {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for TelopPosition {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<TelopPosition> for String {
    fn from(value: TelopPosition) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TelopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Offset::Px(v) => write!(f, "{} {v}px", self.anchor.as_str()),
            Offset::Percent(v) => write!(f, "{} {v}%", self.anchor.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Corner placement for secondary video overlays.
pub enum WipeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Placement for always-on overlays (logos, watermarks, labels).
pub enum FixedPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
}

/// Top-left corner of a `size` box placed at `corner` with `margin` pixels from the frame edges.
pub fn place_in_corner(
    corner: WipeCorner,
    frame: kurbo::Size,
    size: kurbo::Size,
    margin: f64,
) -> kurbo::Point {
    let left = margin;
    let right = frame.width - margin - size.width;
    let top = margin;
    let bottom = frame.height - margin - size.height;
    match corner {
        WipeCorner::TopLeft => kurbo::Point::new(left, top),
        WipeCorner::TopRight => kurbo::Point::new(right, top),
        WipeCorner::BottomLeft => kurbo::Point::new(left, bottom),
        WipeCorner::BottomRight => kurbo::Point::new(right, bottom),
    }
}

/// Top-left corner of a fixed element of `size`.
pub fn place_fixed(
    pos: FixedPosition,
    frame: kurbo::Size,
    size: kurbo::Size,
    margin: f64,
) -> kurbo::Point {
    let center_x = (frame.width - size.width) * 0.5;
    match pos {
        FixedPosition::TopLeft => place_in_corner(WipeCorner::TopLeft, frame, size, margin),
        FixedPosition::TopRight => place_in_corner(WipeCorner::TopRight, frame, size, margin),
        FixedPosition::BottomLeft => place_in_corner(WipeCorner::BottomLeft, frame, size, margin),
        FixedPosition::BottomRight => place_in_corner(WipeCorner::BottomRight, frame, size, margin),
        FixedPosition::TopCenter => kurbo::Point::new(center_x, margin),
        FixedPosition::BottomCenter => {
            kurbo::Point::new(center_x, frame.height - margin - size.height)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
