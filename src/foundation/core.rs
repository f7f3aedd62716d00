use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Rect, Size};

/// Seconds on the movie timeline (or inside a container, depending on context).
pub type Seconds = f64;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> Seconds {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    pub fn secs_to_frames_floor(self, secs: Seconds) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }

    /// Frame count covering `secs` completely (`ceil`), used for total movie length.
    pub fn secs_to_frames_ceil(self, secs: Seconds) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }

    /// Nearest frame to `secs`; the renderer places sequences with this rounding.
    pub fn secs_to_frames_round(self, secs: Seconds) -> i64 {
        (secs * self.as_f64()).round() as i64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Canvas {
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named canvas presets for common delivery targets.
pub enum VideoSize {
    /// 1280x720.
    Hd,
    /// 1920x1080.
    FullHd,
    /// 3840x2160.
    #[serde(rename = "4k")]
    Uhd4k,
    /// 1080x1920 vertical.
    Shorts,
    /// 1080x1920 vertical.
    Reels,
    /// 1080x1920 vertical.
    Tiktok,
    /// 1080x1080.
    Square,
    /// 1280x720.
    Twitter,
    /// 1920x1080.
    Youtube,
}

impl VideoSize {
    pub fn canvas(self) -> Canvas {
        let (width, height) = match self {
            Self::Hd | Self::Twitter => (1280, 720),
            Self::FullHd | Self::Youtube => (1920, 1080),
            Self::Uhd4k => (3840, 2160),
            Self::Shorts | Self::Reels | Self::Tiktok => (1080, 1920),
            Self::Square => (1080, 1080),
        };
        Canvas { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
