//! Vertical stacking of simultaneously visible telops.
//!
//! Heights come from a fixed text model (48 px square glyphs, 1.4 line height, 80 px horizontal
//! padding) and do not follow per-telop font sizes.

use crate::{
    composition::model::TelopData,
    foundation::core::{Fps, FrameIndex},
};

const MODEL_FONT_SIZE: f64 = 48.0;
const MODEL_LINE_HEIGHT: f64 = 1.4;
const MODEL_PADDING: f64 = 80.0;

/// Estimated rendered height of `text` in a container `container_width` pixels wide.
pub fn estimate_telop_height(text: &str, container_width: f64) -> f64 {
    let usable = (container_width - MODEL_PADDING).max(0.0);
    let chars_per_line = (usable / MODEL_FONT_SIZE).floor().max(1.0);
    let len = text.chars().count() as f64;
    let lines = (len / chars_per_line).ceil();
    lines * MODEL_FONT_SIZE * MODEL_LINE_HEIGHT
}

/// Pixel offset pushing telop `index` clear of the telops drawn before it at `frame`.
///
/// Telops visible at `frame` on the same anchor are ordered by start time (ties keep list order);
/// the heights of those ahead of `index` are summed. A telop that is not visible itself gets 0.
/// `telops` carries container-relative times and `frame` is container-relative.
pub fn stack_offset(
    index: usize,
    telops: &[TelopData],
    frame: FrameIndex,
    fps: Fps,
    container_width: f64,
) -> f64 {
    let Some(current) = telops.get(index) else {
        return 0.0;
    };
    let now = frame.0 as f64;
    let rate = fps.as_f64();
    let visible = |t: &TelopData| now >= t.start_time * rate && now < t.end_time() * rate;
    if !visible(current) {
        return 0.0;
    }

    telops
        .iter()
        .enumerate()
        .filter(|&(i, t)| {
            i != index
                && t.position.anchor == current.position.anchor
                && visible(t)
                && (t.start_time < current.start_time
                    || (t.start_time == current.start_time && i < index))
        })
        .map(|(_, t)| estimate_telop_height(&t.text, container_width))
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
