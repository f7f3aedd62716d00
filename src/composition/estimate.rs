//! Reading-time heuristic for telop text.

use crate::foundation::core::Seconds;

/// Base reading pace for one full-width glyph.
pub const BASE_CHAR_SECS: Seconds = 0.2;
/// Fastest pace reachable through the length speed-up.
pub const MIN_CHAR_SECS: Seconds = 0.15;

const SPEEDUP_PER_TEN_CHARS: Seconds = 0.01;
const HALF_WIDTH_COST: f64 = 0.5;
const EXIT_POST_ROLL: Seconds = 1.0;
const MIN_DURATION: Seconds = 2.0;

/// Estimate how long `text` should stay on screen using the default pace.
///
/// Code points `<= 127` count as half-width and cost half a full-width glyph. Every 10 glyphs
/// shave 0.01 s off the per-glyph pace, down to [`MIN_CHAR_SECS`]. One second is added for the
/// exit animation and the result never drops below two seconds.
pub fn estimate_duration(text: &str) -> Seconds {
    estimate_duration_paced(text, BASE_CHAR_SECS)
}

/// Same heuristic with `base_char_secs` replacing the 0.2 s base pace.
///
/// The speed-up step and the floor scale with the base so that the default pace is the
/// `base_char_secs == 0.2` special case. Non-positive or non-finite paces fall back to the default.
pub fn estimate_duration_paced(text: &str, base_char_secs: Seconds) -> Seconds {
    let base = if base_char_secs.is_finite() && base_char_secs > 0.0 {
        base_char_secs
    } else {
        BASE_CHAR_SECS
    };
    let scale = base / BASE_CHAR_SECS;

    let (mut full, mut half) = (0u64, 0u64);
    for c in text.chars() {
        if u32::from(c) <= 127 {
            half += 1;
        } else {
            full += 1;
        }
    }

    let steps = ((full + half) / 10) as f64;
    let per_char = (base - steps * SPEEDUP_PER_TEN_CHARS * scale).max(MIN_CHAR_SECS * scale);
    let reading = (full as f64) * per_char + (half as f64) * per_char * HALF_WIDTH_COST;

    (reading + EXIT_POST_ROLL).max(MIN_DURATION)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/estimate.rs"]
mod tests;
