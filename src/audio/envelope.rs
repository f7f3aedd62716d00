use crate::{
    composition::model::{AudioData, CompiledTimeline},
    foundation::{
        core::{Fps, Seconds},
        math::interpolate_clamped,
    },
};

/// Length of the ducking ramps at either end of the content span.
pub const DUCK_RAMP_SECS: Seconds = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DuckWindow {
    start: Seconds,
    end: Seconds,
    /// Gain multiplier at full duck (`ducking / volume`).
    ratio: f64,
}

impl DuckWindow {
    fn factor_at(&self, t: Seconds) -> f64 {
        if t < self.start || t >= self.end {
            return 1.0;
        }
        let ramp_in = (t < self.start + DUCK_RAMP_SECS).then(|| {
            interpolate_clamped(t, (self.start, self.start + DUCK_RAMP_SECS), (1.0, self.ratio))
        });
        let ramp_out = (t > self.end - DUCK_RAMP_SECS).then(|| {
            interpolate_clamped(t, (self.end - DUCK_RAMP_SECS, self.end), (self.ratio, 1.0))
        });
        match (ramp_in, ramp_out) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => self.ratio,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Volume-over-time of one audio track on a compiled timeline.
pub struct AudioEnvelope {
    fps: Fps,
    start: Seconds,
    length: Seconds,
    volume: f64,
    fade_in: Seconds,
    fade_out: Seconds,
    duck: Option<DuckWindow>,
}

impl AudioEnvelope {
    /// Envelope of `audio` (absolute start) on `timeline`.
    ///
    /// Tracks without a duration play until the end of the movie. Ducking only applies when the
    /// track has a ducking target and the timeline has scenes.
    pub fn for_track(audio: &AudioData, timeline: &CompiledTimeline) -> Self {
        let length = audio
            .duration
            .unwrap_or(timeline.total_duration - audio.start_time);
        let duck = audio.ducking.and_then(|target| {
            let (start, end) = timeline.scene_span()?;
            let ratio = if audio.volume > 0.0 {
                target / audio.volume
            } else {
                1.0
            };
            Some(DuckWindow { start, end, ratio })
        });

        Self {
            fps: timeline.fps,
            start: audio.start_time,
            length,
            volume: audio.volume,
            fade_in: audio.fade_in,
            fade_out: audio.fade_out,
            duck,
        }
    }

    /// Absolute `[start, end)` during which the track plays.
    pub fn window(&self) -> (Seconds, Seconds) {
        (self.start, self.start + self.length)
    }

    /// Gain at absolute time `t`; 0 outside the track's window.
    pub fn gain_at(&self, t: Seconds) -> f64 {
        let (start, end) = self.window();
        if t < start || t >= end {
            return 0.0;
        }

        let local = t - start;
        let mut gain = self.volume;
        if self.fade_in > 0.0 {
            gain *= interpolate_clamped(local, (0.0, self.fade_in), (0.0, 1.0));
        }
        if self.fade_out > 0.0 {
            gain *= interpolate_clamped(
                local,
                (self.length - self.fade_out, self.length),
                (1.0, 0.0),
            );
        }
        if let Some(duck) = &self.duck {
            gain *= duck.factor_at(t);
        }
        gain
    }

    pub fn gain_at_frame(&self, frame: u64) -> f64 {
        self.gain_at(self.fps.frames_to_secs(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/envelope.rs"]
mod tests;
