use std::collections::BTreeMap;

use crate::{
    compile::transitions::{TransitionTable, transition},
    composition::model::{
        AudioData, CompiledTimeline, FixedElement, OpeningEndingData, ResolvedTransition,
        SceneData,
    },
    effects::transitions::TransitionKind,
    foundation::core::{Canvas, Fps, Seconds},
    subtitle::SubtitleData,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Transition applied to every adjacent scene pair without an explicit one.
pub struct DefaultTransition {
    pub kind: TransitionKind,
    pub duration: Seconds,
}

#[derive(Clone, Debug)]
/// A frozen scene plus the transitions it declared towards other scenes.
pub struct FrozenScene {
    pub data: SceneData,
    pub outgoing: TransitionTable,
}

#[derive(Clone, Debug)]
/// Everything the compiler needs, already frozen. Scene data is container-relative.
pub struct TimelineParts {
    pub fps: Fps,
    pub canvas: Canvas,
    pub opening: Option<OpeningEndingData>,
    pub ending: Option<OpeningEndingData>,
    pub scenes: Vec<FrozenScene>,
    /// Movie-level pair registry (first declaration wins).
    pub legacy_transitions: TransitionTable,
    pub default_transition: Option<DefaultTransition>,
    pub audios: Vec<AudioData>,
    pub fixed_elements: Vec<FixedElement>,
    pub subtitles: Option<SubtitleData>,
}

/// Resolve every container onto one absolute timeline.
///
/// Scenes run back to back after the opening. A transition into scene `i` pulls its start back
/// by the transition length, shifts its telops forward by the same amount and pads its duration
/// so the captions never play under the overlap. Transition lookup for a pair goes
/// legacy registry, then the previous scene's own declarations, then the movie default.
#[tracing::instrument(skip(parts), fields(scenes = parts.scenes.len()))]
pub fn compile(parts: TimelineParts) -> CompiledTimeline {
    let TimelineParts {
        fps,
        canvas,
        opening,
        ending,
        scenes,
        legacy_transitions,
        default_transition,
        audios,
        fixed_elements,
        subtitles,
    } = parts;

    let mut cursor = opening.as_ref().map_or(0.0, |o| o.duration);
    // key -> (position, absolute start)
    let mut placed: BTreeMap<&str, (usize, Seconds)> = BTreeMap::new();
    let mut compiled: Vec<SceneData> = Vec::with_capacity(scenes.len());

    for (i, scene) in scenes.iter().enumerate() {
        let incoming = match i.checked_sub(1).map(|p| &scenes[p]) {
            Some(prev) => legacy_transitions
                .duration_between(&prev.data.key, &scene.data.key)
                .or_else(|| prev.outgoing.duration_between(&prev.data.key, &scene.data.key))
                .or(default_transition.map(|d| d.duration)),
            None => None,
        };
        let pull = incoming.unwrap_or(0.0);
        let start = cursor - pull;
        placed.insert(scene.data.key.as_str(), (i, start));

        let mut data = scene.data.clone();
        data.start_time = start;
        for audio in &mut data.audios {
            audio.start_time += start;
        }
        for telop in &mut data.telops {
            telop.start_time += pull;
        }
        data.duration += pull;

        tracing::debug!(
            key = %data.key,
            start,
            duration = data.duration,
            pull,
            "placed scene"
        );

        cursor = start + data.duration;
        compiled.push(data);
    }

    let ending = ending.map(|mut e| {
        e.start_time = cursor;
        cursor += e.duration;
        e
    });
    let total_duration = cursor;

    let diagnostics = check_references(&scenes, &legacy_transitions, &placed);
    let transitions = merge_transitions(&scenes, legacy_transitions, default_transition);

    CompiledTimeline {
        fps,
        width: canvas.width,
        height: canvas.height,
        duration_in_frames: fps.secs_to_frames_ceil(total_duration),
        total_duration,
        opening: opening.map(|mut o| {
            o.start_time = 0.0;
            o
        }),
        ending,
        scenes: compiled,
        transitions,
        audios,
        fixed_elements,
        subtitles,
        diagnostics,
    }
}

/// Flat transition list: the legacy registry, then scene declarations for pairs not yet
/// present, then the default for adjacent pairs that are still missing.
fn merge_transitions(
    scenes: &[FrozenScene],
    legacy: TransitionTable,
    default_transition: Option<DefaultTransition>,
) -> Vec<ResolvedTransition> {
    let mut all = legacy;
    for scene in scenes {
        for t in scene.outgoing.iter() {
            all.insert_if_absent(t.clone());
        }
    }
    if let Some(d) = default_transition {
        for pair in scenes.windows(2) {
            all.insert_if_absent(transition(
                pair[0].data.key.clone(),
                pair[1].data.key.clone(),
                d.duration,
                d.kind,
            ));
        }
    }
    all.into_vec()
}

fn check_references(
    scenes: &[FrozenScene],
    legacy: &TransitionTable,
    placed: &BTreeMap<&str, (usize, Seconds)>,
) -> Vec<String> {
    let declared = legacy
        .iter()
        .chain(scenes.iter().flat_map(|s| s.outgoing.iter()));

    let mut diagnostics = Vec::new();
    for t in declared {
        let message = match (placed.get(t.from.as_str()), placed.get(t.to.as_str())) {
            (Some((from, _)), Some((to, _))) if *to == from + 1 => continue,
            (Some(_), Some(_)) => format!(
                "transition {} -> {} joins scenes that are not adjacent; it does not affect timing",
                t.from, t.to
            ),
            (None, _) => format!(
                "transition {} -> {} references unknown scene '{}'",
                t.from, t.to, t.from
            ),
            (_, None) => format!(
                "transition {} -> {} references unknown scene '{}'",
                t.from, t.to, t.to
            ),
        };
        tracing::warn!(from = %t.from, to = %t.to, "{message}");
        diagnostics.push(message);
    }
    diagnostics
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
