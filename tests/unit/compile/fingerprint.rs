use crate::{
    compile::{FrozenScene, TimelineParts, TransitionTable, compile},
    composition::{
        model::OpeningEndingData,
        scene::{SceneBuilder, SceneOptions},
    },
    foundation::core::{Canvas, Fps},
};

fn timeline(second_scene_secs: f64, with_ending: bool) -> crate::CompiledTimeline {
    let scenes = [("a_0", 4.0), ("b_1", second_scene_secs)]
        .into_iter()
        .map(|(key, secs)| {
            let b = SceneBuilder::new(key, None, SceneOptions::default().duration(secs));
            FrozenScene {
                data: b.freeze(),
                outgoing: TransitionTable::new(),
            }
        })
        .collect();
    let ending = with_ending.then(|| OpeningEndingData {
        start_time: 0.0,
        duration: 2.0,
        image: "end.png".into(),
        effect: None,
        telops: Vec::new(),
        display_mode: Default::default(),
    });
    compile(TimelineParts {
        fps: Fps::default(),
        canvas: Canvas::default(),
        opening: None,
        ending,
        scenes,
        legacy_transitions: TransitionTable::new(),
        default_transition: None,
        audios: Vec::new(),
        fixed_elements: Vec::new(),
        subtitles: None,
    })
}

#[test]
fn fingerprint_is_stable_and_sensitive() {
    let a = timeline(3.0, false).fingerprint().unwrap();
    let b = timeline(3.0, false).fingerprint().unwrap();
    let c = timeline(3.5, false).fingerprint().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn scene_span_extends_through_ending() {
    assert_eq!(timeline(3.0, false).scene_span(), Some((0.0, 7.0)));
    assert_eq!(timeline(3.0, true).scene_span(), Some((0.0, 9.0)));
}

#[test]
fn scene_span_requires_scenes() {
    let t = compile(TimelineParts {
        fps: Fps::default(),
        canvas: Canvas::default(),
        opening: None,
        ending: None,
        scenes: Vec::new(),
        legacy_transitions: TransitionTable::new(),
        default_transition: None,
        audios: Vec::new(),
        fixed_elements: Vec::new(),
        subtitles: None,
    });
    assert_eq!(t.scene_span(), None);
}
