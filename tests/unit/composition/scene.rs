use super::*;
use crate::layout::position::TelopPosition;

fn blank() -> SceneBuilder {
    SceneBuilder::new("scene_0", None, SceneOptions::default())
}

#[test]
fn empty_scene_has_zero_duration() {
    let s = blank();
    assert_eq!(s.duration(), 0.0);
    let data = s.freeze();
    assert_eq!(data.duration, 0.0);
    assert!(data.telops.is_empty());
    assert_eq!(data.display_mode, DisplayMode::default());
}

#[test]
fn duration_tracks_telops_added_later() {
    let mut s = blank();
    s.telop("a", TelopOptions::default().duration(3.0));
    assert_eq!(s.duration(), 3.0);
    s.telop("b", TelopOptions::default().duration(2.0).after(1.0));
    assert_eq!(s.duration(), 6.0);

    let mut fixed = SceneBuilder::new("x_0", None, SceneOptions::default().duration(4.0));
    fixed.telop("long", TelopOptions::default().duration(10.0));
    assert_eq!(fixed.duration(), 4.0);
}

#[test]
fn loop_defaults_follow_trim() {
    assert!(blank().freeze().looped);
    let trimmed = SceneBuilder::new("v_0", None, SceneOptions::default().trim_before(2.0));
    assert!(!trimmed.freeze().looped);
    let forced = SceneBuilder::new(
        "v_0",
        None,
        SceneOptions::default().trim_before(2.0).looped(true),
    );
    let data = forced.freeze();
    assert!(data.looped);
    assert_eq!(data.trim_before, 2.0);
}

#[test]
fn transition_to_last_call_wins() {
    let mut s = blank();
    s.transition_to("b_1", TransitionOptions::default())
        .transition_to("b_1", TransitionOptions::new(1.5, TransitionKind::Blur));
    assert_eq!(s.transitions().len(), 1);
    let t = s.transitions().get("scene_0", "b_1").unwrap();
    assert_eq!(t.duration, 1.5);
    assert_eq!(t.kind, TransitionKind::Blur);
}

#[test]
fn transition_defaults() {
    let mut s = blank();
    s.transition_to("next_1", TransitionOptions::default());
    let t = s.transitions().get("scene_0", "next_1").unwrap();
    assert_eq!(t.duration, DEFAULT_TRANSITION_SECS);
    assert_eq!(t.kind, TransitionKind::Fade);
}

#[test]
fn scene_audio_duration_resolved_at_freeze() {
    let mut s = blank();
    s.audio("voice.mp3", AudioOptions::default());
    s.audio(
        "loop.mp3",
        AudioOptions {
            looped: Some(true),
            ..AudioOptions::default()
        },
    );
    s.telop("later", TelopOptions::default().duration(5.0));

    let data = s.freeze();
    assert_eq!(data.audios[0].duration, Some(5.0));
    assert_eq!(data.audios[0].start_time, 0.0);
    assert_eq!(data.audios[0].volume, 1.0);
    assert_eq!(data.audios[1].duration, None);
}

#[test]
fn wipe_defaults_and_chroma_key() {
    let mut s = blank();
    s.wipe("cam.mp4", WipeOptions::default());
    s.wipe(
        "green.mp4",
        WipeOptions {
            chroma_key: Some(ChromaKeyOption::Enabled(true)),
            before: Some(1.0),
            ..WipeOptions::default()
        },
    );
    s.wipe(
        "blue.mp4",
        WipeOptions {
            chroma_key: Some(ChromaKeyOption::Custom(ChromaKeyOptions {
                color: Some("blue".into()),
                similarity: Some(0.2),
                ..ChromaKeyOptions::default()
            })),
            ..WipeOptions::default()
        },
    );
    s.wipe(
        "hex.mp4",
        WipeOptions {
            chroma_key: Some(ChromaKeyOption::Custom(ChromaKeyOptions {
                color: Some("#123456".into()),
                ..ChromaKeyOptions::default()
            })),
            ..WipeOptions::default()
        },
    );

    let w = s.freeze().wipes;
    assert_eq!(w[0].position, WipeCorner::BottomRight);
    assert_eq!(w[0].size, 0.3);
    assert_eq!(w[0].border_radius, 12.0);
    assert_eq!(w[0].margin, 20.0);
    assert!(w[0].chroma_key.is_none());

    let green = w[1].chroma_key.as_ref().unwrap();
    assert_eq!(green.color, "#00ff00");
    assert_eq!(green.similarity, 0.4);
    assert_eq!(green.smoothness, 0.1);
    assert_eq!(w[1].start_time, 1.0);

    let blue = w[2].chroma_key.as_ref().unwrap();
    assert_eq!(blue.color, "#0000ff");
    assert_eq!(blue.similarity, 0.2);
    assert_eq!(w[3].chroma_key.as_ref().unwrap().color, "#123456");
}

#[test]
fn chroma_key_accepts_bool_or_object_json() {
    let opts: WipeOptions = serde_json::from_str(r#"{"chromaKey": true}"#).unwrap();
    assert_eq!(opts.chroma_key, Some(ChromaKeyOption::Enabled(true)));
    let opts: WipeOptions =
        serde_json::from_str(r#"{"chromaKey": {"color": "blue"}, "position": "top-left"}"#)
            .unwrap();
    assert!(matches!(opts.chroma_key, Some(ChromaKeyOption::Custom(_))));
    assert_eq!(opts.position, Some(WipeCorner::TopLeft));
}

#[test]
fn fixed_element_defaults() {
    let mut s = blank();
    s.fixed_image("logo.png", FixedImageOptions::default())
        .fixed_text("LIVE", FixedTextOptions::default());
    let f = s.freeze().fixed_elements;
    assert_eq!(f[0].position, FixedPosition::TopRight);
    assert_eq!(f[0].margin, 20.0);
    match &f[1].content {
        FixedContent::Text {
            font_size,
            color,
            padding,
            border_radius,
            ..
        } => {
            assert_eq!(*font_size, 24.0);
            assert_eq!(color, "#ffffff");
            assert_eq!(*padding, 8.0);
            assert_eq!(*border_radius, 4.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scene_telop_defaults_apply() {
    let opts = SceneOptions::default().telop(TelopDefaults {
        position: Some(TelopPosition::top()),
        ..TelopDefaults::default()
    });
    let mut s = SceneBuilder::new("s_0", None, opts);
    s.telop("hello", TelopOptions::default());
    assert_eq!(s.freeze().telops[0].position, TelopPosition::top());
}

#[test]
fn scene_options_from_json() {
    let opts: SceneOptions = serde_json::from_str(
        r#"{"duration": 4, "effect": ["fadeIn"], "loop": false, "displayMode": "vista",
            "telop": {"fontSize": 50, "charDuration": 0.3}}"#,
    )
    .unwrap();
    assert_eq!(opts.duration, Some(4.0));
    assert_eq!(opts.effects, vec![SceneEffect::FadeIn]);
    assert_eq!(opts.looped, Some(false));
    assert_eq!(opts.telop.font_size, Some(50.0));
    assert_eq!(opts.telop.char_duration, Some(0.3));
    assert_eq!(opts.display_mode, Some(DisplayMode::parse("vista")));
}
