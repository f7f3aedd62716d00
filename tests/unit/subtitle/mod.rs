use super::*;
use crate::foundation::error::{ReelError, ReelResult};

struct FailingLoader;

impl CaptionLoader for FailingLoader {
    fn load(&self, path: &str) -> ReelResult<Vec<Caption>> {
        Err(ReelError::parse(format!("cannot read {path}")))
    }
}

struct FixedLoader;

impl CaptionLoader for FixedLoader {
    fn load(&self, _path: &str) -> ReelResult<Vec<Caption>> {
        Ok(vec![Caption {
            text: "loaded".into(),
            start_ms: 0,
            end_ms: 1000,
        }])
    }
}

fn caption(text: &str, start_ms: u64, end_ms: u64) -> Caption {
    Caption {
        text: text.into(),
        start_ms,
        end_ms,
    }
}

#[test]
fn srt_suffix_selects_file_source() {
    let d = SubtitleData::from_input(" subs/ep1.srt ", SubtitleOptions::default());
    assert_eq!(d.source, SubtitleSource::File("subs/ep1.srt".into()));

    let d = SubtitleData::from_input(
        "1\n00:00:00,000 --> 00:00:01,000\nhi\n",
        SubtitleOptions::default(),
    );
    assert_eq!(d.source, SubtitleSource::Inline(vec![caption("hi", 0, 1000)]));
}

#[test]
fn loader_failure_means_no_captions() {
    let d = SubtitleData::from_input("missing.srt", SubtitleOptions::default());
    assert!(d.resolve_captions(&FailingLoader).is_empty());
    assert_eq!(d.resolve_captions(&FixedLoader)[0].text, "loaded");

    let inline = SubtitleData {
        source: SubtitleSource::Inline(vec![caption("x", 0, 5)]),
        options: SubtitleOptions::default(),
    };
    assert_eq!(inline.resolve_captions(&FailingLoader).len(), 1);
}

#[test]
fn defaults_for_presentation() {
    let v = SubtitleOptions::default().present("plain");
    assert_eq!(v.text, "plain");
    assert_eq!(v.speaker, None);
    assert_eq!(v.font_size, 42.0);
    assert_eq!(v.position, TelopPosition::parse("bottom 10%"));
}

#[test]
fn speaker_styles_and_names() {
    let mut opts = SubtitleOptions {
        show_speaker_name: true,
        font_size: Some(36.0),
        ..SubtitleOptions::default()
    };
    opts.speakers.insert(
        "SPEAKER_00".into(),
        SpeakerStyle {
            name: Some("田中".into()),
            font_size: Some(50.0),
            position: Some(TelopPosition::top()),
            ..SpeakerStyle::default()
        },
    );

    let v = opts.present("[SPEAKER_00] こんにちは");
    assert_eq!(v.text, "田中: こんにちは");
    assert_eq!(v.font_size, 50.0);
    assert_eq!(v.position, TelopPosition::top());

    // Unknown speaker keeps its raw id and the shared style.
    let v = opts.present("[SPEAKER_01] hi");
    assert_eq!(v.text, "SPEAKER_01: hi");
    assert_eq!(v.font_size, 36.0);
}

#[test]
fn prefix_and_suffix_override_speaker_label() {
    let opts = SubtitleOptions {
        show_speaker_name: true,
        prefix: Some("{{$speaker}}「".into()),
        suffix: Some("」".into()),
        ..SubtitleOptions::default()
    };
    assert_eq!(opts.present("(Bob) hey").text, "Bob「hey」");
    assert_eq!(opts.present("hey").text, "「hey」");

    let empty = SubtitleOptions {
        show_speaker_name: true,
        prefix: Some(String::new()),
        ..SubtitleOptions::default()
    };
    assert_eq!(empty.present("(Bob) hey").text, "Bob: hey");
}

#[test]
fn active_caption_and_fade() {
    let caps = vec![caption("a", 0, 1000), caption("b", 1000, 3000)];
    assert_eq!(caption_at(&caps, 999.0).unwrap().text, "a");
    assert_eq!(caption_at(&caps, 1000.0).unwrap().text, "b");
    assert!(caption_at(&caps, 3000.0).is_none());

    let fps = Fps::new(30, 1).unwrap();
    let b = &caps[1];
    // frames 30..90, 6-frame fades.
    assert_eq!(caption_opacity(b, 30.0, fps), 0.0);
    assert_eq!(caption_opacity(b, 33.0, fps), 0.5);
    assert_eq!(caption_opacity(b, 60.0, fps), 1.0);
    assert_eq!(caption_opacity(b, 87.0, fps), 0.5);
    assert_eq!(caption_opacity(b, 90.0, fps), 0.0);
}

#[test]
fn subtitle_data_json_shape() {
    let d = SubtitleData::from_input("a.srt", SubtitleOptions::default());
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["source"]["file"], "a.srt");
    let back: SubtitleData = serde_json::from_value(v).unwrap();
    assert_eq!(back, d);
}
