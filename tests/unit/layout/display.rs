use super::*;

fn hd() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn basic_modes_fill_frame() {
    for (s, fit) in [
        ("cover", MediaFit::Cover),
        ("contain", MediaFit::Contain),
        ("fitWidth", MediaFit::FitWidth),
        ("fitHeight", MediaFit::FitHeight),
    ] {
        let g = resolve_display(&DisplayMode::parse(s), hd());
        assert_eq!(g.fit, fit);
        assert_eq!(g.media_rect, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert!(!g.letterbox);
    }
}

#[test]
fn wide_cinematic_shrinks_height() {
    let g = resolve_display(&DisplayMode::parse("cinemascope"), hd());
    let expected_h = 1080.0 * (16.0 / 9.0) / 2.35;
    assert!(approx(g.media_rect.height(), expected_h));
    assert!(approx(g.media_rect.width(), 1920.0));
    assert!(approx(g.media_rect.y0, (1080.0 - expected_h) / 2.0));
    assert!(g.letterbox);
}

#[test]
fn narrow_cinematic_shrinks_width() {
    let g = resolve_display(&DisplayMode::parse("imax"), hd());
    assert!(approx(g.media_rect.width(), 1920.0 * 1.43 / (16.0 / 9.0)));
    assert!(approx(g.media_rect.height(), 1080.0));
}

#[test]
fn split_strings() {
    match DisplayMode::parse("2/3 top") {
        DisplayMode::Split {
            height_ratio,
            width_ratio,
            anchor,
            ..
        } => {
            assert!(approx(height_ratio, 2.0 / 3.0));
            assert_eq!(width_ratio, 1.0);
            assert_eq!(anchor, BoxAnchor::Top);
        }
        other => panic!("unexpected {other:?}"),
    }

    let g = resolve_display(&DisplayMode::parse("1/3 80%"), hd());
    assert!(approx(g.media_rect.width(), 1536.0));
    assert!(approx(g.media_rect.height(), 360.0));
    assert!(approx(g.media_rect.x0, 192.0));

    let g = resolve_display(&DisplayMode::parse("1/2 bottom"), hd());
    assert!(approx(g.media_rect.y0, 540.0));
    assert!(approx(g.media_rect.y1, 1080.0));
}

#[test]
fn garbage_falls_back_to_full_frame() {
    let g = resolve_display(&DisplayMode::parse("banana"), hd());
    assert_eq!(g.media_rect, Rect::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn object_form_with_aspect_ratio() {
    let mode: DisplayMode = serde_json::from_str(
        r#"{"height":"50%","width":"2/3","position":"bottom","aspectRatio":"2.35:1"}"#,
    )
    .unwrap();
    match mode {
        DisplayMode::Split {
            height_ratio,
            width_ratio,
            anchor,
            aspect_ratio,
        } => {
            assert!(approx(height_ratio, 0.5));
            assert!(approx(width_ratio, 2.0 / 3.0));
            assert_eq!(anchor, BoxAnchor::Bottom);
            assert!(approx(aspect_ratio.unwrap(), 2.35));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn serde_round_trip_is_exact() {
    for mode in [
        DisplayMode::parse("contain"),
        DisplayMode::parse("vista"),
        DisplayMode::parse("2/3 top"),
    ] {
        let json = serde_json::to_string(&mode).unwrap();
        let back: DisplayMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
    assert_eq!(
        serde_json::to_string(&DisplayMode::parse("vista")).unwrap(),
        "\"vista\""
    );
}
