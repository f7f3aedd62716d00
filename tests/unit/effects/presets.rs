use super::*;

#[test]
fn every_listed_color_resolves() {
    for name in COLOR_PRESETS {
        assert!(telop_color(name).is_some(), "{name}");
    }
    assert_eq!(telop_color("tvStyle"), Some(tv_style()));
    assert!(telop_color("black").is_none());
    assert!(telop_color("mauve").is_none());
    assert!(telop_color("doubleMauve").is_none());
}

#[test]
fn color_families() {
    let y = telop_color("yellow").unwrap();
    assert_eq!(y.text.as_deref(), Some("#FFD700"));
    assert_eq!(y.shadow.as_deref(), Some("rgba(0,0,0,0.8)"));

    let o = telop_color("blackOutline").unwrap();
    assert_eq!(o.text.as_deref(), Some("#ffffff"));
    assert_eq!(o.stroke.as_deref(), Some("#000000"));
    assert_eq!(o.stroke_width, Some(20.0));

    let d = telop_color("doubleBrown").unwrap();
    assert_eq!(d.text.as_deref(), Some("#8B4513"));
    assert_eq!(d.outer_stroke_width, Some(16.0));
}

#[test]
fn effect_presets() {
    assert_eq!(telop_effects("risePulse"), Some(rise_pulse()));
    assert_eq!(telop_effects("simple"), Some(simple()));
    assert_eq!(telop_effects("simple").unwrap().emphasis, None);
    assert_eq!(telop_effects("none"), Some(TelopEffects::default()));
    assert_eq!(
        telop_effects("spring").unwrap().emphasis.as_deref(),
        Some("kirakira")
    );
    assert!(telop_effects("sparkles").is_none());
}
