use super::*;

fn params(frame: f64) -> EffectParams {
    EffectParams {
        frame,
        fps: 30.0,
        char_index: 0,
        total_chars: 4,
        duration_frames: 30.0,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn builtins_are_registered_per_category() {
    let reg = EffectRegistry::with_builtins();
    assert!(reg.get(EffectCategory::Enter, "fadeIn").is_some());
    assert!(reg.get(EffectCategory::Exit, "riseOut").is_some());
    assert!(reg.get(EffectCategory::Emphasis, "shake").is_some());
    // Names are category-scoped.
    assert!(reg.get(EffectCategory::Exit, "fadeIn").is_none());
    let enter: Vec<_> = reg.names(EffectCategory::Enter).collect();
    assert_eq!(enter, vec!["fadeIn", "rise"]);
}

#[test]
fn unknown_names_are_ignored() {
    let reg = EffectRegistry::with_builtins();
    assert!(reg.apply(EffectCategory::Enter, "kirakira", &params(0.0)).is_none());
    let effects = TelopEffects::new(Some("nope"), None, Some("nope"));
    assert_eq!(reg.style_for(&effects, &params(5.0), None), StyleDelta::default());
}

#[test]
fn fade_in_staggers_characters() {
    let reg = EffectRegistry::with_builtins();
    // 12-frame ramp at 30 fps.
    let first = reg.apply(EffectCategory::Enter, "fadeIn", &params(6.0)).unwrap();
    assert!(approx(first.opacity.unwrap(), 0.5));
    let third = EffectParams {
        char_index: 2,
        ..params(6.0)
    };
    let third = reg.apply(EffectCategory::Enter, "fadeIn", &third).unwrap();
    assert!(approx(third.opacity.unwrap(), 2.0 / 12.0));
}

#[test]
fn rise_settles_at_rest() {
    let reg = EffectRegistry::with_builtins();
    let start = reg.apply(EffectCategory::Enter, "rise", &params(0.0)).unwrap();
    assert_eq!(start.opacity, Some(0.0));
    assert!(approx(start.translate_y, 100.0));
    assert_eq!(start.translate_unit, LengthUnit::Percent);
    let late = reg.apply(EffectCategory::Enter, "rise", &params(120.0)).unwrap();
    assert_eq!(late.opacity, Some(1.0));
    assert!(late.translate_y.abs() < 0.5);
}

#[test]
fn rise_out_keyframes() {
    let reg = EffectRegistry::with_builtins();
    let mid = reg.apply(EffectCategory::Exit, "riseOut", &params(15.0)).unwrap();
    assert!(approx(mid.opacity.unwrap(), 0.8));
    assert!(approx(mid.translate_y, -50.0));
    assert!(approx(mid.scale, 0.85));
    let end = reg.apply(EffectCategory::Exit, "riseOut", &params(30.0)).unwrap();
    assert_eq!(end.opacity, Some(0.0));
}

#[test]
fn emphasis_cycles() {
    let reg = EffectRegistry::with_builtins();
    // 24-frame pulse cycle peaks at frame 12.
    let peak = reg.apply(EffectCategory::Emphasis, "pulse", &params(12.0)).unwrap();
    assert!(approx(peak.scale, 1.2));
    assert!(peak.opacity.is_none());
    let wrap = reg.apply(EffectCategory::Emphasis, "pulse", &params(24.0)).unwrap();
    assert!(approx(wrap.scale, 1.0));
    // 3-frame shake cycle: frame 0.6 is progress 0.2.
    let s = reg.apply(EffectCategory::Emphasis, "shake", &params(0.6)).unwrap();
    assert!(approx(s.translate_x, 5.0));
    let f = reg.apply(EffectCategory::Emphasis, "float", &params(0.0)).unwrap();
    assert!(approx(f.translate_y, 0.0));
}

#[test]
fn style_for_folds_phases() {
    let reg = EffectRegistry::with_builtins();
    let effects = TelopEffects::new(Some("fadeIn"), Some("fadeOut"), Some("pulse"));
    let exit = params(15.0);
    let s = reg.style_for(&effects, &params(12.0), Some(&exit));
    // fadeIn complete (1.0) times fadeOut halfway (0.5).
    assert!(approx(s.opacity.unwrap(), 0.5));
    assert!(approx(s.scale, 1.2));
}

#[test]
fn custom_registration_replaces() {
    fn solid(_: &EffectParams) -> StyleDelta {
        StyleDelta {
            color: Some("#ff0000".into()),
            ..StyleDelta::default()
        }
    }
    let mut reg = EffectRegistry::new();
    reg.register(EffectCategory::Emphasis, "rainbow", solid);
    let s = reg
        .apply(EffectCategory::Emphasis, "rainbow", &params(0.0))
        .unwrap();
    assert_eq!(s.color.as_deref(), Some("#ff0000"));
}
