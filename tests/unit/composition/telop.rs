use super::*;

#[test]
fn default_chaining_follows_previous_end() {
    let mut seq = TelopSequencer::default();
    seq.add("a", &TelopOptions::default());
    seq.add("b", &TelopOptions::default());
    let t = seq.telops();
    assert_eq!(t[0].start_time, 0.0);
    assert_eq!(t[0].duration, 2.0);
    assert_eq!(t[1].start_time, t[0].start_time + t[0].duration);
    assert_eq!(seq.cursor(), 4.0);
}

#[test]
fn before_wins_over_after() {
    let mut seq = TelopSequencer::default();
    seq.add("first", &TelopOptions::default().duration(3.0));
    seq.add("gap", &TelopOptions::default().duration(1.0).after(2.0));
    seq.add("pinned", &TelopOptions::default().duration(1.0).before(0.5).after(9.0));
    let t = seq.telops();
    assert_eq!(t[1].start_time, 5.0);
    assert_eq!(t[2].start_time, 0.5);
    // Cursor follows the last add even when it moves backwards.
    assert_eq!(seq.cursor(), 1.5);
    assert_eq!(seq.content_duration(), 6.0);
}

#[test]
fn batch_positions_simultaneous_lines() {
    let mut seq = TelopSequencer::default();
    seq.add_batch(&["x", "y"], &[0.0, 0.0], &TelopOptions::default());
    let t = seq.telops();
    assert_eq!(t[0].start_time, 0.0);
    assert_eq!(t[1].start_time, 0.0);

    // Missing starts chain from the cursor.
    let mut seq = TelopSequencer::default();
    seq.add_batch(&["x", "y", "z"], &[1.0], &TelopOptions::default().duration(2.0));
    let starts: Vec<_> = seq.telops().iter().map(|t| t.start_time).collect();
    assert_eq!(starts, vec![1.0, 3.0, 5.0]);
}

#[test]
fn telops_keep_insertion_order() {
    let mut seq = TelopSequencer::default();
    seq.add("late", &TelopOptions::default().before(10.0));
    seq.add("early", &TelopOptions::default().before(0.0));
    let texts: Vec<_> = seq.telops().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["late", "early"]);
}

#[test]
fn empty_sequencer_has_zero_duration() {
    assert_eq!(TelopSequencer::default().content_duration(), 0.0);
}

#[test]
fn defaults_cascade_per_field() {
    let defaults = TelopDefaults {
        position: Some(TelopPosition::top()),
        font_size: Some(60.0),
        effects: Some(TelopEffects::new(Some("rise"), None, None)),
        char_duration: Some(0.4),
        ..TelopDefaults::default()
    };
    let mut seq = TelopSequencer::new(defaults);
    seq.add(&"あ".repeat(9), &TelopOptions::default());
    seq.add("own", &TelopOptions::default().font_size(30.0).position("center").sfx("pop.wav"));

    let t = seq.telops();
    assert_eq!(t[0].position, TelopPosition::top());
    assert_eq!(t[0].font_size, Some(60.0));
    assert_eq!(t[0].effects.as_ref().unwrap().enter.as_deref(), Some("rise"));
    // 9 glyphs at the inherited 0.4 s pace plus post-roll.
    assert!((t[0].duration - 4.6).abs() < 1e-9);

    assert_eq!(t[1].position, TelopPosition::center());
    assert_eq!(t[1].font_size, Some(30.0));
    assert_eq!(t[1].sfx.as_ref().unwrap().volume, 1.0);
}

#[test]
fn unset_position_defaults_to_bottom() {
    let mut seq = TelopSequencer::default();
    seq.add("x", &TelopOptions::default());
    assert_eq!(seq.telops()[0].position, TelopPosition::bottom());
}

#[test]
fn local_defaults_override_inherited() {
    let movie = TelopDefaults {
        position: Some(TelopPosition::top()),
        font_size: Some(48.0),
        ..TelopDefaults::default()
    };
    let scene = TelopDefaults {
        font_size: Some(72.0),
        ..TelopDefaults::default()
    };
    let merged = movie.overridden_by(&scene);
    assert_eq!(merged.font_size, Some(72.0));
    assert_eq!(merged.position, Some(TelopPosition::top()));
}
