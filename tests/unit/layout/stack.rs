use super::*;
use crate::layout::position::TelopPosition;

fn telop(text: &str, start: f64, duration: f64, position: &str) -> TelopData {
    TelopData {
        text: text.to_owned(),
        start_time: start,
        duration,
        effects: None,
        position: TelopPosition::parse(position),
        overlay: None,
        emoji: None,
        color: None,
        sfx: None,
        font_size: None,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn height_wraps_on_model_line_width() {
    // 1920 px: (1920 - 80) / 48 = 38 glyphs per line, 67.2 px per line.
    assert!(approx(estimate_telop_height(&"あ".repeat(38), 1920.0), 67.2));
    assert!(approx(estimate_telop_height(&"あ".repeat(39), 1920.0), 134.4));
    assert_eq!(estimate_telop_height("", 1920.0), 0.0);
}

#[test]
fn simultaneous_batch_stacks_in_list_order() {
    let fps = Fps::new(30, 1).unwrap();
    let telops = vec![
        telop("一行目", 0.0, 3.0, "bottom"),
        telop("二行目", 0.0, 3.0, "bottom"),
        telop("三行目", 0.0, 3.0, "bottom"),
    ];
    let frame = FrameIndex(15);
    assert_eq!(stack_offset(0, &telops, frame, fps, 1920.0), 0.0);
    assert!(approx(stack_offset(1, &telops, frame, fps, 1920.0), 67.2));
    assert!(approx(stack_offset(2, &telops, frame, fps, 1920.0), 134.4));
}

#[test]
fn finished_and_other_anchor_telops_do_not_push() {
    let fps = Fps::new(30, 1).unwrap();
    let telops = vec![
        telop("done", 0.0, 1.0, "bottom"),
        telop("top line", 0.5, 5.0, "top"),
        telop("current", 1.5, 3.0, "bottom"),
    ];
    assert_eq!(stack_offset(2, &telops, FrameIndex(60), fps, 1920.0), 0.0);
}

#[test]
fn invisible_telop_gets_no_offset() {
    let fps = Fps::new(30, 1).unwrap();
    let telops = vec![
        telop("a", 0.0, 10.0, "bottom"),
        telop("b", 5.0, 2.0, "bottom"),
    ];
    assert_eq!(stack_offset(1, &telops, FrameIndex(30), fps, 1920.0), 0.0);
    assert!(stack_offset(1, &telops, FrameIndex(160), fps, 1920.0) > 0.0);
    assert_eq!(stack_offset(7, &telops, FrameIndex(160), fps, 1920.0), 0.0);
}

#[test]
fn height_model_ignores_per_telop_font_size() {
    // Known inconsistency: a 96 px telop is stacked as if it were 48 px.
    let fps = Fps::new(30, 1).unwrap();
    let mut big = telop("大きい", 0.0, 3.0, "bottom");
    big.font_size = Some(96.0);
    let small = telop("小さい", 0.0, 3.0, "bottom");
    let with_big = vec![big, small.clone()];
    let with_default = vec![telop("大きい", 0.0, 3.0, "bottom"), small];
    assert_eq!(
        stack_offset(1, &with_big, FrameIndex(10), fps, 1920.0),
        stack_offset(1, &with_default, FrameIndex(10), fps, 1920.0)
    );
}
