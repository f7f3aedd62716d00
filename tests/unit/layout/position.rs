use super::*;

#[test]
fn presets_parse_to_default_offsets() {
    assert_eq!(TelopPosition::parse("bottom"), TelopPosition::bottom());
    assert_eq!(TelopPosition::parse("top").offset, Offset::Px(120.0));
    assert_eq!(TelopPosition::parse("center"), TelopPosition::center());
}

#[test]
fn compound_positions() {
    let p = TelopPosition::parse("top 15%");
    assert_eq!(p.anchor, Anchor::Top);
    assert_eq!(p.offset, Offset::Percent(15.0));

    let p = TelopPosition::parse("80px");
    assert_eq!(p.anchor, Anchor::Bottom);
    assert_eq!(p.offset, Offset::Px(80.0));

    let p = TelopPosition::parse("bottom 12.5%");
    assert_eq!(p.offset, Offset::Percent(12.5));
}

#[test]
fn unknown_input_falls_back_to_bottom() {
    assert_eq!(TelopPosition::parse("somewhere nice"), TelopPosition::bottom());
    assert_eq!(TelopPosition::parse(""), TelopPosition::bottom());
    assert_eq!(TelopPosition::parse("-20px"), TelopPosition::bottom());
}

#[test]
fn string_form_round_trips() {
    for s in ["bottom", "top 15%", "center", "bottom 80px", "top 33.3%"] {
        let p = TelopPosition::parse(s);
        assert_eq!(TelopPosition::parse(&p.to_string()), p);
    }
    let json = serde_json::to_string(&TelopPosition::parse("top 15%")).unwrap();
    assert_eq!(json, "\"top 15%\"");
    let back: TelopPosition = serde_json::from_str(&json).unwrap();
    assert_eq!(back.offset, Offset::Percent(15.0));
}

#[test]
fn box_top_per_anchor() {
    let h = 1080.0;
    assert_eq!(TelopPosition::parse("top 100px").box_top(h, 50.0, 10.0), 110.0);
    assert_eq!(TelopPosition::bottom().box_top(h, 60.0, 0.0), 1080.0 - 120.0 - 60.0);
    assert_eq!(TelopPosition::center().box_top(h, 100.0, 0.0), 490.0);
    assert_eq!(TelopPosition::parse("bottom 10%").box_top(h, 0.0, 0.0), 972.0);
}

#[test]
fn corner_and_fixed_placement() {
    let frame = kurbo::Size::new(1920.0, 1080.0);
    let size = kurbo::Size::new(200.0, 100.0);
    assert_eq!(
        place_in_corner(WipeCorner::BottomRight, frame, size, 20.0),
        kurbo::Point::new(1700.0, 960.0)
    );
    assert_eq!(
        place_fixed(FixedPosition::TopCenter, frame, size, 20.0),
        kurbo::Point::new(860.0, 20.0)
    );
    let parsed: FixedPosition = serde_json::from_str("\"bottom-center\"").unwrap();
    assert_eq!(parsed, FixedPosition::BottomCenter);
}
