use super::*;

#[test]
fn recognizes_all_tag_styles() {
    let l = parse_speaker("[SPEAKER_00] hello");
    assert_eq!(l.speaker, Some("SPEAKER_00"));
    assert_eq!(l.content, "hello");

    let l = parse_speaker("（田中）こんにちは");
    assert_eq!(l.speaker, Some("田中"));
    assert_eq!(l.content, "こんにちは");

    let l = parse_speaker("(Bob)  hi");
    assert_eq!(l.speaker, Some("Bob"));
    assert_eq!(l.content, "hi");
}

#[test]
fn untagged_or_mid_text_tags_are_content() {
    let l = parse_speaker("no speaker here");
    assert_eq!(l.speaker, None);
    assert_eq!(l.content, "no speaker here");

    let l = parse_speaker("say [x] later");
    assert_eq!(l.speaker, None);

    let l = parse_speaker("[] empty");
    assert_eq!(l.speaker, None);
}

#[test]
fn placeholder_substitution() {
    assert_eq!(fill_speaker("{{$speaker}}「", Some("田中")), "田中「");
    assert_eq!(fill_speaker("<{{$speaker}}|{{$speaker}}>", Some("a")), "<a|a>");
    assert_eq!(fill_speaker("{{$speaker}}: ", None), ": ");
}
