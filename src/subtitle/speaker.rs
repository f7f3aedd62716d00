use std::sync::LazyLock;

use regex::Regex;

static SPEAKER_TAGS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^\[([^\]]+)\]\s*").expect("bracket speaker regex must compile"),
        Regex::new(r"^（([^）]+)）\s*").expect("full-width speaker regex must compile"),
        Regex::new(r"^\(([^)]+)\)\s*").expect("paren speaker regex must compile"),
    ]
});

const SPEAKER_PLACEHOLDER: &str = "{{$speaker}}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeakerLine<'a> {
    pub speaker: Option<&'a str>,
    pub content: &'a str,
}

/// Split a leading speaker tag (`[id]`, `（id）` or `(id)`) off caption text.
pub fn parse_speaker(text: &str) -> SpeakerLine<'_> {
    for re in SPEAKER_TAGS.iter() {
        if let Some(caps) = re.captures(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            return SpeakerLine {
                speaker: Some(name.as_str()),
                content: &text[whole.end()..],
            };
        }
    }
    SpeakerLine {
        speaker: None,
        content: text,
    }
}

/// Replace every `{{$speaker}}` in `template` with `speaker` (empty when unknown).
pub fn fill_speaker(template: &str, speaker: Option<&str>) -> String {
    template.replace(SPEAKER_PLACEHOLDER, speaker.unwrap_or(""))
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/speaker.rs"]
mod tests;
