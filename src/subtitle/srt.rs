use std::sync::LazyLock;

use regex::Regex;

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})\s*-->\s*(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})",
    )
    .expect("srt timestamp regex must compile")
});

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One subtitle cue on the movie timeline.
pub struct Caption {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl Caption {
    /// `true` for `start_ms <= ms < end_ms`.
    pub fn contains(&self, ms: f64) -> bool {
        ms >= self.start_ms as f64 && ms < self.end_ms as f64
    }
}

fn millis(caps: &regex::Captures<'_>, first: usize) -> Option<u64> {
    let h: u64 = caps[first].parse().ok()?;
    let m: u64 = caps[first + 1].parse().ok()?;
    let s: u64 = caps[first + 2].parse().ok()?;
    // "5" and "500" are both half a second.
    let frac = &caps[first + 3];
    let ms: u64 = format!("{frac:0<3}").parse().ok()?;
    h.checked_mul(60)?
        .checked_add(m)?
        .checked_mul(60)?
        .checked_add(s)?
        .checked_mul(1000)?
        .checked_add(ms)
}

/// Parse SRT text into captions.
///
/// Parsing is lenient: blocks without a valid timestamp line are skipped, the numeric index
/// line is optional, `,` and `.` are both accepted before milliseconds, and CRLF input works.
/// Multi-line cue text is joined with `\n`.
pub fn parse_srt(input: &str) -> Vec<Caption> {
    let input = input.trim_start_matches('\u{feff}').replace("\r\n", "\n");
    let mut out = Vec::new();

    for block in input.split("\n\n") {
        let mut lines = block.lines().skip_while(|l| l.trim().is_empty()).peekable();
        if lines
            .peek()
            .is_some_and(|l| l.trim().chars().all(|c| c.is_ascii_digit()))
        {
            lines.next();
        }
        let Some(ts_line) = lines.next() else {
            continue;
        };
        let Some(caps) = TIMESTAMP_LINE.captures(ts_line) else {
            tracing::debug!(line = ts_line, "skipping srt block without timestamp");
            continue;
        };
        let (Some(start_ms), Some(end_ms)) = (millis(&caps, 1), millis(&caps, 5)) else {
            continue;
        };

        let text = lines
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_owned();
        out.push(Caption {
            text,
            start_ms,
            end_ms,
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/srt.rs"]
mod tests;
