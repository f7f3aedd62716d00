use crate::{
    composition::model::CompiledTimeline,
    foundation::{
        core::Seconds,
        error::{ReelError, ReelResult},
        math::Fnv1a64,
    },
};

impl CompiledTimeline {
    /// Stable 64-bit hash of the timeline's JSON form, with object keys visited in sorted order.
    pub fn fingerprint(&self) -> ReelResult<u64> {
        let value = serde_json::to_value(self).map_err(|e| ReelError::serde(e.to_string()))?;
        let mut h = Fnv1a64::new_default();
        write_json_value(&mut h, &value);
        Ok(h.finish())
    }

    /// Span of scene content: first scene start to last scene end, extended to the ending's end
    /// when there is an ending. `None` without scenes.
    pub fn scene_span(&self) -> Option<(Seconds, Seconds)> {
        let first = self.scenes.first()?;
        let last = self.scenes.last()?;
        let end = match &self.ending {
            Some(ending) => ending.end_time(),
            None => last.end_time(),
        };
        Some((first.start_time, end))
    }
}

fn write_json_value(h: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => h.write_u8(0),
        serde_json::Value::Bool(x) => {
            h.write_u8(1);
            h.write_u8(u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            h.write_u8(2);
            write_str(h, &n.to_string());
        }
        serde_json::Value::String(s) => {
            h.write_u8(3);
            write_str(h, s);
        }
        serde_json::Value::Array(items) => {
            h.write_u8(4);
            h.write_u64(items.len() as u64);
            for item in items {
                write_json_value(h, item);
            }
        }
        serde_json::Value::Object(map) => {
            h.write_u8(5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            h.write_u64(keys.len() as u64);
            for k in keys {
                write_str(h, k);
                write_json_value(h, &map[k]);
            }
        }
    }
}

fn write_str(h: &mut Fnv1a64, s: &str) {
    h.write_u64(s.len() as u64);
    h.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
