use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::ReelResult,
    subtitle::srt::{Caption, parse_srt},
};

/// Resolves a caption file reference to parsed captions.
pub trait CaptionLoader {
    fn load(&self, path: &str) -> ReelResult<Vec<Caption>>;
}

/// Reads caption files from disk, relative to `root`.
#[derive(Clone, Debug, Default)]
pub struct FsCaptionLoader {
    root: PathBuf,
}

impl FsCaptionLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CaptionLoader for FsCaptionLoader {
    fn load(&self, path: &str) -> ReelResult<Vec<Caption>> {
        let full = self.root.join(path);
        let text = std::fs::read_to_string(&full)
            .with_context(|| format!("read caption file {}", full.display()))?;
        Ok(parse_srt(&text))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/loader.rs"]
mod tests;
