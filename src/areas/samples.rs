use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory holding the themed HTML sample pages.
#[derive(Debug)]
pub struct SampleLibrary {
    path: Box<Path>,
}

impl SampleLibrary {
    pub fn new(path: Box<Path>) -> Self {
        SampleLibrary { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sample_path(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }

    /// Reads a sample page, or `None` when the file does not exist.
    pub fn read(&self, file: &str) -> anyhow::Result<Option<String>> {
        let path = self.sample_path(file);
        if !path.exists() {
            return Ok(None);
        }

        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read sample {}", path.display()))?;

        Ok(Some(html))
    }
}
