use crate::artifacts::pack::manifest::{CATALOG_FILE_NAME, CatalogIndex, MANIFEST_FILE_NAME, PackManifest};
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The output tree: one directory per icon pack under a common root.
#[derive(Debug)]
pub struct PackWorkspace {
    path: Box<Path>,
}

impl PackWorkspace {
    pub fn new(path: Box<Path>) -> Self {
        PackWorkspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pack_dir(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn create_pack_dir(&self, name: &str) -> anyhow::Result<PathBuf> {
        let pack_dir = self.pack_dir(name);
        std::fs::create_dir_all(&pack_dir)
            .with_context(|| format!("failed to create pack directory {}", pack_dir.display()))?;

        Ok(pack_dir)
    }

    pub fn create_root(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create output directory {}", self.path.display()))
    }

    /// Every `.ico` file under the root, sorted by path.
    pub fn list_icons(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let mut icons = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ico"))
            })
            .collect::<Vec<_>>();
        icons.sort();

        Ok(icons)
    }

    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.path).unwrap_or(path)
    }

    pub fn write_manifest(&self, manifest: &PackManifest) -> anyhow::Result<PathBuf> {
        let path = self.pack_dir(manifest.name()).join(MANIFEST_FILE_NAME);
        Self::write_json(&path, manifest)?;

        Ok(path)
    }

    pub fn write_catalog(&self, catalog: &CatalogIndex) -> anyhow::Result<PathBuf> {
        let path = self.path.join(CATALOG_FILE_NAME);
        Self::write_json(&path, catalog)?;

        Ok(path)
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
        let mut content = serde_json::to_string_pretty(value)?;
        content.push('\n');

        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
