use crate::artifacts::icon::opacity::Opacity;
use anyhow::Context;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Decoded RGBA frames of an icon container, in directory order.
pub struct IconFrames {
    frames: Vec<IconImage>,
}

impl IconFrames {
    pub fn new(frames: Vec<IconImage>) -> Self {
        Self { frames }
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let icon_dir = IconDir::read(BufReader::new(file))
            .with_context(|| format!("failed to parse icon container {}", path.display()))?;

        let frames = icon_dir
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry
                    .decode()
                    .with_context(|| format!("failed to decode frame {i} of {}", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if frames.is_empty() {
            anyhow::bail!("icon container has no frames: {}", path.display());
        }

        tracing::debug!(path = %path.display(), frames = frames.len(), "read icon");
        Ok(Self::new(frames))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[IconImage] {
        &self.frames
    }

    pub fn dimensions(&self) -> Vec<(u32, u32)> {
        self.frames
            .iter()
            .map(|frame| (frame.width(), frame.height()))
            .collect()
    }

    /// Scales the alpha of every pixel of every frame, leaving color untouched.
    pub fn fade(self, opacity: Opacity) -> Self {
        let frames = self
            .frames
            .into_iter()
            .map(|frame| {
                let mut rgba = frame.rgba_data().to_vec();
                rgba.chunks_exact_mut(4)
                    .for_each(|pixel| pixel[3] = opacity.scale(pixel[3]));
                IconImage::from_rgba_data(frame.width(), frame.height(), rgba)
            })
            .collect();

        Self::new(frames)
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for frame in &self.frames {
            let entry = IconDirEntry::encode(frame).with_context(|| {
                format!(
                    "failed to encode {}x{} frame",
                    frame.width(),
                    frame.height()
                )
            })?;
            icon_dir.add_entry(entry);
        }

        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        icon_dir
            .write(&mut writer)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer.flush()?;

        Ok(())
    }
}
