use crate::areas::converter::Converter;
use anyhow::Context;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use resvg::usvg;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// In-process renderer: resvg for rasterizing, `ico` for the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConverter;

impl Converter for NativeConverter {
    fn name(&self) -> &str {
        "native"
    }

    fn rasterize(&self, svg: &Path, size: u32, png: &Path) -> anyhow::Result<()> {
        let svg_data =
            std::fs::read(svg).with_context(|| format!("failed to read {}", svg.display()))?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .with_context(|| format!("failed to parse {}", svg.display()))?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .with_context(|| format!("failed to allocate {size}x{size} pixmap"))?;
        let source = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / source.width(),
            size as f32 / source.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .save_png(png)
            .with_context(|| format!("failed to write {}", png.display()))?;

        tracing::debug!(svg = %svg.display(), size, "rasterized");
        Ok(())
    }

    fn bundle(&self, pngs: &[PathBuf], ico: &Path) -> anyhow::Result<()> {
        let mut icon_dir = IconDir::new(ResourceType::Icon);

        for png in pngs {
            let file =
                File::open(png).with_context(|| format!("failed to open {}", png.display()))?;
            let image = IconImage::read_png(BufReader::new(file))
                .with_context(|| format!("failed to decode {}", png.display()))?;
            let entry = IconDirEntry::encode(&image)
                .with_context(|| format!("failed to encode {}", png.display()))?;
            icon_dir.add_entry(entry);
        }

        let file = File::create(ico).with_context(|| format!("failed to create {}", ico.display()))?;
        let mut writer = BufWriter::new(file);
        icon_dir
            .write(&mut writer)
            .with_context(|| format!("failed to write {}", ico.display()))?;
        writer.flush()?;

        Ok(())
    }
}
