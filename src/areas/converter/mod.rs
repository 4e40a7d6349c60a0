//! SVG → multi-resolution ICO conversion
//!
//! A conversion rasterizes the vector source once per size in
//! [`RASTER_SIZES`] into `<stem>-<size>.png` beside the source, bundles the
//! rasters into `<stem>.ico`, then removes the rasters.
//!
//! ## Backends
//!
//! - `magick`: shells out to the ImageMagick CLI
//! - `native`: renders in-process with resvg and writes the container with `ico`

pub mod magick;
pub mod native;

use crate::artifacts::icon::RASTER_SIZES;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub trait Converter {
    fn name(&self) -> &str;

    /// Renders `svg` as a `size`x`size` PNG at `png`.
    fn rasterize(&self, svg: &Path, size: u32, png: &Path) -> anyhow::Result<()>;

    /// Combines `pngs`, in order, into one icon container at `ico`.
    fn bundle(&self, pngs: &[PathBuf], ico: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConverterKind {
    Magick,
    Native,
}

pub fn build_converter(kind: ConverterKind, magick_bin: &Path) -> Box<dyn Converter> {
    match kind {
        ConverterKind::Magick => Box::new(magick::MagickConverter::new(magick_bin.to_path_buf())),
        ConverterKind::Native => Box::new(native::NativeConverter),
    }
}

pub fn convert_svg_to_ico(converter: &dyn Converter, svg_path: &Path) -> anyhow::Result<PathBuf> {
    let stem = svg_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid vector source name: {}", svg_path.display()))?;
    let dir = svg_path.parent().unwrap_or(Path::new("."));
    let ico_path = dir.join(format!("{stem}.ico"));

    let mut pngs = Vec::with_capacity(RASTER_SIZES.len());
    let result = (|| -> anyhow::Result<()> {
        for size in RASTER_SIZES {
            let png = dir.join(format!("{stem}-{size}.png"));
            pngs.push(png.clone());
            converter.rasterize(svg_path, size, &png)?;
        }

        converter.bundle(&pngs, &ico_path)
    })();

    for png in &pngs {
        match std::fs::remove_file(png) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %png.display(), error = %e, "failed to remove raster");
            }
            _ => {}
        }
    }

    result.map(|_| ico_path)
}
