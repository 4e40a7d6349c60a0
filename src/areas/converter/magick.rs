use crate::areas::converter::Converter;
use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// ImageMagick 7 command-line front end.
#[derive(Debug, Clone, new)]
pub struct MagickConverter {
    program: PathBuf,
}

impl MagickConverter {
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: Vec<OsString>) -> anyhow::Result<()> {
        tracing::debug!(program = %self.program.display(), ?args, "running converter");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .with_context(|| format!("failed to launch {}", self.program.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}

impl Converter for MagickConverter {
    fn name(&self) -> &str {
        "magick"
    }

    fn rasterize(&self, svg: &Path, size: u32, png: &Path) -> anyhow::Result<()> {
        self.run(vec![
            svg.into(),
            "-background".into(),
            "none".into(),
            "-resize".into(),
            format!("{size}x{size}").into(),
            png.into(),
        ])
    }

    fn bundle(&self, pngs: &[PathBuf], ico: &Path) -> anyhow::Result<()> {
        let args = pngs
            .iter()
            .map(OsString::from)
            .chain(std::iter::once(ico.into()))
            .collect();

        self.run(args)
    }
}
