use crate::areas::studio::Studio;
use crate::artifacts::icon::frames::IconFrames;
use crate::artifacts::icon::opacity::Opacity;
use crate::artifacts::status::status_name::StatusName;
use crate::commands::Marker;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_PACK: &str = "default";

/// Which icon files a transparency run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransparencyTarget {
    /// Explicit files, in the order given.
    Files(Vec<PathBuf>),
    /// `<status>.ico` for every status inside one pack.
    Pack(String),
    /// Every `.ico` below the output root.
    AllPacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransparencySummary {
    pub adjusted: usize,
    pub missing: usize,
    pub failed: usize,
}

impl TransparencySummary {
    pub fn total(&self) -> usize {
        self.adjusted + self.missing + self.failed
    }
}

struct Candidate {
    label: String,
    path: PathBuf,
}

impl Studio {
    pub fn make_transparent(
        &self,
        target: &TransparencyTarget,
        opacity: Opacity,
    ) -> anyhow::Result<TransparencySummary> {
        writeln!(
            self.writer(),
            "Applying {}% opacity to overlay icons...",
            opacity.percent()
        )?;

        let mut summary = TransparencySummary::default();
        for candidate in self.transparency_candidates(target)? {
            if !candidate.path.is_file() {
                writeln!(self.writer(), "  {} {}", Marker::Missing, candidate.label)?;
                summary.missing += 1;
                continue;
            }

            match Self::fade_icon(&candidate.path, opacity) {
                Ok(frames) => {
                    tracing::debug!(path = %candidate.path.display(), frames, "faded icon");
                    writeln!(self.writer(), "  {} {}", Marker::Ok, candidate.label)?;
                    summary.adjusted += 1;
                }
                Err(e) => {
                    writeln!(
                        self.writer(),
                        "  {} {}: {:#}",
                        Marker::Error,
                        candidate.path.display(),
                        e
                    )?;
                    summary.failed += 1;
                }
            }
        }

        writeln!(
            self.writer(),
            "\n{} Transparency applied to {}/{} icons at {} opacity",
            Marker::Success,
            summary.adjusted,
            summary.total(),
            opacity
        )?;

        Ok(summary)
    }

    fn transparency_candidates(&self, target: &TransparencyTarget) -> anyhow::Result<Vec<Candidate>> {
        let candidates = match target {
            TransparencyTarget::Files(files) => files
                .iter()
                .map(|path| Candidate {
                    label: path
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string()),
                    path: path.clone(),
                })
                .collect(),
            TransparencyTarget::Pack(pack) => {
                let pack_dir = self.workspace().pack_dir(pack);
                StatusName::all()
                    .map(|status| Candidate {
                        label: status.icon_file_name(),
                        path: pack_dir.join(status.icon_file_name()),
                    })
                    .collect()
            }
            TransparencyTarget::AllPacks => self
                .workspace()
                .list_icons()?
                .into_iter()
                .map(|path| Candidate {
                    label: self.workspace().relative(&path).display().to_string(),
                    path,
                })
                .collect(),
        };

        Ok(candidates)
    }

    /// Rewrites the icon at `path` with every alpha scaled; returns the frame count.
    fn fade_icon(path: &Path, opacity: Opacity) -> anyhow::Result<usize> {
        let frames = IconFrames::read(path)?;
        let count = frames.len();
        frames.fade(opacity).write(path)?;

        Ok(count)
    }
}
