use crate::areas::converter::convert_svg_to_ico;
use crate::areas::samples::SampleLibrary;
use crate::areas::studio::Studio;
use crate::artifacts::markup::{extract_glyph, extract_gradient};
use crate::artifacts::pack::catalog::PackSpec;
use crate::artifacts::pack::manifest::{CatalogIndex, IconEntry};
use crate::artifacts::pack::report::{IconOutcome, PackReport};
use crate::artifacts::status::status_name::{STATUS_CLASSES, StatusName};
use crate::artifacts::svg::IconSvg;
use crate::commands::{Marker, rule};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub complete: usize,
    pub total: usize,
}

impl Studio {
    pub fn extract_packs(
        &self,
        samples: &SampleLibrary,
        packs: &[PackSpec],
    ) -> anyhow::Result<ExtractionSummary> {
        writeln!(self.writer(), "Overlay Icon Pack Generator")?;
        writeln!(self.writer(), "{}", rule())?;

        self.workspace().create_root()?;

        let mut complete = 0;
        let mut manifests = Vec::new();
        for spec in packs {
            if let Some(report) = self.extract_pack(samples, spec)? {
                if report.is_complete() {
                    complete += 1;
                }
                manifests.push(report.manifest());
            }
        }

        self.workspace().write_catalog(&CatalogIndex::new(manifests))?;

        writeln!(self.writer(), "\n{}", rule())?;
        writeln!(
            self.writer(),
            "{} Successfully created {}/{} icon packs",
            Marker::Ok,
            complete,
            packs.len()
        )?;
        writeln!(
            self.writer(),
            "\nIcon packs are in: {}",
            self.workspace().path().display()
        )?;

        Ok(ExtractionSummary {
            complete,
            total: packs.len(),
        })
    }

    /// Returns `None` when the sample page could not be loaded.
    fn extract_pack(
        &self,
        samples: &SampleLibrary,
        spec: &PackSpec,
    ) -> anyhow::Result<Option<PackReport>> {
        writeln!(self.writer(), "\nProcessing: {}", spec.display_name)?;

        let sample_path = samples.sample_path(spec.file);
        let html = match samples.read(spec.file) {
            Ok(Some(html)) => html,
            Ok(None) => {
                writeln!(
                    self.writer(),
                    "  {} HTML file not found: {}",
                    Marker::Fail,
                    sample_path.display()
                )?;
                return Ok(None);
            }
            Err(e) => {
                writeln!(self.writer(), "  {} {:#}", Marker::Fail, e)?;
                return Ok(None);
            }
        };

        let pack_dir = self.workspace().create_pack_dir(spec.name)?;

        let mut report = PackReport::new(*spec);
        for (class, status) in STATUS_CLASSES.entries() {
            let outcome = self.extract_icon(&html, class, *status, &pack_dir)?;

            match &outcome {
                IconOutcome::Created(_) => writeln!(
                    self.writer(),
                    "  {} Created {}",
                    Marker::Ok,
                    status.icon_file_name()
                )?,
                IconOutcome::MissingMarkup => writeln!(
                    self.writer(),
                    "  {} Could not extract SVG for {}",
                    Marker::Fail,
                    status
                )?,
                IconOutcome::ConversionFailed(error) => writeln!(
                    self.writer(),
                    "  {} Failed to convert {}: {}",
                    Marker::Fail,
                    status,
                    error
                )?,
            }

            report.record(*status, outcome);
        }

        self.workspace().write_manifest(&report.manifest())?;

        Ok(Some(report))
    }

    fn extract_icon(
        &self,
        html: &str,
        class: &str,
        status: StatusName,
        pack_dir: &Path,
    ) -> anyhow::Result<IconOutcome> {
        let Some(glyph) = extract_glyph(html, class)? else {
            return Ok(IconOutcome::MissingMarkup);
        };
        let gradient = extract_gradient(html, class)?;

        let converted = IconSvg::new(&gradient, &glyph)
            .write(pack_dir, status.as_str())
            .and_then(|svg| convert_svg_to_ico(self.converter(), &svg));

        Ok(match converted {
            Ok(_) => IconOutcome::Created(IconEntry::new(status, gradient)),
            Err(e) => {
                tracing::warn!(%status, converter = self.converter().name(), error = %e, "conversion failed");
                IconOutcome::ConversionFailed(format!("{e:#}"))
            }
        })
    }
}
