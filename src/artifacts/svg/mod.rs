use crate::artifacts::pack::glyph::Glyph;
use crate::artifacts::pack::gradient::Gradient;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

pub const CANVAS_SIZE: u32 = 128;

/// Vector source of one overlay icon: a gradient disc with the glyph
/// stroked in white on top, scaled from the 24px glyph grid.
#[derive(Debug, Clone, new)]
pub struct IconSvg<'a> {
    gradient: &'a Gradient,
    glyph: &'a Glyph,
}

impl IconSvg<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <defs>
    <linearGradient id="bg-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{start};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{end};stop-opacity:1" />
    </linearGradient>
  </defs>
  <circle cx="64" cy="64" r="56" fill="url(#bg-gradient)" />
  <g transform="translate(28, 28) scale(3)" stroke="white" fill="none" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
    {paths}
  </g>
</svg>
"#,
            size = CANVAS_SIZE,
            start = self.gradient.start(),
            end = self.gradient.end(),
            paths = self.glyph.render(),
        )
    }

    /// Writes `<stem>.svg` into `dir`, replacing any previous version.
    pub fn write(&self, dir: &Path, stem: &str) -> anyhow::Result<PathBuf> {
        let svg_path = dir.join(format!("{stem}.svg"));

        std::fs::write(&svg_path, self.render())
            .with_context(|| format!("failed to write {}", svg_path.display()))?;

        Ok(svg_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::status::status_name::StatusName;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn stops_carry_gradient_colors_in_order() {
        let gradient = Gradient::try_from_pair("#FF6600", "#FF8C00").unwrap();
        let glyph = Glyph::builtin(StatusName::Modified).unwrap();

        let svg = IconSvg::new(&gradient, &glyph).render();

        let first = svg.find("stop-color:#FF6600").unwrap();
        let second = svg.find("stop-color:#FF8C00").unwrap();
        assert!(first < second);
        assert!(svg.contains(r#"width="128" height="128" viewBox="0 0 128 128""#));
    }

    #[test]
    fn glyph_paths_sit_inside_the_icon_group() {
        let gradient = Gradient::default();
        let glyph = Glyph::new(vec![
            r#"<path d="M1 1" />"#.to_string(),
            r#"<path d="M2 2" />"#.to_string(),
        ]);

        let svg = IconSvg::new(&gradient, &glyph).render();

        assert!(svg.contains(
            "stroke-linejoin=\"round\">\n    <path d=\"M1 1\" />\n    <path d=\"M2 2\" />\n  </g>"
        ));
    }

    #[test]
    fn write_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let gradient = Gradient::default();
        let glyph = Glyph::builtin(StatusName::Clean).unwrap();
        let svg = IconSvg::new(&gradient, &glyph);

        let path = svg.write(dir.path(), "clean").unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        svg.write(dir.path(), "clean").unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(path, dir.path().join("clean.svg"));
        assert_eq!(first, second);
    }
}
