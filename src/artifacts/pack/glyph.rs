use crate::artifacts::status::status_name::StatusName;

/// Indentation of glyph paths inside the icon group of the SVG template.
const PATH_SEPARATOR: &str = "\n    ";

/// Outline pictograms on a 24x24 grid, used when a pack is regenerated
/// without its HTML sample.
pub const BUILTIN_GLYPHS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "added" => &[
        r#"<path d="M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0" />"#,
        r#"<path d="M9 12h6" />"#,
        r#"<path d="M12 9v6" />"#,
    ],
    "clean" => &[
        r#"<path d="M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0" />"#,
        r#"<path d="M9 12l2 2l4 -4" />"#,
    ],
    "conflicted" => &[
        r#"<path d="M12 9v4" />"#,
        r#"<path d="M10.363 3.591l-8.106 13.534a1.914 1.914 0 0 0 1.636 2.871h16.214a1.914 1.914 0 0 0 1.636 -2.87l-8.106 -13.536a1.914 1.914 0 0 0 -3.274 0z" />"#,
        r#"<path d="M12 16h.01" />"#,
    ],
    "ignored" => &[
        r#"<path d="M10.585 10.587a2 2 0 0 0 2.829 2.828" />"#,
        r#"<path d="M16.681 16.673a8.717 8.717 0 0 1 -4.681 1.327c-3.6 0 -6.6 -2 -9 -6c1.272 -2.12 2.712 -3.678 4.32 -4.674m2.86 -1.146a9.055 9.055 0 0 1 1.82 -.18c3.6 0 6.6 2 9 6c-.666 1.11 -1.379 2.067 -2.138 2.87" />"#,
        r#"<path d="M3 3l18 18" />"#,
    ],
    "modified" => &[
        r#"<path d="M4 20h4l10.5 -10.5a2.828 2.828 0 1 0 -4 -4l-10.5 10.5v4" />"#,
        r#"<path d="M13.5 6.5l4 4" />"#,
    ],
    "untracked" => &[
        r#"<path d="M10 12a2 2 0 1 0 4 0a2 2 0 0 0 -4 0" />"#,
        r#"<path d="M21 12c-2.4 4 -5.4 6 -9 6c-3.6 0 -6.6 -2 -9 -6c2.4 -4 5.4 -6 9 -6c3.6 0 6.6 2 9 6" />"#,
    ],
};

/// The `<path>` elements that draw a status pictogram, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    paths: Vec<String>,
}

impl Glyph {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn builtin(status: StatusName) -> anyhow::Result<Self> {
        let paths = BUILTIN_GLYPHS
            .get(status.as_str())
            .ok_or_else(|| anyhow::anyhow!("no built-in glyph for {status}"))?;

        Ok(Self::new(paths.iter().map(|p| p.to_string()).collect()))
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn render(&self) -> String {
        self.paths.join(PATH_SEPARATOR)
    }
}
