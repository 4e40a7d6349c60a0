use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::path::{Path, PathBuf};

/// One status card of a sample page.
#[derive(Debug, Clone)]
pub struct CardSpec {
    pub class: &'static str,
    pub colors: Option<(&'static str, &'static str)>,
    pub paths: Vec<&'static str>,
}

impl CardSpec {
    pub fn new(class: &'static str, colors: (&'static str, &'static str), paths: Vec<&'static str>) -> Self {
        Self {
            class,
            colors: Some(colors),
            paths,
        }
    }
}

pub const STATUS_CLASSES: [&str; 6] = ["added", "clean", "conflicted", "ignored", "modified", "tracked"];

pub fn full_cards() -> Vec<CardSpec> {
    vec![
        CardSpec::new("added", ("#00C853", "#64DD17"), vec![r#"<path d="M9 12h6" />"#, r#"<path d="M12 9v6" />"#]),
        CardSpec::new("clean", ("#2196F3", "#03A9F4"), vec![r#"<path d="M9 12l2 2l4 -4" />"#]),
        CardSpec::new("conflicted", ("#D50000", "#FF1744"), vec![r#"<path d="M12 9v4" />"#, r#"<path d="M12 16h.01" />"#]),
        CardSpec::new("ignored", ("#9E9E9E", "#757575"), vec![r#"<path d="M3 3l18 18" />"#]),
        CardSpec::new("modified", ("#FF6600", "#FF8C00"), vec![r#"<path d="M4 20h4l10.5 -10.5a2.828 2.828 0 1 0 -4 -4l-10.5 10.5v4" />"#, r#"<path d="M13.5 6.5l4 4" />"#]),
        CardSpec::new("tracked", ("#FFD600", "#FFAB00"), vec![r#"<path d="M10 12a2 2 0 1 0 4 0a2 2 0 0 0 -4 0" />"#]),
    ]
}

/// Renders a sample page laid out like the themed showcase pages.
pub fn sample_html(cards: &[CardSpec]) -> String {
    let rules = cards
        .iter()
        .filter_map(|card| {
            card.colors.map(|(start, end)| {
                format!(
                    "    .{} .icon-wrapper {{\n      background: linear-gradient(135deg, {start}, {end});\n      border-radius: 50%;\n    }}\n",
                    card.class
                )
            })
        })
        .collect::<String>();

    let body = cards
        .iter()
        .map(|card| {
            let graphic = if card.paths.is_empty() {
                "<span class=\"placeholder\"></span>".to_string()
            } else {
                format!(
                    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n              {}\n            </svg>",
                    card.paths.join("\n              ")
                )
            };
            format!(
                "      <div class=\"icon-card {}\">\n        <div class=\"icon-wrapper\">\n          <div class=\"icon\">\n            {graphic}\n          </div>\n        </div>\n      </div>\n",
                card.class
            )
        })
        .collect::<String>();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <style>\n{rules}  </style>\n</head>\n<body>\n  <main>\n    <div class=\"grid\">\n{body}    </div>\n  </main>\n</body>\n</html>\n"
    )
}

pub fn write_sample(dir: &Path, file: &str, cards: &[CardSpec]) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", dir, e));
    let path = dir.join(file);
    std::fs::write(&path, sample_html(cards)).unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
    path
}

/// RGBA frame with a spread of partial alpha values.
pub fn patterned_frame(size: u32) -> IconImage {
    let rgba = (0..size * size)
        .flat_map(|i| [(i * 3 % 256) as u8, (i * 5 % 256) as u8, 180, (i * 11 % 250 + 5) as u8])
        .collect();
    IconImage::from_rgba_data(size, size, rgba)
}

pub fn write_icon(path: &Path, sizes: &[u32]) -> Vec<IconImage> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    let frames = sizes.iter().map(|size| patterned_frame(*size)).collect::<Vec<_>>();
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for frame in &frames {
        icon_dir.add_entry(IconDirEntry::encode(frame).expect("Failed to encode frame"));
    }
    let file = std::fs::File::create(path).unwrap_or_else(|e| panic!("Failed to create {:?}: {}", path, e));
    icon_dir.write(file).expect("Failed to write icon");

    frames
}

pub fn read_icon(path: &Path) -> Vec<IconImage> {
    let file = std::fs::File::open(path).unwrap_or_else(|e| panic!("Failed to open {:?}: {}", path, e));
    let icon_dir = IconDir::read(file).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e));
    icon_dir
        .entries()
        .iter()
        .map(|entry| entry.decode().expect("Failed to decode frame"))
        .collect()
}

pub fn frame_sizes(frames: &[IconImage]) -> Vec<u32> {
    frames.iter().map(|frame| frame.width()).collect()
}

pub fn files_with_extension(dir: &Path, extension: &str) -> Vec<String> {
    let mut files = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list {:?}: {}", dir, e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().to_string()))
        .collect::<Vec<_>>();
    files.sort();
    files
}
