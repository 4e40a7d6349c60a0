//! Icon command implementations
//!
//! Each command is an `impl Studio` block, writing progress lines through the
//! studio writer:
//!
//! - `transparent`: fade the alpha channel of existing icon files in place
//! - `extract`: build icon packs from the HTML sample pages
//! - `fix`: rebuild the packs whose samples need hand-authored colors

pub mod extract;
pub mod fix;
pub mod transparent;

use colored::Colorize;

const RULE_WIDTH: usize = 40;

/// Status tag at the start of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Fail,
    Missing,
    Error,
    Success,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colored_str = match self {
            Marker::Ok => "[OK]".green(),
            Marker::Fail => "[FAIL]".red(),
            Marker::Missing => "[MISSING]".yellow(),
            Marker::Error => "[ERROR]".red().bold(),
            Marker::Success => "[SUCCESS]".green().bold(),
        };
        write!(f, "{colored_str}")
    }
}

pub(crate) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
