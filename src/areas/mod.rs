//! Filesystem and process boundaries of the icon tools
//!
//! - `converter`: SVG → ICO conversion backends
//! - `samples`: the directory of HTML sample pages
//! - `studio`: shared state every command runs against
//! - `workspace`: the output tree of icon packs

pub mod converter;
pub mod samples;
pub mod studio;
pub mod workspace;
