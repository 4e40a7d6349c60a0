//! Value types shared by the icon commands
//!
//! - `status`: the closed set of version-control states an overlay encodes
//! - `pack`: pack catalog, gradients, glyphs, run reports and manifests
//! - `markup`: regex extraction of gradients and glyphs from HTML samples
//! - `svg`: the fixed-layout vector document every icon is rendered from
//! - `icon`: multi-frame ICO handling for the transparency adjuster

pub mod icon;
pub mod markup;
pub mod pack;
pub mod status;
pub mod svg;
