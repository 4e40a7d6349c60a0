pub mod catalog;
pub mod glyph;
pub mod gradient;
pub mod manifest;
pub mod report;
