pub mod frames;
pub mod opacity;

/// Pixel sizes bundled into every generated icon, smallest first.
pub const RASTER_SIZES: [u32; 4] = [16, 32, 48, 128];
