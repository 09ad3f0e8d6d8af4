//! The raster module loads source images for the analyzer.
//!
//! Only single channel 8-bit data is supported, delivered as a plain grid of
//! byte samples. Every later stage works on ordinary byte slices and never
//! touches the image format again.
//!
pub mod pgm;
