//! Static Huffman code analysis for 8-bit grayscale rasters.
//!
//! Version 0.1.0
//!
//! Reads a grayscale image, counts how often each of the 256 intensity
//! levels occurs, builds the optimal prefix-free code for that distribution,
//! and reports the entropy, the expected code length and their ratio.
//! The full code table is persisted to `huffman_codes.txt`.
//!
//! The image itself is never re-encoded. The program reports what the code
//! would achieve, it does not produce a compressed bitstream.
//!
//! Basic usage:
//!
//! `$> grayhuff image.pgm`
//!
pub mod analyze;
pub mod huffman_coding;
pub mod raster;
pub mod tools;
