//! The tools module provides the helper functions that sit around the
//! Huffman core of grayhuff.
//!
//! The tools are:
//! - cli: Command line interface and the options struct handed to the pipeline.
//! - freq_count: Intensity histogram over the source samples.
//!
pub mod cli;
pub mod freq_count;
