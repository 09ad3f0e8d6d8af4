//! Drives the whole pipeline for one source image: load the raster, count
//! the histogram, build the tree, derive the codes, compute the statistics
//! and persist the table. Each stage owns its output and hands it to the
//! next, and nothing is written unless every earlier stage succeeded.
//!
use std::fmt::{self, Display, Formatter};
use std::io;

use log::info;

use crate::huffman_coding::code_table::{derive_codes, write_code_table};
use crate::huffman_coding::huffman::build_tree;
use crate::huffman_coding::stats::{code_stats, CodeStats};
use crate::raster::pgm::load_raster;
use crate::tools::cli::Options;
use crate::tools::freq_count::freqs;

/// Why a run stopped before producing its report.
#[derive(Debug)]
pub enum AnalyzeError {
    /// The source image could not be read or decoded.
    Source(io::Error),
    /// The source decoded to a grid with no samples. There is no
    /// distribution to code, and no statistics to take.
    EmptyRaster,
    /// The code table artifact could not be written.
    TableWrite(io::Error),
}

impl Display for AnalyzeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::Source(e) => write!(f, "cannot read the source image: {}", e),
            AnalyzeError::EmptyRaster => write!(f, "the source image contains no samples"),
            AnalyzeError::TableWrite(e) => write!(f, "cannot write the code table: {}", e),
        }
    }
}

impl std::error::Error for AnalyzeError {}

/// What one successful run produced.
#[derive(Debug, Clone)]
pub struct Summary {
    pub rows: usize,
    pub cols: usize,
    pub alphabet_size: usize,
    pub stats: CodeStats,
}

/// Run the full pipeline as configured in `options`.
pub fn analyze(options: &Options) -> Result<Summary, AnalyzeError> {
    let raster = load_raster(&options.image).map_err(AnalyzeError::Source)?;
    info!(
        "Loaded {}x{} raster, {} samples",
        raster.rows,
        raster.cols,
        raster.len()
    );

    let histogram = freqs(&raster.samples);
    if histogram.total() == 0 {
        return Err(AnalyzeError::EmptyRaster);
    }
    info!("Alphabet of {} distinct values", histogram.alphabet_size());

    // The histogram holds at least one sample, so a root must exist.
    let root = build_tree(&histogram).unwrap();
    let table = derive_codes(&root);
    // The tree exists only to shape the codes.
    drop(root);

    let stats = code_stats(&histogram, &table);

    write_code_table(&options.code_file, &table).map_err(AnalyzeError::TableWrite)?;

    Ok(Summary {
        rows: raster.rows,
        cols: raster.cols,
        alphabet_size: histogram.alphabet_size(),
        stats,
    })
}
