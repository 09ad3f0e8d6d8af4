use std::path::PathBuf;

use clap::Parser;
use log::info;

/// Fixed name of the persisted code table artifact.
pub const CODE_FILE: &str = "huffman_codes.txt";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "grayhuff",
    version,
    about = "Static Huffman code analysis for grayscale images.",
    long_about = "
    Reads an 8-bit grayscale image, builds the optimal prefix-free code for
    its intensity distribution, writes the code table to huffman_codes.txt
    and reports entropy, average code length and their ratio.

    The image data itself is not re-encoded."
)]
pub struct Args {
    /// Path to the grayscale image file (PGM, binary or ascii)
    #[clap(value_name = "IMAGE")]
    pub image: PathBuf,
}

/// Define all settings that control one run of the pipeline.
#[derive(Debug)]
pub struct Options {
    /// Grayscale source image to analyze
    pub image: PathBuf,
    /// Where the code table is persisted
    pub code_file: PathBuf,
}

/// Put command line information from CLAP into our internal structure.
pub fn options_init() -> Options {
    // Print opening line
    {
        let descr = "grayhuff, a grayscale Huffman code analyzer.";
        println!("{}  Version {}", descr, VERSION);
    }

    let args = Args::parse();
    let options = Options {
        image: args.image,
        code_file: PathBuf::from(CODE_FILE),
    };

    info!("Analyzing {}", options.image.display());
    options
}
