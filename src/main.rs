//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use grayhuff::analyze::analyze;
use grayhuff::tools::cli::options_init;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = options_init();

    //----- Run the pipeline, and fail fast on the first error
    let summary = match analyze(&options) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Huffman codes have been written to '{}'.",
        options.code_file.display()
    );
    println!("Entropy: {:.4} bits", summary.stats.entropy);
    println!("Average Code Length: {:.4} bits", summary.stats.expected_len);
    // A single symbol alphabet needs no bits at all, and the ratio of the
    // two zero quantities carries no information.
    match summary.stats.ratio {
        Some(ratio) => println!("Compression Ratio: {:.4}", ratio),
        None => println!("Compression Ratio: undefined (single symbol alphabet)"),
    }

    info!("Done.\n");
}
