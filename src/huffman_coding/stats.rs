use super::code_table::CodeTable;
use crate::tools::freq_count::Histogram;

/// Information statistics for one generated code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Theoretical minimum average bits per symbol for the distribution.
    pub entropy: f64,
    /// Probability weighted mean of the assigned code lengths.
    pub expected_len: f64,
    /// entropy / expected_len. None for a single-symbol alphabet, where
    /// both terms are zero and the quotient carries no value.
    pub ratio: Option<f64>,
}

/// Compute entropy, expected code length and their ratio for the generated
/// code. Only symbols with a nonzero count contribute, so no 0 * log2(0)
/// term ever appears.
pub fn code_stats(histogram: &Histogram, table: &CodeTable) -> CodeStats {
    let mut entropy = 0.0;
    let mut expected_len = 0.0;
    for (symbol, _) in histogram.present() {
        let p = histogram.probability(symbol);
        entropy -= p * p.log2();
        expected_len += p * table[&symbol].length as f64;
    }

    // With two or more symbols every code is at least one bit long, so the
    // expected length can only be zero when the alphabet has one symbol.
    let ratio = if expected_len > 0.0 {
        Some(entropy / expected_len)
    } else {
        None
    };

    CodeStats {
        entropy,
        expected_len,
        ratio,
    }
}
