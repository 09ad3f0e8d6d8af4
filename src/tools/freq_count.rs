use rayon::prelude::*;

/// Intensity histogram over all 256 possible sample values, plus the total
/// number of samples counted. Built once per run and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// How often `symbol` occurs in the source.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of samples counted. Always the sum of all 256 counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn alphabet_size(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Relative frequency of `symbol`. Only meaningful when the histogram
    /// holds at least one sample.
    pub fn probability(&self, symbol: u8) -> f64 {
        self.count(symbol) as f64 / self.total as f64
    }

    /// The symbols present in the source with their counts, in ascending
    /// symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

/// Returns a frequency count of the input samples. Uses parallelism when the
/// data set is over 64k.
pub fn freqs(data: &[u8]) -> Histogram {
    let counts = if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut counts, chunk| {
                    chunk.iter().for_each(|&el| counts[el as usize] += 1);
                    counts
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut counts = vec![0_u64; 256];
        data.iter().for_each(|&el| counts[el as usize] += 1);
        counts
    };

    Histogram {
        counts,
        total: data.len() as u64,
    }
}
