//! HistogramTable - 256-bin intensity frequency table
//!
//! Produced by [`crate::compute_histogram`] from a single-channel image.
//! `bins[v]` counts the samples equal to `v`, so the bins always sum to
//! `width * height` of the source.

/// Number of bins in a gray histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// Frequency table of 8-bit gray values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramTable {
    bins: [u64; HISTOGRAM_BINS],
}

impl HistogramTable {
    /// Accumulate a histogram over raw gray samples.
    pub fn from_samples(samples: &[u8]) -> Self {
        let mut bins = [0u64; HISTOGRAM_BINS];
        for &v in samples {
            bins[v as usize] += 1;
        }
        HistogramTable { bins }
    }

    /// Get the bins, indexed by intensity.
    #[inline]
    pub fn bins(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Get the count for intensity `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.bins[value as usize]
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Intensity with the highest count; lowest intensity wins ties.
    pub fn mode(&self) -> u8 {
        let mut best = 0usize;
        for (v, &n) in self.bins.iter().enumerate() {
            if n > self.bins[best] {
                best = v;
            }
        }
        best as u8
    }

    /// Mean intensity, or `None` for an empty table.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(v, &n)| v as u64 * n)
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Smallest intensity present.
    pub fn min_value(&self) -> Option<u8> {
        self.bins.iter().position(|&n| n > 0).map(|v| v as u8)
    }

    /// Largest intensity present.
    pub fn max_value(&self) -> Option<u8> {
        self.bins.iter().rposition(|&n| n > 0).map(|v| v as u8)
    }

    /// Number of distinct intensities present.
    pub fn nonzero_bins(&self) -> usize {
        self.bins.iter().filter(|&&n| n > 0).count()
    }

    /// Iterate `(intensity, count)` pairs in intensity order, suitable for
    /// feeding a chart with x = intensity and y = count.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.bins.iter().enumerate().map(|(v, &n)| (v as u8, n))
    }
}

impl Default for HistogramTable {
    fn default() -> Self {
        HistogramTable {
            bins: [0; HISTOGRAM_BINS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples() {
        let h = HistogramTable::from_samples(&[0, 0, 5, 255, 5, 5]);
        assert_eq!(h.count(0), 2);
        assert_eq!(h.count(5), 3);
        assert_eq!(h.count(255), 1);
        assert_eq!(h.total(), 6);
        assert_eq!(h.nonzero_bins(), 3);
    }

    #[test]
    fn test_statistics() {
        let h = HistogramTable::from_samples(&[10, 20, 20, 30]);
        assert_eq!(h.mode(), 20);
        assert_eq!(h.mean(), Some(20.0));
        assert_eq!(h.min_value(), Some(10));
        assert_eq!(h.max_value(), Some(30));
    }

    #[test]
    fn test_mode_tie_prefers_lowest() {
        let h = HistogramTable::from_samples(&[200, 3, 200, 3]);
        assert_eq!(h.mode(), 3);
    }

    #[test]
    fn test_empty_table() {
        let h = HistogramTable::default();
        assert_eq!(h.total(), 0);
        assert_eq!(h.mean(), None);
        assert_eq!(h.min_value(), None);
        assert_eq!(h.max_value(), None);
        assert_eq!(h.iter().count(), HISTOGRAM_BINS);
    }
}
