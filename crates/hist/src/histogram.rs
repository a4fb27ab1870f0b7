use crate::error::{Error, Result};

use itertools::Itertools;

/// Equal-width histogram with per-event normalised counts
///
/// The range `[low, high)` is partitioned into exactly `bins` equal-width
/// intervals, giving `bins + 1` edges with `edges[0] == low` and
/// `edges[bins] == high`. Values outside the range are dropped, including
/// values exactly at `high`.
///
/// Each bin stores `raw count / n_events`, where `n_events` is supplied by
/// the caller. The sample length is deliberately not used: a flattened
/// branch may hold more or fewer entries than there were events, and the
/// quantity of interest is the rate per primary event.
///
/// An empty sample is not an error and produces all-zero counts.
///
/// ```rust
/// # use gtools_hist::Histogram;
/// let hist = Histogram::new(&[5.0, 15.0, 15.5], 10, 0.0, 100.0, 2).unwrap();
/// assert_eq!(hist.counts()[0], 0.5);
/// assert_eq!(hist.counts()[1], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: usize,
    low: f64,
    high: f64,
    n_events: usize,
    counts: Vec<f64>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Bin a flat sample into a new histogram
    ///
    /// Fails for a zero bin count, a degenerate or non-finite range, or a
    /// zero event count. The sample itself may be empty.
    pub fn new(sample: &[f64], bins: usize, low: f64, high: f64, n_events: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::NoBins);
        }
        if !(low.is_finite() && high.is_finite()) || low >= high {
            return Err(Error::InvalidRange { low, high });
        }
        if n_events == 0 {
            return Err(Error::NoEvents);
        }

        // edges from the exact endpoints so both ends land precisely
        let span = high - low;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| low + span * (i as f64) / (bins as f64))
            .collect();

        let width = span / (bins as f64);
        let mut raw = vec![0_usize; bins];
        for &value in sample {
            if value < low || value >= high {
                continue;
            }
            // clamp guards the odd value that rounds up to the top edge
            let index = (((value - low) / width) as usize).min(bins - 1);
            raw[index] += 1;
        }

        let norm = n_events as f64;
        let counts = raw.into_iter().map(|c| c as f64 / norm).collect();

        Ok(Self {
            bins,
            low,
            high,
            n_events,
            counts,
            edges,
        })
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Lower edge of the binned range
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper edge of the binned range (excluded from binning)
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Event count used for normalisation
    pub fn n_events(&self) -> usize {
        self.n_events
    }

    /// Width of a single bin
    pub fn width(&self) -> f64 {
        (self.high - self.low) / (self.bins as f64)
    }

    /// Normalised count per bin, i.e. raw count / event count
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// The `bins + 1` evenly spaced bin edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Midpoints of consecutive edges, one per bin
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .iter()
            .tuple_windows()
            .map(|(a, b)| 0.5 * (a + b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_all_zero() {
        let hist = Histogram::new(&[], 50, 0.0, 1250.0, 10).unwrap();
        assert!(hist.counts().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn values_at_and_beyond_high_are_dropped() {
        let hist = Histogram::new(&[99.9, 100.0, 150.0, -0.1], 10, 0.0, 100.0, 1).unwrap();
        assert_eq!(hist.counts().iter().sum::<f64>(), 1.0);
        assert_eq!(hist.counts()[9], 1.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            Histogram::new(&[], 0, 0.0, 1.0, 1),
            Err(Error::NoBins)
        ));
        assert!(matches!(
            Histogram::new(&[], 10, 1.0, 1.0, 1),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            Histogram::new(&[], 10, 0.0, 1.0, 0),
            Err(Error::NoEvents)
        ));
    }
}
