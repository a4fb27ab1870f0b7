use crate::error::{Error, Result};
use crate::histogram::Histogram;

use std::ops::Range;

/// A contiguous bin-index range selected for curve fitting
///
/// The window is derived from two physical boundary values by proportional
/// scaling against the last bin edge:
///
/// ```text
/// index = trunc(boundary * bins / edges[bins])
/// ```
///
/// This reproduces the truncating integer arithmetic of the original
/// analysis tooling so that derived windows stay bit-compatible with its
/// reference outputs. Note the truncation silently misaligns the window
/// from the requested boundary when the bin count does not evenly divide
/// the range.
///
/// The window stores plain indices and does not borrow the histogram it was
/// derived from; the slice accessors expect to be handed that same
/// histogram back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitWindow {
    lo: usize,
    hi: usize,
}

impl FitWindow {
    /// Derive the index range `[lo, hi)` from physical boundary values
    ///
    /// Fails for non-finite or negative bounds, for a window that selects no
    /// bins, or for an upper bound beyond the histogram range.
    ///
    /// ```rust
    /// # use gtools_hist::{FitWindow, Histogram};
    /// let hist = Histogram::new(&[], 50, 0.0, 1250.0, 1).unwrap();
    /// let window = FitWindow::from_bounds(&hist, 400.0, 1000.0).unwrap();
    /// assert_eq!(window.indices(), 16..40);
    /// ```
    pub fn from_bounds(histogram: &Histogram, lower: f64, upper: f64) -> Result<Self> {
        let bins = histogram.bins();
        let max_edge = histogram.edges()[bins];

        let lo = Self::bound_to_index(lower, bins, max_edge)?;
        let hi = Self::bound_to_index(upper, bins, max_edge)?;

        if hi > bins {
            return Err(Error::WindowOutOfRange { index: hi, bins });
        }
        if lo >= hi {
            return Err(Error::EmptyWindow { lower, upper });
        }

        Ok(Self { lo, hi })
    }

    /// The truncating boundary-to-index conversion
    fn bound_to_index(bound: f64, bins: usize, max_edge: f64) -> Result<usize> {
        if !bound.is_finite() || bound < 0.0 {
            return Err(Error::InvalidBound(bound));
        }
        Ok((bound * bins as f64 / max_edge).floor() as usize)
    }

    /// The selected bin indices as a half-open range
    pub fn indices(&self) -> Range<usize> {
        self.lo..self.hi
    }

    /// Number of bins in the window
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    /// Always false by construction, but here for completeness
    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    /// Normalised counts restricted to the window
    pub fn counts<'a>(&self, histogram: &'a Histogram) -> &'a [f64] {
        &histogram.counts()[self.indices()]
    }

    /// Bin centers restricted to the window
    pub fn centers(&self, histogram: &Histogram) -> Vec<f64> {
        histogram.centers()[self.indices()].to_vec()
    }

    /// Physical position of the window's lower boundary marker
    pub fn lower_edge(&self, histogram: &Histogram) -> f64 {
        histogram.edges()[self.lo]
    }

    /// Physical position of the window's upper boundary marker
    pub fn upper_edge(&self, histogram: &Histogram) -> f64 {
        histogram.edges()[self.hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hist(bins: usize, high: f64) -> Histogram {
        Histogram::new(&[], bins, 0.0, high, 1).unwrap()
    }

    #[rstest]
    #[case(50, 1250.0, 400.0, 1000.0, 16, 40)] // global time reference window
    #[case(50, 300.0, 54.0, 156.0, 9, 26)] // generation reference window
    #[case(50, 1250.0, 0.0, 1250.0, 0, 50)] // full range
    #[case(3, 1000.0, 100.0, 999.0, 0, 2)] // truncation misaligns, by design
    fn reference_windows(
        #[case] bins: usize,
        #[case] high: f64,
        #[case] lower: f64,
        #[case] upper: f64,
        #[case] lo: usize,
        #[case] hi: usize,
    ) {
        let window = FitWindow::from_bounds(&hist(bins, high), lower, upper).unwrap();
        assert_eq!(window.indices(), lo..hi);
    }

    #[test]
    fn identical_inputs_yield_identical_indices() {
        let h = hist(50, 1250.0);
        let a = FitWindow::from_bounds(&h, 400.0, 1000.0).unwrap();
        let b = FitWindow::from_bounds(&h, 400.0, 1000.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_windows_are_rejected() {
        let h = hist(50, 1250.0);
        assert!(matches!(
            FitWindow::from_bounds(&h, 400.0, 400.0),
            Err(Error::EmptyWindow { .. })
        ));
        assert!(matches!(
            FitWindow::from_bounds(&h, 400.0, 1300.0),
            Err(Error::WindowOutOfRange { .. })
        ));
        assert!(matches!(
            FitWindow::from_bounds(&h, -1.0, 400.0),
            Err(Error::InvalidBound(_))
        ));
    }

    #[test]
    fn window_edges_line_up_with_bins() {
        let h = hist(50, 1250.0);
        let window = FitWindow::from_bounds(&h, 400.0, 1000.0).unwrap();
        assert_eq!(window.lower_edge(&h), 400.0);
        assert_eq!(window.upper_edge(&h), 1000.0);
        assert_eq!(window.centers(&h).len(), window.len());
    }
}
