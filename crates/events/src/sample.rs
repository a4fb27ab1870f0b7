/// A flat ordered sequence of values for one quantity
///
/// Produced by [flatten()](crate::Branch::flatten), discarding the event
/// boundaries of the branch it came from. Histogram builders take this
/// together with the original event count, since the sample length and the
/// event count differ for ragged data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatSample {
    values: Vec<f64>,
}

impl FlatSample {
    /// Wrap an already-flat sequence of values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// All values in concatenation order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the sample
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a sample with no values at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
