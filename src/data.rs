use crate::prelude::*;

/// One labeled training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Self { input, target }
    }
}

/// Produces labeled samples one at a time, in a fixed order.
///
/// `None` is the normal end-of-data signal, not an error; once a source
/// reports `None` it keeps reporting `None` until reconstructed. Concrete
/// implementations can be backed by a database or a static dataset.
pub trait SampleSource {
    fn next_sample(&mut self) -> Option<Sample>;
}

/// A sample source over a finite, pre-supplied collection.
pub struct StaticSampleSource {
    samples: Vec<Sample>,
    cursor: usize,
}

impl StaticSampleSource {
    /// Wraps a non-empty collection of samples.
    ///
    /// All input vectors must share the same non-zero length; mixed widths
    /// could never pass a single chain's first layer.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let width = samples[0].input.len();
        if width == 0 {
            return Err(Error::DimensionErr {
                expected: 1,
                found: 0,
            });
        }
        for sample in &samples {
            if sample.input.len() != width {
                return Err(Error::DimensionErr {
                    expected: width,
                    found: sample.input.len(),
                });
            }
        }

        Ok(Self { samples, cursor: 0 })
    }

    /// Number of samples this source will yield in total.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleSource for StaticSampleSource {
    fn next_sample(&mut self) -> Option<Sample> {
        let sample = self.samples.get(self.cursor).cloned();
        if sample.is_some() {
            self.cursor += 1;
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.5, 0.5, 0.5], vec![0.4, 0.4]),
            Sample::new(vec![0.4, 0.6, 0.9], vec![0.3, 0.7]),
            Sample::new(vec![0.1, 0.2, 0.3], vec![0.9, 0.1]),
        ]
    }

    #[test]
    fn yields_all_samples_in_order() {
        let expected = samples();
        let mut source = StaticSampleSource::new(samples()).unwrap();

        for sample in &expected {
            assert_eq!(source.next_sample().as_ref(), Some(sample));
        }
        assert_eq!(source.next_sample(), None);
        assert_eq!(source.next_sample(), None);
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert!(matches!(
            StaticSampleSource::new(vec![]),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn zero_width_inputs_are_rejected() {
        let result = StaticSampleSource::new(vec![Sample::new(vec![], vec![1.0])]);
        assert!(matches!(result, Err(Error::DimensionErr { .. })));
    }

    #[test]
    fn mixed_input_widths_are_rejected() {
        let mut bad = samples();
        bad.push(Sample::new(vec![0.1, 0.2], vec![0.0, 1.0]));

        let result = StaticSampleSource::new(bad);
        assert_eq!(
            result.err(),
            Some(Error::DimensionErr {
                expected: 3,
                found: 2
            })
        );
    }
}
