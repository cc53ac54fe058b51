pub mod activations;
pub mod trainer;

use crate::init::WeightInitializer;
use crate::prelude::*;

use self::activations::{Activation, Activations};

/// Shared state and math for the weighted (fully-connected) layer variants.
///
/// Weights are a flat row-major matrix: entry (i, j) lives at
/// `i * output_dim + j` and connects input neuron i to output neuron j.
/// The buffer is empty until `initialize` runs and is never resized after.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    input_dim: usize,
    output_dim: usize,
    weights: Vec<f64>,
    activation: Activations,
}

impl Dense {
    fn new(input_dim: usize, output_dim: usize) -> Self {
        Self {
            input_dim,
            output_dim,
            weights: Vec::new(),
            activation: Activations::Sigmoid,
        }
    }

    fn initialize(&mut self, init: &mut WeightInitializer) -> Result<()> {
        let mut weights = vec![0.0; self.input_dim * self.output_dim];
        let len = weights.len();
        weights.copy_from_slice(&init.fill(len)?);
        self.weights = weights;
        Ok(())
    }

    fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_dim {
            return Err(Error::DimensionErr {
                expected: self.input_dim,
                found: input.len(),
            });
        }
        if self.weights.len() != self.input_dim * self.output_dim {
            return Err(Error::UninitializedWeights);
        }

        // Each output neuron sums a contribution from every input neuron
        // through its row-major weight slot.
        let mut sigma = vec![0.0; self.output_dim];
        for (i, &x) in input.iter().enumerate() {
            for (j, s) in sigma.iter_mut().enumerate() {
                *s += self.weights[i * self.output_dim + j] * x;
            }
        }

        Ok(sigma.into_iter().map(|s| self.activation.call(s)).collect())
    }
}

/// A stage in the network: consumes a vector of `input_dim` values and
/// produces one of `output_dim` values. The variant set is closed, so
/// dispatch is a plain match rather than a trait object.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Identity stage; fixes the expected input shape and nothing else.
    Passthrough { dim: usize },
    /// Weighted hidden stage with a logistic activation.
    FullyConnected(Dense),
    /// Weighted final stage. Behaves exactly like `FullyConnected` going
    /// forward; its backward pass is where a loss function belongs.
    FullyConnectedOutput(Dense),
}

impl Layer {
    /// An entry stage with input_dim == output_dim == `dim`.
    pub fn passthrough(dim: usize) -> Self {
        Layer::Passthrough { dim }
    }

    pub fn fully_connected(input_dim: usize, output_dim: usize) -> Self {
        Layer::FullyConnected(Dense::new(input_dim, output_dim))
    }

    pub fn fully_connected_output(input_dim: usize, output_dim: usize) -> Self {
        Layer::FullyConnectedOutput(Dense::new(input_dim, output_dim))
    }

    pub fn input_dim(&self) -> usize {
        match self {
            Layer::Passthrough { dim } => *dim,
            Layer::FullyConnected(d) | Layer::FullyConnectedOutput(d) => d.input_dim,
        }
    }

    pub fn output_dim(&self) -> usize {
        match self {
            Layer::Passthrough { dim } => *dim,
            Layer::FullyConnected(d) | Layer::FullyConnectedOutput(d) => d.output_dim,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Layer::Passthrough { .. } => "passthrough",
            Layer::FullyConnected(_) => "fully-connected",
            Layer::FullyConnectedOutput(_) => "fully-connected-output",
        }
    }

    /// Fills the weight buffer with fresh random values.
    ///
    /// Must run once before the first forward pass of a weighted variant;
    /// a no-op for the passthrough variant, which has no parameters.
    pub fn initialize_weights(&mut self, init: &mut WeightInitializer) -> Result<()> {
        match self {
            Layer::Passthrough { .. } => Ok(()),
            Layer::FullyConnected(d) | Layer::FullyConnectedOutput(d) => d.initialize(init),
        }
    }

    /// Transforms `input` into this layer's output vector.
    ///
    /// The input length must equal `input_dim`; the output length always
    /// equals `output_dim`. Forward passes read weights but never mutate
    /// them, so repeating a pass with the same input repeats the output.
    pub fn forward_prop(&self, input: &[f64]) -> Result<Vec<f64>> {
        match self {
            Layer::Passthrough { dim } => {
                if input.len() != *dim {
                    return Err(Error::DimensionErr {
                        expected: *dim,
                        found: input.len(),
                    });
                }
                Ok(input.to_vec())
            }
            Layer::FullyConnected(d) | Layer::FullyConnectedOutput(d) => d.forward(input),
        }
    }

    /// Extension point for backward propagation. Not implemented.
    ///
    /// A real implementation must (a) receive the downstream error signal,
    /// (b) compute the local gradient from the cached forward-pass input
    /// and the activation derivative, (c) apply an update rule to the
    /// weight buffer, and (d) propagate an upstream error signal. For
    /// `FullyConnectedOutput` it must additionally evaluate a loss against
    /// the sample's target before propagating. Until then, weighted
    /// variants refuse rather than silently training nothing.
    pub fn back_prop(&mut self) -> Result<()> {
        match self {
            Layer::Passthrough { .. } => Ok(()),
            Layer::FullyConnected(_) | Layer::FullyConnectedOutput(_) => Err(Error::Unimplemented),
        }
    }
}

/// The ordered sequence of layers defining network topology.
///
/// Topology is fixed at construction; only the weights inside the layers
/// mutate afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerChain {
    layers: Vec<Layer>,
}

impl LayerChain {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Checks the chain is trainable: at least two layers, and every
    /// layer's input dimension equal to the running expected size (seeded
    /// with the first layer's input dimension, updated to each layer's
    /// output dimension as the walk proceeds).
    pub fn validate(&self) -> Result<()> {
        if self.layers.len() < 2 {
            return Err(Error::ChainTooShort);
        }

        let mut expected = self.layers[0].input_dim();
        for layer in &self.layers {
            if layer.input_dim() != expected {
                return Err(Error::DimensionErr {
                    expected,
                    found: layer.input_dim(),
                });
            }
            expected = layer.output_dim();
        }
        Ok(())
    }

    /// Initializes every layer's weights exactly once, in chain order.
    pub fn initialize_weights(&mut self, init: &mut WeightInitializer) -> Result<()> {
        for layer in &mut self.layers {
            layer.initialize_weights(init)?;
        }
        Ok(())
    }
}
