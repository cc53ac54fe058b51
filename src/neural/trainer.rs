use crate::{
    data::{Sample, SampleSource},
    init::WeightInitializer,
    neural::LayerChain,
    prelude::*,
};

/// Drives the forward sweep: validates the chain, initializes weights,
/// then pushes every sample from the source through the chain.
///
/// Takes exclusive ownership of both the chain and the source; nothing
/// else needs access while training runs. No loss is computed and no
/// weights change after initialization — completing the system means
/// adding, after each forward pass, a loss evaluation against the
/// sample's target and a chain-reverse backward sweep.
pub struct Trainer<S> {
    chain: LayerChain,
    source: S,
    init: WeightInitializer,
    samples_per_log: Option<usize>,
    initialized: bool,
}

impl<S: SampleSource> Trainer<S> {
    /// Builds a trainer over a validated chain.
    ///
    /// Refuses to construct over a malformed chain, so a trainer never
    /// holds a partially usable topology.
    pub fn new(chain: LayerChain, source: S) -> Result<Self> {
        chain.validate()?;
        Ok(Self {
            chain,
            source,
            init: WeightInitializer::from_entropy(),
            samples_per_log: None,
            initialized: false,
        })
    }

    /// Replaces the default entropy-seeded weight initializer, e.g. with a
    /// fixed-seed one for reproducible runs.
    pub fn with_initializer(mut self, init: WeightInitializer) -> Self {
        self.init = init;
        self
    }

    /// Prints the layer-by-layer trace of every n-th sample's forward
    /// pass. Purely observational.
    pub fn with_log(mut self, samples_per_log: Option<usize>) -> Self {
        self.samples_per_log = samples_per_log;
        self
    }

    pub fn chain(&self) -> &LayerChain {
        &self.chain
    }

    /// Sweeps the source: initializes weights (first call only), then
    /// forwards each sample through the chain until the source runs out.
    /// Exhaustion is the normal stop signal. Returns the number of
    /// samples processed.
    pub fn train(&mut self) -> Result<usize> {
        if !self.initialized {
            self.chain.initialize_weights(&mut self.init)?;
            self.initialized = true;
        }

        let mut processed = 0;
        while let Some(sample) = self.source.next_sample() {
            let log = self.samples_per_log.is_some_and(|spl| processed % spl == 0);
            if log {
                println!("sample {processed}: input {:?}", sample.input);
            }
            self.forward(&sample, log)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Pushes one sample's input through the chain, feeding each layer's
    /// output to the next, and returns the final output vector.
    /// Intermediate buffers are not retained beyond this call.
    pub fn forward_prop(&self, sample: &Sample) -> Result<Vec<f64>> {
        self.forward(sample, false)
    }

    fn forward(&self, sample: &Sample, log: bool) -> Result<Vec<f64>> {
        let mut current = sample.input.clone();
        for (i, layer) in self.chain.layers().iter().enumerate() {
            if log {
                println!(
                    "  forward prop layer {i} ({}, {} -> {})",
                    layer.kind(),
                    layer.input_dim(),
                    layer.output_dim()
                );
            }
            current = layer.forward_prop(&current)?;
            if log {
                println!("  output {current:?}");
            }
        }
        Ok(current)
    }
}
