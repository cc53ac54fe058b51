/// Error type for nn-chain
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A chain needs at least two layers to form a network.
    ChainTooShort,
    /// Indicates some dimension is incorrect: adjacent layers disagree,
    /// an input vector has the wrong length, or a dataset mixes input widths.
    DimensionErr { expected: usize, found: usize },
    /// A weight initializer was asked to fill a zero-length buffer.
    EmptyInit,
    /// A sample source was constructed over an empty collection.
    EmptyDataset,
    /// A weighted layer was run forward before `initialize_weights`.
    UninitializedWeights,
    /// The operation is an extension point with no implementation yet.
    Unimplemented,
}

pub type Result<T> = std::result::Result<T, Error>;
