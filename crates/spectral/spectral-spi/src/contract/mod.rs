//! Contract module containing trait definitions for spectral operations

mod decomposer;
mod frequency_transform;

pub use decomposer::Decomposer;
pub use frequency_transform::FrequencyTransform;
