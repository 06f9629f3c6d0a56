//! Model module containing data structures

mod decomposition_result;
mod signal;
mod spectrum;

pub use decomposition_result::{DecompositionResult, DecompositionRow};
pub use signal::{validate_samples, Signal, MAX_TOTAL_MAGNITUDE};
pub use spectrum::{DominantFrequency, Spectrum};
