//! Series source trait definition.

use crate::error::Result;
use crate::model::Series;

/// Trait for sources that produce one real-valued series.
///
/// Implementations read a file, generate samples, or wrap data already in
/// memory. A source that yields no samples returns `DataError::NoData`.
pub trait SeriesSource: Send + Sync {
    /// Source name.
    fn name(&self) -> &str;

    /// Load the full series.
    fn load(&self) -> Result<Series>;
}
