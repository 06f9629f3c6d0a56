//! Contract module containing the series source trait.

mod series_source;

pub use series_source::SeriesSource;
