//! Data models for time series data.

mod series;

pub use series::Series;
