//! Data Source Core
//!
//! Implementations for series sources and CSV export.

pub mod csv_column;
pub mod export;
pub mod synthetic;

pub use csv_column::{read_column, CsvColumnSource};
pub use export::{
    export_decomposition, export_series, write_decomposition_csv, write_series_csv,
    DECOMPOSITION_HEADER, SERIES_HEADER,
};
pub use synthetic::{synthetic_series, SyntheticProfile};
