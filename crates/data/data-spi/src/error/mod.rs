//! Error module containing error types and result aliases.

mod data_error;

pub use data_error::{DataError, Result};
