//! CSV export of decomposition rows and raw series.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use data_spi::{DataError, Result};
use spectral_spi::DecompositionRow;
use tracing::info;

pub const DECOMPOSITION_HEADER: [&str; 5] = ["Hour", "Original", "Trend", "Seasonal", "Residual"];
pub const SERIES_HEADER: [&str; 2] = ["Hour", "Generation"];

fn write_error(error: impl std::fmt::Display) -> DataError {
    DataError::WriteError(error.to_string())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| DataError::FileOpen {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write decomposition rows under the `Hour,Original,Trend,Seasonal,Residual` header.
pub fn write_decomposition_csv<W: Write>(writer: W, rows: &[DecompositionRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(DECOMPOSITION_HEADER).map_err(write_error)?;
    for row in rows {
        writer
            .write_record([
                row.index.to_string(),
                row.original.to_string(),
                row.trend.to_string(),
                row.seasonal.to_string(),
                row.residual.to_string(),
            ])
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

/// Write a series as `Hour,Generation` rows.
pub fn write_series_csv<W: Write>(writer: W, values: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(SERIES_HEADER).map_err(write_error)?;
    for (hour, value) in values.iter().enumerate() {
        writer
            .write_record([hour.to_string(), value.to_string()])
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

pub fn export_decomposition(path: &Path, rows: &[DecompositionRow]) -> Result<()> {
    write_decomposition_csv(create(path)?, rows)?;
    info!(path = %path.display(), rows = rows.len(), "exported decomposition");
    Ok(())
}

pub fn export_series(path: &Path, values: &[f64]) -> Result<()> {
    write_series_csv(create(path)?, values)?;
    info!(path = %path.display(), rows = values.len(), "exported series");
    Ok(())
}
