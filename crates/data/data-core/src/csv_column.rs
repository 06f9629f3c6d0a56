//! Single-column CSV ingestion.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use data_api::CsvSourceConfig;
use data_spi::{DataError, Result, Series, SeriesSource};
use tracing::{debug, warn};

/// Reads one named column of a headered CSV file as a series.
#[derive(Debug, Clone)]
pub struct CsvColumnSource {
    path: PathBuf,
    column: String,
}

impl CsvColumnSource {
    pub fn new(path: impl Into<PathBuf>, column: &str) -> Self {
        Self {
            path: path.into(),
            column: column.to_string(),
        }
    }

    pub fn from_config(config: &CsvSourceConfig) -> Self {
        Self::new(config.path.clone(), &config.column)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

impl SeriesSource for CsvColumnSource {
    fn name(&self) -> &str {
        &self.column
    }

    fn load(&self) -> Result<Series> {
        let file = File::open(&self.path).map_err(|e| DataError::FileOpen {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let values = read_column(BufReader::new(file), &self.column)?;
        debug!(
            path = %self.path.display(),
            column = %self.column,
            samples = values.len(),
            "loaded csv column"
        );
        Ok(Series::new(self.column.clone(), values))
    }
}

/// Read the values of `column` from headered CSV text.
///
/// Cells that do not parse as a finite number become `0.0`. Rows too short
/// to reach the column are skipped.
pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let col_idx = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DataError::ColumnNotFound(column.to_string()))?;

    let mut values = Vec::new();
    let mut substituted = 0usize;
    for result in reader.records() {
        let record = result?;
        let Some(field) = record.get(col_idx) else {
            continue;
        };
        match field.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => {
                substituted += 1;
                values.push(0.0);
            }
        }
    }

    if substituted > 0 {
        warn!(column, substituted, "replaced unparseable cells with 0.0");
    }
    if values.is_empty() {
        return Err(DataError::NoData);
    }
    Ok(values)
}
