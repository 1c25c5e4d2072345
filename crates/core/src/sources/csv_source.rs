use std::io::Read;
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};

use crate::errors::CoreError;

use super::traits::RowSource;

const BYTE_ORDER_MARK: char = '\u{feff}';

enum CsvInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Reads a portfolio sheet exported as CSV.
///
/// The header row is returned as an ordinary row and records may have
/// differing lengths (trailing empty cells are often dropped by exporters).
pub struct CsvRowSource {
    name: String,
    input: CsvInput,
}

impl CsvRowSource {
    /// Read from a file on disk. The file is opened lazily in `read_rows`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            input: CsvInput::Path(path),
        }
    }

    /// Read from CSV text already held in memory (uploads, tests).
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            input: CsvInput::Bytes(bytes.into()),
        }
    }

    /// Drain any reader into memory and read from that.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, CoreError> {
        let name = name.into();
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| CoreError::unreadable(&name, e.to_string()))?;
        Ok(Self::from_bytes(name, bytes))
    }

    fn collect<R: Read>(
        &self,
        mut reader: csv::Reader<R>,
    ) -> Result<Vec<Vec<String>>, CoreError> {
        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record: StringRecord = record.map_err(|e| {
                CoreError::unreadable(&self.name, format!("row {}: {e}", row_idx + 1))
            })?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
            if first.starts_with(BYTE_ORDER_MARK) {
                *first = first.trim_start_matches(BYTE_ORDER_MARK).to_string();
            }
        }

        Ok(rows)
    }
}

impl RowSource for CsvRowSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(false).flexible(true);

        match &self.input {
            CsvInput::Path(path) => {
                let reader = builder
                    .from_path(path)
                    .map_err(|e| CoreError::unreadable(&self.name, e.to_string()))?;
                self.collect(reader)
            }
            CsvInput::Bytes(bytes) => self.collect(builder.from_reader(bytes.as_slice())),
        }
    }
}
