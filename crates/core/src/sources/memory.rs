use crate::errors::CoreError;

use super::traits::RowSource;

/// Rows that were already split into cells by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<Vec<String>>,
}

impl MemoryRowSource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience for literal fixtures: `MemoryRowSource::from_cells(&[&["Symbol"], &["TCS"]])`.
    pub fn from_cells(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }
}

impl RowSource for MemoryRowSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        Ok(self.rows.clone())
    }
}
