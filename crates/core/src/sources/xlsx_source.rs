use std::io::{Cursor, Read, Seek};
use std::path::PathBuf;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::errors::CoreError;

use super::traits::RowSource;

enum XlsxInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Reads the first worksheet of an Excel workbook, every cell as text.
///
/// Rows are anchored at `A1`: leading blank rows and columns are kept as
/// empty cells so column positions match what the sheet shows.
pub struct XlsxRowSource {
    name: String,
    input: XlsxInput,
}

impl XlsxRowSource {
    /// Read from a workbook on disk. The file is opened lazily in `read_rows`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            input: XlsxInput::Path(path),
        }
    }

    /// Read from workbook bytes already held in memory.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            input: XlsxInput::Bytes(bytes.into()),
        }
    }

    fn first_sheet<RS: Read + Seek>(
        &self,
        mut workbook: Xlsx<RS>,
    ) -> Result<Vec<Vec<String>>, CoreError> {
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| CoreError::unreadable(&self.name, "no sheets found in workbook"))?
            .map_err(|e| CoreError::unreadable(&self.name, e.to_string()))?;
        Ok(grid(&range))
    }
}

impl RowSource for XlsxRowSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        match &self.input {
            XlsxInput::Path(path) => {
                let workbook = open_workbook::<Xlsx<_>, _>(path)
                    .map_err(|e| CoreError::unreadable(&self.name, e.to_string()))?;
                self.first_sheet(workbook)
            }
            XlsxInput::Bytes(bytes) => {
                let workbook = Xlsx::new(Cursor::new(bytes.as_slice()))
                    .map_err(|e| CoreError::unreadable(&self.name, e.to_string()))?;
                self.first_sheet(workbook)
            }
        }
    }
}

/// Flatten a worksheet range into text rows starting at `A1`.
fn grid(range: &Range<Data>) -> Vec<Vec<String>> {
    // A range begins at its first used cell, not at A1
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = (0..row_offset).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![String::new(); col_offset as usize];
        cells.extend(row.iter().map(|cell| cell.to_string()));
        rows.push(cells);
    }
    rows
}
