pub mod traits;

// Row source implementations
pub mod csv_source;
pub mod memory;
pub mod xlsx_source;

use std::path::Path;

use csv_source::CsvRowSource;
use traits::RowSource;
use xlsx_source::XlsxRowSource;

/// Workbook extensions read with [`XlsxRowSource`]; anything else is CSV.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

/// Pick a row source for a file by its extension (case-insensitive).
pub fn for_path(path: &Path) -> Box<dyn RowSource> {
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });

    if is_workbook {
        Box::new(XlsxRowSource::from_path(path))
    } else {
        Box::new(CsvRowSource::from_path(path))
    }
}
