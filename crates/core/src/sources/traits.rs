use crate::errors::CoreError;

/// Anything that can hand over a portfolio spreadsheet as rows of text cells.
///
/// Row 0 is the header, rows 1..N are data. Implementations only report
/// problems reading the source itself; interpreting cells is the loader's job.
pub trait RowSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Read every row of the source, header included.
    fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError>;
}
