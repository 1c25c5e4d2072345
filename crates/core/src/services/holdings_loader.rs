use log::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::parsing::cell::parse_number;
use crate::parsing::headers::{ColumnMap, Field, HeaderResolver};
use crate::sources::traits::RowSource;

/// Turns raw spreadsheet rows into normalized [`Holding`] records.
///
/// Columns are resolved once from the header row. Every data row is then
/// read by position; bad cells fall back to defaults and never abort the
/// load. Only a missing header or an empty data section is an error.
pub struct HoldingsLoader;

impl HoldingsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read all rows from `source` and normalize them.
    pub fn load_from_source(&self, source: &dyn RowSource) -> Result<Vec<Holding>, CoreError> {
        let rows = source.read_rows()?;
        debug!("Read {} rows from {}", rows.len(), source.name());
        self.load(&rows)
    }

    /// Normalize rows where `rows[0]` is the header.
    ///
    /// Output keeps the source row order.
    pub fn load<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Result<Vec<Holding>, CoreError> {
        let (header, data) = match rows.split_first() {
            Some(split) => split,
            None => return Err(CoreError::MissingHeader),
        };
        if data.is_empty() {
            return Err(CoreError::NoDataRows);
        }

        let columns = HeaderResolver::new(header).resolve();
        debug!("Resolved {} of {} columns from header", columns.len(), Field::ALL.len());
        if !columns.contains(Field::Symbol) && !columns.contains(Field::Name) {
            warn!("Header has neither a symbol nor a name column; every row will be skipped");
        }

        let mut holdings = Vec::with_capacity(data.len());
        for (offset, row) in data.iter().enumerate() {
            // 1-based spreadsheet row number, header is row 1
            let row_no = offset + 2;

            if is_blank(row) {
                debug!("Skipping row {row_no}: empty");
                continue;
            }

            let holding = build_holding(&columns, row);
            if !holding.is_identified() {
                debug!("Skipping row {row_no}: no symbol or name");
                continue;
            }
            holdings.push(holding);
        }

        info!("Loaded {} holdings from {} data rows", holdings.len(), data.len());
        Ok(holdings)
    }
}

impl Default for HoldingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn build_holding<S: AsRef<str>>(columns: &ColumnMap, row: &[S]) -> Holding {
    Holding::new(
        columns.cell(row, Field::Symbol),
        columns.cell(row, Field::Name),
        parse_number(columns.cell(row, Field::Quantity)),
        parse_number(columns.cell(row, Field::AvgPrice)),
        parse_number(columns.cell(row, Field::CurrentPrice)),
    )
    .with_sector(columns.cell(row, Field::Sector))
    .with_market_cap(columns.cell(row, Field::MarketCap))
    .with_exchange(columns.cell(row, Field::Exchange))
}

fn is_blank<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|cell| cell.as_ref().trim().is_empty())
}
