use std::collections::HashMap;

/// Semantic columns the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Symbol,
    Name,
    Quantity,
    AvgPrice,
    CurrentPrice,
    Sector,
    MarketCap,
    Exchange,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Symbol,
        Field::Name,
        Field::Quantity,
        Field::AvgPrice,
        Field::CurrentPrice,
        Field::Sector,
        Field::MarketCap,
        Field::Exchange,
    ];

    /// Accepted header spellings, most specific first. Matching is
    /// case-insensitive; the first candidate present in the header wins.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            Field::Symbol => &["symbol"],
            Field::Name => &["company name", "name"],
            Field::Quantity => &["quantity"],
            Field::AvgPrice => &["avg price ₹", "avg price", "avgprice"],
            Field::CurrentPrice => &["current price (₹)", "current price", "currentprice"],
            Field::Sector => &["sector"],
            Field::MarketCap => &["market cap", "marketcap"],
            Field::Exchange => &["exchange"],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Symbol => write!(f, "Symbol"),
            Field::Name => write!(f, "Name"),
            Field::Quantity => write!(f, "Quantity"),
            Field::AvgPrice => write!(f, "AvgPrice"),
            Field::CurrentPrice => write!(f, "CurrentPrice"),
            Field::Sector => write!(f, "Sector"),
            Field::MarketCap => write!(f, "MarketCap"),
            Field::Exchange => write!(f, "Exchange"),
        }
    }
}

/// Resolves header cells to column positions.
///
/// The normalized lookup (trimmed, lowercased header text → column) is built
/// once per header row. When two header cells normalize to the same text the
/// right-most column is kept.
pub struct HeaderResolver {
    lookup: HashMap<String, usize>,
}

impl HeaderResolver {
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        let mut lookup = HashMap::with_capacity(header.len());
        for (idx, cell) in header.iter().enumerate() {
            lookup.insert(normalize(cell.as_ref()), idx);
        }
        Self { lookup }
    }

    /// Position of the first candidate found in the header, or `None`.
    pub fn find(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|cand| self.lookup.get(&cand.to_lowercase()).copied())
    }

    /// Resolve every known [`Field`] against the header.
    pub fn resolve(&self) -> ColumnMap {
        let mut columns = HashMap::new();
        for field in Field::ALL {
            if let Some(idx) = self.find(field.candidates()) {
                columns.insert(field, idx);
            }
        }
        ColumnMap { columns }
    }
}

/// Field → column position for one file. Unresolved fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: HashMap<Field, usize>,
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of fields that resolved to a column.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Trimmed cell for `field` in `row`. Empty when the field is unresolved
    /// or the row is too short.
    pub fn cell<'a, S: AsRef<str>>(&self, row: &'a [S], field: Field) -> &'a str {
        self.get(field)
            .and_then(|idx| row.get(idx))
            .map(|cell| cell.as_ref().trim())
            .unwrap_or("")
    }
}

fn normalize(header: &str) -> String {
    header.to_lowercase().trim().to_string()
}
