use serde::Serialize;

use crate::parsing::cell::round2;

/// One line-item position loaded from the portfolio spreadsheet.
///
/// `value`, `gain_loss` and `gain_loss_percent` are derived in [`Holding::new`]
/// from quantity and prices. They are never read from the source file, and
/// there is no setter for the inputs, so they cannot drift apart.
///
/// Serializes with the camelCase field names the HTTP clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol as written in the sheet (may be empty)
    symbol: String,

    /// Company name as written in the sheet (may be empty)
    name: String,

    quantity: f64,
    avg_price: f64,
    current_price: f64,

    /// Free-text sector label; empty means unclassified
    sector: String,

    /// Free-text market-cap tier (e.g. "Large Cap"); empty means unclassified
    market_cap: String,

    /// Listing exchange; left out of the JSON when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    exchange: String,

    /// `quantity * current_price`, rounded to 2 decimals
    value: f64,

    /// `(current_price - avg_price) * quantity`, rounded to 2 decimals
    gain_loss: f64,

    /// Return on the invested amount in percent, rounded to 2 decimals.
    /// Exactly 0 when nothing was invested.
    gain_loss_percent: f64,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        avg_price: f64,
        current_price: f64,
    ) -> Self {
        let value = round2(quantity * current_price);
        let gain_loss = round2((current_price - avg_price) * quantity);
        let invested = quantity * avg_price;
        let gain_loss_percent = if invested != 0.0 {
            round2((gain_loss / invested) * 100.0)
        } else {
            0.0
        };

        Self {
            symbol: symbol.into(),
            name: name.into(),
            quantity,
            avg_price,
            current_price,
            sector: String::new(),
            market_cap: String::new(),
            exchange: String::new(),
            value,
            gain_loss,
            gain_loss_percent,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    pub fn with_market_cap(mut self, market_cap: impl Into<String>) -> Self {
        self.market_cap = market_cap.into();
        self
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn avg_price(&self) -> f64 {
        self.avg_price
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn market_cap(&self) -> &str {
        &self.market_cap
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn gain_loss(&self) -> f64 {
        self.gain_loss
    }

    pub fn gain_loss_percent(&self) -> f64 {
        self.gain_loss_percent
    }

    /// Unrounded cost basis: `quantity * avg_price`.
    pub fn invested(&self) -> f64 {
        self.quantity * self.avg_price
    }

    /// A holding is identifiable when it has a symbol or a name.
    pub fn is_identified(&self) -> bool {
        !self.symbol.is_empty() || !self.name.is_empty()
    }
}
