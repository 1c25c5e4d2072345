use chrono::NaiveDate;
use serde::Serialize;

/// A single synthetic valuation of the portfolio and the two reference
/// indices on a fixed date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    pub portfolio: f64,

    /// NIFTY 50 equity index level
    pub nifty50: f64,

    /// Gold price level
    pub gold: f64,
}

/// Percentage returns over the three reported horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonReturns {
    #[serde(rename = "1month")]
    pub one_month: f64,

    #[serde(rename = "3months")]
    pub three_months: f64,

    #[serde(rename = "1year")]
    pub one_year: f64,
}

impl HorizonReturns {
    pub const fn new(one_month: f64, three_months: f64, one_year: f64) -> Self {
        Self {
            one_month,
            three_months,
            one_year,
        }
    }
}

/// Horizon returns for the portfolio and each reference series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesReturns {
    pub portfolio: HorizonReturns,
    pub nifty50: HorizonReturns,
    pub gold: HorizonReturns,
}

/// Timeline plus returns, as served to the performance chart.
///
/// Everything here is a placeholder projection from the current snapshot.
/// It is not market data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceResult {
    pub timeline: Vec<TimelinePoint>,
    pub returns: SeriesReturns,
}
