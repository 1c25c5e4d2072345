use serde::Serialize;
use std::collections::BTreeMap;

/// Label used for holdings whose sector or market-cap cell was empty.
pub const UNKNOWN_BUCKET: &str = "Unknown";

/// Share of the portfolio held in one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationBucket {
    /// Summed holding value, rounded to 2 decimals
    pub value: f64,

    /// Share of total portfolio value in percent, rounded to 2 decimals
    pub percentage: f64,
}

/// Portfolio value broken down by sector and by market-cap tier.
///
/// Keys are sorted for stable output, but the breakdown is a set of buckets;
/// callers should not rely on any particular order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub by_sector: BTreeMap<String, AllocationBucket>,
    pub by_market_cap: BTreeMap<String, AllocationBucket>,
}
