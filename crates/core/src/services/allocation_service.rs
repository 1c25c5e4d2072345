use std::collections::BTreeMap;

use crate::models::allocation::{AllocationBucket, AllocationResult, UNKNOWN_BUCKET};
use crate::models::holding::Holding;
use crate::parsing::cell::round2;

/// Buckets portfolio value by sector and by market-cap tier.
///
/// Pure computation over a holdings slice.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Sum holding values per sector and per market-cap tier, then express
    /// each bucket as a share of the total. Empty labels go to `"Unknown"`.
    /// With a total of exactly 0 every percentage is 0.
    pub fn allocate(&self, holdings: &[Holding]) -> AllocationResult {
        let mut total = 0.0;
        let mut by_sector: BTreeMap<String, f64> = BTreeMap::new();
        let mut by_market_cap: BTreeMap<String, f64> = BTreeMap::new();

        for holding in holdings {
            total += holding.value();
            *by_sector.entry(bucket_label(holding.sector())).or_insert(0.0) += holding.value();
            *by_market_cap
                .entry(bucket_label(holding.market_cap()))
                .or_insert(0.0) += holding.value();
        }

        AllocationResult {
            by_sector: to_buckets(by_sector, total),
            by_market_cap: to_buckets(by_market_cap, total),
        }
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_label(label: &str) -> String {
    if label.is_empty() {
        UNKNOWN_BUCKET.to_string()
    } else {
        label.to_string()
    }
}

fn to_buckets(sums: BTreeMap<String, f64>, total: f64) -> BTreeMap<String, AllocationBucket> {
    sums.into_iter()
        .map(|(label, value)| {
            let percentage = if total != 0.0 {
                (value / total) * 100.0
            } else {
                0.0
            };
            let bucket = AllocationBucket {
                value: round2(value),
                percentage: round2(percentage),
            };
            (label, bucket)
        })
        .collect()
}
