use chrono::NaiveDate;

use crate::models::holding::Holding;
use crate::models::performance::{HorizonReturns, PerformanceResult, SeriesReturns, TimelinePoint};
use crate::parsing::cell::round2;

// The source sheet only holds a current snapshot, so everything below is a
// fixed placeholder projection. These constants are NOT market data; clients
// depend on the exact values, so keep them as they are.

/// Mean gain % assumed when there are no holdings.
pub const FALLBACK_MEAN_GAIN_PCT: f64 = 5.0;

/// One synthetic timeline date and how to derive each series on it.
struct TimelineAnchor {
    date: NaiveDate,
    /// Fraction of the mean gain % to back out of today's value.
    /// `None` means the point is today's value exactly.
    portfolio_pullback: Option<f64>,
    nifty50_base: f64,
    nifty50_adjustment: f64,
    gold_base: f64,
    gold_adjustment: f64,
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid timeline date"),
    }
}

const TIMELINE: [TimelineAnchor; 3] = [
    TimelineAnchor {
        date: ymd(2024, 1, 1),
        portfolio_pullback: Some(0.7),
        nifty50_base: 21000.0,
        nifty50_adjustment: -0.03,
        gold_base: 62000.0,
        gold_adjustment: -0.01,
    },
    TimelineAnchor {
        date: ymd(2024, 3, 1),
        portfolio_pullback: Some(0.3),
        nifty50_base: 22100.0,
        nifty50_adjustment: 0.02,
        gold_base: 64500.0,
        gold_adjustment: 0.01,
    },
    TimelineAnchor {
        date: ymd(2024, 6, 1),
        portfolio_pullback: None,
        nifty50_base: 23500.0,
        nifty50_adjustment: 0.03,
        gold_base: 68000.0,
        gold_adjustment: 0.02,
    },
];

const NIFTY50_RETURNS: HorizonReturns = HorizonReturns::new(1.8, 6.2, 12.4);
const GOLD_RETURNS: HorizonReturns = HorizonReturns::new(-0.5, 4.1, 8.9);

/// Synthesizes a three-point history and horizon returns from the current
/// holdings snapshot.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Project the performance chart data.
    ///
    /// Inputs are the current total value and the mean `gain_loss_percent`
    /// across holdings ([`FALLBACK_MEAN_GAIN_PCT`] when there are none).
    pub fn project(&self, holdings: &[Holding]) -> PerformanceResult {
        let (total_now, mean_gain_pct) = snapshot_inputs(holdings);

        let timeline = TIMELINE
            .iter()
            .map(|anchor| {
                let portfolio = match anchor.portfolio_pullback {
                    Some(factor) => total_now * (1.0 - mean_gain_pct / 100.0 * factor),
                    None => total_now,
                };
                TimelinePoint {
                    date: anchor.date,
                    portfolio: round2(portfolio),
                    nifty50: round2(anchor.nifty50_base * (1.0 + anchor.nifty50_adjustment)),
                    gold: round2(anchor.gold_base * (1.0 + anchor.gold_adjustment)),
                }
            })
            .collect();

        let portfolio_returns = HorizonReturns::new(
            round2(mean_gain_pct / 6.0),
            round2(mean_gain_pct / 2.0),
            round2(mean_gain_pct * 2.0),
        );

        PerformanceResult {
            timeline,
            returns: SeriesReturns {
                portfolio: portfolio_returns,
                nifty50: NIFTY50_RETURNS,
                gold: GOLD_RETURNS,
            },
        }
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current total value and mean gain % of the snapshot.
fn snapshot_inputs(holdings: &[Holding]) -> (f64, f64) {
    if holdings.is_empty() {
        return (0.0, FALLBACK_MEAN_GAIN_PCT);
    }

    let mut total_now = 0.0;
    let mut gain_pct_sum = 0.0;
    for holding in holdings {
        total_now += holding.value();
        gain_pct_sum += holding.gain_loss_percent();
    }
    (total_now, gain_pct_sum / holdings.len() as f64)
}
