use std::collections::HashSet;

use crate::models::holding::Holding;
use crate::models::summary::{RiskLevel, SummaryResult};
use crate::parsing::cell::round2;

/// Points awarded per distinct sector in the diversification score.
const SCORE_PER_SECTOR: f64 = 2.5;

/// Upper bound of the diversification score.
const MAX_DIVERSIFICATION_SCORE: f64 = 10.0;

/// Computes portfolio-wide totals, best/worst performers, the
/// diversification score and the risk label.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the holdings.
    ///
    /// Totals are accumulated unrounded and rounded once at the end, so
    /// `total_invested` can differ from the sum of rounded per-holding figures.
    pub fn summarize(&self, holdings: &[Holding]) -> SummaryResult {
        let mut total_value = 0.0;
        let mut total_invested = 0.0;
        let mut top: Option<&Holding> = None;
        let mut worst: Option<&Holding> = None;

        for holding in holdings {
            total_value += holding.value();
            total_invested += holding.invested();

            // Strict comparisons: on a tie the earlier holding stays
            if top.map_or(true, |t| holding.gain_loss_percent() > t.gain_loss_percent()) {
                top = Some(holding);
            }
            if worst.map_or(true, |w| holding.gain_loss_percent() < w.gain_loss_percent()) {
                worst = Some(holding);
            }
        }

        let total_gain_loss = round2(total_value - total_invested);
        let total_gain_loss_percent = if total_invested != 0.0 {
            round2((total_gain_loss / total_invested) * 100.0)
        } else {
            0.0
        };

        SummaryResult {
            total_value: round2(total_value),
            total_invested: round2(total_invested),
            total_gain_loss,
            total_gain_loss_percent,
            top_performer: top.cloned(),
            worst_performer: worst.cloned(),
            diversification_score: self.diversification_score(holdings),
            risk_level: RiskLevel::from_return_pct(total_gain_loss_percent),
        }
    }

    /// Coarse spread proxy: distinct non-empty sectors × 2.5, capped at 10.
    pub fn diversification_score(&self, holdings: &[Holding]) -> f64 {
        let sectors: HashSet<&str> = holdings
            .iter()
            .map(Holding::sector)
            .filter(|sector| !sector.is_empty())
            .collect();

        if sectors.is_empty() {
            return 0.0;
        }
        round2((sectors.len() as f64 * SCORE_PER_SECTOR).min(MAX_DIVERSIFICATION_SCORE))
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
