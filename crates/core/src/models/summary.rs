use serde::Serialize;

use super::holding::Holding;

/// Qualitative risk label derived from the overall return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    /// Portfolio is currently at a loss
    Low,
    /// Return between 0% and 20% inclusive
    Moderate,
    /// Return above 20%
    High,
}

impl RiskLevel {
    /// Classify a total return percentage. Both boundaries (0 and 20) are `Moderate`.
    pub fn from_return_pct(pct: f64) -> Self {
        if pct > 20.0 {
            RiskLevel::High
        } else if pct < 0.0 {
            RiskLevel::Low
        } else {
            RiskLevel::Moderate
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Portfolio-wide totals and headline statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Sum of holding values
    pub total_value: f64,

    /// Sum of `quantity * avg_price` over all holdings
    pub total_invested: f64,

    /// `total_value - total_invested`
    pub total_gain_loss: f64,

    /// `total_gain_loss / total_invested * 100`, or 0 with nothing invested
    pub total_gain_loss_percent: f64,

    /// Holding with the highest `gain_loss_percent` (earliest wins ties)
    pub top_performer: Option<Holding>,

    /// Holding with the lowest `gain_loss_percent` (earliest wins ties)
    pub worst_performer: Option<Holding>,

    /// 0–10 score from the number of distinct sectors
    pub diversification_score: f64,

    pub risk_level: RiskLevel,
}
