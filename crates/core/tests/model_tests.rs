use portfolio_insights_core::models::allocation::{AllocationBucket, AllocationResult};
use portfolio_insights_core::models::holding::Holding;
use portfolio_insights_core::models::performance::{HorizonReturns, TimelinePoint};
use portfolio_insights_core::models::summary::RiskLevel;
use serde_json::json;

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    // ── Holding::new ──────────────────────────────────────────────

    #[test]
    fn derives_value_gain_and_percent() {
        let h = Holding::new("TCS", "", 10.0, 3000.0, 3500.5);
        assert_eq!(h.value(), 35005.0);
        assert_eq!(h.gain_loss(), 5005.0);
        assert_eq!(h.gain_loss_percent(), 16.68);
    }

    #[test]
    fn loss_is_negative() {
        let h = Holding::new("INFY", "Infosys", 4.0, 1500.0, 1400.0);
        assert_eq!(h.gain_loss(), -400.0);
        assert_eq!(h.gain_loss_percent(), -6.67);
    }

    #[test]
    fn value_is_rounded() {
        let h = Holding::new("X", "", 3.0, 0.0, 1.005);
        assert_eq!(h.value(), (3.0_f64 * 1.005 * 100.0).round() / 100.0);
    }

    #[test]
    fn zero_quantity_has_zero_percent() {
        let h = Holding::new("X", "", 0.0, 100.0, 120.0);
        assert_eq!(h.value(), 0.0);
        assert_eq!(h.gain_loss_percent(), 0.0);
    }

    #[test]
    fn zero_avg_price_has_zero_percent() {
        // Gain is real, but there is no invested amount to divide by
        let h = Holding::new("GIFT", "", 10.0, 0.0, 50.0);
        assert_eq!(h.gain_loss(), 500.0);
        assert_eq!(h.gain_loss_percent(), 0.0);
    }

    #[test]
    fn invested_is_unrounded() {
        let h = Holding::new("X", "", 3.0, 0.3333, 1.0);
        assert_eq!(h.invested(), 3.0 * 0.3333);
    }

    #[test]
    fn classification_defaults_to_empty() {
        let h = Holding::new("X", "", 1.0, 1.0, 1.0);
        assert_eq!(h.sector(), "");
        assert_eq!(h.market_cap(), "");
        assert_eq!(h.exchange(), "");
    }

    #[test]
    fn builders_set_classification() {
        let h = Holding::new("X", "", 1.0, 1.0, 1.0)
            .with_sector("IT")
            .with_market_cap("Large Cap")
            .with_exchange("NSE");
        assert_eq!(h.sector(), "IT");
        assert_eq!(h.market_cap(), "Large Cap");
        assert_eq!(h.exchange(), "NSE");
    }

    #[test]
    fn builders_do_not_touch_derived_fields() {
        let plain = Holding::new("X", "", 2.0, 10.0, 15.0);
        let classified = plain.clone().with_sector("IT");
        assert_eq!(plain.value(), classified.value());
        assert_eq!(plain.gain_loss_percent(), classified.gain_loss_percent());
    }

    // ── identity ──────────────────────────────────────────────────

    #[test]
    fn identified_by_symbol_or_name() {
        assert!(Holding::new("TCS", "", 1.0, 1.0, 1.0).is_identified());
        assert!(Holding::new("", "Tata", 1.0, 1.0, 1.0).is_identified());
        assert!(!Holding::new("", "", 1.0, 1.0, 1.0).is_identified());
    }

    // ── serde ─────────────────────────────────────────────────────

    #[test]
    fn serializes_camel_case() {
        let h = Holding::new("TCS", "Tata Consultancy Services", 10.0, 3000.0, 3500.5)
            .with_sector("IT")
            .with_market_cap("Large Cap")
            .with_exchange("NSE");

        let value = serde_json::to_value(&h).unwrap();
        assert_eq!(
            value,
            json!({
                "symbol": "TCS",
                "name": "Tata Consultancy Services",
                "quantity": 10.0,
                "avgPrice": 3000.0,
                "currentPrice": 3500.5,
                "sector": "IT",
                "marketCap": "Large Cap",
                "exchange": "NSE",
                "value": 35005.0,
                "gainLoss": 5005.0,
                "gainLossPercent": 16.68
            })
        );
    }

    #[test]
    fn empty_exchange_is_omitted() {
        let value = serde_json::to_value(Holding::new("TCS", "", 1.0, 1.0, 1.0)).unwrap();
        assert!(value.get("exchange").is_none());
        // Other empty strings are still present
        assert_eq!(value["sector"], "");
        assert_eq!(value["marketCap"], "");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RiskLevel
// ═══════════════════════════════════════════════════════════════════

mod risk_level {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(RiskLevel::from_return_pct(20.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_return_pct(20.01), RiskLevel::High);
        assert_eq!(RiskLevel::from_return_pct(0.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_return_pct(-0.01), RiskLevel::Low);
    }

    #[test]
    fn extremes() {
        assert_eq!(RiskLevel::from_return_pct(500.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_return_pct(-100.0), RiskLevel::Low);
    }

    #[test]
    fn display() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn serializes_as_plain_label() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), json!("High"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Allocation / Performance payloads
// ═══════════════════════════════════════════════════════════════════

mod payloads {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn allocation_result_field_names() {
        let mut result = AllocationResult::default();
        result.by_sector.insert(
            "IT".into(),
            AllocationBucket {
                value: 100.0,
                percentage: 100.0,
            },
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["bySector"]["IT"]["value"], 100.0);
        assert_eq!(value["bySector"]["IT"]["percentage"], 100.0);
        assert_eq!(value["byMarketCap"], json!({}));
    }

    #[test]
    fn timeline_point_date_format() {
        let point = TimelinePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            portfolio: 1.0,
            nifty50: 2.0,
            gold: 3.0,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["nifty50"], 2.0);
    }

    #[test]
    fn horizon_returns_keys() {
        let value = serde_json::to_value(HorizonReturns::new(1.8, 6.2, 12.4)).unwrap();
        assert_eq!(value, json!({ "1month": 1.8, "3months": 6.2, "1year": 12.4 }));
    }
}
