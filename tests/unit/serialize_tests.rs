//! Serialization tests for events and feed records.

#[cfg(test)]
mod tests {
    use bookdepth_rs::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_update_round_trip() {
        let update = CostUpdate {
            timestamp: 55784570,
            side: Side::Sell,
            total: Some(dec!(2140.00)),
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: CostUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
    }

    #[test]
    fn test_unavailable_total_serializes_as_null() {
        let update = CostUpdate {
            timestamp: 3,
            side: Side::Buy,
            total: None,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert!(value["total"].is_null());
        assert_eq!(value["timestamp"], 3);

        let back: CostUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(back, update);
    }

    #[test]
    fn test_feed_record_round_trip() {
        let record = parse_line("55784570 A xwdvb S 44.26 100").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: FeedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let record = parse_line("55784571 R xwdvb 0").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: FeedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_side_serializes_by_name() {
        assert_eq!(serde_json::to_value(Side::Buy).unwrap(), "Buy");
        assert_eq!(serde_json::to_value(Side::Sell).unwrap(), "Sell");
    }
}
