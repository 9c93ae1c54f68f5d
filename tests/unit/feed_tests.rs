//! Tests for feed line parsing and field validation.

#[cfg(test)]
mod tests {
    use bookdepth_rs::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_add_record() {
        let record = parse_line("55784570 A xwdvb S 44.26 100").unwrap();
        assert_eq!(
            record,
            FeedRecord::Add {
                timestamp: 55784570,
                id: OrderId::from("xwdvb"),
                side: Side::Sell,
                price: dec!(44.26),
                size: 100,
            }
        );
    }

    #[test]
    fn test_parse_reduce_record() {
        let record = parse_line("55784571 R xwdvb 40").unwrap();
        assert_eq!(
            record,
            FeedRecord::Reduce {
                timestamp: 55784571,
                id: OrderId::from("xwdvb"),
                size: 40,
            }
        );
    }

    #[test]
    fn test_record_type_and_side_are_case_insensitive() {
        let record = parse_line("1 a ord1 b 10.00 100").unwrap();
        assert_eq!(
            record,
            FeedRecord::Add {
                timestamp: 1,
                id: OrderId::from("ord1"),
                side: Side::Buy,
                price: dec!(10.00),
                size: 100,
            }
        );

        let record = parse_line("2 r ord1 0").unwrap();
        assert!(matches!(record, FeedRecord::Reduce { size: 0, .. }));
    }

    #[test]
    fn test_reduce_size_zero_is_a_full_cancel() {
        let record = parse_line("3 R ord1 0").unwrap();
        assert_eq!(
            record,
            FeedRecord::Reduce {
                timestamp: 3,
                id: OrderId::from("ord1"),
                size: 0,
            }
        );
    }

    #[test]
    fn test_empty_and_truncated_lines() {
        assert_eq!(parse_line(""), Err(FeedError::EmptyLine));
        assert_eq!(parse_line("   "), Err(FeedError::EmptyLine));
        assert_eq!(
            parse_line("55784570"),
            Err(FeedError::Truncated("55784570".to_string()))
        );
    }

    #[test]
    fn test_unknown_record_type() {
        assert_eq!(
            parse_line("1 X ord1 100"),
            Err(FeedError::UnknownRecordType("X".to_string()))
        );
    }

    #[test]
    fn test_add_field_count() {
        assert_eq!(
            parse_line("1 A ord1 B 10.00"),
            Err(FeedError::FieldCount {
                kind: "add",
                expected: 6,
                found: 5,
            })
        );
        assert_eq!(
            parse_line("1 A ord1 B 10.00 100 extra"),
            Err(FeedError::FieldCount {
                kind: "add",
                expected: 6,
                found: 7,
            })
        );
    }

    #[test]
    fn test_reduce_field_count() {
        assert_eq!(
            parse_line("1 R ord1"),
            Err(FeedError::FieldCount {
                kind: "reduce",
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(
            parse_line("-1 A ord1 B 10.00 100"),
            Err(FeedError::InvalidField {
                field: "timestamp",
                value: "-1".to_string(),
            })
        );
        assert!(matches!(
            parse_line("abc R ord1 10"),
            Err(FeedError::InvalidField {
                field: "timestamp",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(
            parse_line("1 A ord1 X 10.00 100"),
            Err(FeedError::InvalidField {
                field: "side",
                value: "X".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_price() {
        assert!(matches!(
            parse_line("1 A ord1 B ten 100"),
            Err(FeedError::InvalidField { field: "price", .. })
        ));
        assert_eq!(
            parse_line("1 A ord1 B 0.00 100"),
            Err(FeedError::NonPositiveField {
                field: "price",
                value: "0.00".to_string(),
            })
        );
        assert!(matches!(
            parse_line("1 A ord1 B -10.00 100"),
            Err(FeedError::NonPositiveField { field: "price", .. })
        ));
    }

    #[test]
    fn test_invalid_add_size() {
        assert!(matches!(
            parse_line("1 A ord1 B 10.00 lots"),
            Err(FeedError::InvalidField { field: "size", .. })
        ));
        assert_eq!(
            parse_line("1 A ord1 B 10.00 0"),
            Err(FeedError::NonPositiveField {
                field: "size",
                value: "0".to_string(),
            })
        );
        assert!(matches!(
            parse_line("1 A ord1 B 10.00 -5"),
            Err(FeedError::InvalidField { field: "size", .. })
        ));
    }

    #[test]
    fn test_invalid_reduce_size() {
        assert!(matches!(
            parse_line("1 R ord1 -5"),
            Err(FeedError::InvalidField { field: "size", .. })
        ));
    }
}
