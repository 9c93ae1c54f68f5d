//! Feed-to-notification tests driving the book through parsed lines,
//! the way the `bookdepth` binary does.

#[cfg(test)]
mod tests {
    use bookdepth_rs::prelude::*;
    use rust_decimal_macros::dec;

    /// Parse and apply every line, collecting the updates the book emits.
    fn run(lines: &[&str], target_size: u64) -> Vec<CostUpdate> {
        let mut book = DepthBook::new("ZING", target_size).unwrap();
        let mut updates = Vec::new();
        for line in lines {
            let record = parse_line(line).unwrap();
            let update = match record {
                FeedRecord::Add {
                    timestamp,
                    id,
                    side,
                    price,
                    size,
                } => book.apply_add(timestamp, id, side, price, size).unwrap(),
                FeedRecord::Reduce {
                    timestamp,
                    id,
                    size,
                } => book.apply_reduce(timestamp, &id, size).unwrap(),
            };
            updates.extend(update);
        }
        updates
    }

    const SCENARIO: &[&str] = &[
        "1 A ord1 B 10.00 100",
        "2 A ord2 B 9.50 150",
        "3 A ord3 S 10.50 120",
        "4 A ord4 S 11.00 200",
        "5 R ord2 50",
        "6 R ord1 0",
        "7 A ord5 B 9.85 300",
        "8 R ord3 0",
    ];

    #[test]
    fn test_mixed_scenario_updates() {
        let updates = run(SCENARIO, 200);
        let rendered: Vec<String> = updates.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                // 100@10.00 + 100@9.50
                "2 B 1950.00",
                // 120@10.50 + 80@11.00
                "4 S 2140.00",
                // bid liquidity drops to 150: unreachable
                "5 B NA",
                // ord1's removal stays silent (still NA); ord5 restores
                // depth and 200@9.85 fills the target
                "7 B 1970.00",
                // ask side falls to 200@11.00 exactly
                "8 S 2200.00",
            ]
        );
    }

    #[test]
    fn test_replay_is_deterministic() {
        let first = run(SCENARIO, 200);
        let second = run(SCENARIO, 200);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_consecutive_equal_totals_per_side() {
        let updates = run(SCENARIO, 200);
        let mut last_buy = None;
        let mut last_sell = None;
        for update in &updates {
            let last = match update.side {
                Side::Buy => &mut last_buy,
                Side::Sell => &mut last_sell,
            };
            assert_ne!(last.as_ref(), Some(&update.total));
            *last = Some(update.total);
        }
    }

    #[test]
    fn test_book_state_after_scenario() {
        let mut book = DepthBook::new("ZING", 200).unwrap();
        for line in SCENARIO {
            match parse_line(line).unwrap() {
                FeedRecord::Add {
                    timestamp,
                    id,
                    side,
                    price,
                    size,
                } => {
                    book.apply_add(timestamp, id, side, price, size).unwrap();
                }
                FeedRecord::Reduce {
                    timestamp,
                    id,
                    size,
                } => {
                    book.apply_reduce(timestamp, &id, size).unwrap();
                }
            }
        }

        // Resting: ord2 (50@9.50), ord5 (300@9.85) on bids; ord4
        // (200@11.00) on asks.
        assert_eq!(book.order_count(), 3);
        assert_eq!(book.best_bid(), Some(dec!(9.85)));
        assert_eq!(book.best_ask(), Some(dec!(11.00)));
        assert_eq!(book.resting_size(Side::Buy), 350);
        assert_eq!(book.resting_size(Side::Sell), 200);
        assert_eq!(
            book.levels(Side::Buy).collect::<Vec<_>>(),
            vec![(dec!(9.85), 300), (dec!(9.50), 50)]
        );
    }

    #[test]
    fn test_sides_report_independently() {
        let updates = run(
            &[
                "1 A b1 B 10.00 50",
                "2 A s1 S 10.50 50",
                "3 A b2 B 9.90 50",
                "4 A s2 S 10.60 50",
            ],
            50,
        );
        let sides: Vec<Side> = updates.iter().map(|update| update.side).collect();
        assert_eq!(sides, vec![Side::Buy, Side::Sell]);
    }
}
