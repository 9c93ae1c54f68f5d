//! # Price-Aggregated Depth Book with Cost-to-Fill Tracking
//!
//! This crate ingests a sequential log of limit order book events (add,
//! reduce/cancel) for a single instrument and maintains a live,
//! price-aggregated view of resting liquidity on both sides of the
//! market. Its externally useful output is a cost-to-fill figure: given a
//! target quantity fixed at construction, the book continuously computes,
//! per side, what it would cost to immediately fill that many units by
//! consuming resting liquidity from the best price outward, and emits a
//! [`CostUpdate`] only when that figure changes.
//!
//! ## Architecture
//!
//! - [`book::OrderStore`] owns every resting order, keyed by
//!   case-insensitive identifier, with O(1) insertion and mutation.
//! - Per side, an ordered price ladder maps price to the aggregate
//!   remaining size at that price. Bids traverse highest price first,
//!   asks lowest first; a level whose aggregate reaches 0 is removed
//!   immediately.
//! - [`DepthBook`] ties the two together: every add/reduce updates both
//!   structures, re-walks the affected side's levels best-first to
//!   recompute the fill cost, and notifies registered listeners on any
//!   change, including the transition to "unreachable" when liquidity
//!   drops below the target.
//!
//! This is a one-sided book-state tracker, not a matching engine: orders
//! are only ever added, reduced and removed, never crossed.
//!
//! Prices are [`rust_decimal::Decimal`] and cost totals are exact sums of
//! `price × consumed` terms, so no floating-point accumulation error can
//! creep into reported figures.
//!
//! The book is single-writer by design: events arrive in a total order
//! and each is applied to completion before the next, which is what makes
//! the change-detection comparison correct without locking.
//!
//! ## Example
//!
//! ```
//! use bookdepth_rs::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut book = DepthBook::new("ZING", 200).unwrap();
//!
//! // 100 units at 10.00 cannot fill 200, so no update fires.
//! let update = book
//!     .apply_add(1, OrderId::from("ord1"), Side::Buy, dec!(10.00), 100)
//!     .unwrap();
//! assert!(update.is_none());
//!
//! // 150 more at 9.50 makes 200 reachable: 100@10.00 + 100@9.50.
//! let update = book
//!     .apply_add(2, OrderId::from("ord2"), Side::Buy, dec!(9.50), 150)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(update.total, Some(dec!(1950.00)));
//!
//! // Cancelling ord1 drops liquidity below the target again.
//! let update = book
//!     .apply_reduce(3, &OrderId::from("ord1"), 0)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(update.total, None);
//! ```
//!
//! ## Feed format
//!
//! [`feed::parse_line`] understands the space-delimited log format of the
//! original analyzer: `timestamp A order-id side price size` for adds and
//! `timestamp R order-id size` for reduces (the new remaining size, 0
//! cancelling the order). The `bookdepth` binary wires stdin through the
//! parser into a [`DepthBook`] and prints one line per cost change, with
//! `NA` for a cost that became unreachable.

pub mod book;
pub mod feed;
pub mod prelude;

pub use book::{
    BookError, CostListener, CostUpdate, DepthBook, OrderId, OrderStore, RestingOrder, Side,
};
pub use feed::{FeedError, FeedRecord, parse_line};
