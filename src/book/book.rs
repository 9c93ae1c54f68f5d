//! Core book implementation: order store, price ladders and the
//! cost-to-fill engine.

use super::error::BookError;
use super::event::{CostListener, CostUpdate};
use super::ladder::PriceLadder;
use super::order::{OrderId, RestingOrder, Side};
use super::store::OrderStore;
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// A one-instrument depth book that tracks the cost of filling a fixed
/// target size from resting liquidity.
///
/// The book owns its order store and one price ladder per side; every
/// mutation goes through [`DepthBook::apply_add`] or
/// [`DepthBook::apply_reduce`], which update both structures atomically
/// and then re-evaluate the affected side's fill cost. A [`CostUpdate`]
/// is produced only when that cost actually changes.
///
/// The book is single-writer: events are applied strictly in sequence and
/// no operation suspends mid-update, which is what makes the
/// change-detection comparison correct without locking.
pub struct DepthBook {
    /// Instrument label, used for logging only.
    symbol: String,

    /// The hypothetical fill quantity whose cost is tracked. Fixed for
    /// the book's lifetime, shared by both sides.
    target_size: u64,

    /// Every currently-resting order, keyed by identifier.
    orders: OrderStore,

    /// Bid-side price levels, best (highest) price first.
    bids: PriceLadder,

    /// Ask-side price levels, best (lowest) price first.
    asks: PriceLadder,

    /// Registered cost change listeners, invoked in order.
    listeners: Vec<CostListener>,
}

impl std::fmt::Debug for DepthBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthBook")
            .field("symbol", &self.symbol)
            .field("target_size", &self.target_size)
            .field("orders", &self.orders)
            .field("bids", &self.bids)
            .field("asks", &self.asks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DepthBook {
    /// Create a new book for `symbol` tracking the fill cost of
    /// `target_size` units.
    ///
    /// # Errors
    /// Returns [`BookError::InvalidTargetSize`] when `target_size` is 0.
    pub fn new(symbol: &str, target_size: u64) -> Result<Self, BookError> {
        if target_size == 0 {
            return Err(BookError::InvalidTargetSize(target_size));
        }
        Ok(Self {
            symbol: symbol.to_string(),
            target_size,
            orders: OrderStore::new(),
            bids: PriceLadder::new(Side::Buy),
            asks: PriceLadder::new(Side::Sell),
            listeners: Vec::new(),
        })
    }

    /// Create a new book with a cost change listener already registered.
    ///
    /// # Errors
    /// Returns [`BookError::InvalidTargetSize`] when `target_size` is 0.
    pub fn with_listener(
        symbol: &str,
        target_size: u64,
        listener: CostListener,
    ) -> Result<Self, BookError> {
        let mut book = Self::new(symbol, target_size)?;
        book.add_listener(listener);
        Ok(book)
    }

    /// Register a cost change listener.
    pub fn add_listener(&mut self, listener: CostListener) {
        self.listeners.push(listener);
    }

    /// The instrument label this book was constructed with.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The fixed target size whose fill cost is tracked.
    pub fn target_size(&self) -> u64 {
        self.target_size
    }

    /// Apply an add event: a new order starts resting in the book.
    ///
    /// `size` must be positive; the feed parser enforces this.
    ///
    /// Inserts the order, adds its size to the (side, price) level and
    /// re-evaluates the affected side only; a one-sided add cannot move
    /// the opposite side's cost since its levels are untouched.
    ///
    /// # Errors
    /// Returns [`BookError::DuplicateOrder`] if the identifier already
    /// rests (case-insensitive); nothing is applied.
    pub fn apply_add(
        &mut self,
        timestamp: u64,
        id: OrderId,
        side: Side,
        price: Decimal,
        size: u64,
    ) -> Result<Option<CostUpdate>, BookError> {
        debug_assert!(size > 0, "add events carry a positive size");
        trace!(symbol = %self.symbol, %id, %side, %price, size, "applying add");

        self.orders
            .insert(RestingOrder::new(id, side, price, size, timestamp))?;
        self.ladder_mut(side).add(price, size);
        Ok(self.reevaluate(side, timestamp))
    }

    /// Apply a reduce/cancel event: set an order's remaining size to
    /// `new_size`, removing it entirely when `new_size` is 0.
    ///
    /// The (side, price) level aggregate is adjusted by the size delta
    /// and vacated when it reaches exactly 0, then the order's side is
    /// re-evaluated.
    ///
    /// # Errors
    /// Returns [`BookError::UnknownOrder`] if no such order rests;
    /// nothing is applied.
    pub fn apply_reduce(
        &mut self,
        timestamp: u64,
        id: &OrderId,
        new_size: u64,
    ) -> Result<Option<CostUpdate>, BookError> {
        trace!(symbol = %self.symbol, %id, new_size, "applying reduce");

        let reduced = self.orders.set_size(id, new_size)?;
        let ladder = self.ladder_mut(reduced.side);
        if reduced.new_size >= reduced.prior_size {
            ladder.add(reduced.price, reduced.new_size - reduced.prior_size);
        } else {
            ladder.reduce(reduced.price, reduced.prior_size - reduced.new_size);
        }
        Ok(self.reevaluate(reduced.side, timestamp))
    }

    /// Recompute one side's fill cost and notify listeners if it changed.
    ///
    /// Any difference against the last-reported value fires, including
    /// the transition from an available cost to an unavailable one (the
    /// update then carries `total: None`). An unchanged cost stays
    /// silent, so no two consecutive updates for one side ever carry the
    /// same total.
    fn reevaluate(&mut self, side: Side, timestamp: u64) -> Option<CostUpdate> {
        let target = self.target_size;
        let ladder = self.ladder_mut(side);
        let total = ladder.cost_to_fill(target);
        if total == ladder.last_reported {
            return None;
        }
        ladder.last_reported = total;

        let update = CostUpdate {
            timestamp,
            side,
            total,
        };
        debug!(symbol = %self.symbol, %update, "cost changed");
        for listener in &self.listeners {
            listener(&update);
        }
        Some(update)
    }

    /// Look up a resting order.
    ///
    /// # Errors
    /// Returns [`BookError::UnknownOrder`] if no such order rests.
    pub fn get_order(&self, id: &OrderId) -> Result<&RestingOrder, BookError> {
        self.orders.get(id)
    }

    /// Whether an order with this identifier currently rests.
    pub fn contains_order(&self, id: &OrderId) -> bool {
        self.orders.contains(id)
    }

    /// Number of resting orders across both sides.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate over every resting order, in no particular order.
    pub fn orders(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.iter()
    }

    /// The best (highest) bid price, if any.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best()
    }

    /// The best (lowest) ask price, if any.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best()
    }

    /// Iterate one side's levels best-first as (price, aggregate size).
    pub fn levels(&self, side: Side) -> impl Iterator<Item = (Decimal, u64)> + '_ {
        self.ladder(side)
            .iter_best_first()
            .map(|(price, aggregate)| (*price, *aggregate))
    }

    /// Number of price levels on one side.
    pub fn level_count(&self, side: Side) -> usize {
        self.ladder(side).len()
    }

    /// Total size resting on one side, summed across its levels.
    pub fn resting_size(&self, side: Side) -> u64 {
        self.ladder(side).total_size()
    }

    /// Aggregate size at a specific (side, price) level, if it exists.
    pub fn quantity_at(&self, side: Side, price: Decimal) -> Option<u64> {
        self.ladder(side).quantity_at(price)
    }

    /// The last cost reported for one side; `None` means unavailable
    /// (or never reported).
    pub fn last_reported(&self, side: Side) -> Option<Decimal> {
        self.ladder(side).last_reported
    }

    fn ladder(&self, side: Side) -> &PriceLadder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn ladder_mut(&mut self, side: Side) -> &mut PriceLadder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}
