//! Per-side price ladder: ordered price levels with aggregate sizes.

use super::order::Side;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// One side's ordered price levels plus the last-reported fill cost.
///
/// Each level maps a price to the sum of remaining sizes of every order
/// resting at that price on this side. A level whose aggregate reaches 0
/// is removed immediately, so no zero-size ghost levels survive an
/// operation. The bid side iterates highest price first, the ask side
/// lowest first.
#[derive(Debug)]
pub(crate) struct PriceLadder {
    side: Side,
    levels: BTreeMap<Decimal, u64>,
    /// Last cost handed to listeners. `None` means unavailable, which is
    /// also the initial state, so a book that has never been able to fill
    /// the target stays silent.
    pub(crate) last_reported: Option<Decimal>,
}

impl PriceLadder {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            last_reported: None,
        }
    }

    /// Add `size` to the aggregate at `price`, creating the level if
    /// absent. A zero `size` is ignored so no empty level can appear.
    pub(crate) fn add(&mut self, price: Decimal, size: u64) {
        if size == 0 {
            return;
        }
        *self.levels.entry(price).or_insert(0) += size;
    }

    /// Subtract `delta` from the aggregate at `price`, removing the level
    /// when it reaches exactly 0.
    ///
    /// Callers only ever pass a delta bounded by the reduced order's prior
    /// size, which is itself bounded by the level aggregate.
    pub(crate) fn reduce(&mut self, price: Decimal, delta: u64) {
        if delta == 0 {
            return;
        }
        if let Some(aggregate) = self.levels.get_mut(&price) {
            *aggregate = aggregate.saturating_sub(delta);
            if *aggregate == 0 {
                self.levels.remove(&price);
            }
        }
    }

    /// The best price on this side, if any level exists.
    pub(crate) fn best(&self) -> Option<Decimal> {
        match self.side {
            Side::Buy => self.levels.last_key_value().map(|(price, _)| *price),
            Side::Sell => self.levels.first_key_value().map(|(price, _)| *price),
        }
    }

    /// Iterate levels best-first: descending prices for bids, ascending
    /// for asks.
    pub(crate) fn iter_best_first(&self) -> Box<dyn Iterator<Item = (&Decimal, &u64)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev()),
            Side::Sell => Box::new(self.levels.iter()),
        }
    }

    /// Exact cost of filling `target` units by consuming levels
    /// best-price-first, or `None` when resting liquidity is insufficient.
    pub(crate) fn cost_to_fill(&self, target: u64) -> Option<Decimal> {
        let mut remaining = target;
        let mut total = Decimal::ZERO;
        for (price, aggregate) in self.iter_best_first() {
            if remaining == 0 {
                break;
            }
            let consumed = remaining.min(*aggregate);
            total += *price * Decimal::from(consumed);
            remaining -= consumed;
        }
        (remaining == 0).then_some(total)
    }

    /// Aggregate size resting at `price`, if the level exists.
    pub(crate) fn quantity_at(&self, price: Decimal) -> Option<u64> {
        self.levels.get(&price).copied()
    }

    /// Number of price levels.
    pub(crate) fn len(&self) -> usize {
        self.levels.len()
    }

    /// Total size resting across all levels.
    pub(crate) fn total_size(&self) -> u64 {
        self.levels.values().sum()
    }
}
