//! Identifier-keyed storage for resting orders.

use super::error::BookError;
use super::order::{OrderId, RestingOrder, Side};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The prior state handed back by [`OrderStore::set_size`] so the caller
/// can adjust price-level aggregates by the size delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedOrder {
    /// Side the order rests on.
    pub side: Side,
    /// Price level the order rests at.
    pub price: Decimal,
    /// Remaining size before the mutation.
    pub prior_size: u64,
    /// Remaining size after the mutation (0 means removed).
    pub new_size: u64,
}

/// Owns every currently-resting order, keyed by identifier.
///
/// Lookup, insertion and mutation are O(1) amortized. The store exposes
/// no price ordering; that is the ladder's concern.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, RestingOrder>,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new resting order.
    ///
    /// # Errors
    /// Returns [`BookError::DuplicateOrder`] if an order with the same
    /// identifier (case-insensitive) already rests; the store is untouched.
    pub fn insert(&mut self, order: RestingOrder) -> Result<(), BookError> {
        if self.orders.contains_key(&order.id) {
            return Err(BookError::DuplicateOrder(order.id));
        }
        self.orders.insert(order.id.clone(), order);
        Ok(())
    }

    /// Set an order's remaining size, removing it entirely when
    /// `new_size` is 0.
    ///
    /// Returns the order's side, price and prior size so the caller can
    /// keep level aggregates consistent.
    ///
    /// # Errors
    /// Returns [`BookError::UnknownOrder`] if no such order rests; the
    /// store is untouched.
    pub fn set_size(&mut self, id: &OrderId, new_size: u64) -> Result<ReducedOrder, BookError> {
        let order = self
            .orders
            .get(id)
            .ok_or_else(|| BookError::UnknownOrder(id.clone()))?;
        let reduced = ReducedOrder {
            side: order.side,
            price: order.price,
            prior_size: order.size,
            new_size,
        };
        if new_size == 0 {
            self.orders.remove(id);
        } else if let Some(order) = self.orders.get_mut(id) {
            order.size = new_size;
        }
        Ok(reduced)
    }

    /// Look up a resting order.
    ///
    /// # Errors
    /// Returns [`BookError::UnknownOrder`] if no such order rests.
    pub fn get(&self, id: &OrderId) -> Result<&RestingOrder, BookError> {
        self.orders
            .get(id)
            .ok_or_else(|| BookError::UnknownOrder(id.clone()))
    }

    /// Whether an order with this identifier currently rests.
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the store holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over every resting order, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.values()
    }

    /// Total remaining size resting on one side.
    pub fn resting_size(&self, side: Side) -> u64 {
        self.orders
            .values()
            .filter(|order| order.side == side)
            .map(|order| order.size)
            .sum()
    }
}
