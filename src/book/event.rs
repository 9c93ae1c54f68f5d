//! Cost change events delivered to registered listeners.

use super::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Emitted when one side's cost to fill the target size changes.
///
/// `total` is `None` when resting liquidity on that side no longer covers
/// the target size; such an event fires once on the transition and is not
/// repeated while the side stays unfillable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostUpdate {
    /// Timestamp of the event that triggered the change.
    pub timestamp: u64,
    /// The side whose cost changed.
    pub side: Side,
    /// New exact fill cost, or `None` when the target is unreachable.
    pub total: Option<Decimal>,
}

impl fmt::Display for CostUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => write!(f, "{} {} {}", self.timestamp, self.side, total),
            None => write!(f, "{} {} NA", self.timestamp, self.side),
        }
    }
}

/// A listener callback for cost change events.
///
/// Listeners are invoked synchronously, in registration order, after each
/// mutation that changes a side's cost. The book retains no event history.
pub type CostListener = Arc<dyn Fn(&CostUpdate) + Send + Sync>;
