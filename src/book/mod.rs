//! Book state and the cost-to-fill engine.
//!
//! [`DepthBook`] is the only mutation entry point: it keeps the
//! identifier-keyed [`OrderStore`] and the per-side price ladders
//! consistent under add and reduce events, and emits a [`CostUpdate`]
//! whenever the cost of filling the configured target size changes.

pub mod book;
pub mod error;
/// Cost change events and the listener callback type.
pub mod event;
mod ladder;
pub mod order;
pub mod store;


pub use book::DepthBook;
pub use error::BookError;
pub use event::{CostListener, CostUpdate};
pub use order::{OrderId, RestingOrder, Side};
pub use store::{OrderStore, ReducedOrder};
