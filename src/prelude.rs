//! Prelude module that re-exports commonly used types.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use bookdepth_rs::prelude::*;
//! ```

// Core book types
pub use crate::book::{BookError, DepthBook};

// Order model
pub use crate::book::{OrderId, RestingOrder, Side};

// Cost change events
pub use crate::book::{CostListener, CostUpdate};

// Feed parsing
pub use crate::feed::{FeedError, FeedRecord, parse_line};
