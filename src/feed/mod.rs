//! Line-oriented market data log parsing.
//!
//! The feed is a sequence of space-delimited records, one per line:
//!
//! - Add:    `timestamp A order-id side price size` (side is `B` or `S`)
//! - Reduce: `timestamp R order-id size` (the new remaining size;
//!   0 cancels the order)
//!
//! Record type and side letters are case-insensitive. Field-count and
//! field-type validation happens here; the book never sees a malformed
//! event.

pub mod error;
pub mod parser;
pub mod record;

pub use error::FeedError;
pub use parser::parse_line;
pub use record::FeedRecord;
