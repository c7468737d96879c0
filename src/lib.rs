//! Paradex exchange adapter
//!
//! Venue-neutral `ExchangeAdapter` interface with a Paradex implementation:
//! - Orderbook snapshots with float levels
//! - Limit/market order placement (post-only by default)
//! - Signed position lookup per ticker

pub mod adapters;
pub mod config;
pub mod error;

pub use error::AppError;
