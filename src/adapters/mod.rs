//! Exchange adapters
//!
//! This module provides the venue-neutral abstractions trading logic talks
//! to, and the Paradex implementation behind them.

pub mod errors;
pub mod paradex;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use errors::{ExchangeError, ExchangeResult, VenueError};
pub use paradex::{ParadexAdapter, ParadexConfig, SymbolMap, VenueClient, VenueConnector};
pub use traits::ExchangeAdapter;
pub use types::{OrderConfirmation, OrderRequest, OrderSide, OrderType, Orderbook, OrderbookLevel};
