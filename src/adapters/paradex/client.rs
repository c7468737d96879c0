//! Paradex venue client seam
//!
//! `ParadexAdapter` never talks HTTP itself. It holds a `VenueClient`
//! (the Paradex SDK capability) built by a `VenueConnector`, which keeps
//! the adapter usable in builds where no concrete client is compiled in.

use std::sync::Arc;

use async_trait::async_trait;

use super::config::ParadexConfig;
use super::types::{ParadexOrderRequest, ParadexOrderbookResponse, ParadexPosition};
use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::OrderConfirmation;

/// Calls the adapter makes into the Paradex venue
///
/// Implementations own transport, authentication and any retry policy.
/// Errors must come back as `ExchangeError::Venue`.
#[async_trait]
pub trait VenueClient: Send + Sync {
    /// L2 book for a venue market ("BTC-USD-PERP")
    async fn get_orderbook(&self, market: &str) -> ExchangeResult<ParadexOrderbookResponse>;

    /// Submit an order; the confirmation is returned as the venue sent it
    async fn create_order(&self, request: &ParadexOrderRequest) -> ExchangeResult<OrderConfirmation>;

    /// Every open position on the account
    async fn get_positions(&self) -> ExchangeResult<Vec<ParadexPosition>>;
}

/// Builds a venue client bound to one set of credentials and environment
pub trait VenueConnector: Send + Sync {
    fn connect(&self, config: &ParadexConfig) -> ExchangeResult<Arc<dyn VenueClient>>;
}
