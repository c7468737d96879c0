//! Paradex Adapter Implementation
//!
//! Main ParadexAdapter struct implementing the ExchangeAdapter trait on top
//! of a `VenueClient`.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{VenueClient, VenueConnector};
use super::config::ParadexConfig;
use super::symbols::SymbolMap;
use super::types::ParadexOrderRequest;
use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::traits::ExchangeAdapter;
use crate::adapters::types::{OrderConfirmation, OrderRequest, Orderbook};

// =============================================================================
// Paradex Adapter
// =============================================================================

/// Paradex exchange adapter implementing ExchangeAdapter trait
///
/// Holds only immutable state (credentials, client handle, symbol map), so
/// it is `Send + Sync` and calls can run concurrently on a shared instance.
pub struct ParadexAdapter {
    /// Credentials and environment the client was built with
    config: ParadexConfig,
    /// Venue SDK capability
    client: Arc<dyn VenueClient>,
    /// Ticker to market mapping consulted by every operation
    symbols: SymbolMap,
}

impl ParadexAdapter {
    /// Create an adapter backed by the built-in REST client
    ///
    /// Fails with `ClientUnavailable` when the crate was built without the
    /// `rest` feature.
    pub fn new(config: ParadexConfig) -> ExchangeResult<Self> {
        Self::with_connector(config, default_connector())
    }

    /// Create an adapter from an optional venue connector
    ///
    /// `None` means the venue client capability is absent and yields
    /// `ClientUnavailable` immediately.
    pub fn with_connector(
        config: ParadexConfig,
        connector: Option<&dyn VenueConnector>,
    ) -> ExchangeResult<Self> {
        let connector = connector.ok_or_else(|| {
            tracing::error!(
                phase = "init",
                exchange = "paradex",
                "Paradex venue client is not available in this build"
            );
            ExchangeError::ClientUnavailable(
                "Paradex venue client not available (built without the `rest` feature?)".into(),
            )
        })?;

        let client = connector.connect(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Create an adapter around an already-built venue client
    pub fn with_client(config: ParadexConfig, client: Arc<dyn VenueClient>) -> Self {
        tracing::info!(
            phase = "init",
            exchange = "paradex",
            env = %config.env,
            account = %config.account_address,
            "Paradex adapter ready"
        );
        Self {
            config,
            client,
            symbols: SymbolMap::default(),
        }
    }

    /// Replace the default symbol map
    pub fn with_symbols(mut self, symbols: SymbolMap) -> Self {
        self.symbols = symbols;
        self
    }

    /// Resolve a ticker to its Paradex market identifier
    pub fn resolve(&self, ticker: &str) -> String {
        self.symbols.resolve(ticker)
    }

    /// Environment tag the venue client was bound to
    pub fn env(&self) -> &str {
        &self.config.env
    }

    pub fn symbols(&self) -> &SymbolMap {
        &self.symbols
    }
}

#[cfg(feature = "rest")]
fn default_connector() -> Option<&'static dyn VenueConnector> {
    Some(&super::rest::RestConnector)
}

#[cfg(not(feature = "rest"))]
fn default_connector() -> Option<&'static dyn VenueConnector> {
    None
}

#[async_trait]
impl ExchangeAdapter for ParadexAdapter {
    fn exchange_name(&self) -> &'static str {
        "paradex"
    }

    fn resolve_symbol(&self, ticker: &str) -> String {
        self.resolve(ticker)
    }

    /// Fetch the L2 book and coerce every level to floats
    async fn get_orderbook(&self, ticker: &str) -> ExchangeResult<Orderbook> {
        let market = self.resolve(ticker);
        let response = self.client.get_orderbook(&market).await?;
        let orderbook = response.to_orderbook()?;

        tracing::debug!(
            exchange = "paradex",
            ticker = %ticker,
            market = %market,
            bids = orderbook.bids.len(),
            asks = orderbook.asks.len(),
            best_bid = ?orderbook.best_bid(),
            best_ask = ?orderbook.best_ask(),
            "Orderbook fetched"
        );
        Ok(orderbook)
    }

    /// Place an order on Paradex
    ///
    /// Limit orders carry the price and, when post-only, the POST_ONLY
    /// instruction. Every other order type carries neither.
    async fn place_order(&self, order: OrderRequest) -> ExchangeResult<OrderConfirmation> {
        let market = self.resolve(&order.ticker);
        let request = ParadexOrderRequest::from_order(&order, market);

        tracing::debug!(
            exchange = "paradex",
            market = %request.market,
            side = %request.side,
            order_type = %request.order_type,
            size = %request.size,
            price = ?request.price,
            instruction = ?request.instruction,
            "Submitting order"
        );

        let confirmation = self.client.create_order(&request).await?;

        tracing::info!(
            exchange = "paradex",
            market = %request.market,
            side = %request.side,
            size = %request.size,
            order_id = confirmation.order_id().unwrap_or("unknown"),
            "Order placed"
        );
        Ok(confirmation)
    }

    /// Signed size of the first position on the resolved market, else 0.0
    async fn get_position(&self, ticker: &str) -> ExchangeResult<f64> {
        let market = self.resolve(ticker);
        let positions = self.client.get_positions().await?;

        match positions.iter().find(|p| p.market == market) {
            Some(position) => Ok(position.size_f64()?),
            None => {
                tracing::debug!(exchange = "paradex", market = %market, "No position");
                Ok(0.0)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
