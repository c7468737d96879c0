//! Exchange adapter trait definition
//!
//! The ExchangeAdapter trait is the venue-neutral interface trading logic
//! talks to. Implementations translate short tickers into venue markets and
//! forward each call to their venue client.

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::{OrderConfirmation, OrderRequest, Orderbook};

/// Common trait for all exchange adapters
///
/// Every operation takes `&self` and holds no per-call state, so one adapter
/// can serve any number of concurrent calls. Adapters impose no timeouts and
/// never retry; wrap calls in `tokio::time::timeout` if latency must be bounded.
///
/// # Example
///
/// ```ignore
/// let adapter = ParadexAdapter::new(ParadexConfig::from_env()?)?;
/// let (book, position) = tokio::join!(
///     adapter.get_orderbook("BTC"),
///     adapter.get_position("BTC"),
/// );
/// ```
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    /// Static exchange identifier such as "paradex"
    fn exchange_name(&self) -> &'static str;

    /// Map a short ticker ("BTC") to the venue market identifier
    fn resolve_symbol(&self, ticker: &str) -> String;

    /// Fetch a fresh L2 orderbook snapshot for a ticker
    async fn get_orderbook(&self, ticker: &str) -> ExchangeResult<Orderbook>;

    /// Submit an order and return the venue confirmation unmodified
    async fn place_order(&self, order: OrderRequest) -> ExchangeResult<OrderConfirmation>;

    /// Signed position size for a ticker, `0.0` when no position exists
    async fn get_position(&self, ticker: &str) -> ExchangeResult<f64>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::paradex::{ParadexAdapter, ParadexConfig};
    use crate::adapters::test_utils::MockVenueClient;
    use crate::adapters::types::OrderSide;

    fn boxed_adapter(mock: Arc<MockVenueClient>) -> Box<dyn ExchangeAdapter> {
        let config = ParadexConfig::new("0x1", "0x1");
        Box::new(ParadexAdapter::with_client(config, mock))
    }

    #[tokio::test]
    async fn test_adapter_usable_as_trait_object() {
        let mock = Arc::new(MockVenueClient::new().with_position("BTC-USD-PERP", "0.5"));
        let adapter = boxed_adapter(mock.clone());

        assert_eq!(adapter.exchange_name(), "paradex");
        assert_eq!(adapter.resolve_symbol("SOL"), "SOL-USD-PERP");
        assert_eq!(adapter.get_position("BTC").await.unwrap(), 0.5);
    }

    #[tokio::test]
    async fn test_trait_object_place_order() {
        let mock = Arc::new(MockVenueClient::new());
        let adapter = boxed_adapter(mock.clone());

        let order = OrderRequest::limit("BTC", OrderSide::Sell, 42000.0, 0.1);
        let confirmation = adapter.place_order(order).await.unwrap();

        assert_eq!(confirmation.market(), Some("BTC-USD-PERP"));
        assert_eq!(mock.order_count(), 1);
    }
}
