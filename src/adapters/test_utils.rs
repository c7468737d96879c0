//! Shared test utilities for adapter testing
//!
//! Provides a configurable `MockVenueClient` that stands in for the Paradex
//! venue and records every call the adapter makes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::adapters::errors::{ExchangeResult, VenueError};
use crate::adapters::paradex::{
    ParadexOrderRequest, ParadexOrderbookResponse, ParadexPosition, VenueClient,
};
use crate::adapters::types::OrderConfirmation;

/// In-memory venue client
///
/// Every call fails with `failure` when it is set; otherwise the canned
/// orderbook/positions are returned and orders are acknowledged as "NEW".
#[derive(Default)]
pub struct MockVenueClient {
    pub orderbook: ParadexOrderbookResponse,
    pub positions: Vec<ParadexPosition>,
    pub failure: Option<VenueError>,
    /// Counter for create_order calls (thread-safe for async tests)
    order_count: AtomicU64,
    orders: Mutex<Vec<ParadexOrderRequest>>,
    markets: Mutex<Vec<String>>,
}

impl MockVenueClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orderbook(mut self, orderbook: ParadexOrderbookResponse) -> Self {
        self.orderbook = orderbook;
        self
    }

    pub fn with_position(mut self, market: &str, size: &str) -> Self {
        self.positions.push(ParadexPosition::new(market, size));
        self
    }

    /// Make every call fail with the given error
    pub fn with_failure(mut self, error: VenueError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn order_count(&self) -> u64 {
        self.order_count.load(Ordering::Relaxed)
    }

    /// Most recent order request the adapter sent
    pub fn last_order(&self) -> Option<ParadexOrderRequest> {
        self.orders.lock().ok().and_then(|o| o.last().cloned())
    }

    /// Markets requested through get_orderbook, in call order
    pub fn requested_markets(&self) -> Vec<String> {
        self.markets.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn check_failure(&self) -> ExchangeResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VenueClient for MockVenueClient {
    async fn get_orderbook(&self, market: &str) -> ExchangeResult<ParadexOrderbookResponse> {
        if let Ok(mut markets) = self.markets.lock() {
            markets.push(market.to_string());
        }
        // Small simulated latency so concurrent calls actually interleave
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
        self.check_failure()?;
        Ok(self.orderbook.clone())
    }

    async fn create_order(&self, request: &ParadexOrderRequest) -> ExchangeResult<OrderConfirmation> {
        let n = self.order_count.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut orders) = self.orders.lock() {
            orders.push(request.clone());
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
        self.check_failure()?;

        let mut raw = serde_json::to_value(request)
            .map_err(|e| VenueError::InvalidOrder(e.to_string()))?;
        raw["id"] = serde_json::json!(format!("mock-{}", n));
        raw["status"] = serde_json::json!("NEW");
        Ok(OrderConfirmation::new(raw))
    }

    async fn get_positions(&self) -> ExchangeResult<Vec<ParadexPosition>> {
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
        self.check_failure()?;
        Ok(self.positions.clone())
    }
}
