//! Core data types for exchange adapters
//!
//! Venue-neutral orderbook, order and confirmation types shared by the
//! `ExchangeAdapter` trait and its implementations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Orderbook Types
// =============================================================================

/// A single level in the orderbook (price + quantity)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderbookLevel {
    /// Price at this level
    pub price: f64,
    /// Quantity available at this price
    pub quantity: f64,
}

impl OrderbookLevel {
    /// Create a new orderbook level
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }
}

/// Orderbook snapshot with bid and ask levels
///
/// Levels keep the order the venue sent them in. Adapters do not sort,
/// truncate or cache snapshots, so `best_bid`/`best_ask` read the first
/// level of each side as delivered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Orderbook {
    pub bids: Vec<OrderbookLevel>,
    pub asks: Vec<OrderbookLevel>,
    /// Venue timestamp in Unix milliseconds (0 when the venue omits it)
    pub timestamp: u64,
}

impl Orderbook {
    /// Create a new empty orderbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Price of the first bid level
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    /// Price of the first ask level
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }

    /// Calculate mid price
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }
}

// =============================================================================
// Order Types
// =============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Upper-case wire name ("BUY" / "SELL")
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = String;

    /// Case-insensitive: "buy", "Buy" and "BUY" all parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(format!("unknown order side '{}'", other)),
        }
    }
}

/// Order type
///
/// Only `Limit` carries a price; every other type executes at market once
/// triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Limit,
    Market,
    StopMarket,
    TakeProfitMarket,
    StopLossMarket,
}

impl OrderType {
    /// Upper-case wire name ("LIMIT", "STOP_MARKET", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::StopMarket => "STOP_MARKET",
            OrderType::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            OrderType::StopLossMarket => "STOP_LOSS_MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "LIMIT" => Ok(OrderType::Limit),
            "MARKET" => Ok(OrderType::Market),
            "STOP_MARKET" => Ok(OrderType::StopMarket),
            "TAKE_PROFIT_MARKET" => Ok(OrderType::TakeProfitMarket),
            "STOP_LOSS_MARKET" => Ok(OrderType::StopLossMarket),
            other => Err(format!("unknown order type '{}'", other)),
        }
    }
}

/// Venue-neutral order request keyed by ticker
///
/// `price` is only meaningful for limit orders; adapters drop it for every
/// other order type. No sign or range validation is done locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Short ticker (e.g. "BTC"), resolved to a market by the adapter
    pub ticker: String,
    pub side: OrderSide,
    pub price: f64,
    pub size: f64,
    pub order_type: OrderType,
    /// Only add liquidity; honoured for limit orders only
    pub post_only: bool,
}

impl OrderRequest {
    /// Post-only limit order (the default shape)
    pub fn limit(ticker: impl Into<String>, side: OrderSide, price: f64, size: f64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            price,
            size,
            order_type: OrderType::Limit,
            post_only: true,
        }
    }

    /// Market order (no price, no post-only instruction)
    pub fn market(ticker: impl Into<String>, side: OrderSide, size: f64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            price: 0.0,
            size,
            order_type: OrderType::Market,
            post_only: false,
        }
    }

    /// Switch to another order type; the price is dropped unless it stays a limit
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Override the post-only flag
    pub fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = post_only;
        self
    }
}

/// Order confirmation exactly as the venue returned it
///
/// The payload is kept unmodified; accessors only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderConfirmation(serde_json::Value);

impl OrderConfirmation {
    /// Wrap a raw venue payload
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    /// Venue-assigned order ID, if present
    pub fn order_id(&self) -> Option<&str> {
        self.0.get("id").and_then(|v| v.as_str())
    }

    /// Venue order status (e.g. "NEW", "OPEN", "CLOSED"), if present
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(|v| v.as_str())
    }

    /// Market the venue booked the order on, if present
    pub fn market(&self) -> Option<&str> {
        self.0.get("market").and_then(|v| v.as_str())
    }

    /// Borrow the raw payload
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }

    /// Take the raw payload
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
