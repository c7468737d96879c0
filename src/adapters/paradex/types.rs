//! Paradex Types
//!
//! Venue-native request/response shapes and their conversion to the
//! crate's venue-neutral types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::adapters::errors::VenueError;
use crate::adapters::types::{OrderRequest, OrderSide, OrderType, Orderbook, OrderbookLevel};

/// Order instruction telling Paradex the order must only add liquidity
pub const POST_ONLY_INSTRUCTION: &str = "POST_ONLY";

/// Render a float the way a dynamic runtime prints it: integral values keep
/// a trailing ".0" (`2500.0 -> "2500.0"`, `1.5 -> "1.5"`)
pub fn format_decimal(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

/// Textual form of a numeric JSON field; anything that is not a string or
/// number keeps its JSON text and fails later when parsed as a float
fn value_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Accept any JSON value and keep its textual form (see `value_text`)
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(value_text)
}

// =============================================================================
// Orderbook
// =============================================================================

/// One `[price, size, ...]` entry as Paradex sends it (usually strings)
///
/// Only the first two elements are read; trailing elements are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParadexBookLevel(pub String, pub String);

impl ParadexBookLevel {
    pub fn new(price: impl Into<String>, size: impl Into<String>) -> Self {
        Self(price.into(), size.into())
    }
}

impl<'de> Deserialize<'de> for ParadexBookLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entry = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let len = entry.len();
        let mut fields = entry.into_iter();
        match (fields.next(), fields.next()) {
            (Some(price), Some(size)) => Ok(Self(value_text(price), value_text(size))),
            _ => Err(serde::de::Error::invalid_length(len, &"a [price, size] book entry")),
        }
    }
}

/// L2 orderbook response from `GET /orderbook/{market}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParadexOrderbookResponse {
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub bids: Vec<ParadexBookLevel>,
    #[serde(default)]
    pub asks: Vec<ParadexBookLevel>,
    /// Timestamp in milliseconds
    #[serde(default)]
    pub last_updated_at: u64,
    #[serde(default)]
    pub seq_no: u64,
}

impl ParadexOrderbookResponse {
    /// Convert to the neutral Orderbook, coercing every entry to floats
    ///
    /// Level order and count are kept exactly as received. Any non-numeric
    /// price or size fails the whole conversion.
    pub fn to_orderbook(&self) -> Result<Orderbook, VenueError> {
        let bids = parse_levels(&self.bids, "bid")?;
        let asks = parse_levels(&self.asks, "ask")?;

        tracing::debug!(
            exchange = "paradex",
            market = %self.market,
            bids_count = bids.len(),
            asks_count = asks.len(),
            seq_no = self.seq_no,
            "Orderbook parsed"
        );

        Ok(Orderbook {
            bids,
            asks,
            timestamp: self.last_updated_at,
        })
    }
}

fn parse_levels(levels: &[ParadexBookLevel], side: &str) -> Result<Vec<OrderbookLevel>, VenueError> {
    levels
        .iter()
        .enumerate()
        .map(|(i, ParadexBookLevel(price, size))| {
            let price = price.trim().parse::<f64>().map_err(|e| {
                VenueError::InvalidResponse(format!("Invalid {} price '{}' at level {}: {}", side, price, i, e))
            })?;
            let size = size.trim().parse::<f64>().map_err(|e| {
                VenueError::InvalidResponse(format!("Invalid {} size '{}' at level {}: {}", side, size, i, e))
            })?;
            Ok(OrderbookLevel::new(price, size))
        })
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

/// Venue-native order request body (before signing)
///
/// `price` and `instruction` are only present on limit orders; unset fields
/// are left out of the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadexOrderRequest {
    pub market: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instruction: Option<String>,
}

impl ParadexOrderRequest {
    /// Translate a neutral order for an already-resolved market
    pub fn from_order(order: &OrderRequest, market: impl Into<String>) -> Self {
        let (price, instruction) = match order.order_type {
            OrderType::Limit => (
                Some(format_decimal(order.price)),
                order.post_only.then(|| POST_ONLY_INSTRUCTION.to_string()),
            ),
            // Market and trigger orders carry no limit price and no post-only instruction
            _ => (None, None),
        };

        Self {
            market: market.into(),
            side: order.side,
            order_type: order.order_type,
            size: format_decimal(order.size),
            price,
            instruction,
        }
    }
}

/// Error body Paradex returns on rejected requests
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(not(feature = "rest"), allow(dead_code))]
pub(crate) struct ParadexErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Positions
// =============================================================================

/// One entry of `GET /positions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadexPosition {
    pub market: String,
    /// Signed size (negative when short), parsed only on lookup
    #[serde(default, deserialize_with = "lenient_text")]
    pub size: String,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub average_entry_price: Option<String>,
    #[serde(default)]
    pub unrealized_pnl: Option<String>,
}

impl ParadexPosition {
    /// Minimal entry with only market and size
    pub fn new(market: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            size: size.into(),
            side: None,
            status: None,
            average_entry_price: None,
            unrealized_pnl: None,
        }
    }

    /// Size parsed as float
    pub fn size_f64(&self) -> Result<f64, VenueError> {
        self.size.trim().parse::<f64>().map_err(|e| {
            VenueError::InvalidResponse(format!(
                "Invalid position size '{}' for {}: {}",
                self.size, self.market, e
            ))
        })
    }
}

/// Paradex wraps position lists as `{ "results": [...] }`
#[derive(Debug, Deserialize)]
#[cfg_attr(not(feature = "rest"), allow(dead_code))]
pub(crate) struct ParadexPositionsResponse {
    #[serde(default)]
    pub results: Option<Vec<ParadexPosition>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_matches_float_printing() {
        assert_eq!(format_decimal(2500.0), "2500.0");
        assert_eq!(format_decimal(1.5), "1.5");
        assert_eq!(format_decimal(0.001), "0.001");
        assert_eq!(format_decimal(-3.0), "-3.0");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn test_orderbook_response_accepts_strings_and_numbers() {
        let json = r#"{
            "market": "BTC-USD-PERP",
            "bids": [["42000.5", "1.25"], [41999, 0.5]],
            "asks": [["42001", "2"]],
            "last_updated_at": 1681462770114,
            "seq_no": 20784
        }"#;
        let resp: ParadexOrderbookResponse = serde_json::from_str(json).unwrap();
        let ob = resp.to_orderbook().unwrap();

        assert_eq!(ob.bids, vec![
            OrderbookLevel::new(42000.5, 1.25),
            OrderbookLevel::new(41999.0, 0.5),
        ]);
        assert_eq!(ob.asks, vec![OrderbookLevel::new(42001.0, 2.0)]);
        assert_eq!(ob.timestamp, 1681462770114);
    }

    #[test]
    fn test_orderbook_preserves_unsorted_venue_order() {
        let resp = ParadexOrderbookResponse {
            bids: vec![
                ParadexBookLevel::new("100", "1"),
                ParadexBookLevel::new("101", "1"),
                ParadexBookLevel::new("99", "1"),
            ],
            ..Default::default()
        };
        let prices: Vec<f64> = resp.to_orderbook().unwrap().bids.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![100.0, 101.0, 99.0]);
    }

    #[test]
    fn test_orderbook_rejects_non_numeric_level() {
        let resp = ParadexOrderbookResponse {
            asks: vec![
                ParadexBookLevel::new("42001", "2"),
                ParadexBookLevel::new("abc", "1"),
            ],
            ..Default::default()
        };
        match resp.to_orderbook() {
            Err(VenueError::InvalidResponse(msg)) => {
                assert!(msg.contains("ask price 'abc'"), "Got: {}", msg);
                assert!(msg.contains("level 1"), "Got: {}", msg);
            }
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_orderbook_level_ignores_trailing_elements() {
        let json = r#"{"bids": [["42000.5", "1.2", "3"]], "asks": [[42001, 0.4, "x", null]]}"#;
        let resp: ParadexOrderbookResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.bids, vec![ParadexBookLevel::new("42000.5", "1.2")]);
        let ob = resp.to_orderbook().unwrap();
        assert_eq!(ob.bids, vec![OrderbookLevel::new(42000.5, 1.2)]);
        assert_eq!(ob.asks, vec![OrderbookLevel::new(42001.0, 0.4)]);
    }

    #[test]
    fn test_orderbook_level_needs_price_and_size() {
        let json = r#"{"bids": [["42000.5"]], "asks": []}"#;
        assert!(serde_json::from_str::<ParadexOrderbookResponse>(json).is_err());
    }

    #[test]
    fn test_orderbook_null_level_field_is_invalid_response() {
        let json = r#"{"bids": [["42000.5", null]], "asks": []}"#;
        let resp: ParadexOrderbookResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(resp.to_orderbook(), Err(VenueError::InvalidResponse(_))));
    }

    #[test]
    fn test_limit_post_only_request_body() {
        let order = OrderRequest::limit("ETH", OrderSide::Buy, 2500.0, 1.5);
        let req = ParadexOrderRequest::from_order(&order, "ETH-USD-PERP");
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body, serde_json::json!({
            "market": "ETH-USD-PERP",
            "side": "BUY",
            "type": "LIMIT",
            "size": "1.5",
            "price": "2500.0",
            "instruction": "POST_ONLY"
        }));
    }

    #[test]
    fn test_limit_without_post_only_omits_instruction() {
        let order = OrderRequest::limit("BTC", OrderSide::Sell, 42000.0, 0.1).with_post_only(false);
        let body = serde_json::to_value(ParadexOrderRequest::from_order(&order, "BTC-USD-PERP")).unwrap();

        assert_eq!(body["price"], "42000.0");
        assert!(body.get("instruction").is_none());
    }

    #[test]
    fn test_market_order_omits_price_and_instruction() {
        // post_only set on purpose: market orders ignore it
        let order = OrderRequest::market("BTC", OrderSide::Sell, 0.1).with_post_only(true);
        let body = serde_json::to_value(ParadexOrderRequest::from_order(&order, "BTC-USD-PERP")).unwrap();

        assert_eq!(body["type"], "MARKET");
        assert_eq!(body["size"], "0.1");
        assert!(body.get("price").is_none());
        assert!(body.get("instruction").is_none());
    }

    #[test]
    fn test_trigger_order_types_carry_no_price() {
        let order = OrderRequest::limit("ETH", OrderSide::Sell, 2400.0, 1.0)
            .with_order_type(OrderType::StopMarket);
        let body = serde_json::to_value(ParadexOrderRequest::from_order(&order, "ETH-USD-PERP")).unwrap();

        assert_eq!(body, serde_json::json!({
            "market": "ETH-USD-PERP",
            "side": "SELL",
            "type": "STOP_MARKET",
            "size": "1.0"
        }));
    }

    #[test]
    fn test_positions_response_parsing() {
        let json = r#"{"results": [
            {"market": "BTC-USD-PERP", "size": "-0.25", "side": "SHORT", "status": "OPEN",
             "average_entry_price": "42000", "unrealized_pnl": "12.5", "leverage": "5"}
        ]}"#;
        let resp: ParadexPositionsResponse = serde_json::from_str(json).unwrap();
        let positions = resp.results.unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].size_f64().unwrap(), -0.25);
        assert_eq!(positions[0].side.as_deref(), Some("SHORT"));
    }

    #[test]
    fn test_positions_with_bad_size_on_other_market_still_decode() {
        let json = r#"{"results": [
            {"market": "ETH-USD-PERP", "size": null},
            {"market": "SOL-USD-PERP"},
            {"market": "BTC-USD-PERP", "size": "0.25"}
        ]}"#;
        let resp: ParadexPositionsResponse = serde_json::from_str(json).unwrap();
        let positions = resp.results.unwrap();

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[2].size_f64().unwrap(), 0.25);
        assert!(matches!(positions[0].size_f64(), Err(VenueError::InvalidResponse(_))));
        assert!(matches!(positions[1].size_f64(), Err(VenueError::InvalidResponse(_))));
    }

    #[test]
    fn test_position_size_parse_error() {
        let pos = ParadexPosition::new("BTC-USD-PERP", "n/a");
        assert!(matches!(pos.size_f64(), Err(VenueError::InvalidResponse(_))));
    }
}
