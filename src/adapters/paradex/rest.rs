//! Paradex REST venue client
//!
//! reqwest-backed `VenueClient` for the Paradex v1 REST API. Private
//! endpoints use a pre-issued JWT from `ParadexConfig::jwt_token`; obtaining
//! or refreshing that token is left to the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::client::{VenueClient, VenueConnector};
use super::config::ParadexConfig;
use super::signing::{current_time_ms, sign_order_message, OrderSignParams};
use super::types::{
    ParadexErrorResponse, ParadexOrderRequest, ParadexOrderbookResponse, ParadexPosition,
    ParadexPositionsResponse,
};
use crate::adapters::errors::{ExchangeResult, VenueError};
use crate::adapters::types::OrderConfirmation;

// =============================================================================
// HTTP Client Constants
// =============================================================================

/// HTTP request timeout (seconds)
const HTTP_TIMEOUT_SECS: u64 = 3;
/// HTTP connection timeout (milliseconds)
const HTTP_CONNECT_TIMEOUT_MS: u64 = 1500;
/// Max idle connections per host in connection pool
const HTTP_POOL_MAX_IDLE: usize = 5;
/// How long idle connections stay in the pool (seconds)
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 60;
/// TCP keepalive interval (seconds)
const HTTP_TCP_KEEPALIVE_SECS: u64 = 30;

/// Create a pooled HTTP client for venue calls
pub fn create_http_client(exchange_name: &str) -> reqwest::Client {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE)
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .tcp_keepalive(Duration::from_secs(HTTP_TCP_KEEPALIVE_SECS))
        .connect_timeout(Duration::from_millis(HTTP_CONNECT_TIMEOUT_MS))
        .tcp_nodelay(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());
    tracing::info!(
        phase = "init",
        exchange = %exchange_name,
        timeout_s = HTTP_TIMEOUT_SECS,
        connect_timeout_ms = HTTP_CONNECT_TIMEOUT_MS,
        pool_max_idle = HTTP_POOL_MAX_IDLE,
        "HTTP client configured"
    );
    client
}

fn transport_error(context: &str, e: reqwest::Error) -> VenueError {
    if e.is_timeout() {
        VenueError::NetworkTimeout(HTTP_TIMEOUT_SECS * 1000)
    } else {
        VenueError::ConnectionFailed(format!("{} failed: {}", context, e))
    }
}

/// Pull the venue's message out of an error body, falling back to raw text
fn rejection_reason(text: &str) -> String {
    match serde_json::from_str::<ParadexErrorResponse>(text) {
        Ok(ParadexErrorResponse { error: Some(code), message: Some(msg) }) => format!("{} - {}", code, msg),
        Ok(ParadexErrorResponse { message: Some(msg), .. }) => msg,
        Ok(ParadexErrorResponse { error: Some(code), .. }) => code,
        _ => text.to_string(),
    }
}

// =============================================================================
// REST Client
// =============================================================================

/// Paradex REST client bound to one account and environment
pub struct ParadexRestClient {
    config: ParadexConfig,
    base_url: String,
    http_client: reqwest::Client,
}

impl ParadexRestClient {
    pub fn new(config: ParadexConfig) -> Self {
        let base_url = config.rest_base_url();
        Self {
            config,
            base_url,
            http_client: create_http_client("paradex"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> Result<String, VenueError> {
        self.config
            .jwt_token
            .as_ref()
            .map(|jwt| format!("Bearer {}", jwt))
            .ok_or_else(|| VenueError::AuthenticationFailed("No JWT token configured (PARADEX_JWT)".into()))
    }

    /// Read the body, map auth/status failures, return the text on success
    async fn read_body(response: reqwest::Response, context: &str) -> Result<String, VenueError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| VenueError::InvalidResponse(format!("Failed to read {} response: {}", context, e)))?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(VenueError::AuthenticationFailed(format!(
                "{} unauthorized ({}): {}",
                context, status, text
            )));
        }
        if !status.is_success() {
            return Err(VenueError::ConnectionFailed(format!(
                "{} failed ({}): {}",
                context,
                status,
                rejection_reason(&text)
            )));
        }
        Ok(text)
    }
}

#[async_trait]
impl VenueClient for ParadexRestClient {
    async fn get_orderbook(&self, market: &str) -> ExchangeResult<ParadexOrderbookResponse> {
        let url = format!("{}/orderbook/{}", self.base_url, market);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error("GET /orderbook", e))?;

        let text = Self::read_body(response, "GET /orderbook").await?;
        let book = serde_json::from_str(&text)
            .map_err(|e| VenueError::InvalidResponse(format!("Invalid orderbook JSON: {} - {}", e, text)))?;
        Ok(book)
    }

    /// Sign and POST an order
    async fn create_order(&self, request: &ParadexOrderRequest) -> ExchangeResult<OrderConfirmation> {
        let bearer = self.bearer()?;

        // Signature timestamp in MILLISECONDS; market orders sign price "0"
        let timestamp = current_time_ms();
        let (sig_r, sig_s) = sign_order_message(OrderSignParams {
            private_key: &self.config.private_key,
            account_address: &self.config.account_address,
            market: &request.market,
            side: request.side.as_str(),
            order_type: request.order_type.as_str(),
            size: &request.size,
            price: request.price.as_deref().unwrap_or("0"),
            timestamp_ms: timestamp,
            chain_id: self.config.chain_id(),
        })?;

        let mut body = serde_json::to_value(request)
            .map_err(|e| VenueError::InvalidOrder(format!("Unencodable order: {}", e)))?;
        body["signature"] = serde_json::json!(format!("[\"{}\",\"{}\"]", sig_r, sig_s));
        body["signature_timestamp"] = serde_json::json!(timestamp);

        let url = format!("{}/orders", self.base_url);
        tracing::debug!(exchange = "paradex", url = %url, market = %request.market, "POST /orders");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", bearer)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("POST /orders", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| VenueError::InvalidResponse(format!("Failed to read order response: {}", e)))?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(VenueError::AuthenticationFailed(format!(
                "JWT authentication failed ({}): {}",
                status, text
            ))
            .into());
        }
        if !status.is_success() {
            return Err(VenueError::OrderRejected(format!("({}) {}", status, rejection_reason(&text))).into());
        }

        let raw: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| VenueError::InvalidResponse(format!("Invalid order response: {} - {}", e, text)))?;
        Ok(OrderConfirmation::new(raw))
    }

    async fn get_positions(&self) -> ExchangeResult<Vec<ParadexPosition>> {
        let url = format!("{}/positions", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(|e| transport_error("GET /positions", e))?;

        let text = Self::read_body(response, "GET /positions").await?;
        let parsed: ParadexPositionsResponse = serde_json::from_str(&text)
            .map_err(|e| VenueError::InvalidResponse(format!("Invalid positions JSON: {} - {}", e, text)))?;
        Ok(parsed.results.unwrap_or_default())
    }
}

/// Connector building a `ParadexRestClient` per adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct RestConnector;

impl VenueConnector for RestConnector {
    fn connect(&self, config: &ParadexConfig) -> ExchangeResult<Arc<dyn VenueClient>> {
        let client = ParadexRestClient::new(config.clone());
        tracing::info!(
            phase = "init",
            exchange = "paradex",
            env = %config.env,
            base_url = %client.base_url(),
            "Paradex REST client created"
        );
        Ok(Arc::new(client))
    }
}
