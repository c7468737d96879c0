//! Paradex Exchange Adapter
//!
//! Implements the ExchangeAdapter trait for Paradex perpetuals.
//!
//! This module is organized into submodules:
//! - `config` - Credentials, environment and env-var loading
//! - `symbols` - Ticker to market mapping
//! - `types` - Venue wire types and conversions
//! - `client` - `VenueClient` / `VenueConnector` seam
//! - `adapter` - Main ParadexAdapter implementation
//! - `rest` - reqwest venue client (feature `rest`)
//! - `signing` - Starknet order signing (feature `rest`)

mod adapter;
mod client;
mod config;
mod symbols;
mod types;

#[cfg(feature = "rest")]
mod rest;
#[cfg(feature = "rest")]
mod signing;

// Re-export public items
pub use adapter::ParadexAdapter;
pub use client::{VenueClient, VenueConnector};
pub use config::{ParadexConfig, DEFAULT_ENV};
pub use symbols::{SymbolMap, DEFAULT_MARKET_SUFFIX};
pub use types::{
    format_decimal, ParadexBookLevel, ParadexOrderRequest, ParadexOrderbookResponse,
    ParadexPosition, POST_ONLY_INSTRUCTION,
};

#[cfg(feature = "rest")]
pub use rest::{create_http_client, ParadexRestClient, RestConnector};
#[cfg(feature = "rest")]
pub use signing::{current_time_ms, parse_decimal_to_felt, sign_order_message, OrderSignParams};
