//! Paradex Signing
//!
//! Starknet SNIP-12 typed data signature over order fields, required by
//! `POST /orders`.

use std::time::{SystemTime, UNIX_EPOCH};

use starknet_core::crypto::compute_hash_on_elements;
use starknet_core::types::Felt;
use starknet_core::utils::{cairo_short_string_to_felt, starknet_keccak};
use starknet_signers::SigningKey;

use crate::adapters::errors::VenueError;

/// Scaling applied to sizes and prices before signing (8 decimals)
const QUANTUM_SCALE: f64 = 100_000_000.0;

/// Current time in milliseconds
pub fn current_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fields covered by the order signature
pub struct OrderSignParams<'a> {
    pub private_key: &'a str,
    pub account_address: &'a str,
    pub market: &'a str,
    pub side: &'a str,       // "BUY" or "SELL"
    pub order_type: &'a str, // "LIMIT" or "MARKET"
    pub size: &'a str,
    pub price: &'a str, // "0" for market orders
    pub timestamp_ms: u64,
    pub chain_id: &'a str,
}

fn short_string(value: &str, what: &str) -> Result<Felt, VenueError> {
    cairo_short_string_to_felt(value)
        .map_err(|e| VenueError::InvalidOrder(format!("Invalid {} '{}': {}", what, value, e)))
}

/// Sign an order for Paradex
///
/// Order type: `Order(timestamp, market, side, orderType, size, price)` in
/// the "Paradex" StarkNetDomain, version 1. Returns `(r, s)` as decimal strings.
#[tracing::instrument(skip(params), fields(market = %params.market, side = %params.side))]
pub fn sign_order_message(params: OrderSignParams) -> Result<(String, String), VenueError> {
    let pk_felt = Felt::from_hex(params.private_key)
        .map_err(|e| VenueError::AuthenticationFailed(format!("Invalid private key: {}", e)))?;
    let account_felt = Felt::from_hex(params.account_address)
        .map_err(|e| VenueError::AuthenticationFailed(format!("Invalid account: {}", e)))?;

    let domain_hash = compute_hash_on_elements(&[
        starknet_keccak("StarkNetDomain(name:felt,chainId:felt,version:felt)".as_bytes()),
        short_string("Paradex", "domain name")?,
        short_string(params.chain_id, "chain_id")?,
        Felt::ONE,
    ]);

    // 1 for BUY, 2 for SELL
    let side_value: u64 = match params.side.to_uppercase().as_str() {
        "BUY" => 1,
        "SELL" => 2,
        _ => return Err(VenueError::InvalidOrder(format!("Invalid side: {}", params.side))),
    };

    let order_hash = compute_hash_on_elements(&[
        starknet_keccak(
            "Order(timestamp:felt,market:felt,side:felt,orderType:felt,size:felt,price:felt)".as_bytes(),
        ),
        Felt::from(params.timestamp_ms),
        short_string(params.market, "market")?,
        Felt::from(side_value),
        short_string(params.order_type, "order_type")?,
        parse_decimal_to_felt(params.size)?,
        parse_decimal_to_felt(params.price)?,
    ]);

    // "StarkNet Message"
    let starknet_message_prefix = Felt::from_raw([
        257012186512350467,
        18446744073709551605,
        10480951322775611302,
        16156019428408348868,
    ]);

    let final_hash = compute_hash_on_elements(&[
        starknet_message_prefix,
        domain_hash,
        account_felt,
        order_hash,
    ]);

    let signature = SigningKey::from_secret_scalar(pk_felt)
        .sign(&final_hash)
        .map_err(|e| VenueError::AuthenticationFailed(format!("Signing failed: {}", e)))?;

    let r = num_bigint::BigUint::from_bytes_be(&signature.r.to_bytes_be()).to_string();
    let s = num_bigint::BigUint::from_bytes_be(&signature.s.to_bytes_be()).to_string();

    tracing::debug!(final_hash = ?final_hash, "Order signed");
    Ok((r, s))
}

/// Parse a decimal string ("0.001", "105000") to its quantum value (x 10^8)
///
/// Values whose quantum does not fit in a u64 are rejected.
pub fn parse_decimal_to_felt(s: &str) -> Result<Felt, VenueError> {
    let val = match s.parse::<f64>() {
        Ok(val) if val.is_finite() && val >= 0.0 => val,
        _ => return Err(VenueError::InvalidOrder(format!("Invalid decimal value: {}", s))),
    };

    // u64::MAX as f64 rounds up to 2^64, so anything >= it overflows
    let scaled = (val * QUANTUM_SCALE).round();
    if scaled >= u64::MAX as f64 {
        return Err(VenueError::InvalidOrder(format!("Decimal value out of range: {}", s)));
    }
    Ok(Felt::from(scaled as u64))
}
