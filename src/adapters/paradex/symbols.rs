//! Ticker to Paradex market mapping

use std::collections::HashMap;

/// Suffix appended to tickers that have no explicit mapping
pub const DEFAULT_MARKET_SUFFIX: &str = "-USD-PERP";

/// Static mapping from short tickers ("BTC") to Paradex markets ("BTC-USD-PERP")
///
/// Built once and handed to the adapter; the adapter never mutates it, so
/// every operation resolves a ticker to the same market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMap {
    entries: HashMap<String, String>,
}

impl SymbolMap {
    /// Empty map: every ticker uses the `{ticker}-USD-PERP` convention
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace one mapping
    pub fn with_symbol(mut self, ticker: impl Into<String>, market: impl Into<String>) -> Self {
        self.entries.insert(ticker.into(), market.into());
        self
    }

    /// Resolve a ticker to its market identifier. Never fails.
    pub fn resolve(&self, ticker: &str) -> String {
        match self.entries.get(ticker) {
            Some(market) => market.clone(),
            None => format!("{}{}", ticker, DEFAULT_MARKET_SUFFIX),
        }
    }

    /// Whether the ticker has an explicit mapping
    pub fn contains(&self, ticker: &str) -> bool {
        self.entries.contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self::empty()
            .with_symbol("BTC", "BTC-USD-PERP")
            .with_symbol("ETH", "ETH-USD-PERP")
    }
}
