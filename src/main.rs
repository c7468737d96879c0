//! Paradex adapter CLI
//!
//! Thin command-line front end over `ParadexAdapter`:
//! 1. Loads `.env` and initializes logging
//! 2. Builds the adapter from `PARADEX_*` environment variables
//! 3. Runs one subcommand and prints its result as JSON on stdout

use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use futures_util::future::try_join_all;
use serde_json::json;
use tokio::signal;
use tracing::{info, warn};

use paradex_adapter::adapters::{
    ExchangeAdapter, OrderRequest, OrderSide, OrderType, ParadexAdapter, ParadexConfig,
};
use paradex_adapter::config::init_logging;

#[derive(Parser, Debug)]
#[command(name = "paradex_adapter", version, about = "Paradex orderbook, order and position tool")]
struct Cli {
    /// Paradex environment tag ("prod", "testnet"); overrides PARADEX_ENV
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch orderbook snapshots, one per ticker, concurrently
    Book {
        #[arg(long = "ticker", required = true, num_args = 1..)]
        tickers: Vec<String>,
    },
    /// Signed position size for a ticker
    Position {
        #[arg(long)]
        ticker: String,
    },
    /// Place an order
    Order {
        #[arg(long)]
        ticker: String,
        /// buy or sell
        #[arg(long)]
        side: OrderSide,
        #[arg(long)]
        size: f64,
        /// Required for limit orders
        #[arg(long)]
        price: Option<f64>,
        /// limit, market, stop-market, take-profit-market or stop-loss-market
        #[arg(long = "type", default_value = "limit")]
        order_type: OrderType,
        /// Send a limit order without the POST_ONLY instruction
        #[arg(long)]
        no_post_only: bool,
    },
    /// Poll the book and log best bid/ask/mid until Ctrl+C
    Watch {
        #[arg(long)]
        ticker: String,
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,
    },
}

fn build_order(
    ticker: String,
    side: OrderSide,
    size: f64,
    price: Option<f64>,
    order_type: OrderType,
    no_post_only: bool,
) -> anyhow::Result<OrderRequest> {
    match order_type {
        OrderType::Limit => {
            let price = price.context("--price is required for limit orders")?;
            Ok(OrderRequest::limit(ticker, side, price, size).with_post_only(!no_post_only))
        }
        other => {
            if price.is_some() {
                warn!(order_type = %other, "--price is ignored for non-limit orders");
            }
            Ok(OrderRequest::market(ticker, side, size).with_order_type(other))
        }
    }
}

async fn watch(adapter: &ParadexAdapter, ticker: &str, interval_ms: u64) -> anyhow::Result<()> {
    if interval_ms == 0 {
        bail!("--interval-ms must be greater than zero");
    }
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("[SHUTDOWN] Ctrl+C received, stopping watch");
                return Ok(());
            }
            _ = interval.tick() => {
                match adapter.get_orderbook(ticker).await {
                    Ok(book) => info!(
                        ticker = %ticker,
                        best_bid = ?book.best_bid(),
                        best_ask = ?book.best_ask(),
                        mid = ?book.mid_price(),
                        bids = book.bids.len(),
                        asks = book.asks.len(),
                        "[BOOK]"
                    ),
                    // Keep polling through transient venue failures
                    Err(e) => warn!(ticker = %ticker, error = %e, "[BOOK] fetch failed"),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let mut config = ParadexConfig::from_env()?;
    if let Some(env) = cli.env {
        config = config.with_env(env);
    }
    let adapter = ParadexAdapter::new(config)?;

    let output = match cli.command {
        Command::Book { tickers } => {
            let books = try_join_all(tickers.iter().map(|t| adapter.get_orderbook(t))).await?;
            let entries: serde_json::Map<String, serde_json::Value> = tickers
                .iter()
                .zip(books)
                .map(|(ticker, book)| serde_json::to_value(book).map(|v| (ticker.clone(), v)))
                .collect::<Result<_, _>>()?;
            serde_json::Value::Object(entries)
        }
        Command::Position { ticker } => {
            let size = adapter.get_position(&ticker).await?;
            json!({
                "ticker": ticker,
                "market": adapter.resolve(&ticker),
                "size": size,
            })
        }
        Command::Order {
            ticker,
            side,
            size,
            price,
            order_type,
            no_post_only,
        } => {
            let order = build_order(ticker, side, size, price, order_type, no_post_only)?;
            adapter.place_order(order).await?.into_inner()
        }
        Command::Watch { ticker, interval_ms } => {
            watch(&adapter, &ticker, interval_ms).await?;
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
