//! gbce - record trades from stdin and print the market metrics
//!
//! ```text
//! gbce [market_config.json] < trades.jsonl
//! ```
//!
//! Each input line is one JSON trade report, e.g.
//! `{"symbol":"POP","timestamp":"2026-01-05T10:00:00Z","quantity":10,"side":"Buy","price":"12.5"}`.
//! Unreadable or rejected lines are logged and skipped.

use anyhow::Context;
use gbce_core::TradeReport;
use gbce_market::MarketIndex;
use gbce_runner::{MarketBootstrap, load_config, load_default_config};
use log::{info, warn};
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            load_config(&path).with_context(|| format!("loading configuration from {}", path))?
        }
        None => load_default_config()?,
    };

    let bootstrap = MarketBootstrap::with_config(config)?;
    let market = &bootstrap.market;

    let (recorded, skipped) = record_trades(market, std::io::stdin().lock())?;
    info!("Input done: recorded={}, skipped={}", recorded, skipped);

    print_report(market);
    Ok(())
}

fn record_trades(market: &MarketIndex, input: impl BufRead) -> anyhow::Result<(usize, usize)> {
    let mut recorded = 0;
    let mut skipped = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading trades from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = serde_json::from_str::<TradeReport>(&line)
            .map_err(anyhow::Error::from)
            .and_then(|report| market.record(report).map_err(anyhow::Error::from));
        match outcome {
            Ok(()) => recorded += 1,
            Err(e) => {
                warn!("line {}: trade skipped: {}", index + 1, e);
                skipped += 1;
            }
        }
    }

    Ok((recorded, skipped))
}

fn print_report(market: &MarketIndex) {
    println!(
        "{:<6} {:>24} {:>24} {:>24}",
        "SYMBOL", "VWSP", "DIVIDEND YIELD", "P/E"
    );

    for symbol in market.symbols() {
        let vwsp = match market.calculate_volume_weighted_stock_price(symbol) {
            Ok(vwsp) => vwsp,
            Err(e) => {
                println!("{:<6} error: {}", symbol, e);
                continue;
            }
        };
        if vwsp.is_zero() {
            println!("{:<6} {:>24}", symbol, "no trades");
            continue;
        }

        let dividend_yield = market
            .calculate_dividend_yield(symbol, vwsp)
            .map(|v| v.normalize().to_string())
            .unwrap_or_else(|e| e.to_string());
        let pe_ratio = market
            .calculate_pe_ratio(symbol, vwsp)
            .map(|v| v.normalize().to_string())
            .unwrap_or_else(|e| e.to_string());
        println!(
            "{:<6} {:>24} {:>24} {:>24}",
            symbol,
            vwsp.normalize().to_string(),
            dividend_yield,
            pe_ratio
        );
    }

    match market.calculate_gbce() {
        Ok(gbce) => println!("GBCE {}", gbce.normalize()),
        Err(e) => println!("GBCE undefined: {}", e),
    }
}
