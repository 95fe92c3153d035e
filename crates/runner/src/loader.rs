//! Instrument table loader
//!
//! Reads the delimited instrument table:
//!
//! ```text
//! Stock Symbol,Type,Last Dividend,Fixed Dividend,Par Value
//! GIN,Preferred,8,0.02,100
//! ```
//!
//! The first line is a header. Cells may be quoted and are trimmed; empty
//! cells are absent values. The type column selects the dividend policy.
//! Par value must be present and positive; everything else is checked later
//! by the formulas that use it.

use gbce_core::{DividendPolicy, InstrumentData, InstrumentDefinition, PolicyParseError};
use log::info;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const COLUMNS: usize = 5;

/// Instrument table failed to load; `cause` names the offending row
#[derive(Error, Debug)]
#[error("cannot load data from source: {source_name}")]
pub struct LoadError {
    pub source_name: String,
    #[source]
    pub cause: LoadCause,
}

#[derive(Error, Debug)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 5 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: stock symbol is empty")]
    EmptySymbol { line: usize },

    #[error("line {line}: {source}")]
    UnknownType {
        line: usize,
        source: PolicyParseError,
    },

    #[error("line {line}: {column} is not a number: {value}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: par value is not set")]
    MissingParValue { line: usize },

    #[error("line {line}: par value have to be > 0, got {value}")]
    NonPositiveParValue { line: usize, value: Decimal },

    #[error("line {line}: duplicate stock symbol {symbol}")]
    DuplicateSymbol { line: usize, symbol: String },
}

/// Load the instrument table from a file
pub fn load_instruments<P: AsRef<Path>>(path: P) -> Result<Vec<InstrumentDefinition>, LoadError> {
    let source_name = path.as_ref().display().to_string();
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| LoadError {
        source_name: source_name.clone(),
        cause: e.into(),
    })?;
    load_instruments_from_str(&source_name, &content)
}

/// Load the embedded sample table
pub fn load_default_instruments() -> Result<Vec<InstrumentDefinition>, LoadError> {
    load_instruments_from_str("embedded instruments.csv", include_str!("instruments.csv"))
}

/// Parse an instrument table held in memory
pub fn load_instruments_from_str(
    source_name: &str,
    content: &str,
) -> Result<Vec<InstrumentDefinition>, LoadError> {
    let instruments = parse_table(content).map_err(|cause| LoadError {
        source_name: source_name.to_string(),
        cause,
    })?;
    info!(
        "Loaded {} instruments from {}",
        instruments.len(),
        source_name
    );
    Ok(instruments)
}

/// One table row; empty cells arrive as `None`
#[derive(Debug, Deserialize)]
struct InstrumentRow {
    symbol: String,
    policy: String,
    last_dividend: Option<String>,
    fixed_dividend: Option<String>,
    par_value: Option<String>,
}

fn parse_table(content: &str) -> Result<Vec<InstrumentDefinition>, LoadCause> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut instruments = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result?;
        // 1-based, counting the header
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        if record.iter().all(str::is_empty) {
            continue;
        }

        let definition = parse_row(line, &record)?;
        if !seen.insert(definition.symbol.clone()) {
            return Err(LoadCause::DuplicateSymbol {
                line,
                symbol: definition.symbol,
            });
        }
        instruments.push(definition);
    }

    Ok(instruments)
}

fn parse_row(line: usize, record: &csv::StringRecord) -> Result<InstrumentDefinition, LoadCause> {
    if record.len() != COLUMNS {
        return Err(LoadCause::ColumnCount {
            line,
            found: record.len(),
        });
    }
    let row: InstrumentRow = record.deserialize(None)?;

    if row.symbol.is_empty() {
        return Err(LoadCause::EmptySymbol { line });
    }
    let policy: DividendPolicy = row
        .policy
        .parse()
        .map_err(|source| LoadCause::UnknownType { line, source })?;
    let last_dividend = parse_decimal(line, "last dividend", row.last_dividend)?;
    let fixed_dividend = parse_decimal(line, "fixed dividend", row.fixed_dividend)?;
    let par_value = parse_decimal(line, "par value", row.par_value)?
        .ok_or(LoadCause::MissingParValue { line })?;
    if par_value <= Decimal::ZERO {
        return Err(LoadCause::NonPositiveParValue {
            line,
            value: par_value,
        });
    }

    Ok(InstrumentDefinition::new(
        row.symbol,
        policy,
        InstrumentData::new(last_dividend, fixed_dividend, par_value),
    ))
}

/// Decimal text parsed exactly; csv type inference would go through f64
fn parse_decimal(
    line: usize,
    column: &'static str,
    cell: Option<String>,
) -> Result<Option<Decimal>, LoadCause> {
    cell.map(|value| {
        value
            .parse::<Decimal>()
            .map_err(|_| LoadCause::InvalidNumber {
                line,
                column,
                value,
            })
    })
    .transpose()
}
