//! Instrument static data and the dividend formulas applied to it

mod dividend;
mod instrument;

pub use dividend::DividendPolicy;
pub use instrument::{InstrumentData, InstrumentDefinition};
