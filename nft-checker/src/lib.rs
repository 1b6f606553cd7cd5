//! Batch NFT classification of ticker symbols.
//!
//! Each ticker is resolved independently through the address service's two
//! lookup stages; every failure is captured in the per-ticker result row, so
//! one bad ticker never takes down a batch.

pub mod batch;
pub mod checker;
pub mod report;
pub mod settings;

#[cfg(test)]
mod testing;

pub use batch::classify_all;
pub use checker::{TickerChecker, TickerResult, NON_FUNGIBLE_TOKEN_TYPE};
pub use settings::Settings;
