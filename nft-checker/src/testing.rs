//! Deterministic in-memory stand-in for the address service.

use std::collections::HashMap;

use address_svc_client::{TokenLookup, DEFAULT_ADDRESS_BASE_URL, DEFAULT_SYMBOL_BASE_URL};
use async_trait::async_trait;
use http_client::FetchError;
use serde_json::Value;

/// Answers lookups from fixed payload maps; anything unknown is a 404.
#[derive(Default)]
pub struct MockLookup {
    symbols: HashMap<String, Value>,
    addresses: HashMap<String, Value>,
}

impl MockLookup {
    pub fn with_symbol(mut self, ticker: &str, payload: Value) -> Self {
        self.symbols.insert(ticker.to_owned(), payload);
        self
    }

    pub fn with_address(mut self, address: &str, payload: Value) -> Self {
        self.addresses.insert(address.to_owned(), payload);
        self
    }
}

#[async_trait]
impl TokenLookup for MockLookup {
    async fn lookup_symbol(&self, ticker: &str) -> Result<Value, FetchError> {
        self.symbols
            .get(ticker)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("{DEFAULT_SYMBOL_BASE_URL}/{ticker}")))
    }

    async fn lookup_address(&self, address: &str) -> Result<Value, FetchError> {
        self.addresses
            .get(address)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("{DEFAULT_ADDRESS_BASE_URL}/{address}")))
    }
}
