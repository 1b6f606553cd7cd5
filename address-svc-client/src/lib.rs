//! Client for the address service: resolves a ticker symbol to its
//! symbol-info payload and a contract address to its contract-info payload.

use async_trait::async_trait;
use http_client::{FetchClient, FetchError, HttpClientSettings};
use serde_json::Value;

pub mod types;

pub use types::{extract_address, extract_type, TypeExtractError};

pub const DEFAULT_SYMBOL_BASE_URL: &str = "https://address-svc-utyjy373hq-uc.a.run.app/symbols";
pub const DEFAULT_ADDRESS_BASE_URL: &str = "https://address-svc-utyjy373hq-uc.a.run.app/v1/networks/eth/addresses";

/// The two lookup stages of the address service.
///
/// Both return the raw JSON payload: the service's response shapes are not
/// standardized across asset types, so interpretation is left to the
/// extractors in [`types`].
#[async_trait]
pub trait TokenLookup {
    async fn lookup_symbol(&self, ticker: &str) -> Result<Value, FetchError>;

    async fn lookup_address(&self, address: &str) -> Result<Value, FetchError>;
}

pub struct AddressSvcClient {
    client: FetchClient,
    symbol_base_url: String,
    address_base_url: String,
}

impl AddressSvcClient {
    pub fn new(settings: &HttpClientSettings) -> Self {
        Self::with_base_urls(settings, DEFAULT_SYMBOL_BASE_URL, DEFAULT_ADDRESS_BASE_URL)
    }

    pub fn with_base_urls(
        settings: &HttpClientSettings,
        symbol_base_url: impl Into<String>,
        address_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: FetchClient::new(settings),
            symbol_base_url: symbol_base_url.into(),
            address_base_url: address_base_url.into(),
        }
    }
}

#[async_trait]
impl TokenLookup for AddressSvcClient {
    #[tracing::instrument(skip(self), err)]
    async fn lookup_symbol(&self, ticker: &str) -> Result<Value, FetchError> {
        self.client
            .fetch_json(&format!("{base_url}/{ticker}", base_url = self.symbol_base_url))
            .await
    }

    #[tracing::instrument(skip(self), err)]
    async fn lookup_address(&self, address: &str) -> Result<Value, FetchError> {
        self.client
            .fetch_json(&format!("{base_url}/{address}", base_url = self.address_base_url))
            .await
    }
}
