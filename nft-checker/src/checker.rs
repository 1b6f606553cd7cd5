use address_svc_client::{extract_address, extract_type, TokenLookup, TypeExtractError};
use http_client::FetchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract-type label reported by the service for NFT contracts.
pub const NON_FUNGIBLE_TOKEN_TYPE: &str = "non-fungible-token";

/// One output row per input ticker.
///
/// `error` is empty exactly on full success. On failure the fields resolved
/// before the failing stage are kept (the address survives a failed type
/// lookup), never fabricated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerResult {
    pub ticker: String,
    pub address: String,
    pub contract_type: String,
    pub is_nft: bool,
    pub error: String,
}

impl TickerResult {
    fn failed(ticker: impl Into<String>, address: impl Into<String>, err: ResolveError) -> Self {
        Self {
            ticker: ticker.into(),
            address: address.into(),
            contract_type: String::new(),
            is_nft: false,
            error: err.to_string(),
        }
    }
}

/// Per-stage failure classes; the display strings are the diagnostics that
/// end up in [`TickerResult::error`].
#[derive(Debug, Error)]
enum ResolveError {
    #[error("Empty ticker value")]
    EmptyTicker,

    #[error("symbol lookup error: {0}")]
    SymbolLookup(FetchError),

    #[error("address missing in symbol payload")]
    AddressMissing,

    #[error("address lookup error: {0}")]
    AddressLookup(FetchError),

    #[error(transparent)]
    TypeExtract(#[from] TypeExtractError),
}

pub struct TickerChecker<L> {
    lookup: L,
}

impl<L: TokenLookup> TickerChecker<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolves one ticker to its classification row.
    ///
    /// Never fails: every error is absorbed into the row's `error` field.
    #[tracing::instrument(skip(self))]
    pub async fn classify(&self, raw_ticker: &str) -> TickerResult {
        let ticker = raw_ticker.trim();
        if ticker.is_empty() {
            // unresolvable input stays in the row verbatim
            return TickerResult::failed(raw_ticker, "", ResolveError::EmptyTicker);
        }

        let payload = match self.lookup.lookup_symbol(ticker).await {
            Ok(payload) => payload,
            Err(err) => return TickerResult::failed(ticker, "", ResolveError::SymbolLookup(err)),
        };

        let address = match extract_address(&payload) {
            Some(address) => address.to_owned(),
            None => return TickerResult::failed(ticker, "", ResolveError::AddressMissing),
        };

        let payload = match self.lookup.lookup_address(&address).await {
            Ok(payload) => payload,
            Err(err) => return TickerResult::failed(ticker, address, ResolveError::AddressLookup(err)),
        };

        let contract_type = match extract_type(&payload, Some(&address)) {
            Ok(contract_type) => contract_type.unwrap_or_default(),
            Err(err) => return TickerResult::failed(ticker, address, err.into()),
        };

        let is_nft = contract_type.eq_ignore_ascii_case(NON_FUNGIBLE_TOKEN_TYPE);
        tracing::debug!(ticker, %address, %contract_type, is_nft, "ticker resolved");

        TickerResult {
            ticker: ticker.to_owned(),
            address,
            contract_type,
            is_nft,
            error: String::new(),
        }
    }
}
