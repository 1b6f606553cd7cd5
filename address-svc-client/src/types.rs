//! Tolerant interpretation of the address service's response payloads.
//!
//! The service answers with loosely-structured JSON whose shape varies by
//! asset type, so both extractors pattern-match the recognized shapes in
//! priority order and fail closed on anything else instead of coercing.

use serde_json::Value;
use thiserror::Error;

/// Keys that may carry the contract address in a symbol-info payload,
/// in priority order.
const ADDRESS_KEYS: [&str; 3] = ["address", "contractAddress", "tokenAddress"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeExtractError {
    #[error("Invalid JSON payload (not an object)")]
    InvalidPayload,

    #[error("Could not locate item.type in address payload")]
    TypeNotFound,
}

/// Pulls the contract address out of a symbol-info payload.
///
/// The first of `address`, `contractAddress`, `tokenAddress` holding a
/// non-empty string wins; a missing, empty or non-string value falls through
/// to the next key.
pub fn extract_address(payload: &Value) -> Option<&str> {
    let object = payload.as_object()?;

    ADDRESS_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

/// Pulls the contract type out of a contract-info payload.
///
/// Two shapes are recognized: a flat `{"item": {...}}` object, and an
/// address-keyed `{"<address>": {"item": {...}}}` object. For the latter the
/// node is looked up under `address_hint` exact-case, then lower-case; when
/// the hint is absent or matches nothing, the payload's first entry is taken
/// (a single-entry heuristic the service's responses rely on).
///
/// `Ok(None)` means the shape was recognized but `item.type` is null or
/// absent; that is not an error.
pub fn extract_type(payload: &Value, address_hint: Option<&str>) -> Result<Option<String>, TypeExtractError> {
    let object = payload.as_object().ok_or(TypeExtractError::InvalidPayload)?;

    if let Some(item) = object.get("item").and_then(Value::as_object) {
        return Ok(item.get("type").and_then(type_label));
    }

    let node = address_hint
        .and_then(|hint| object.get(hint).or_else(|| object.get(&hint.to_lowercase())))
        .or_else(|| object.values().next());

    node.and_then(Value::as_object)
        .and_then(|node| node.get("item"))
        .and_then(Value::as_object)
        .map(|item| item.get("type").and_then(type_label))
        .ok_or(TypeExtractError::TypeNotFound)
}

/// A type label is normally a string; other non-null values are kept as their
/// JSON text rather than rejected.
fn type_label(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
