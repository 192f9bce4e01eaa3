//! Self-describing token codec for the persisted state blob.
//!
//! The state is stored as a data-URL wrapping base64-encoded JSON:
//! `data:application/json;base64,<payload>`. Decoding is forgiving:
//! corrupt or foreign slot content degrades to an empty state instead of
//! surfacing an error, so a bad blob can never brick the application.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};

const DATA_URL_PREFIX: &str = "data:application/json;base64,";

/// The decoded state blob: a plain JSON object.
pub type StateMap = Map<String, Value>;

/// Encode a state map as a self-describing data-URL token.
///
/// Never fails: a plain JSON object always serializes.
pub fn encode_state(state: &StateMap) -> String {
    let json =
        serde_json::to_string(&Value::Object(state.clone())).unwrap_or_else(|_| "{}".to_string());
    format!("{DATA_URL_PREFIX}{}", BASE64.encode(json.as_bytes()))
}

/// Decode a slot value back into a state map.
///
/// Accepts a data-URL token, a bare JSON object string, or anything else
/// (missing, empty, junk) which decodes to `{}`. A top-level JSON array
/// parses but also yields `{}` -- the state is always an object.
pub fn decode_state(raw: Option<&str>) -> StateMap {
    let Some(raw) = raw else {
        return StateMap::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return StateMap::new();
    }
    if let Some(rest) = trimmed.strip_prefix("data:") {
        let payload = rest.split_once(',').map(|(_, p)| p).unwrap_or("");
        return BASE64
            .decode(payload)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .and_then(|text| parse_object(&text))
            .unwrap_or_default();
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return parse_object(trimmed).unwrap_or_default();
    }
    StateMap::new()
}

fn parse_object(text: &str) -> Option<StateMap> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
