//! Serialization of layout state.
//!
//! Two encodings of the same JSON document:
//! - the durable blob, plain JSON written to the local store
//! - the share token, the JSON in URL-safe base64 without padding, carried
//!   in the `state` query parameter of a shareable link
//!
//! Links produced by the web version of the tool carry percent-encoded raw
//! JSON instead of base64; `decode_share_token` accepts both.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use plotkit_core::{AppState, DecodeError, Error, Result};
use url::Url;

/// Query parameter holding the share token.
pub const STATE_QUERY_PARAM: &str = "state";

const SHARE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Serialize state to the durable JSON blob.
pub fn encode_state(state: &AppState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| Error::Encode(e.to_string()))
}

/// Parse the durable JSON blob.
pub fn decode_state(blob: &str) -> std::result::Result<AppState, DecodeError> {
    let blob = blob.trim();
    if blob.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(blob)?)
}

/// Encode state as a URL-safe share token.
pub fn encode_share_token(state: &AppState) -> Result<String> {
    let json = encode_state(state)?;
    Ok(SHARE_ENGINE.encode(json.as_bytes()))
}

/// Decode a share token (already taken out of the query string).
pub fn decode_share_token(token: &str) -> std::result::Result<AppState, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    // Raw JSON, possibly still percent-encoded once more.
    if token.starts_with('{') {
        return decode_state(token);
    }
    if token.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("%7B")) {
        let json = urlencoding::decode(token)?;
        return decode_state(&json);
    }

    let bytes = SHARE_ENGINE
        .decode(token)
        .map_err(|e| DecodeError::InvalidToken {
            reason: e.to_string(),
        })?;
    let json = String::from_utf8(bytes)?;
    decode_state(&json)
}

/// Value of the `param` query parameter of `location`, if present.
pub fn share_token_from_url(location: &Url, param: &str) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
}

/// Sets `param` to `token` on `location`, keeping every other parameter.
pub fn set_share_token(location: &mut Url, param: &str, token: &str) {
    let others: Vec<(String, String)> = location
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = location.query_pairs_mut();
    pairs.clear();
    for (key, value) in &others {
        pairs.append_pair(key, value);
    }
    pairs.append_pair(param, token);
}

/// A standalone shareable link: `location` without query or fragment, plus
/// the share token.
pub fn share_link(location: &Url, param: &str, token: &str) -> Url {
    let mut link = location.clone();
    link.set_query(None);
    link.set_fragment(None);
    link.query_pairs_mut().append_pair(param, token);
    link
}
