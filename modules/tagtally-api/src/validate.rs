use serde_json::Value;

use tagtally_common::TallyError;

/// Every submitted url must be a TikTok share link.
pub const SHARE_PREFIX: &str = "https://www.tiktokv.com/share/video/";

/// Check the structural shape and content of a tally payload.
///
/// Shape is checked first (the `urls` field must hold a non-empty array of
/// strings), then every element is checked against the share-link prefix.
/// Pure function of the payload, no side effects.
pub fn validate(payload: &Value) -> Result<Vec<String>, TallyError> {
    let urls = payload
        .get("urls")
        .ok_or_else(|| TallyError::Format("missing urls field".to_string()))?;
    let array = urls
        .as_array()
        .ok_or_else(|| TallyError::Format("urls is not an array".to_string()))?;
    if array.is_empty() {
        return Err(TallyError::Format("urls is empty".to_string()));
    }

    let mut out = Vec::with_capacity(array.len());
    for element in array {
        let url = element
            .as_str()
            .ok_or_else(|| TallyError::Format("urls contains a non-string element".to_string()))?;
        out.push(url.to_string());
    }

    for url in &out {
        if !url.starts_with(SHARE_PREFIX) {
            return Err(TallyError::Content(url.clone()));
        }
    }

    Ok(out)
}
