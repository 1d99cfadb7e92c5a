//! Shared Key request signing for the Blob service.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use reqwest::header::{
    CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE, DATE, HeaderMap, HeaderName,
    IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE, RANGE,
};
use sha2::Sha256;
use url::Url;

use crate::domain::AppError;

type HmacSha256 = Hmac<Sha256>;

const CONTENT_MD5: &str = "content-md5";
const MS_HEADER_PREFIX: &str = "x-ms-";

/// Build the `Authorization` header value for a request.
pub(crate) fn authorization(
    account: &str,
    key: &[u8],
    method: &str,
    url: &Url,
    headers: &HeaderMap,
) -> Result<String, AppError> {
    let signature = sign(key, &string_to_sign(account, method, url, headers))?;
    Ok(format!("SharedKey {}:{}", account, signature))
}

/// Canonical string covering verb, standard headers, `x-ms-*` headers, and resource.
pub(crate) fn string_to_sign(account: &str, method: &str, url: &Url, headers: &HeaderMap) -> String {
    let header = |name: &HeaderName| {
        headers.get(name).and_then(|value| value.to_str().ok()).unwrap_or_default().to_string()
    };

    // A zero length is signed as empty.
    let content_length = header(&CONTENT_LENGTH);
    let content_length = if content_length == "0" { String::new() } else { content_length };

    let standard = [
        header(&CONTENT_ENCODING),
        header(&CONTENT_LANGUAGE),
        content_length,
        header(&HeaderName::from_static(CONTENT_MD5)),
        header(&CONTENT_TYPE),
        header(&DATE),
        header(&IF_MODIFIED_SINCE),
        header(&IF_MATCH),
        header(&IF_NONE_MATCH),
        header(&IF_UNMODIFIED_SINCE),
        header(&RANGE),
    ];

    let mut out = String::from(method);
    for value in standard {
        out.push('\n');
        out.push_str(&value);
    }
    out.push('\n');
    out.push_str(&canonicalized_headers(headers));
    out.push_str(&canonicalized_resource(account, url));
    out
}

fn canonicalized_headers(headers: &HeaderMap) -> String {
    let mut ms_headers: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, value) in headers {
        if name.as_str().starts_with(MS_HEADER_PREFIX)
            && let Ok(value) = value.to_str()
        {
            ms_headers.entry(name.as_str()).or_default().push(value.trim());
        }
    }

    ms_headers.into_iter().map(|(name, values)| format!("{}:{}\n", name, values.join(","))).collect()
}

fn canonicalized_resource(account: &str, url: &Url) -> String {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in url.query_pairs() {
        params.entry(name.to_ascii_lowercase()).or_default().push(value.into_owned());
    }

    let mut out = format!("/{}{}", account, url.path());
    for (name, mut values) in params {
        values.sort();
        out.push('\n');
        out.push_str(&name);
        out.push(':');
        out.push_str(&values.join(","));
    }
    out
}

fn sign(key: &[u8], string_to_sign: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| AppError::config_error(format!("Unusable account key: {}", e)))?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
