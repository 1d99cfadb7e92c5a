//! Azure Storage connection string parsing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::domain::AppError;

/// Account name of the local storage emulator.
pub const EMULATOR_ACCOUNT: &str = "devstoreaccount1";
/// Well-known, publicly documented key of the local storage emulator.
pub const EMULATOR_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
/// Blob endpoint of the local storage emulator.
pub const EMULATOR_BLOB_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// How requests to the blob endpoint are authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageCredential {
    /// Shared Key signing with the decoded account key.
    SharedKey { account: String, key: Vec<u8> },
    /// Pre-signed query string, without the leading `?`.
    Sas(String),
}

impl fmt::Debug for StorageCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageCredential::SharedKey { account, .. } => f
                .debug_struct("SharedKey")
                .field("account", account)
                .field("key", &"[REDACTED]")
                .finish(),
            StorageCredential::Sas(_) => f.debug_tuple("Sas").field(&"[REDACTED]").finish(),
        }
    }
}

/// Parsed connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    pub blob_endpoint: Url,
    pub credential: StorageCredential,
}

impl ConnectionString {
    /// Settings of the local storage emulator.
    pub fn development_storage() -> Result<Self, AppError> {
        Ok(Self {
            blob_endpoint: parse_endpoint(EMULATOR_BLOB_ENDPOINT)?,
            credential: StorageCredential::SharedKey {
                account: EMULATOR_ACCOUNT.to_string(),
                key: decode_key(EMULATOR_ACCOUNT_KEY)?,
            },
        })
    }
}

impl FromStr for ConnectionString {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let settings = parse_settings(raw)?;
        let setting = |key: &str| settings.get(key).map(String::as_str).filter(|v| !v.is_empty());

        if setting("usedevelopmentstorage").is_some_and(|v| v.eq_ignore_ascii_case("true")) {
            return Self::development_storage();
        }

        let account = setting("accountname");
        let blob_endpoint = match (setting("blobendpoint"), account) {
            (Some(endpoint), _) => parse_endpoint(endpoint)?,
            (None, Some(account)) => {
                let protocol = setting("defaultendpointsprotocol").unwrap_or(DEFAULT_PROTOCOL);
                let suffix = setting("endpointsuffix").unwrap_or(DEFAULT_ENDPOINT_SUFFIX);
                parse_endpoint(&format!("{protocol}://{account}.blob.{suffix}"))?
            }
            (None, None) => {
                return Err(AppError::config_error(
                    "Connection string must include AccountName or BlobEndpoint",
                ));
            }
        };

        let credential = match (setting("accountkey"), setting("sharedaccesssignature")) {
            (Some(key), _) => {
                let account = account.ok_or_else(|| {
                    AppError::config_error("Connection string with AccountKey must include AccountName")
                })?;
                StorageCredential::SharedKey { account: account.to_string(), key: decode_key(key)? }
            }
            (None, Some(sas)) => StorageCredential::Sas(sas.trim_start_matches('?').to_string()),
            (None, None) => {
                return Err(AppError::config_error(
                    "Connection string must include AccountKey or SharedAccessSignature",
                ));
            }
        };

        Ok(Self { blob_endpoint, credential })
    }
}

/// Split `Key=Value;...` pairs. Keys are case-insensitive; values may contain `=`.
fn parse_settings(raw: &str) -> Result<HashMap<String, String>, AppError> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| -> Result<(String, String), AppError> {
            let (key, value) = segment.split_once('=').ok_or_else(|| {
                AppError::config_error(format!("Malformed connection string segment '{}'", redact(segment)))
            })?;
            Ok((key.trim().to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect()
}

fn parse_endpoint(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::config_error(format!("Invalid blob endpoint '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_error(format!(
            "Blob endpoint '{}' must use http or https",
            raw
        )));
    }
    Ok(url)
}

fn decode_key(raw: &str) -> Result<Vec<u8>, AppError> {
    STANDARD
        .decode(raw)
        .map_err(|e| AppError::config_error(format!("AccountKey is not valid base64: {}", e)))
}

fn redact(segment: &str) -> String {
    segment.chars().take(8).chain("...".chars()).collect()
}
