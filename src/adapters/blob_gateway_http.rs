//! Azure Blob Storage gateway using reqwest.

use std::time::{Duration, SystemTime};

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue, IF_NONE_MATCH};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::adapters::shared_key;
use crate::domain::{AppError, ConnectionString, StorageConfig, StorageCredential};
use crate::ports::BlobGateway;

const API_VERSION: &str = "2021-08-06";
const X_MS_VERSION: &str = "x-ms-version";
const X_MS_DATE: &str = "x-ms-date";
const X_MS_BLOB_TYPE: &str = "x-ms-blob-type";
const X_MS_ERROR_CODE: &str = "x-ms-error-code";
const BLOCK_BLOB: &str = "BlockBlob";
const OCTET_STREAM: &str = "application/octet-stream";
const CONTAINER_ALREADY_EXISTS: &str = "ContainerAlreadyExists";
const BLOB_ALREADY_EXISTS: &str = "BlobAlreadyExists";
const DEFAULT_STATUS_MESSAGE: &str = "Blob storage request failed";

/// HTTP transport for one blob container.
///
/// This gateway performs a single request per call. Retry behavior is implemented by
/// `RetryingBlobGateway`.
#[derive(Clone)]
pub struct HttpBlobGateway {
    client: Client,
    endpoint: Url,
    container: String,
    credential: StorageCredential,
}

impl std::fmt::Debug for HttpBlobGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBlobGateway")
            .field("endpoint", &self.endpoint)
            .field("container", &self.container)
            .field("credential", &self.credential)
            .finish()
    }
}

impl HttpBlobGateway {
    /// Create a gateway for `container` behind the given connection.
    pub fn new(
        connection: ConnectionString,
        container: &str,
        timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Connection {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            client,
            endpoint: connection.blob_endpoint,
            container: container.to_string(),
            credential: connection.credential,
        })
    }

    /// Create from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Result<Self, AppError> {
        config.validate()?;
        let connection: ConnectionString = config.connection_string.parse()?;
        Self::new(connection, &config.container, config.timeout_secs)
    }

    fn container_url(&self) -> Result<Url, AppError> {
        self.url_with_segments(std::iter::empty())
    }

    fn blob_url(&self, name: &str) -> Result<Url, AppError> {
        self.url_with_segments(name.split('/'))
    }

    fn url_with_segments<'a>(&self, segments: impl Iterator<Item = &'a str>) -> Result<Url, AppError> {
        let mut url = self.endpoint.clone();
        url.set_query(None);
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AppError::config_error(format!("Blob endpoint '{}' cannot carry a path", self.endpoint))
            })?;
            path.pop_if_empty().push(&self.container).extend(segments);
        }
        Ok(url)
    }

    fn send(
        &self,
        method: Method,
        mut url: Url,
        mut headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<Response, AppError> {
        headers.insert(X_MS_VERSION, HeaderValue::from_static(API_VERSION));
        headers.insert(X_MS_DATE, header_value(&httpdate::fmt_http_date(SystemTime::now()))?);
        if let Some(bytes) = &body {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len()));
        }

        debug!(method = %method, path = url.path(), query = url.query().unwrap_or_default(), "blob storage request");

        match &self.credential {
            StorageCredential::SharedKey { account, key } => {
                let value = shared_key::authorization(account, key, method.as_str(), &url, &headers)?;
                headers.insert(reqwest::header::AUTHORIZATION, header_value(&value)?);
            }
            StorageCredential::Sas(token) => {
                let query = match url.query() {
                    Some(existing) if !existing.is_empty() => format!("{}&{}", existing, token),
                    _ => token.clone(),
                };
                url.set_query(Some(&query));
            }
        }

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        request.send().map_err(|e| AppError::Connection {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })
    }
}

impl BlobGateway for HttpBlobGateway {
    fn ensure_container(&self) -> Result<(), AppError> {
        let mut url = self.container_url()?;
        url.query_pairs_mut().append_pair("restype", "container");

        let response = self.send(Method::PUT, url, HeaderMap::new(), Some(Vec::new()))?;
        match response.status() {
            StatusCode::CREATED => {
                debug!(container = %self.container, "created container");
                Ok(())
            }
            StatusCode::CONFLICT => {
                let failure = StorageFailure::read(response);
                if failure.code.as_deref() == Some(CONTAINER_ALREADY_EXISTS) {
                    debug!(container = %self.container, "container already exists");
                    Ok(())
                } else {
                    Err(failure.into_error(&self.container))
                }
            }
            _ => Err(StorageFailure::read(response).into_error(&self.container)),
        }
    }

    fn list_object_names(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let mut url = self.container_url()?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("restype", "container").append_pair("comp", "list");
                query.append_pair("prefix", prefix);
                if let Some(marker) = &marker {
                    query.append_pair("marker", marker);
                }
            }

            let response = self.send(Method::GET, url, HeaderMap::new(), None)?;
            if response.status() != StatusCode::OK {
                return Err(StorageFailure::read(response).into_error(&self.container));
            }

            let body = read_text(response)?;
            let page = parse_list_page(&body)?;
            names.extend(page.names);

            match page.next_marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        debug!(prefix, count = names.len(), "listed blobs");
        Ok(names)
    }

    fn upload(&self, name: &str, bytes: &[u8], overwrite: bool) -> Result<(), AppError> {
        let url = self.blob_url(name)?;
        let mut headers = HeaderMap::new();
        headers.insert(X_MS_BLOB_TYPE, HeaderValue::from_static(BLOCK_BLOB));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));
        if !overwrite {
            headers.insert(IF_NONE_MATCH, HeaderValue::from_static("*"));
        }

        let response = self.send(Method::PUT, url, headers, Some(bytes.to_vec()))?;
        match response.status() {
            StatusCode::CREATED => {
                debug!(name, size = bytes.len(), "uploaded blob");
                Ok(())
            }
            StatusCode::PRECONDITION_FAILED => Err(AppError::AlreadyExists(name.to_string())),
            _ => {
                let failure = StorageFailure::read(response);
                if failure.code.as_deref() == Some(BLOB_ALREADY_EXISTS) {
                    return Err(AppError::AlreadyExists(name.to_string()));
                }
                Err(failure.into_error(name))
            }
        }
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, AppError> {
        let url = self.blob_url(name)?;
        let response = self.send(Method::GET, url, HeaderMap::new(), None)?;
        if response.status() != StatusCode::OK {
            return Err(StorageFailure::read(response).into_error(name));
        }

        let bytes = response.bytes().map_err(|e| AppError::Connection {
            message: format!("Failed to read response body: {}", e),
            status: None,
        })?;
        debug!(name, size = bytes.len(), "downloaded blob");
        Ok(bytes.to_vec())
    }
}

/// Unsuccessful response, reduced to what error reporting needs.
#[derive(Debug)]
struct StorageFailure {
    status: StatusCode,
    code: Option<String>,
    message: Option<String>,
}

impl StorageFailure {
    fn read(response: Response) -> Self {
        let status = response.status();
        let header_code = response
            .headers()
            .get(X_MS_ERROR_CODE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response.text().unwrap_or_default();
        let parsed = parse_error_body(&body);

        Self {
            status,
            code: header_code.or_else(|| parsed.as_ref().and_then(|p| p.code.clone())),
            message: parsed.and_then(|p| p.message),
        }
    }

    fn into_error(self, name: &str) -> AppError {
        let status = self.status.as_u16();
        let detail = match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, first_line(message)),
            (Some(code), None) => code.clone(),
            (None, Some(message)) => first_line(message).to_string(),
            (None, None) => DEFAULT_STATUS_MESSAGE.to_string(),
        };
        let message = format!("{} (status={})", detail, status);

        match self.status {
            StatusCode::NOT_FOUND => AppError::NotFound(name.to_string()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::Connection { message, status: Some(status) }
            }
            _ => AppError::Storage { message, status: Some(status) },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EnumerationResults {
    #[serde(default)]
    blobs: BlobList,
    #[serde(default)]
    next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BlobList {
    #[serde(rename = "Blob", default)]
    items: Vec<BlobItem>,
}

#[derive(Debug, Deserialize)]
struct BlobItem {
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Debug, PartialEq, Eq)]
struct ListPage {
    names: Vec<String>,
    next_marker: Option<String>,
}

fn parse_list_page(body: &str) -> Result<ListPage, AppError> {
    let results: EnumerationResults =
        quick_xml::de::from_str(strip_bom(body)).map_err(|e| AppError::Storage {
            message: format!("Failed to parse blob listing: {}", e),
            status: None,
        })?;

    Ok(ListPage {
        names: results.blobs.items.into_iter().map(|item| item.name).collect(),
        next_marker: results.next_marker.filter(|marker| !marker.trim().is_empty()),
    })
}

fn parse_error_body(body: &str) -> Option<ErrorBody> {
    let trimmed = strip_bom(body).trim();
    if trimmed.is_empty() {
        return None;
    }
    quick_xml::de::from_str(trimmed).ok()
}

fn read_text(response: Response) -> Result<String, AppError> {
    response.text().map_err(|e| AppError::Connection {
        message: format!("Failed to read response body: {}", e),
        status: None,
    })
}

fn strip_bom(body: &str) -> &str {
    body.trim_start_matches('\u{feff}')
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim()
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::config_error(format!("Invalid header value: {}", e)))
}
