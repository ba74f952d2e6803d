use log::{debug, warn};
use reqwest::{Client, Url, redirect};
use serde_json::Value;

use crate::config::DocsConfig;
use crate::error::FetchError;

/// Transport used to reach the service, chosen from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Plain `http://`.
    Plain,
    /// TLS `https://`.
    Tls,
}

impl Transport {
    /// Pick the transport for a parsed URL, rejecting anything but HTTP(S).
    pub fn for_url(url: &Url) -> Result<Self, FetchError> {
        match url.scheme() {
            "http" => Ok(Transport::Plain),
            "https" => Ok(Transport::Tls),
            other => Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: other.to_string(),
            }),
        }
    }

    fn client(self) -> Result<Client, FetchError> {
        // Proxy settings from the environment are ignored and redirects are
        // reported as-is.
        let builder = Client::builder()
            .no_proxy()
            .redirect(redirect::Policy::none());
        let builder = match self {
            Transport::Plain => builder,
            Transport::Tls => builder.https_only(true),
        };
        builder.build().map_err(|source| FetchError::Client { source })
    }
}

/// Fetch the OpenAPI document at `url` and parse the full body as JSON.
///
/// The document is returned untouched. Any HTTP status is accepted as long as
/// the body parses.
pub async fn fetch_spec(url: &str) -> Result<Value, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let transport = Transport::for_url(&parsed)?;
    let client = transport.client()?;

    debug!("GET {url} ({transport:?})");
    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| FetchError::Connectivity {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{url} answered with status {status}, parsing body anyway");
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Connectivity {
            url: url.to_string(),
            source,
        })?;
    debug!("received {} bytes from {url}", body.len());

    serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Hints printed when the spec cannot be fetched.
pub fn remediation_hints(config: &DocsConfig) -> Vec<String> {
    vec![
        "Make sure the service is running.".to_string(),
        format!("Make sure the service is listening on {}.", config.api_url),
        format!(
            "Make sure the service exposes its OpenAPI document at {}.",
            config.openapi_endpoint
        ),
    ]
}
