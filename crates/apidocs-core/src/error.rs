use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid spec URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme `{scheme}` in `{url}` (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("failed to build HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to reach `{url}`")]
    Connectivity {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from `{url}` is not valid JSON")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the service could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::Connectivity { .. })
    }

    /// Whether the service answered with something that is not JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse { .. })
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to serialize spec: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render template {name}: {message}")]
    Render { name: String, message: String },
}
