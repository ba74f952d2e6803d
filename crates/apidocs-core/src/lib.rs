pub mod config;
pub mod error;
pub mod fetch;
pub mod output;

pub use error::{FetchError, GeneratorError, OutputError};

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that turn a fetched spec into documentation artifacts.
///
/// Files are returned in the order they should be written.
pub trait ArtifactGenerator {
    fn generate(
        &self,
        spec: &serde_json::Value,
        config: &config::DocsConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
