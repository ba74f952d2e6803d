use std::path::PathBuf;

use serde::Serialize;

/// File name of the saved OpenAPI document.
pub const SPEC_FILE_NAME: &str = "api-docs.json";

/// File name of the generated Swagger UI page.
pub const VIEWER_FILE_NAME: &str = "index.html";

/// File name of the generated usage instructions.
pub const README_FILE_NAME: &str = "README.md";

/// Top-level configuration for one documentation run.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Base URL of the running service, e.g. `http://localhost:8080`.
    pub api_url: String,
    /// Path of the OpenAPI endpoint relative to `api_url`.
    pub openapi_endpoint: String,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    pub viewer: ViewerOptions,
    pub page: PageOptions,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080", "/v3/api-docs", "./docs")
    }
}

impl DocsConfig {
    /// Build a config for the given service with default viewer and page options.
    ///
    /// The viewer is pointed at the live endpoint `{api_url}{openapi_endpoint}`.
    pub fn new(
        api_url: impl Into<String>,
        openapi_endpoint: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let api_url = api_url.into();
        let openapi_endpoint = openapi_endpoint.into();
        let url = join_url(&api_url, &openapi_endpoint);
        Self {
            api_url,
            openapi_endpoint,
            output_dir: output_dir.into(),
            viewer: ViewerOptions::live(url),
            page: PageOptions::default(),
        }
    }

    /// Full URL the spec is fetched from.
    pub fn spec_url(&self) -> String {
        join_url(&self.api_url, &self.openapi_endpoint)
    }

    /// Re-point the config at another service, keeping the viewer's live URL in sync.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self.viewer.url = self.spec_url();
        self
    }

    /// Replace the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Options handed to `SwaggerUIBundle(...)` in the generated page.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Live spec URL the page loads at runtime.
    pub url: String,
    pub dom_id: String,
    pub deep_linking: bool,
    /// JavaScript expressions, embedded unquoted.
    pub presets: Vec<String>,
    /// JavaScript expressions, embedded unquoted.
    pub plugins: Vec<String>,
    pub layout: String,
    pub try_it_out_enabled: bool,
}

impl ViewerOptions {
    fn live(url: String) -> Self {
        Self {
            url,
            dom_id: "#swagger-ui".to_string(),
            deep_linking: true,
            presets: vec![
                "SwaggerUIBundle.presets.apis".to_string(),
                "SwaggerUIStandalonePreset".to_string(),
            ],
            plugins: vec!["SwaggerUIBundle.plugins.DownloadUrl".to_string()],
            layout: "StandaloneLayout".to_string(),
            try_it_out_enabled: true,
        }
    }

    /// Render the options as the entries of a JavaScript object literal.
    ///
    /// Data values are JSON literals under quoted keys. Presets and plugins are
    /// expressions resolved by the page, so they are written bare.
    pub fn to_script_literal(&self, indent: &str) -> String {
        let entries = [
            ("url", js_string(&self.url)),
            ("dom_id", js_string(&self.dom_id)),
            ("deepLinking", self.deep_linking.to_string()),
            ("presets", js_expressions(&self.presets)),
            ("plugins", js_expressions(&self.plugins)),
            ("layout", js_string(&self.layout)),
            ("tryItOutEnabled", self.try_it_out_enabled.to_string()),
        ];

        entries
            .iter()
            .map(|(key, value)| format!("{indent}\"{key}\": {value}"))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

/// JSON-encode a string so it is safe inside an inline `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}

fn js_expressions(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Presentation settings of the generated page.
#[derive(Debug, Clone, Serialize)]
pub struct PageOptions {
    pub title: String,
    pub subtitle: String,
    /// Base URL of the pinned `swagger-ui-dist` release.
    pub cdn_base: String,
    /// Delay before the page switches every operation into try-it-out mode.
    pub try_it_out_delay_ms: u64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            subtitle: "Interactive API reference served live from the running service".to_string(),
            cdn_base: "https://unpkg.com/swagger-ui-dist@5.9.0".to_string(),
            try_it_out_delay_ms: 1000,
        }
    }
}
