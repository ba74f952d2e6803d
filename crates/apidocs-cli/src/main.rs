use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use apidocs_core::config::{DocsConfig, README_FILE_NAME, SPEC_FILE_NAME, VIEWER_FILE_NAME};
use apidocs_core::fetch::{self, fetch_spec};
use apidocs_core::output::{ensure_output_dir, write_file};
use apidocs_core::{ArtifactGenerator, FetchError};
use apidocs_swagger_ui::SwaggerUiGenerator;

/// Port suggested for serving the generated directory.
const SERVE_PORT: u16 = 8000;

/// Order the produced files are listed in once the run succeeds.
const SUMMARY_ORDER: [&str; 3] = [VIEWER_FILE_NAME, SPEC_FILE_NAME, README_FILE_NAME];

#[derive(Parser)]
#[command(
    name = "apidocs",
    about = "Snapshot a running service's OpenAPI document into a live Swagger UI page",
    version
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let _cli = Cli::parse();
    let config = DocsConfig::default();
    log::debug!("config: {config:?}");

    eprintln!("Generating API documentation...\n");
    let written = run(&config, &SwaggerUiGenerator)
        .await
        .context("documentation generation failed")?;

    print_summary(&config, &written);
    Ok(())
}

/// Fetch the spec, prepare the output directory and write every artifact.
///
/// Stops at the first failing step. Files written before the failure are left in place.
async fn run<G: ArtifactGenerator>(config: &DocsConfig, generator: &G) -> Result<Vec<PathBuf>> {
    let spec = fetch_step(config).await?;

    let output_dir = &config.output_dir;
    if ensure_output_dir(output_dir)? {
        eprintln!("Created output directory {}", output_dir.display());
    }

    let files = generator.generate(&spec, config)?;

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = write_file(output_dir, file)?;
        eprintln!("  wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Fetch the spec, printing the attempted URL and hints when the service can't be used.
async fn fetch_step(config: &DocsConfig) -> Result<Value, FetchError> {
    let url = config.spec_url();
    eprintln!("Fetching OpenAPI spec from {url}");

    match fetch_spec(&url).await {
        Ok(spec) => {
            eprintln!("Fetched OpenAPI spec");
            Ok(spec)
        }
        Err(e) => {
            eprintln!("Failed to fetch OpenAPI spec from {url}: {e}");
            eprintln!("\nTo fix this:");
            for (i, hint) in fetch::remediation_hints(config).iter().enumerate() {
                eprintln!("  {}. {hint}", i + 1);
            }
            eprintln!();
            Err(e)
        }
    }
}

fn print_summary(config: &DocsConfig, written: &[PathBuf]) {
    eprintln!("\nDocumentation generated.");
    eprintln!("\nFiles:");
    for path in summary_files(written) {
        eprintln!("  - {}", path.display());
    }

    eprintln!("\nTo view the documentation:");
    eprintln!("  1. Serve the output directory:");
    eprintln!("       cd {}", config.output_dir.display());
    eprintln!("       python -m http.server {SERVE_PORT}");
    eprintln!("  2. Open http://localhost:{SERVE_PORT} in a browser");
    eprintln!(
        "\nThe page loads the spec live from {}, so keep the service running.",
        config.viewer.url
    );
}

/// Written files with the page first, then the saved spec and the notes.
fn summary_files(written: &[PathBuf]) -> Vec<&PathBuf> {
    let mut files: Vec<&PathBuf> = written.iter().collect();
    files.sort_by_key(|path| summary_rank(path));
    files
}

fn summary_rank(path: &Path) -> usize {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| SUMMARY_ORDER.iter().position(|f| *f == name))
        .unwrap_or(SUMMARY_ORDER.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use apidocs_core::{GeneratedFile, GeneratorError};
    use axum::Router;
    use axum::routing::get;

    use super::*;

    async fn serve(body: &'static str) -> String {
        let app = Router::new().route("/v3/api-docs", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn config_for(api_url: &str, dir: &Path) -> DocsConfig {
        DocsConfig::default().with_api_url(api_url).with_output_dir(dir)
    }

    struct FailingGenerator;

    impl ArtifactGenerator for FailingGenerator {
        fn generate(
            &self,
            _: &Value,
            _: &DocsConfig,
        ) -> Result<Vec<GeneratedFile>, GeneratorError> {
            Err(GeneratorError::Render {
                name: "index.html.j2".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_cli_takes_no_arguments() {
        assert!(Cli::try_parse_from(["apidocs"]).is_ok());
        assert!(Cli::try_parse_from(["apidocs", "--output", "x"]).is_err());
    }

    #[test]
    fn test_summary_lists_page_first() {
        let dir = PathBuf::from("docs");
        let written = vec![
            dir.join("api-docs.json"),
            dir.join("index.html"),
            dir.join("README.md"),
        ];

        let listed = summary_files(&written);

        assert_eq!(
            listed,
            vec![
                &dir.join("index.html"),
                &dir.join("api-docs.json"),
                &dir.join("README.md"),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_writes_all_artifacts() {
        let api_url = serve(r#"{"openapi":"3.0.1","info":{"title":"X"}}"#).await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("docs");
        let config = config_for(&api_url, &dir);

        let written = run(&config, &SwaggerUiGenerator).await.unwrap();

        assert_eq!(
            written,
            vec![
                dir.join("api-docs.json"),
                dir.join("index.html"),
                dir.join("README.md"),
            ]
        );
        let saved: Value =
            serde_json::from_str(&fs::read_to_string(dir.join("api-docs.json")).unwrap()).unwrap();
        assert_eq!(saved, serde_json::json!({"openapi": "3.0.1", "info": {"title": "X"}}));

        let html = fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(html.contains(&format!("\"url\": \"{api_url}/v3/api-docs\"")));
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let api_url = serve(r#"{"openapi":"3.0.1","paths":{}}"#).await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs");
        let config = config_for(&api_url, &dir);

        run(&config, &SwaggerUiGenerator).await.unwrap();
        let first: Vec<Vec<u8>> = ["api-docs.json", "index.html", "README.md"]
            .iter()
            .map(|f| fs::read(dir.join(f)).unwrap())
            .collect();

        run(&config, &SwaggerUiGenerator).await.unwrap();
        let second: Vec<Vec<u8>> = ["api-docs.json", "index.html", "README.md"]
            .iter()
            .map(|f| fs::read(dir.join(f)).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unreachable_service_writes_nothing() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs");
        let config = config_for(&format!("http://{addr}"), &dir);

        let err = run(&config, &SwaggerUiGenerator).await.unwrap_err();

        let fetch_err = err.downcast_ref::<FetchError>().expect("should be a fetch error");
        assert!(fetch_err.is_connectivity());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_non_json_response_writes_nothing() {
        let api_url = serve("not json").await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs");
        let config = config_for(&api_url, &dir);

        let err = run(&config, &SwaggerUiGenerator).await.unwrap_err();

        let fetch_err = err.downcast_ref::<FetchError>().expect("should be a fetch error");
        assert!(fetch_err.is_parse());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_render_failure_writes_no_artifacts() {
        let api_url = serve(r#"{"openapi":"3.0.1"}"#).await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs");
        let config = config_for(&api_url, &dir);

        let err = run(&config, &FailingGenerator).await.unwrap_err();

        assert!(err.downcast_ref::<GeneratorError>().is_some());
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_existing_files_survive_run() {
        let api_url = serve(r#"{"openapi":"3.0.1"}"#).await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("CNAME"), "docs.example.com").unwrap();
        let config = config_for(&api_url, &dir);

        run(&config, &SwaggerUiGenerator).await.unwrap();

        assert_eq!(fs::read_to_string(dir.join("CNAME")).unwrap(), "docs.example.com");
    }
}
