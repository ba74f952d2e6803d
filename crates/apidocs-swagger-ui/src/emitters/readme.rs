use apidocs_core::GeneratorError;
use apidocs_core::config::DocsConfig;
use minijinja::context;

/// Emit `README.md` — usage and troubleshooting notes for the output directory.
pub fn emit_readme(config: &DocsConfig) -> Result<String, GeneratorError> {
    super::render(
        "README.md.j2",
        include_str!("../../templates/README.md.j2"),
        context! {
            output_dir => config.output_dir.display().to_string(),
        },
    )
}
