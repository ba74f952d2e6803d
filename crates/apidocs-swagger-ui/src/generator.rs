use apidocs_core::config::{DocsConfig, README_FILE_NAME, SPEC_FILE_NAME, VIEWER_FILE_NAME};
use apidocs_core::{ArtifactGenerator, GeneratedFile, GeneratorError};
use log::debug;
use serde_json::Value;

use crate::emitters;

/// Swagger UI documentation generator.
///
/// Produces the saved spec, the live viewer page and the usage notes, in that order.
pub struct SwaggerUiGenerator;

impl ArtifactGenerator for SwaggerUiGenerator {
    fn generate(
        &self,
        spec: &Value,
        config: &DocsConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let files = vec![
            GeneratedFile {
                path: SPEC_FILE_NAME.to_string(),
                content: emitters::spec_json::emit_spec_json(spec)?,
            },
            GeneratedFile {
                path: VIEWER_FILE_NAME.to_string(),
                content: emitters::viewer::emit_viewer(config)?,
            },
            GeneratedFile {
                path: README_FILE_NAME.to_string(),
                content: emitters::readme::emit_readme(config)?,
            },
        ];

        for file in &files {
            debug!("rendered {} ({} bytes)", file.path, file.content.len());
        }
        Ok(files)
    }
}
