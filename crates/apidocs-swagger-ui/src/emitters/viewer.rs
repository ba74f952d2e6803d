use apidocs_core::GeneratorError;
use apidocs_core::config::DocsConfig;
use minijinja::context;

const TEMPLATE_NAME: &str = "index.html.j2";

/// Indentation of the option entries inside the `SwaggerUIBundle({...})` call.
const OPTIONS_INDENT: &str = "                ";

/// Emit `index.html` — a Swagger UI page that loads the spec live from the service.
pub fn emit_viewer(config: &DocsConfig) -> Result<String, GeneratorError> {
    let viewer = &config.viewer;
    let dom_target = viewer.dom_id.trim_start_matches('#');

    super::render(
        TEMPLATE_NAME,
        include_str!("../../templates/index.html.j2"),
        context! {
            page => config.page,
            cdn_base => config.page.cdn_base.trim_end_matches('/'),
            live_url => viewer.url,
            dom_target => dom_target,
            viewer_options => viewer.to_script_literal(OPTIONS_INDENT),
        },
    )
}
