pub mod readme;
pub mod spec_json;
pub mod viewer;

use apidocs_core::GeneratorError;
use minijinja::{Environment, Value};

/// Render an embedded template with the given context.
fn render(name: &str, source: &str, ctx: Value) -> Result<String, GeneratorError> {
    let to_error = |e: minijinja::Error| GeneratorError::Render {
        name: name.to_string(),
        message: e.to_string(),
    };

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(name, source).map_err(to_error)?;
    let tmpl = env.get_template(name).map_err(to_error)?;
    tmpl.render(ctx).map_err(to_error)
}
