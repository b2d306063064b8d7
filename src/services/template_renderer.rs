use std::collections::BTreeMap;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, naming};
use crate::ports::TemplateStore;

/// Renders templates from a [`TemplateStore`] with minijinja.
///
/// Rendering is deterministic: the same template id and context always give
/// the same text. Referencing a variable missing from the context is an error.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Snapshot every template in `store` into a new renderer.
    pub fn from_store<S: TemplateStore + ?Sized>(store: &S) -> Self {
        let sources: BTreeMap<String, String> = store
            .template_ids()
            .into_iter()
            .filter_map(|id| store.template(&id).map(|source| (id, source)))
            .collect();

        let mut env = build_environment();
        env.set_loader(move |name| Ok(sources.get(name).cloned()));
        Self { env }
    }

    /// Render template `id` with `context`.
    pub fn render<C: Serialize>(&self, id: &str, context: &C) -> Result<String, AppError> {
        let template = self.env.get_template(id).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => AppError::TemplateNotFound(id.to_string()),
            _ => render_error(id, &e),
        })?;
        template.render(context).map_err(|e| render_error(id, &e))
    }

    /// Render template text that is not stored under an id.
    pub fn render_str<C: Serialize>(&self, source: &str, context: &C) -> Result<String, AppError> {
        self.env.render_str(source, context).map_err(|e| render_error("<inline>", &e))
    }
}

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.add_filter("pascal_case", naming::pascal_case);
    env.add_filter("camel_case", naming::camel_case);
    env.add_filter("kebab_case", naming::kebab_case);
    env.add_filter("snake_case", naming::snake_case);
    env
}

fn render_error(template: &str, err: &minijinja::Error) -> AppError {
    AppError::TemplateRender { template: template.to_string(), details: err.to_string() }
}
