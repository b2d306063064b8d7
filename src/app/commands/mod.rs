pub mod generate;
pub mod list;
pub mod plan;

#[cfg(test)]
pub(crate) fn test_context<C: crate::ports::CommandRunner>(
    dir: &std::path::Path,
    runner: C,
) -> crate::app::AppContext<C> {
    use crate::domain::{Locations, PlanContext};
    use crate::services::{EmbeddedTemplateStore, TemplateRenderer};

    let registry = crate::app::generators::builtin_registry().unwrap();
    let renderer = TemplateRenderer::from_store(&EmbeddedTemplateStore::new());
    let plan_context = PlanContext { locations: Locations::under_home(dir, dir) };
    crate::app::AppContext::new(registry, renderer, runner, plan_context)
}
