use crate::domain::{GeneratorRegistry, PlanContext};
use crate::ports::CommandRunner;
use crate::services::TemplateRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CommandRunner> {
    registry: GeneratorRegistry,
    renderer: TemplateRenderer,
    runner: C,
    plan_context: PlanContext,
}

impl<C: CommandRunner> AppContext<C> {
    pub fn new(
        registry: GeneratorRegistry,
        renderer: TemplateRenderer,
        runner: C,
        plan_context: PlanContext,
    ) -> Self {
        Self { registry, renderer, runner, plan_context }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    pub fn runner(&self) -> &C {
        &self.runner
    }

    pub fn plan_context(&self) -> &PlanContext {
        &self.plan_context
    }
}
