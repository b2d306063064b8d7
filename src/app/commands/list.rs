//! List registered generators.

use crate::domain::GeneratorRegistry;

/// Name and description of a registered generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSummary {
    pub name: String,
    pub description: String,
}

/// Summaries of all generators, sorted by name.
pub fn execute(registry: &GeneratorRegistry) -> Vec<GeneratorSummary> {
    registry
        .specs()
        .map(|spec| GeneratorSummary { name: spec.name.clone(), description: spec.description.clone() })
        .collect()
}
