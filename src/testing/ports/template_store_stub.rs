use std::collections::BTreeMap;

use crate::ports::TemplateStore;

/// In-memory template store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new(templates: &[(&str, &str)]) -> Self {
        Self {
            templates: templates.iter().map(|(id, src)| (id.to_string(), src.to_string())).collect(),
        }
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn template_ids(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn template(&self, id: &str) -> Option<String> {
        self.templates.get(id).cloned()
    }
}
