//! Templates read from a user-supplied directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::TemplateStore;

use super::embedded_template_store::TEMPLATE_EXTENSION;

/// Template store loaded from `*.j2` files under a directory.
///
/// Ids are paths relative to the directory with `/` separators and the
/// extension removed. Ids missing from the directory can be filled from a
/// fallback store, so a directory only needs the templates it overrides.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTemplateStore {
    templates: BTreeMap<String, String>,
}

impl DirectoryTemplateStore {
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        if !dir.is_dir() {
            return Err(AppError::config_error(format!(
                "Template directory not found: {}",
                dir.display()
            )));
        }
        let mut templates = BTreeMap::new();
        collect_templates(dir, dir, &mut templates)?;
        tracing::debug!(dir = %dir.display(), count = templates.len(), "loaded template directory");
        Ok(Self { templates })
    }

    /// Fill ids this store lacks from `fallback`.
    pub fn with_fallback<S: TemplateStore + ?Sized>(mut self, fallback: &S) -> Self {
        for id in fallback.template_ids() {
            if self.templates.contains_key(&id) {
                continue;
            }
            if let Some(source) = fallback.template(&id) {
                self.templates.insert(id, source);
            }
        }
        self
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn template_ids(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn template(&self, id: &str) -> Option<String> {
        self.templates.get(id).cloned()
    }
}

fn collect_templates(
    root: &Path,
    dir: &Path,
    templates: &mut BTreeMap<String, String>,
) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_templates(root, &path, templates)?;
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else { continue };
        let relative = relative.to_string_lossy().replace('\\', "/");
        if let Some(id) = relative.strip_suffix(TEMPLATE_EXTENSION) {
            templates.insert(id.to_string(), fs::read_to_string(&path)?);
        }
    }
    Ok(())
}
