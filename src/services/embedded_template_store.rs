//! Templates compiled into the binary.

use include_dir::{Dir, DirEntry, include_dir};

use crate::ports::TemplateStore;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// File extension stripped from embedded template paths to form their id.
pub const TEMPLATE_EXTENSION: &str = ".j2";

/// Template store backed by `src/assets/templates/`.
///
/// `express/routes.j2` is served under the id `express/routes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        collect_ids(&TEMPLATE_DIR, &mut ids);
        ids.sort();
        ids
    }

    fn template(&self, id: &str) -> Option<String> {
        TEMPLATE_DIR
            .get_file(format!("{id}{TEMPLATE_EXTENSION}"))
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
    }
}

fn collect_ids(dir: &'static Dir, ids: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                if let Some(id) = path.strip_suffix(TEMPLATE_EXTENSION)
                    && file.contents_utf8().is_some()
                {
                    ids.push(id.to_string());
                }
            }
            DirEntry::Dir(subdir) => collect_ids(subdir, ids),
        }
    }
}
