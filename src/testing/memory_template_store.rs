use std::sync::Mutex;

use crate::domain::{AppError, TemplateKind};
use crate::ports::TemplateStore;

/// In-memory template store, seeded with compact single-line templates
/// so rendered output stays easy to assert on.
pub struct MemoryTemplateStore {
    templates: Mutex<Vec<(TemplateKind, String)>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(vec![
                (TemplateKind::Challenge, "http {{SERVER_NAMES}}".to_string()),
                (TemplateKind::Site, "tls {{DOMAIN}} -> {{PROXY_HOST}}".to_string()),
                (TemplateKind::Redirect, "alias {{SERVER_NAMES}} -> {{DOMAIN}}".to_string()),
            ]),
        }
    }

    pub fn set(&self, kind: TemplateKind, text: &str) {
        let mut templates = self.templates.lock().unwrap();
        templates.retain(|(k, _)| *k != kind);
        templates.push((kind, text.to_string()));
    }

    pub fn remove(&self, kind: TemplateKind) {
        self.templates.lock().unwrap().retain(|(k, _)| *k != kind);
    }
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, kind: TemplateKind) -> Result<String, AppError> {
        self.templates
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| AppError::TemplateNotFound {
                name: kind.file_name().to_string(),
                path: format!("<memory>/{}", kind.file_name()),
            })
    }
}
