use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, TemplateKind};
use crate::ports::TemplateStore;

/// Template store reading from the operator-editable template directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    dir: PathBuf,
}

impl FilesystemTemplateStore {
    /// Create a store over the given template directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn load(&self, kind: TemplateKind) -> Result<String, AppError> {
        let path = self.dir.join(kind.file_name());
        if !path.exists() {
            return Err(AppError::TemplateNotFound {
                name: kind.file_name().to_string(),
                path: path.display().to_string(),
            });
        }
        Ok(fs::read_to_string(&path)?)
    }
}
