use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::SiteConfigStore;

/// Site-config store writing into the directory the proxy loads virtual
/// hosts from. The directory is expected to exist; a missing one is a
/// deployment mistake and the write error carries it to the operator.
#[derive(Debug, Clone)]
pub struct FilesystemSiteStore {
    dir: PathBuf,
}

impl FilesystemSiteStore {
    /// Create a store over the given sites directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl SiteConfigStore for FilesystemSiteStore {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
