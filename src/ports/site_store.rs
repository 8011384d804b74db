use std::path::PathBuf;

use crate::domain::AppError;

/// Write access to the directory the proxy loads virtual hosts from.
pub trait SiteConfigStore {
    /// Write `contents` under `file_name`, replacing any previous
    /// revision whole. Returns the path written to.
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError>;
}
