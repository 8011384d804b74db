use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::SiteConfigStore;

/// Recording site-config store. Writes append to `written` so tests can
/// assert the sequence of revisions a file went through.
#[derive(Default)]
pub struct MemorySiteStore {
    pub written: Mutex<Vec<(String, String)>>,
    fail: Mutex<bool>,
}

impl MemorySiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl SiteConfigStore for MemorySiteStore {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        if *self.fail.lock().unwrap() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "sites directory is missing",
            )));
        }
        self.written.lock().unwrap().push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from("sites").join(file_name))
    }
}
